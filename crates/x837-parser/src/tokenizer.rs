use x837_types::X12Delimiters;

/// Tokenizes raw X12 byte input into segment strings.
///
/// Unlike EDIFACT, X12 has no release (escape) character: the element,
/// component, and segment separators are chosen to be bytes that never
/// appear in data, so splitting is a plain byte scan. Whitespace used
/// only for human readability (`\r`, `\n`) is stripped.
pub struct X12Tokenizer {
    delimiters: X12Delimiters,
}

impl X12Tokenizer {
    /// Creates a new tokenizer with the given delimiters.
    pub fn new(delimiters: X12Delimiters) -> Self {
        Self { delimiters }
    }

    /// Returns the delimiters used by this tokenizer.
    pub fn delimiters(&self) -> &X12Delimiters {
        &self.delimiters
    }

    /// Tokenizes X12 input into segment strings.
    ///
    /// Splits on the segment terminator. Each yielded string is a
    /// segment WITHOUT its terminator character.
    pub fn tokenize_segments<'a>(&self, input: &'a [u8]) -> SegmentIter<'a> {
        SegmentIter {
            input,
            pos: 0,
            segment_terminator: self.delimiters.segment,
        }
    }

    /// Tokenizes a segment string into data elements.
    pub fn tokenize_elements<'a>(&self, segment: &'a str) -> ElementIter<'a> {
        ElementIter {
            input: segment,
            pos: 0,
            separator: self.delimiters.element as char,
        }
    }

    /// Tokenizes a data element into components.
    pub fn tokenize_components<'a>(&self, element: &'a str) -> ComponentIter<'a> {
        ComponentIter {
            input: element,
            pos: 0,
            separator: self.delimiters.component as char,
        }
    }
}

/// Iterator over segments in raw X12 input bytes.
pub struct SegmentIter<'a> {
    input: &'a [u8],
    pos: usize,
    segment_terminator: u8,
}

impl<'a> Iterator for SegmentIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            let b = self.input[self.pos];
            if b == b'\r' || b == b'\n' || b == b' ' || b == b'\t' {
                self.pos += 1;
            } else {
                break;
            }
        }

        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let mut i = self.pos;

        while i < self.input.len() {
            let b = self.input[i];

            if b == b'\r' || b == b'\n' {
                i += 1;
                continue;
            }

            if b == self.segment_terminator {
                let segment_bytes = &self.input[start..i];
                self.pos = i + 1;

                let segment_str = strip_crlf(segment_bytes);
                if segment_str.is_empty() {
                    return self.next();
                }
                return Some(segment_str);
            }

            i += 1;
        }

        if start < self.input.len() {
            let segment_bytes = &self.input[start..];
            self.pos = self.input.len();
            let segment_str = strip_crlf(segment_bytes);
            if segment_str.is_empty() {
                return None;
            }
            return Some(segment_str);
        }

        None
    }
}

/// Converts a byte slice to a string, stripping `\r` and `\n` characters.
fn strip_crlf(bytes: &[u8]) -> &str {
    let s = std::str::from_utf8(bytes).unwrap_or("");
    s.trim_matches(|c: char| c == '\r' || c == '\n')
}

/// Iterator over elements within a segment string.
pub struct ElementIter<'a> {
    input: &'a str,
    pos: usize,
    separator: char,
}

impl<'a> Iterator for ElementIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.input.len() {
            return None;
        }

        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut i = self.pos;

        while i < bytes.len() {
            if bytes[i] as char == self.separator {
                let element = &self.input[start..i];
                self.pos = i + 1;
                return Some(element);
            }
            i += 1;
        }

        if start <= self.input.len() {
            let element = &self.input[start..];
            self.pos = self.input.len() + 1;
            return Some(element);
        }

        None
    }
}

/// Iterator over components within a data element.
pub struct ComponentIter<'a> {
    input: &'a str,
    pos: usize,
    separator: char,
}

impl<'a> Iterator for ComponentIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.input.len() {
            return None;
        }

        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut i = self.pos;

        while i < bytes.len() {
            if bytes[i] as char == self.separator {
                let component = &self.input[start..i];
                self.pos = i + 1;
                return Some(component);
            }
            i += 1;
        }

        if start <= self.input.len() {
            let component = &self.input[start..];
            self.pos = self.input.len() + 1;
            return Some(component);
        }

        None
    }
}
