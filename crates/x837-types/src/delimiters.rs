/// Error when parsing delimiters from an ISA interchange header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsaParseError {
    /// The ISA segment must be exactly 106 bytes (fixed-width per X12).
    InvalidLength { expected: usize, actual: usize },
    /// The input does not start with "ISA".
    InvalidPrefix,
}

impl std::fmt::Display for IsaParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "ISA segment must be exactly {expected} bytes, got {actual}")
            }
            Self::InvalidPrefix => write!(f, "input must start with 'ISA'"),
        }
    }
}

impl std::error::Error for IsaParseError {}

/// Fixed byte length of an ISA interchange header, including its terminator.
pub const ISA_LENGTH: usize = 106;

/// X12 delimiter characters.
///
/// Unlike EDIFACT, X12 carries no separate service-string-advice segment:
/// the element separator is read positionally from byte 3 of `ISA` itself,
/// the component (sub-element) separator from ISA16, the repetition
/// separator from ISA11, and the segment terminator from the byte
/// immediately following ISA16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct X12Delimiters {
    /// Data element separator (default: `*`).
    pub element: u8,
    /// Segment terminator (default: `~`).
    pub segment: u8,
    /// Component (sub-element) separator (default: `:`).
    pub component: u8,
    /// Repetition separator (default: `^`).
    pub repetition: u8,
}

impl Default for X12Delimiters {
    fn default() -> Self {
        Self {
            element: b'*',
            segment: b'~',
            component: b':',
            repetition: b'^',
        }
    }
}

impl X12Delimiters {
    /// Standard delimiters used when no ISA header is available yet (e.g.
    /// while composing a brand-new interchange).
    pub const STANDARD: Self = Self {
        element: b'*',
        segment: b'~',
        component: b':',
        repetition: b'^',
    };

    /// Parses delimiters from a 106-byte ISA interchange header.
    ///
    /// # Errors
    ///
    /// Returns an error if `isa` is not exactly [`ISA_LENGTH`] bytes or does
    /// not start with `ISA`.
    pub fn from_isa(isa: &[u8]) -> Result<Self, IsaParseError> {
        if isa.len() != ISA_LENGTH {
            return Err(IsaParseError::InvalidLength {
                expected: ISA_LENGTH,
                actual: isa.len(),
            });
        }
        if &isa[0..3] != b"ISA" {
            return Err(IsaParseError::InvalidPrefix);
        }

        Ok(Self {
            element: isa[3],
            repetition: isa[82],
            component: isa[104],
            segment: isa[105],
        })
    }

    /// Detect delimiters from the start of an X12 interchange.
    ///
    /// Returns the standard defaults if the input is too short or does not
    /// begin with `ISA`.
    pub fn detect(input: &[u8]) -> (bool, Self) {
        if input.len() >= ISA_LENGTH && &input[0..3] == b"ISA" {
            match Self::from_isa(&input[0..ISA_LENGTH]) {
                Ok(d) => (true, d),
                Err(_) => (false, Self::default()),
            }
        } else {
            (false, Self::default())
        }
    }
}

impl std::fmt::Display for X12Delimiters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "element={} segment={} component={} repetition={}",
            self.element as char, self.segment as char, self.component as char, self.repetition as char
        )
    }
}
