/// Looks up a claim frequency code (CLM05-3) description.
pub fn lookup(code: &str) -> Option<&'static str> {
    Some(match code {
        "1" => "Original claim",
        "6" => "Corrected claim",
        "7" => "Replacement of prior claim",
        "8" => "Void/cancel of prior claim",
        _ => return None,
    })
}

/// Returns `true` if `code` requires `original_claim_number` to be present.
pub fn requires_original_claim_number(code: &str) -> bool {
    matches!(code, "6" | "7" | "8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_known_codes() {
        for code in ["1", "6", "7", "8"] {
            assert!(lookup(code).is_some());
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(lookup("2"), None);
    }

    #[test]
    fn test_requires_original_claim_number() {
        assert!(!requires_original_claim_number("1"));
        assert!(requires_original_claim_number("6"));
        assert!(requires_original_claim_number("7"));
        assert!(requires_original_claim_number("8"));
    }
}
