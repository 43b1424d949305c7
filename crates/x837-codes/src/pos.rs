/// Looks up a place-of-service (CLM05-1 / SV105) description.
///
/// Returns `None` for codes outside the closed set; the validator turns
/// that into a WARNING rather than rejecting the claim, so experimental
/// or newly published POS codes don't hard-fail submission.
pub fn lookup(code: &str) -> Option<&'static str> {
    Some(match code {
        "41" => "Ambulance - Land",
        "42" => "Ambulance - Air or Water",
        "11" => "Office",
        "12" => "Home",
        "19" => "Off Campus-Outpatient Hospital",
        "21" => "Inpatient Hospital",
        "22" => "On Campus-Outpatient Hospital",
        "23" => "Emergency Room - Hospital",
        "24" => "Ambulatory Surgical Center",
        "31" => "Skilled Nursing Facility",
        "32" => "Nursing Facility",
        "33" => "Custodial Care Facility",
        "34" => "Hospice",
        "51" => "Inpatient Psychiatric Facility",
        "54" => "Intermediate Care Facility",
        "65" => "End-Stage Renal Disease Treatment Facility",
        "99" => "Other Place of Service",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambulance_codes() {
        assert_eq!(lookup("41"), Some("Ambulance - Land"));
        assert_eq!(lookup("42"), Some("Ambulance - Air or Water"));
    }

    #[test]
    fn test_clinical_setting() {
        assert_eq!(lookup("21"), Some("Inpatient Hospital"));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(lookup("00"), None);
        assert_eq!(lookup(""), None);
    }
}
