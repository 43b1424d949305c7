/// Looks up an ambulance transport reason code (CR107).
pub fn lookup_reason(code: &str) -> Option<&'static str> {
    Some(match code {
        "A" => "Patient was transported for emergency treatment",
        "B" => "Patient had to be restrained to prevent injury",
        "C" => "Patient was moved by stretcher",
        "D" => "Patient was unconscious or in shock",
        "DH" => "Patient was transferred from one hospital to another",
        "E" => "Patient had to be transported in an emergency situation",
        _ => return None,
    })
}

/// Looks up an ambulance transport code (CR106).
pub fn lookup_code(code: &str) -> Option<&'static str> {
    Some(match code {
        "A" => "Scheduled",
        "B" => "Unscheduled",
        "C" => "Round Trip",
        "D" => "Emergency",
        "E" => "Return Trip",
        _ => return None,
    })
}
