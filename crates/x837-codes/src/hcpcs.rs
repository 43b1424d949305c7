/// HCPCS codes where the line is a mileage charge rather than a base
/// transport. Every mileage line must immediately
/// follow a non-mileage transport line within the same claim.
const MILEAGE_CODES: &[&str] = &["A0380", "A0382", "A0390", "A0425", "A0435", "A0436", "T2049"];

/// HCPCS codes that require a supervising provider (§4.D WARNING check).
const SPECIAL_TRANSPORT_CODES: &[&str] = &[
    "A0090", "A0100", "A0110", "A0120", "A0140", "A0160", "A0170", "A0180", "A0190", "A0200",
    "A0210", "T2001",
];

/// Looks up an ambulance/NEMT HCPCS procedure code description.
pub fn lookup(code: &str) -> Option<&'static str> {
    Some(match code {
        "A0021" => "Ambulance service, outside state per mile, transport",
        "A0080" => "Non-emergency transport, ambulance, furnished by volunteer ambulance company",
        "A0090" => "Non-emergency transport, correctional facility",
        "A0100" => "Non-emergency transport, taxi",
        "A0110" => "Non-emergency transport, bus, intra- or inter-state carrier",
        "A0120" => "Non-emergency transport, mini-bus, mountain area transport, or van",
        "A0130" => "Non-emergency transport, wheelchair van",
        "A0140" => "Non-emergency transport, air travel, commercial",
        "A0160" => "Non-emergency transport, per mile, case worker or social worker",
        "A0170" => "Non-emergency transport, parking fees, tolls, other incidentals",
        "A0180" => "Non-emergency transport, lodging, recipient",
        "A0190" => "Non-emergency transport, meals, recipient",
        "A0200" => "Non-emergency transport, lodging, escort",
        "A0210" => "Non-emergency transport, meals, escort",
        "A0225" => "Ambulance service, neonatal transport, base rate",
        "A0380" => "BLS mileage (per mile)",
        "A0382" => "BLS routine disposable supplies",
        "A0384" => "BLS specialized service disposable supplies, defibrillation",
        "A0390" => "ALS mileage (per mile)",
        "A0392" => "ALS specialized service disposable supplies, defibrillation",
        "A0394" => "ALS specialized service disposable supplies, IV drug therapy",
        "A0396" => "ALS specialized service disposable supplies, esophageal intubation",
        "A0398" => "ALS routine disposable supplies",
        "A0420" => "Ambulance waiting time, ALS or BLS, one-half hour increments",
        "A0422" => "Ambulance oxygen and oxygen supplies, life sustaining situation",
        "A0424" => "Extra ambulance attendant, ground, one way",
        "A0425" => "Ground mileage, per statute mile",
        "A0426" => "Ambulance service, ALS, non-emergency transport, level 1",
        "A0427" => "Ambulance service, ALS, emergency transport, level 1",
        "A0428" => "Ambulance service, BLS, non-emergency transport",
        "A0429" => "Ambulance service, BLS, emergency transport",
        "A0430" => "Ambulance service, conventional air services, fixed wing, emergency",
        "A0431" => "Ambulance service, conventional air services, rotary wing, emergency",
        "A0432" => "Ambulance service, paramedic intercept, rural area",
        "A0433" => "Advanced life support, level 2 (ALS2)",
        "A0434" => "Specialty care transport (SCT)",
        "A0435" => "Fixed wing air mileage, per statute mile",
        "A0436" => "Rotary wing air mileage, per statute mile",
        "T2001" => "Non-emergency transportation, patient attendant/escort",
        "T2002" => "Non-emergency transportation, per diem",
        "T2003" => "Non-emergency transportation, encounter/trip",
        "T2004" => "Non-emergency transport, commercial carrier, multi-pass",
        "T2005" => "Non-emergency transport, stretcher van",
        "T2007" => "Transportation waiting time, air ambulance and non-emergency vehicle, one-half hour increments",
        "T2049" => "Non-emergency transportation, stretcher van mileage, per mile",
        _ => return None,
    })
}

/// Returns `true` if `code` is a mileage charge HCPCS (must follow a
/// non-mileage transport line in the same claim).
pub fn is_mileage(code: &str) -> bool {
    MILEAGE_CODES.contains(&code)
}

/// Returns `true` if `code` is a special-transport HCPCS requiring a
/// supervising provider.
pub fn is_special_transport(code: &str) -> bool {
    SPECIAL_TRANSPORT_CODES.contains(&code)
}
