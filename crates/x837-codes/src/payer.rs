/// A payer preset resolved from a symbolic key (e.g. `UHC_CS`), per
/// the `payer_preset` configuration key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayerPreset {
    pub payer_id: &'static str,
    pub payer_name: &'static str,
    pub interchange_receiver_id: &'static str,
    pub interchange_qualifier: &'static str,
}

/// Looks up a payer preset by symbolic key.
pub fn lookup(key: &str) -> Option<PayerPreset> {
    Some(match key {
        "UHC_CS" => PayerPreset {
            payer_id: "87726",
            payer_name: "UnitedHealthcare Community Plan",
            interchange_receiver_id: "UHCCS00001",
            interchange_qualifier: "ZZ",
        },
        "MOLINA_CS" => PayerPreset {
            payer_id: "38333",
            payer_name: "Molina Healthcare",
            interchange_receiver_id: "MOLINACS01",
            interchange_qualifier: "ZZ",
        },
        "CENTENE_CS" => PayerPreset {
            payer_id: "68069",
            payer_name: "Centene Corporation",
            interchange_receiver_id: "CENTENECS1",
            interchange_qualifier: "ZZ",
        },
        _ => return None,
    })
}
