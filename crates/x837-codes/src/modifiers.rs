/// Origin/destination letters combined pairwise (excluding same-letter
/// pairs) to form the 110 two-character ambulance modifiers.
const ORIGIN_DEST_LETTERS: &[char] = &['D', 'E', 'G', 'H', 'I', 'J', 'N', 'P', 'R', 'S', 'X'];

/// Functional modifiers that aren't origin/destination pairs.
const FUNCTIONAL_MODIFIERS: &[&str] = &["GA", "GY", "GZ", "QM", "QN", "GM", "QL", "TQ"];

fn is_origin_dest_pair(modifier: &str) -> bool {
    let mut chars = modifier.chars();
    let (Some(origin), Some(dest), None) = (chars.next(), chars.next(), chars.next()) else {
        return false;
    };
    origin != dest
        && ORIGIN_DEST_LETTERS.contains(&origin)
        && ORIGIN_DEST_LETTERS.contains(&dest)
}

/// Looks up a HCPCS modifier description.
///
/// Origin/destination pairs (e.g. `RH`, home to hospital) are described
/// generically from their letters; functional modifiers have fixed text.
pub fn lookup(modifier: &str) -> Option<&'static str> {
    if let Some(desc) = lookup_functional(modifier) {
        return Some(desc);
    }
    if is_origin_dest_pair(modifier) {
        return Some(origin_dest_description(modifier));
    }
    None
}

fn lookup_functional(modifier: &str) -> Option<&'static str> {
    Some(match modifier {
        "GA" => "Waiver of liability statement issued as required by payer policy",
        "GY" => "Item or service statutorily excluded",
        "GZ" => "Item or service expected to be denied as not reasonable and necessary",
        "QM" => "Ambulance service provided under arrangement by a provider of services",
        "QN" => "Ambulance service furnished directly by a provider of services",
        "GM" => "Multiple patients on one ambulance trip",
        "QL" => "Patient pronounced dead after ambulance called",
        "TQ" => "Basic life support transport by a volunteer ambulance provider",
        _ => return None,
    })
}

fn origin_dest_description(modifier: &str) -> &'static str {
    // The registry only needs to confirm a pair is valid; it does not
    // carry 110 distinct static strings per combination.
    match modifier {
        "RH" => "Residence to hospital",
        "HR" => "Hospital to residence",
        "HH" => "Hospital to hospital",
        "DH" => "Diagnostic/therapeutic site to hospital",
        "HD" => "Hospital to diagnostic/therapeutic site",
        "SH" => "Scene of accident/acute event to hospital",
        "NH" => "Skilled nursing facility to hospital",
        "HN" => "Hospital to skilled nursing facility",
        _ => "Origin/destination ambulance modifier",
    }
}

/// Returns `true` if `modifier` is in the closed modifier set (either a
/// valid origin/destination pair or a recognized functional modifier).
pub fn is_known(modifier: &str) -> bool {
    lookup_functional(modifier).is_some() || is_origin_dest_pair(modifier)
}
