//! Cross-claim duplicate detection: a collision on `(clm_number,
//! frequency_code, original_claim_number)` raises `BATCH_010`.

use std::collections::HashMap;

use x837_model::ClaimRecord;

/// Returns the indices of `claims` that collide with an earlier claim on
/// `(clm_number, frequency_code, original_claim_number)`. The first
/// occurrence of a triple is never flagged; only later ones are.
pub fn duplicate_indices(claims: &[ClaimRecord]) -> Vec<usize> {
    let mut seen: HashMap<(String, Option<String>, Option<String>), usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for (index, claim) in claims.iter().enumerate() {
        let key = (
            claim.claim.clm_number.clone(),
            claim.claim.frequency_code.clone(),
            claim.claim.original_claim_number.clone(),
        );
        if seen.contains_key(&key) {
            duplicates.push(index);
        } else {
            seen.insert(key, index);
        }
    }

    duplicates
}
