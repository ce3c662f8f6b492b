use std::collections::HashSet;

use crate::domain::model::{Period, Service, TransitionInstructions};
use crate::utils::error::{Result, RotationError};

/// Derives per-period cancel / sign-up / keep instructions by diffing
/// each period's service set against the previous one.
///
/// Membership is decided by service id, not display name, so two catalog
/// entries that happen to share a name cannot corrupt the sets. A service
/// listed twice within one period counts once.
pub fn annotate(periods: &[Period]) -> Result<Vec<TransitionInstructions>> {
    if periods.is_empty() {
        return Err(RotationError::EmptyPlan);
    }

    let mut all = Vec::with_capacity(periods.len());
    all.push(TransitionInstructions {
        to_cancel: Vec::new(),
        to_sign_up: dedup_by_id(&periods[0].services),
        to_keep: Vec::new(),
    });

    for window in periods.windows(2) {
        let previous = id_set(&window[0].services);
        let current = id_set(&window[1].services);

        let to_cancel = dedup_by_id(&window[0].services)
            .into_iter()
            .filter(|s| !current.contains(s.id.as_str()))
            .collect();
        let to_sign_up = dedup_by_id(&window[1].services)
            .into_iter()
            .filter(|s| !previous.contains(s.id.as_str()))
            .collect();
        let to_keep = dedup_by_id(&window[1].services)
            .into_iter()
            .filter(|s| previous.contains(s.id.as_str()))
            .collect();

        all.push(TransitionInstructions {
            to_cancel,
            to_sign_up,
            to_keep,
        });
    }

    Ok(all)
}

fn id_set(services: &[Service]) -> HashSet<&str> {
    services.iter().map(|s| s.id.as_str()).collect()
}

/// Order-preserving, first occurrence wins.
fn dedup_by_id(services: &[Service]) -> Vec<Service> {
    let mut seen = HashSet::new();
    services
        .iter()
        .filter(|s| seen.insert(s.id.as_str()))
        .cloned()
        .collect()
}
