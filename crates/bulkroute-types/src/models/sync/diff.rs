use super::change::{ChangeSet, RouteChange};
use crate::models::RoutingSet;

/// Computes the changes that turn `current` into `desired`.
///
/// - in `current` only: [`RouteChange::Delete`]
/// - in both with a different forwarding address: `Set` to the desired route
/// - in `desired` only: `Set` to the desired route
///
/// Aliases routed identically on both sides produce no entry.
pub fn compute_changes(current: &RoutingSet, desired: &RoutingSet) -> ChangeSet {
    let mut changes = ChangeSet::new();

    for (alias, have) in current {
        match desired.get(alias) {
            None => {
                changes.insert(alias.clone(), RouteChange::Delete);
            }
            Some(want) if want.fwd != have.fwd => {
                changes.insert(alias.clone(), RouteChange::Set(want.clone()));
            }
            Some(_) => {}
        }
    }

    // Aliases known to `current` were settled above.
    for (alias, want) in desired {
        if !current.contains(alias) {
            changes.insert(alias.clone(), RouteChange::Set(want.clone()));
        }
    }

    changes
}

/// Returns `current` with `changes` applied: `Set` overwrites, `Delete`
/// removes.
pub fn apply_changes(current: &RoutingSet, changes: &ChangeSet) -> RoutingSet {
    let mut next = current.clone();
    for (alias, change) in changes {
        match change {
            RouteChange::Set(route) => {
                next.insert(alias.clone(), route.clone());
            }
            RouteChange::Delete => {
                next.remove(alias);
            }
        }
    }
    next
}
