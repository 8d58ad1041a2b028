//! Least-recently-used victim selection.

use super::{GroupName, GroupUsage};

/// Selects the least-recently-used group from insertion-ordered entries.
///
/// When several groups share the oldest timestamp the one inserted first
/// wins, so the choice is reproducible.
///
/// # Panics
///
/// Panics when `entries` is empty. Eviction is only attempted when the
/// active set is full and capacity is never zero, so an empty slice means
/// the capacity invariant is already broken.
#[must_use]
pub fn select_victim(entries: &[(GroupName, GroupUsage)]) -> &GroupName {
    let Some((victim, _)) = entries
        .iter()
        .min_by_key(|(_, usage)| usage.last_used_at())
    else {
        panic!("eviction requested on an empty active group set");
    };
    victim
}
