use crate::faq::models::{Audience, FaqEntry};
use crate::faq::role::ViewerRole;

/// Returns `true` if the entry may be shown to the given viewer.
///
/// Unrestricted viewers see everything. Restricted viewers see entries for
/// `all` plus entries authored for their own role.
pub fn is_visible(entry: &FaqEntry, role: ViewerRole) -> bool {
    match role.audience() {
        None => true,
        Some(own) => entry.audience == Audience::All || entry.audience == own,
    }
}

/// The role-visible subset, in dataset order.
pub fn visible_by_role(entries: &[FaqEntry], role: ViewerRole) -> Vec<&FaqEntry> {
    entries.iter().filter(|entry| is_visible(entry, role)).collect()
}
