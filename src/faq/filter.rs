use serde::{Deserialize, Serialize};

use crate::faq::models::{CategoryFilter, FaqEntry};
use crate::faq::role::ViewerRole;
use crate::faq::search::matches;
use crate::faq::visibility::is_visible;

/// The three UI selections that drive the FAQ list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaqQuery {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub role: ViewerRole,
    #[serde(default, alias = "q")]
    pub search_term: String,
}

impl FaqQuery {
    pub fn new(category: CategoryFilter, role: ViewerRole, search_term: impl Into<String>) -> Self {
        Self {
            category,
            role,
            search_term: search_term.into(),
        }
    }

    /// Role-independent search across every category.
    pub fn search_all(search_term: impl Into<String>) -> Self {
        Self::new(CategoryFilter::All, ViewerRole::Unrestricted, search_term)
    }

    /// Returns `true` if the entry survives role, category and search filtering.
    pub fn accepts(&self, entry: &FaqEntry) -> bool {
        is_visible(entry, self.role)
            && self.category.matches(entry)
            && matches(entry, &self.search_term)
    }
}

/// Apply role, category and search filtering, keeping dataset order.
pub fn filter_faqs<'a>(entries: &'a [FaqEntry], query: &FaqQuery) -> Vec<&'a FaqEntry> {
    entries.iter().filter(|entry| query.accepts(entry)).collect()
}
