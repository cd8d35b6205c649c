use serde::{Deserialize, Serialize};

use crate::faq::models::{CategoryFilter, FaqEntry};
use crate::faq::role::ViewerRole;
use crate::faq::visibility::visible_by_role;

/// Number of role-visible entries in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: CategoryFilter,
    pub count: usize,
}

/// Per-category counts, in the order of the category enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCounts(Vec<CategoryCount>);

impl CategoryCounts {
    /// Count for a category name, `None` if it was not in the enumeration.
    pub fn get(&self, category: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|c| c.category.as_str() == category)
            .map(|c| c.count)
    }

    /// Like [`get`](Self::get) but missing categories count as zero.
    pub fn get_or_zero(&self, category: &str) -> usize {
        self.get(category).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryCount> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<CategoryCount> {
        self.0
    }
}

/// Count role-visible entries per category.
///
/// The search term plays no part here. `All` counts every role-visible entry,
/// including entries whose category is missing from `categories`.
pub fn count_by_category(
    entries: &[FaqEntry],
    categories: &[CategoryFilter],
    role: ViewerRole,
) -> CategoryCounts {
    let visible = visible_by_role(entries, role);
    let mut counts: Vec<CategoryCount> = Vec::with_capacity(categories.len());

    for category in categories {
        if counts.iter().any(|c| c.category == *category) {
            continue;
        }
        let count = visible.iter().filter(|e| category.matches(e)).count();
        counts.push(CategoryCount {
            category: category.clone(),
            count,
        });
    }

    CategoryCounts(counts)
}
