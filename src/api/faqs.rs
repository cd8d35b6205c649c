use serde::Deserialize;

use crate::error::AppError;
use crate::faq::catalog::FaqCatalog;
use crate::faq::counts::CategoryCounts;
use crate::faq::filter::FaqQuery;
use crate::faq::models::FaqEntry;
use crate::faq::role::ViewerRole;

/// Query parameters accepted by the FAQ endpoints that only need a role.
#[derive(Debug, Default, Deserialize)]
pub struct RoleQuery {
    #[serde(default)]
    pub role: ViewerRole,
}

/// Filtered FAQ list in dataset order.
pub fn list_faqs(catalog: &FaqCatalog, query: &FaqQuery) -> Vec<FaqEntry> {
    catalog.filter(query).into_iter().cloned().collect()
}

/// A single FAQ, hidden as "not found" when the role may not see it.
pub fn find_faq(catalog: &FaqCatalog, id: &str, role: ViewerRole) -> Result<FaqEntry, AppError> {
    catalog
        .get_visible(id, role)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("FAQ '{id}' not found")))
}

/// Axum handler for `GET /api/v1/faqs`.
#[cfg(feature = "ssr")]
pub async fn list_faqs_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Query(query): axum::extract::Query<FaqQuery>,
) -> axum::Json<Vec<FaqEntry>> {
    let results = list_faqs(&state.catalog, &query);
    tracing::debug!(
        category = %query.category,
        role = %query.role,
        results = results.len(),
        "Filtered FAQs"
    );
    axum::Json(results)
}

/// Axum handler for `GET /api/v1/faqs/categories`.
#[cfg(feature = "ssr")]
pub async fn category_counts_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Query(query): axum::extract::Query<RoleQuery>,
) -> axum::Json<CategoryCounts> {
    axum::Json(state.catalog.counts(query.role))
}

/// Axum handler for `GET /api/v1/faqs/{id}`.
#[cfg(feature = "ssr")]
pub async fn get_faq_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Path(id): axum::extract::Path<String>,
    axum::extract::Query(query): axum::extract::Query<RoleQuery>,
) -> Result<axum::Json<FaqEntry>, AppError> {
    find_faq(&state.catalog, &id, query.role).map(axum::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::models::CategoryFilter;

    fn catalog() -> FaqCatalog {
        FaqCatalog::builtin().unwrap()
    }

    #[test]
    fn test_list_faqs_owned_results() {
        let query = FaqQuery::new(CategoryFilter::parse("Account"), ViewerRole::Unrestricted, "");
        let ids: Vec<String> = list_faqs(&catalog(), &query).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["account-password-reset", "account-profile-changes"]);
    }

    #[test]
    fn test_find_faq_hidden_for_other_role() {
        let err = find_faq(&catalog(), "students-missing-ticket", ViewerRole::Staff).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(find_faq(&catalog(), "students-missing-ticket", ViewerRole::Student).is_ok());
    }

    #[test]
    fn test_role_query_defaults_to_unrestricted() {
        let query: RoleQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.role, ViewerRole::Unrestricted);
    }
}
