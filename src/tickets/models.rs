use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of the unified search page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    #[default]
    Tickets,
    Faqs,
}

impl SearchKind {
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("faqs") => SearchKind::Faqs,
            _ => SearchKind::Tickets,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Tickets => "tickets",
            SearchKind::Faqs => "faqs",
        }
    }
}

/// Ticket status selection on the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatusFilter {
    #[default]
    All,
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatusFilter {
    /// Every selectable status, in display order.
    pub const OPTIONS: [TicketStatusFilter; 5] = [
        TicketStatusFilter::All,
        TicketStatusFilter::Open,
        TicketStatusFilter::InProgress,
        TicketStatusFilter::Resolved,
        TicketStatusFilter::Closed,
    ];

    /// Unknown values fall back to `All`. `pending` is an alias of `open`.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("open") | Some("pending") => TicketStatusFilter::Open,
            Some("in_progress") => TicketStatusFilter::InProgress,
            Some("resolved") => TicketStatusFilter::Resolved,
            Some("closed") => TicketStatusFilter::Closed,
            _ => TicketStatusFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatusFilter::All => "all",
            TicketStatusFilter::Open => "open",
            TicketStatusFilter::InProgress => "in_progress",
            TicketStatusFilter::Resolved => "resolved",
            TicketStatusFilter::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatusFilter::All => "All statuses",
            TicketStatusFilter::Open => "Open",
            TicketStatusFilter::InProgress => "In Progress",
            TicketStatusFilter::Resolved => "Resolved",
            TicketStatusFilter::Closed => "Closed",
        }
    }
}

/// Sort order for ticket results, by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketOrdering {
    #[default]
    Newest,
    Oldest,
}

impl TicketOrdering {
    pub const OPTIONS: [TicketOrdering; 2] = [TicketOrdering::Newest, TicketOrdering::Oldest];

    /// Accepts the page spellings and the backend's `created_at` field spellings.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some("oldest") | Some("created_at") => TicketOrdering::Oldest,
            _ => TicketOrdering::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketOrdering::Newest => "newest",
            TicketOrdering::Oldest => "oldest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketOrdering::Newest => "Newest",
            TicketOrdering::Oldest => "Oldest",
        }
    }
}

/// Search parameters exactly as they arrive from a URL query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub q: Option<String>,
    pub status: Option<String>,
    pub ordering: Option<String>,
}

/// Normalized state of the unified search page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketSearchParams {
    pub kind: SearchKind,
    pub q: String,
    pub status: TicketStatusFilter,
    pub ordering: TicketOrdering,
}

impl TicketSearchParams {
    pub fn normalize(raw: RawSearchParams) -> Self {
        Self {
            kind: SearchKind::normalize(raw.kind.as_deref()),
            q: raw.q.unwrap_or_default(),
            status: TicketStatusFilter::normalize(raw.status.as_deref()),
            ordering: TicketOrdering::normalize(raw.ordering.as_deref()),
        }
    }

    /// Query string for the search page URL, omitting defaults.
    pub fn page_query(&self) -> String {
        let mut pairs = vec![("type", self.kind.as_str().to_string())];

        if !self.q.is_empty() {
            pairs.push(("q", self.q.clone()));
        }

        if self.kind == SearchKind::Tickets {
            if self.status != TicketStatusFilter::All {
                pairs.push(("status", self.status.as_str().to_string()));
            }
            if self.ordering != TicketOrdering::Newest {
                pairs.push(("ordering", self.ordering.as_str().to_string()));
            }
        }

        encode_pairs(&pairs)
    }

    /// Path and query for the backend ticket search endpoint.
    pub fn ticket_api_path(&self) -> String {
        let mut pairs = Vec::new();

        if !self.q.is_empty() {
            pairs.push(("q", self.q.clone()));
        }
        if self.status != TicketStatusFilter::All {
            pairs.push(("status", self.status.as_str().to_string()));
        }
        pairs.push(("ordering", self.ordering.as_str().to_string()));

        format!("/tickets/?{}", encode_pairs(&pairs))
    }
}

fn encode_pairs(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A ticket row as returned by the backend search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSummary {
    pub id: i64,
    #[serde(default)]
    pub type_of_issue: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl TicketSummary {
    pub fn status_label(&self) -> String {
        format_status(&self.status)
    }

    /// Creation date as `YYYY-MM-DD`, empty if unknown.
    pub fn created_date(&self) -> String {
        self.created_at
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for TicketSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ticket #{} - {}", self.id, self.type_of_issue)
    }
}

/// `in_progress` -> `In Progress`.
pub fn format_status(value: &str) -> String {
    value
        .split('_')
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            let mut chars = chunk.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(kind: Option<&str>, q: Option<&str>, status: Option<&str>, ordering: Option<&str>) -> RawSearchParams {
        RawSearchParams {
            kind: kind.map(str::to_string),
            q: q.map(str::to_string),
            status: status.map(str::to_string),
            ordering: ordering.map(str::to_string),
        }
    }

    #[test]
    fn test_normalize_defaults() {
        let params = TicketSearchParams::normalize(RawSearchParams::default());
        assert_eq!(params.kind, SearchKind::Tickets);
        assert_eq!(params.q, "");
        assert_eq!(params.status, TicketStatusFilter::All);
        assert_eq!(params.ordering, TicketOrdering::Newest);
    }

    #[test]
    fn test_normalize_unknown_values() {
        let params = TicketSearchParams::normalize(raw(
            Some("everything"),
            None,
            Some("archived"),
            Some("random"),
        ));
        assert_eq!(params.kind, SearchKind::Tickets);
        assert_eq!(params.status, TicketStatusFilter::All);
        assert_eq!(params.ordering, TicketOrdering::Newest);
    }

    #[test]
    fn test_status_aliases() {
        assert_eq!(TicketStatusFilter::normalize(Some("pending")), TicketStatusFilter::Open);
        assert_eq!(
            TicketStatusFilter::normalize(Some("in_progress")),
            TicketStatusFilter::InProgress
        );
        assert_eq!(TicketOrdering::normalize(Some("created_at")), TicketOrdering::Oldest);
        assert_eq!(TicketOrdering::normalize(Some("-created_at")), TicketOrdering::Newest);
    }

    #[test]
    fn test_page_query_omits_defaults() {
        let params = TicketSearchParams::normalize(raw(None, None, None, None));
        assert_eq!(params.page_query(), "type=tickets");

        let params = TicketSearchParams::normalize(raw(
            Some("tickets"),
            Some("wifi down"),
            Some("resolved"),
            Some("oldest"),
        ));
        assert_eq!(
            params.page_query(),
            "type=tickets&q=wifi%20down&status=resolved&ordering=oldest"
        );
    }

    #[test]
    fn test_page_query_for_faqs_drops_ticket_filters() {
        let params = TicketSearchParams::normalize(raw(
            Some("faqs"),
            Some("reset"),
            Some("closed"),
            Some("oldest"),
        ));
        assert_eq!(params.page_query(), "type=faqs&q=reset");
    }

    #[test]
    fn test_ticket_api_path() {
        let params = TicketSearchParams::default();
        assert_eq!(params.ticket_api_path(), "/tickets/?ordering=newest");

        let params = TicketSearchParams::normalize(raw(
            None,
            Some("a&b"),
            Some("in_progress"),
            Some("oldest"),
        ));
        assert_eq!(
            params.ticket_api_path(),
            "/tickets/?q=a%26b&status=in_progress&ordering=oldest"
        );
    }

    #[test]
    fn test_format_status() {
        assert_eq!(format_status("in_progress"), "In Progress");
        assert_eq!(format_status("open"), "Open");
        assert_eq!(format_status(""), "");
    }

    #[test]
    fn test_ticket_summary_from_backend_json() {
        let json = r#"{"id": 7, "type_of_issue": "Wi-Fi", "status": "in_progress", "created_at": "2024-03-05T10:15:00Z"}"#;
        let ticket: TicketSummary = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status_label(), "In Progress");
        assert_eq!(ticket.created_date(), "2024-03-05");
        assert_eq!(ticket.to_string(), "Ticket #7 - Wi-Fi");
    }

    #[test]
    fn test_ticket_summary_without_timestamp() {
        let ticket: TicketSummary = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(ticket.created_date(), "");
    }
}
