use crate::faq::models::FaqEntry;

/// Case-insensitive substring match of `search_term` against the entry's
/// question, answer and tags.
///
/// A blank term (empty or whitespace only) matches every entry.
pub fn matches(entry: &FaqEntry, search_term: &str) -> bool {
    let query = search_term.trim();
    if query.is_empty() {
        return true;
    }

    searchable_text(entry).contains(&query.to_lowercase())
}

/// Question, answer and tags joined by single spaces, lowercased.
fn searchable_text(entry: &FaqEntry) -> String {
    std::iter::once(entry.question.as_str())
        .chain(std::iter::once(entry.answer.as_str()))
        .chain(entry.tags.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::models::Audience;

    fn entry() -> FaqEntry {
        FaqEntry {
            id: "tracking".to_string(),
            question: "What do ticket statuses mean?".to_string(),
            answer: "- Open: waiting for action\n- Closed: finished".to_string(),
            category: "Tracking".to_string(),
            audience: Audience::All,
            tags: vec!["in progress".to_string(), "k-number".to_string()],
        }
    }

    #[test]
    fn test_blank_term_matches() {
        let e = entry();
        assert!(matches(&e, ""));
        assert!(matches(&e, "   "));
        assert!(matches(&e, "\t\n"));
    }

    #[test]
    fn test_substring_match() {
        let e = entry();
        assert!(matches(&e, "stat"));
        assert!(matches(&e, "waiting for"));
        assert!(!matches(&e, "password"));
    }

    #[test]
    fn test_case_insensitive() {
        let e = entry();
        assert_eq!(matches(&e, "STATUS"), matches(&e, "status"));
        assert!(matches(&e, "CLOSED"));
    }

    #[test]
    fn test_term_is_trimmed() {
        assert!(matches(&entry(), "  open  "));
    }

    #[test]
    fn test_tags_are_searched() {
        let e = entry();
        assert!(matches(&e, "k-number"));
        assert!(matches(&e, "in progress"));
    }

    #[test]
    fn test_match_can_span_joined_fields() {
        // The answer's last word and the first tag are joined by one space.
        assert!(matches(&entry(), "finished in progress"));
    }
}
