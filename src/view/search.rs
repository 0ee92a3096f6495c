//! Search results display model

use crate::api::{SearchResultItem, SearchResults};
use serde::Serialize;

const RESULT_COUNT_LABEL: &str = "Найдено результатов";

/// A hyperlink opened in a new browsing context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub target: String,
    pub new_context: bool,
}

/// One search hit, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub link: Link,
    pub snippet: String,
    /// Relevance with exactly two decimals
    pub relevance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultsView {
    pub header: String,
    pub entries: Vec<ResultEntry>,
}

/// Content of the search results panel
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "content", rename_all = "snake_case")]
pub enum SearchPanel {
    #[default]
    Empty,
    /// Single-line backend error shown in place of results
    Failed(String),
    Results(SearchResultsView),
}

/// Formats a relevance score to two decimal places
///
/// Exact halves round away from zero. The only doubles sitting exactly
/// halfway between two hundredths are odd multiples of 1/8.
pub fn format_relevance(relevance: f64) -> String {
    let eighths = relevance * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (relevance * 100.0).round() / 100.0);
    }
    format!("{:.2}", relevance)
}

impl From<&SearchResultItem> for ResultEntry {
    fn from(item: &SearchResultItem) -> Self {
        Self {
            link: Link {
                label: item.title.clone(),
                target: format!("{}{}", item.site, item.uri),
                new_context: true,
            },
            snippet: item.snippet.clone(),
            relevance: format_relevance(item.relevance),
        }
    }
}

impl From<&SearchResults> for SearchResultsView {
    fn from(results: &SearchResults) -> Self {
        Self {
            header: format!("{}: {}", RESULT_COUNT_LABEL, results.count),
            entries: results.data.iter().map(ResultEntry::from).collect(),
        }
    }
}
