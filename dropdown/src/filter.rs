//! Search filtering over dropdown options.
//!
//! The default filter is a case-insensitive substring match against the
//! trimmed query. A fuzzy mode backed by nucleo-matcher is available for
//! long option lists.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

use crate::option::OptionItem;

/// How search text is matched against options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Case-insensitive substring; keeps source order.
    #[default]
    Substring,
    /// Fuzzy match; best score first.
    Fuzzy,
}

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone)]
pub struct FilterMatch {
    /// Index of the matched item in the searched list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Indices of the options matching `query`, in display order.
///
/// An empty query matches everything in source order.
pub fn filter_indices<T: OptionItem>(
    options: &[T],
    query: &str,
    key_field: &str,
    mode: FilterMode,
) -> Vec<usize> {
    if query.is_empty() {
        return (0..options.len()).collect();
    }

    match mode {
        FilterMode::Substring => substring_filter(query, options, key_field),
        FilterMode::Fuzzy => {
            let haystacks: Vec<Option<String>> = options
                .iter()
                .map(|option| option.search_text(key_field).map(|s| s.into_owned()))
                .collect();
            fuzzy_filter(query, &haystacks)
                .into_iter()
                .map(|m| m.index)
                .collect()
        }
    }
}

/// Case-insensitive substring filter with a trimmed query.
fn substring_filter<T: OptionItem>(query: &str, options: &[T], key_field: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();

    options
        .iter()
        .enumerate()
        .filter(|(_, option)| {
            option
                .search_text(key_field)
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Fuzzy filter using nucleo-matcher.
///
/// Returns matches sorted by score (highest first). Items without search
/// text never match.
pub fn fuzzy_filter(query: &str, items: &[Option<String>]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return (0..items.len())
            .map(|index| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let label = label.as_deref()?;
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    // Stable sort keeps source order among equal scores.
    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}
