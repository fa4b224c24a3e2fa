//! CQL keyword completions.

// Source: https://docs.datastax.com/en/cql-oss/3.3/cql/cql_reference/keywords_r.html
const KEYWORDS_TSV: &str = include_str!("keywords.tsv");

/// Type label of keyword completions.
pub const KEYWORD_TYPE_LABEL: &str = "kw";
/// Priority of reserved keywords. Lower sorts first in the host.
pub const RESERVED_PRIORITY: i32 = 100;
/// Priority of non-reserved keywords.
pub const NON_RESERVED_PRIORITY: i32 = 1000;

/// An autocomplete entry offered to the host.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Completion {
    /// Text displayed in the completion list.
    pub label: String,
    /// Short kind marker shown next to the label.
    pub type_label: String,
    /// Text inserted on selection.
    pub value: String,
    /// Sorting priority, lower first.
    pub priority: i32,
    /// Context the completion applies to; keywords apply everywhere.
    pub context: Option<String>,
}

/// Keyword completions, sorted by label.
pub fn keyword_completions() -> Vec<Completion> {
    let mut completions: Vec<Completion> = KEYWORDS_TSV
        .lines()
        .skip(1)
        .filter_map(|line| line.split_once('\t'))
        .map(|(keyword, kind)| {
            let keyword = keyword.to_lowercase();
            Completion {
                label: keyword.clone(),
                type_label: KEYWORD_TYPE_LABEL.to_owned(),
                value: keyword,
                priority: if kind.starts_with("reserved") {
                    RESERVED_PRIORITY
                } else {
                    NON_RESERVED_PRIORITY
                },
                context: None,
            }
        })
        .collect();
    completions.sort();
    completions
}
