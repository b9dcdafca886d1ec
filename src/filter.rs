//! Title matching.
//!
//! A [`TitleFilter`] is compiled once per search text and then applied to
//! every record title. The policy is fixed per viewer.

use crate::data::Dataset;
use regex::{Regex, RegexBuilder};

/// Search text that triggers the "wind river" exclusion.
const WIND_TOKEN: &str = "wind";
/// Phrase excluded when searching for exactly [`WIND_TOKEN`].
const WIND_RIVER_PHRASE: &str = "wind river";

/// Rule deciding whether a title satisfies the search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MatchPolicy {
    /// Case-insensitive substring match.
    Substring,
    /// Case-insensitive whole-word match.
    #[default]
    WholeWord,
}

impl MatchPolicy {
    /// Get the policy name.
    pub fn name(self) -> &'static str {
        match self {
            MatchPolicy::Substring => "substring",
            MatchPolicy::WholeWord => "whole-word",
        }
    }
}

/// A compiled search predicate.
#[derive(Debug, Clone)]
pub struct TitleFilter {
    policy: MatchPolicy,
    /// Trimmed, lowercased search text.
    needle: String,
    /// Whole-word pattern; `None` for substring matching or empty text.
    pattern: Option<Regex>,
    exclude_wind_river: bool,
}

impl TitleFilter {
    /// Compile a filter for `text` under `policy`.
    pub fn new(text: &str, policy: MatchPolicy) -> Self {
        let trimmed = text.trim();
        let pattern = match policy {
            MatchPolicy::WholeWord if !trimmed.is_empty() => {
                whole_word_pattern(trimmed)
            },
            _ => None,
        };

        Self {
            policy,
            needle: trimmed.to_lowercase(),
            pattern,
            exclude_wind_river: policy == MatchPolicy::WholeWord && text == WIND_TOKEN,
        }
    }

    /// Whether this filter lets every record through.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Test a single title.
    pub fn matches(&self, title: &str) -> bool {
        if self.is_empty() {
            return true;
        }

        match self.policy {
            MatchPolicy::Substring => title.to_lowercase().contains(&self.needle),
            MatchPolicy::WholeWord => {
                let Some(ref pattern) = self.pattern else {
                    return false;
                };
                if !pattern.is_match(title) {
                    return false;
                }
                !(self.exclude_wind_river
                    && title.to_lowercase().contains(WIND_RIVER_PHRASE))
            },
        }
    }

    /// Dataset indices of matching records, in dataset order.
    pub fn apply(&self, dataset: &Dataset) -> Vec<usize> {
        dataset
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(&record.title))
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Word boundaries are ASCII-only: accented letters count as non-word characters.
fn whole_word_pattern(trimmed: &str) -> Option<Regex> {
    match RegexBuilder::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(trimmed)))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            tracing::warn!("Search pattern rejected: {}", e);
            None
        },
    }
}

/// A run of title text, optionally marked as a search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSegment {
    /// Segment text.
    pub text: String,
    /// Whether the segment matched the search text.
    pub highlighted: bool,
}

/// Split `title` around case-insensitive occurrences of the trimmed `text`.
pub fn highlight_title(title: &str, text: &str) -> Vec<TitleSegment> {
    let trimmed = text.trim();
    let plain = |s: &str| TitleSegment {
        text: s.to_string(),
        highlighted: false,
    };

    if trimmed.is_empty() {
        return vec![plain(title)];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(trimmed))
        .case_insensitive(true)
        .build()
    else {
        return vec![plain(title)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for hit in pattern.find_iter(title) {
        if hit.start() > last {
            segments.push(plain(&title[last..hit.start()]));
        }
        segments.push(TitleSegment {
            text: hit.as_str().to_string(),
            highlighted: true,
        });
        last = hit.end();
    }
    if last < title.len() || segments.is_empty() {
        segments.push(plain(&title[last..]));
    }

    segments
}
