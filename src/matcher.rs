use crate::model::CatalogEntry;
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32Str};

/// Fuzzy search over catalog entry names, backing the search box.
pub struct FuzzyMatcher {
    matcher: Matcher,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Entries matching `query`, best score first. Non-matches are
    /// dropped; equal scores prefer the shorter name, so an exact name
    /// beats a longer one it is a prefix of.
    pub fn filter<'a>(
        &mut self,
        query: &str,
        entries: impl Iterator<Item = &'a CatalogEntry>,
    ) -> Vec<&'a CatalogEntry> {
        let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
        let mut buf = Vec::new();

        let mut scored: Vec<(u32, &CatalogEntry)> = entries
            .filter_map(|entry| {
                let haystack = Utf32Str::new(&entry.name, &mut buf);
                pattern
                    .score(haystack, &mut self.matcher)
                    .map(|score| (score, entry))
            })
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.name.len().cmp(&b.1.name.len())));
        scored.into_iter().map(|(_, entry)| entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            exec: name.to_lowercase(),
            ..Default::default()
        }
    }

    #[test]
    fn non_matches_are_dropped() {
        let entries = vec![entry("Firefox"), entry("Files"), entry("Terminal")];
        let mut matcher = FuzzyMatcher::new();
        let hits = matcher.filter("fi", entries.iter());
        let names: Vec<&str> = hits.iter().map(|e| e.name.as_str()).collect();
        assert!(names.contains(&"Firefox"));
        assert!(names.contains(&"Files"));
        assert!(!names.contains(&"Terminal"));
    }

    #[test]
    fn exact_name_ranks_first() {
        let entries = vec![entry("Firefox Developer Edition"), entry("Firefox")];
        let mut matcher = FuzzyMatcher::new();
        let hits = matcher.filter("firefox", entries.iter());
        assert_eq!(hits[0].name, "Firefox");
    }

    #[test]
    fn no_hits_for_unrelated_query() {
        let entries = vec![entry("Firefox")];
        let mut matcher = FuzzyMatcher::new();
        assert!(matcher.filter("zzzzzz", entries.iter()).is_empty());
    }
}
