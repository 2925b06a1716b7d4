//! Fuzzy name matching for "did you mean" suggestions.
//!
//! Lookups in the address book are exact. When one misses, the names that
//! are close to the query are offered instead:
//! - Case- and whitespace-insensitive exact matches
//! - Substring matches in either direction
//! - Typos, via Levenshtein distance
//!
//! Scores are on a 0-95 scale.

/// A suggested name and how confident the match is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    /// The existing contact name
    pub name: String,

    /// Confidence score (0-95)
    pub confidence: u8,
}

/// Scores existing contact names against a query that missed.
#[derive(Debug, Clone, Default)]
pub struct NameMatcher;

impl NameMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Best matches for `query` among `names`, highest confidence first and
    /// then alphabetically, limited to `max_results`.
    pub fn find_matches<'a, I>(
        &self,
        query: &str,
        names: I,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<NameMatch>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = Self::normalize_name(query);

        let mut results: Vec<NameMatch> = names
            .into_iter()
            .filter_map(|name| {
                let confidence = Self::calculate_fuzzy_score(&query, &Self::normalize_name(name));
                (confidence > 0 && confidence >= min_confidence).then(|| NameMatch {
                    name: name.to_string(),
                    confidence,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        });
        results.truncate(max_results);

        results
    }

    /// Names only, in the order of [`NameMatcher::find_matches`].
    pub fn suggest<'a, I>(
        &self,
        query: &str,
        names: I,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.find_matches(query, names, max_results, min_confidence)
            .into_iter()
            .map(|m| m.name)
            .collect()
    }

    /// Score two normalized names from 0 (no match) to 95 (equal).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        // 10-95 depending on how much of the target is covered
        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Lowercase and collapse whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
