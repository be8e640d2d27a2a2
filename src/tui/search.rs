// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::{Regex, RegexBuilder};

use crate::model::HelpPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchKind {
    Regular,
    Fuzzy,
}

impl SearchKind {
    pub(crate) fn prompt(self) -> char {
        match self {
            Self::Regular => '/',
            Self::Fuzzy => '\\',
        }
    }
}

/// Catalog pages matching `query`, best first. An empty query keeps catalog order.
pub(crate) fn ranked_pages(
    pages: &'static [HelpPage],
    query: &str,
    kind: SearchKind,
) -> Vec<&'static HelpPage> {
    let trimmed = query.trim();
    let needle = trimmed.to_lowercase();
    if needle.is_empty() {
        return pages.iter().collect();
    }

    let pattern = match kind {
        SearchKind::Regular => match regular_pattern(trimmed) {
            Some(pattern) => Some(pattern),
            None => return Vec::new(),
        },
        SearchKind::Fuzzy => None,
    };

    let mut scored: Vec<(i64, &'static HelpPage)> = pages
        .iter()
        .filter_map(|page| {
            let name = page.name.to_lowercase();
            let haystack = format!("{name} {}", page.summary.to_lowercase());
            let score = match &pattern {
                Some(pattern) => regular_score(pattern, name.len(), &haystack),
                None => fuzzy_score(&needle, &haystack),
            }?;
            Some((score, page))
        })
        .collect();

    scored.sort_by(|(a_score, a_page), (b_score, b_page)| {
        b_score.cmp(a_score).then_with(|| a_page.name.cmp(b_page.name))
    });
    scored.into_iter().map(|(_, page)| page).collect()
}

/// Case-insensitive regex; an invalid pattern is matched literally.
fn regular_pattern(needle: &str) -> Option<Regex> {
    RegexBuilder::new(needle)
        .case_insensitive(true)
        .build()
        .or_else(|_| RegexBuilder::new(&regex::escape(needle)).case_insensitive(true).build())
        .ok()
}

/// `haystack` starts with the page name, which is `name_len` bytes long.
fn regular_score(pattern: &Regex, name_len: usize, haystack: &str) -> Option<i64> {
    let found = pattern.find(haystack)?;
    let first = found.start();
    let occurrences = pattern.find_iter(haystack).count() as i64;
    let boundary = haystack[..first].chars().next_back().map_or(true, is_boundary_char);

    let mut score = 200_000_i64;
    score -= first as i64 * 1_000;
    score += occurrences * 200;
    score -= haystack.chars().count() as i64;
    if first == 0 {
        score += 50_000;
    }
    if boundary {
        score += 20_000;
    }
    if first == 0 && found.end() == name_len {
        score += 100_000;
    }
    Some(score)
}

#[derive(Debug, Clone, Copy)]
struct SubsequenceStats {
    first: usize,
    span: usize,
    consecutive: usize,
    start_boundary: bool,
}

fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let stats = subsequence_stats(needle, haystack)?;
    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());

    let mut score = (ratio * 1_000.0).round() as i64;
    score -= stats.span as i64;
    score -= stats.first as i64 / 4;
    score += stats.consecutive as i64 * 40;
    if stats.start_boundary {
        score += 150;
    }
    if haystack.contains(needle) {
        score += 2_000;
    }
    Some(score)
}

fn subsequence_stats(needle: &str, haystack: &str) -> Option<SubsequenceStats> {
    let mut wanted = needle.chars().filter(|ch| !ch.is_whitespace()).peekable();
    let mut first: Option<usize> = None;
    let mut last = 0;
    let mut prev_match: Option<usize> = None;
    let mut consecutive = 0;
    let mut start_boundary = false;
    let mut prev_hay: Option<char> = None;

    for (idx, ch) in haystack.chars().enumerate() {
        let Some(&want) = wanted.peek() else {
            break;
        };

        if ch == want {
            wanted.next();
            if first.is_none() {
                first = Some(idx);
                start_boundary = prev_hay.map_or(true, is_boundary_char);
            }
            if prev_match.is_some_and(|prev| idx == prev + 1) {
                consecutive += 1;
            }
            prev_match = Some(idx);
            last = idx;
        }
        prev_hay = Some(ch);
    }

    if wanted.peek().is_some() {
        return None;
    }

    let first = first?;
    Some(SubsequenceStats {
        first,
        span: last.saturating_sub(first).saturating_add(1),
        consecutive,
        start_boundary,
    })
}

fn is_boundary_char(ch: char) -> bool {
    matches!(ch, '/' | ':' | '-' | '_' | ' ' | '(' | ',')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ranked_pages, regular_pattern, regular_score, subsequence_stats, SearchKind};
    use crate::model::catalog;

    fn names(query: &str, kind: SearchKind) -> Vec<&'static str> {
        ranked_pages(catalog(), query, kind).into_iter().map(|page| page.name).collect()
    }

    #[test]
    fn empty_query_keeps_catalog_order() {
        let all: Vec<_> = catalog().iter().map(|page| page.name).collect();
        assert_eq!(names("  ", SearchKind::Regular), all);
        assert_eq!(names("", SearchKind::Fuzzy), all);
    }

    #[rstest]
    #[case("sql", "SQL")]
    #[case("DIJK", "Dijkstra's Algorithm")]
    #[case("segment", "Segment Tree")]
    fn regular_search_ranks_name_match_first(#[case] query: &str, #[case] expected: &str) {
        assert_eq!(names(query, SearchKind::Regular).first().copied(), Some(expected));
    }

    #[test]
    fn regular_search_accepts_regex_and_falls_back_to_literal() {
        assert_eq!(names("^s(ql|egment)", SearchKind::Regular).len(), 2);
        assert!(names("(unclosed", SearchKind::Regular).is_empty());
    }

    #[test]
    fn regular_match_covering_whole_name_scores_highest() {
        let pattern = regular_pattern("s.l").expect("pattern");
        let whole = regular_score(&pattern, 3, "sql queries").expect("match");
        let prefix = regular_score(&pattern, 5, "sqlite files").expect("match");
        assert!(whole - prefix > 50_000);

        let pattern = regular_pattern("sql.*").expect("pattern");
        let spills_past_name = regular_score(&pattern, 3, "sql queries").expect("match");
        assert!(spills_past_name < whole);
    }

    #[test]
    fn fuzzy_search_matches_subsequences() {
        assert_eq!(names("sgtr", SearchKind::Fuzzy).first().copied(), Some("Segment Tree"));
        assert!(names("zzzz", SearchKind::Fuzzy).is_empty());
    }

    #[test]
    fn subsequence_stats_track_span_and_runs() {
        let stats = subsequence_stats("bfs", "breadth-first search").expect("match");
        assert_eq!(stats.first, 0);
        assert!(stats.start_boundary);
        assert_eq!(stats.span, 12);
        assert!(subsequence_stats("xyz", "breadth").is_none());
    }
}
