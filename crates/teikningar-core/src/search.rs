use std::cmp::Ordering;

use serde::Serialize;

use crate::models::AddressRecord;
use crate::text::{blueprint_count_label, normalize};

/// Splits a typed query into normalized tokens, dropping empty fragments.
#[must_use]
pub fn query_tokens(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(normalize)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Addresses containing every token of `query`, best match first.
///
/// A query without tokens is an inactive search and matches nothing.
/// Matches are ordered by where each token first occurs, compared token by
/// token in typed order; full ties fall back to the normalized address.
#[must_use]
pub fn search(addresses: &[AddressRecord], query: &str) -> Vec<AddressRecord> {
    search_tokens(addresses, &query_tokens(query))
}

fn search_tokens(addresses: &[AddressRecord], tokens: &[String]) -> Vec<AddressRecord> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut ranked = addresses
        .iter()
        .filter_map(|record| {
            match_positions(record.normalized_address(), tokens).map(|positions| (positions, record))
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|(a_pos, a), (b_pos, b)| rank_ordering(a_pos, a, b_pos, b));
    ranked.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Char offset of each token's first occurrence, or `None` when any token is
/// missing.
fn match_positions(haystack: &str, tokens: &[String]) -> Option<Vec<usize>> {
    tokens
        .iter()
        .map(|token| {
            haystack
                .find(token.as_str())
                .map(|byte_idx| haystack[..byte_idx].chars().count())
        })
        .collect()
}

fn rank_ordering(
    a_positions: &[usize],
    a: &AddressRecord,
    b_positions: &[usize],
    b: &AddressRecord,
) -> Ordering {
    a_positions
        .cmp(b_positions)
        .then_with(|| a.normalized_address().cmp(b.normalized_address()))
}

/// Owns the address list for the lifetime of a view and answers queries
/// against it.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    addresses: Vec<AddressRecord>,
}

impl SearchIndex {
    #[must_use]
    pub fn new(addresses: Vec<AddressRecord>) -> Self {
        Self { addresses }
    }

    #[must_use]
    pub fn addresses(&self) -> &[AddressRecord] {
        &self.addresses
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<AddressRecord> {
        search(&self.addresses, query)
    }

    #[must_use]
    pub fn page(&self, query: &str, limit: usize) -> SearchPage {
        let tokens = query_tokens(query);
        let results = search_tokens(&self.addresses, &tokens);
        SearchPage::from_results(results, limit, !tokens.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPageItem {
    pub address: String,
    pub count_label: String,
}

/// What the dropdown renders: the first `limit` matches and how many were
/// held back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub shown: Vec<SearchPageItem>,
    pub total: usize,
    pub remaining: usize,
    pub active: bool,
}

impl SearchPage {
    #[must_use]
    pub fn from_results(results: Vec<AddressRecord>, limit: usize, active: bool) -> Self {
        let total = results.len();
        let shown = results
            .into_iter()
            .take(limit)
            .map(|record| SearchPageItem {
                count_label: blueprint_count_label(record.blueprint_count()),
                address: record.address().to_string(),
            })
            .collect::<Vec<_>>();
        Self {
            remaining: total - shown.len(),
            shown,
            total,
            active,
        }
    }

    /// An active query that found nothing ("Fann engin heimilisföng").
    #[must_use]
    pub fn is_empty_match(&self) -> bool {
        self.active && self.total == 0
    }

    /// "og N til viðbótar" when matches were held back.
    #[must_use]
    pub fn remaining_label(&self) -> Option<String> {
        (self.remaining > 0).then(|| format!("og {} til viðbótar", self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<AddressRecord> {
        names
            .iter()
            .map(|name| AddressRecord::new(*name, 1, None))
            .collect()
    }

    fn names(results: &[AddressRecord]) -> Vec<&str> {
        results.iter().map(AddressRecord::address).collect()
    }

    #[test]
    fn empty_or_blank_query_is_inactive() {
        let addresses = records(&["Laugavegur", "Hverfisgata"]);
        assert!(search(&addresses, "").is_empty());
        assert!(search(&addresses, "   \t ").is_empty());
    }

    #[test]
    fn single_token_filters_and_ranks_ties_lexicographically() {
        let addresses = records(&["Laugavegur", "Laufásvegur", "Skólavörðustígur"]);
        let results = search(&addresses, "lau");
        assert_eq!(names(&results), vec!["Laufásvegur", "Laugavegur"]);
    }

    #[test]
    fn earlier_match_ranks_first() {
        let addresses = records(&["Efstaleiti 1", "Leifsgata 3", "Bleikargróf 2"]);
        let results = search(&addresses, "lei");
        assert_eq!(
            names(&results),
            vec!["Leifsgata 3", "Bleikargróf 2", "Efstaleiti 1"]
        );
    }

    #[test]
    fn all_tokens_are_required() {
        let addresses = records(&["Skólavörðustígur", "Laugavegur"]);
        let results = search(&addresses, "skóla stíg");
        assert_eq!(names(&results), vec!["Skólavörðustígur"]);
        assert!(search(&addresses, "lauga stíg").is_empty());
    }

    #[test]
    fn later_tokens_break_ties_of_earlier_ones() {
        let addresses = records(&["Hverfisgata 12", "Hverfisgata 112", "Hverfisgata 2"]);
        let results = search(&addresses, "hverfis 12");
        assert_eq!(names(&results), vec!["Hverfisgata 12", "Hverfisgata 112"]);
    }

    #[test]
    fn query_is_normalized_like_addresses() {
        let addresses = records(&["Þórsgata 1", "Tórsgata 1"]);
        assert_eq!(names(&search(&addresses, "THOR")), vec!["Þórsgata 1"]);
        assert_eq!(names(&search(&addresses, "þórs")), vec!["Þórsgata 1"]);
    }

    #[test]
    fn page_truncates_and_reports_remaining() {
        let index = SearchIndex::new(records(&[
            "Bergstaðastræti 1",
            "Bergstaðastræti 2",
            "Bergstaðastræti 3",
            "Bergstaðastræti 4",
        ]));
        let page = index.page("berg", 3);
        assert_eq!(page.shown.len(), 3);
        assert_eq!(page.total, 4);
        assert_eq!(page.remaining, 1);
        assert_eq!(page.remaining_label().as_deref(), Some("og 1 til viðbótar"));
        assert_eq!(page.shown[0].count_label, "1 teikning");
        assert!(!page.is_empty_match());
    }

    #[test]
    fn page_agrees_with_search_and_treats_blank_query_as_inactive() {
        let index = SearchIndex::new(records(&["Laugavegur 1", "Laufásvegur 7", "Lindargata 3"]));
        let page = index.page("lau", 5);
        let expected: Vec<String> = index
            .search("lau")
            .iter()
            .map(|record| record.address().to_string())
            .collect();
        let shown: Vec<String> = page.shown.iter().map(|item| item.address.clone()).collect();
        assert_eq!(shown, expected);
        assert!(page.active);

        let blank = index.page(" \t ", 5);
        assert!(!blank.active);
        assert_eq!(blank.total, 0);
    }

    #[test]
    fn page_distinguishes_no_match_from_inactive() {
        let index = SearchIndex::new(records(&["Laugavegur"]));
        let miss = index.page("xyz", 5);
        assert!(miss.is_empty_match());
        assert_eq!(miss.remaining_label(), None);

        let inactive = index.page("", 5);
        assert!(!inactive.active);
        assert!(!inactive.is_empty_match());
    }
}
