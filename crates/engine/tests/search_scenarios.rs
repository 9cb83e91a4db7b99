//! Integration tests for the search core.
//!
//! These run the full engine (standard pipeline, sort, bookmark
//! decoration) against the seed catalog, covering the observable contract
//! end to end.

use catalog::{JobId, seed_postings};
use engine::SearchEngine;
use query::{QueryState, SortKey};
use std::collections::HashSet;

fn ids(matches: &[engine::JobMatch]) -> Vec<JobId> {
    matches.iter().map(|m| m.posting.id).collect()
}

fn no_bookmarks() -> HashSet<JobId> {
    HashSet::new()
}

#[test]
fn unconstrained_query_returns_full_catalog_in_feed_order() {
    let engine = SearchEngine::new();
    let matches = engine
        .search(seed_postings(), &QueryState::new(), &no_bookmarks())
        .unwrap();

    assert_eq!(ids(&matches), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(matches.iter().all(|m| !m.bookmarked));
}

#[test]
fn role_filter_selects_exact_category() {
    let engine = SearchEngine::new();
    let mut query = QueryState::new();
    query.role = "Manager".to_string();

    let matches = engine
        .search(seed_postings(), &query, &no_bookmarks())
        .unwrap();
    assert_eq!(ids(&matches), vec![3, 6]);
}

#[test]
fn two_posting_role_scenario() {
    // Two engineers and a manager; role=Engineer keeps only the engineers.
    let catalog: Vec<_> = seed_postings().into_iter().take(3).collect();
    let mut query = QueryState::new();
    query.role = "Engineer".to_string();

    let matches = SearchEngine::new()
        .search(catalog, &query, &no_bookmarks())
        .unwrap();
    assert_eq!(ids(&matches), vec![1, 2]);
}

#[test]
fn bookmark_state_is_denormalized_onto_results() {
    let bookmarks: HashSet<JobId> = [2].into_iter().collect();
    let catalog: Vec<_> = seed_postings().into_iter().take(2).collect();

    let matches = SearchEngine::new()
        .search(catalog, &QueryState::new(), &bookmarks)
        .unwrap();
    assert!(!matches[0].bookmarked);
    assert!(matches[1].bookmarked);
}

#[test]
fn lowercase_keyword_matches_mixed_case_skill() {
    let mut query = QueryState::new();
    query.keyword = "react".to_string();

    let matches = SearchEngine::new()
        .search(seed_postings(), &query, &no_bookmarks())
        .unwrap();
    // "React" appears in the skills of postings 1 and 4.
    assert_eq!(ids(&matches), vec![1, 4]);
}

#[test]
fn keyword_matches_title_substring() {
    let mut query = QueryState::new();
    query.keyword = "engineer".to_string();

    let matches = SearchEngine::new()
        .search(seed_postings(), &query, &no_bookmarks())
        .unwrap();
    for m in &matches {
        let title = m.posting.title.to_lowercase();
        let skills = m.posting.skills.join(" ").to_lowercase();
        assert!(title.contains("engineer") || skills.contains("engineer"));
    }
    assert!(matches.iter().any(|m| m.posting.id == 1));
}

#[test]
fn date_sort_is_non_increasing() {
    let mut query = QueryState::new();
    query.advanced.sort = SortKey::Date;

    let matches = SearchEngine::new()
        .search(seed_postings(), &query, &no_bookmarks())
        .unwrap();
    assert_eq!(matches.len(), 8);
    assert!(
        matches
            .windows(2)
            .all(|w| w[0].posting.posted >= w[1].posting.posted)
    );
}

#[test]
fn company_sort_is_non_decreasing() {
    let mut query = QueryState::new();
    query.advanced.sort = SortKey::Company;

    let matches = SearchEngine::new()
        .search(seed_postings(), &query, &no_bookmarks())
        .unwrap();
    assert!(
        matches
            .windows(2)
            .all(|w| w[0].posting.company <= w[1].posting.company)
    );
}

#[test]
fn location_and_band_filters_compose() {
    let mut query = QueryState::new();
    query.location = "remote".to_string();
    query.salary_band = "$100k+".to_string();

    let matches = SearchEngine::new()
        .search(seed_postings(), &query, &no_bookmarks())
        .unwrap();
    // Posting 1 is the only $100k+ posting located "Remote".
    assert_eq!(ids(&matches), vec![1]);
}

#[test]
fn skills_filter_excludes_disjoint_postings() {
    let mut query = QueryState::new();
    query.advanced.skills = vec!["Figma".to_string()];

    let matches = SearchEngine::new()
        .search(seed_postings(), &query, &no_bookmarks())
        .unwrap();
    assert_eq!(ids(&matches), vec![5]);
}

#[test]
fn salary_min_filters_on_head_key() {
    let mut query = QueryState::new();
    query.advanced.salary_min = "120".to_string();

    let matches = SearchEngine::new()
        .search(seed_postings(), &query, &no_bookmarks())
        .unwrap();
    // Head keys per seed posting: 100, 120, 951, 140, 801, 180, 110, 125.
    assert_eq!(ids(&matches), vec![2, 3, 4, 5, 6, 8]);
}

#[test]
fn salary_sort_orders_by_head_key() {
    let mut query = QueryState::new();
    query.advanced.sort = SortKey::SalaryHigh;

    let matches = SearchEngine::new()
        .search(seed_postings(), &query, &no_bookmarks())
        .unwrap();
    // Head keys descending: 951 (#3), 801 (#5), 180 (#6), 140 (#4),
    // 125 (#8), 120 (#2), 110 (#7), 100 (#1).
    assert_eq!(ids(&matches), vec![3, 5, 6, 4, 8, 2, 7, 1]);
}

#[test]
fn filters_apply_before_sort() {
    let mut query = QueryState::new();
    query.role = "Engineer".to_string();
    query.advanced.sort = SortKey::Date;

    let matches = SearchEngine::new()
        .search(seed_postings(), &query, &no_bookmarks())
        .unwrap();
    // Engineers sorted by date descending: 13th, 12th, 10th, 7th, 6th.
    assert_eq!(ids(&matches), vec![4, 2, 1, 7, 8]);
}
