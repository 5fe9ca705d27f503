use audience_core::{Catalog, MatchKind, Scorer, SelectionStore, SubItem, Topic};

fn topic(id: &str, name: &str, sub_items: &[&str]) -> Topic {
    Topic::new(
        id,
        name,
        sub_items
            .iter()
            .enumerate()
            .map(|(index, item)| SubItem::new(format!("{id}c{index}"), *item, true))
            .collect(),
    )
}

fn assert_descending_with_top_one(results: &[Topic]) {
    if let Some(first) = results.first() {
        assert_eq!(first.similarity, Some(1.0));
    }
    for pair in results.windows(2) {
        let left = pair[0].similarity.unwrap();
        let right = pair[1].similarity.unwrap();
        assert!(left > right, "{left} should be greater than {right}");
    }
}

#[test]
fn shorter_name_containing_query_ranks_first() {
    let catalog = Catalog::new(vec![
        topic("h", "Healthcare Technology", &[]),
        topic("f", "Fintech", &[]),
        topic("d", "DeFi", &[]),
    ])
    .unwrap();
    let mut store = SelectionStore::new(catalog);

    store.set_query("tech");

    let ids: Vec<&str> = store.search_results().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["f", "h"]);
    assert!(store.search_results()[0].similarity >= store.search_results()[1].similarity);
    assert_descending_with_top_one(store.search_results());
}

#[test]
fn exact_name_beats_substring_and_sub_item_matches() {
    let catalog = Catalog::new(vec![
        topic("s", "Hosting", &["Cloud"]),
        topic("n", "Cloud computing", &[]),
        topic("e", "Cloud", &[]),
        topic("x", "Unrelated", &["Nothing"]),
    ])
    .unwrap();
    let mut store = SelectionStore::new(catalog);

    store.set_query("  CLOUD ");

    let ids: Vec<&str> = store.search_results().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["e", "n", "s"]);
    assert_descending_with_top_one(store.search_results());
    assert!((store.search_results()[2].similarity.unwrap() - 0.2).abs() < 1e-9);
}

#[test]
fn blank_query_lists_everything_in_catalog_order_with_strict_decrease() {
    let catalog = Catalog::builtin();
    let mut store = SelectionStore::new(catalog.clone());

    store.set_query("   ");

    assert_eq!(store.search_results().len(), catalog.len());
    for (ranked, original) in store.search_results().iter().zip(catalog.topics()) {
        assert_eq!(ranked.id, original.id);
    }
    assert_descending_with_top_one(store.search_results());
    let last = store.search_results().last().unwrap();
    assert!((last.similarity.unwrap() - 0.2).abs() < 1e-9);
}

#[test]
fn equal_raw_scores_keep_catalog_order() {
    let catalog = Catalog::new(vec![
        topic("b", "Beta", &["Shared"]),
        topic("a", "Alpha", &["Shared"]),
    ])
    .unwrap();
    let mut store = SelectionStore::new(catalog);

    store.set_query("shared");

    let ids: Vec<&str> = store.search_results().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_descending_with_top_one(store.search_results());
}

#[test]
fn builtin_query_ranks_name_matches_above_sub_item_matches() {
    let scorer = Scorer::default();
    let catalog = Catalog::builtin();
    let ranked = scorer.rank("bank", catalog.topics());

    assert_eq!(ranked.len(), 6);
    assert_descending_with_top_one(&ranked);

    let kinds: Vec<MatchKind> = ranked
        .iter()
        .map(|topic| scorer.score("bank", topic).unwrap().kind)
        .collect();
    let first_sub_item = kinds
        .iter()
        .position(|kind| *kind == MatchKind::SubItem)
        .unwrap();
    assert_eq!(first_sub_item, 3);
    assert!(kinds[..first_sub_item]
        .iter()
        .all(|kind| *kind == MatchKind::NameSubstring || *kind == MatchKind::ExactName));
    assert!(kinds[first_sub_item..]
        .iter()
        .all(|kind| *kind == MatchKind::SubItem));
}

#[test]
fn query_without_matches_yields_empty_results() {
    let mut store = SelectionStore::new(Catalog::builtin());
    store.set_query("no topic is called this");
    assert!(store.search_results().is_empty());
}

#[test]
fn catalog_entries_stay_unscored() {
    let mut store = SelectionStore::new(Catalog::builtin());
    store.set_query("bank");
    assert!(store
        .catalog()
        .topics()
        .iter()
        .all(|topic| topic.similarity.is_none()));
}
