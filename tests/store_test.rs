//! Store behavior as seen through the trait object the commands use

mod common;

use common::evm_project;
use portfolio_evm::store::fixtures::demo_store;
use portfolio_evm::{evaluate_portfolio, Error, InMemoryStore, ProjectStore};
use pretty_assertions::assert_eq;

fn as_dyn(store: &mut InMemoryStore) -> &mut dyn ProjectStore {
    store
}

#[test]
fn edits_flow_into_the_next_evaluation() {
    let mut store = InMemoryStore::new();
    let store = as_dyn(&mut store);
    let id = store.create(evm_project("A", 100.0, 50.0, 40.0, 50.0)).unwrap();

    let config = portfolio_evm::PortfolioConfig::default();
    let before = store.load_all();
    assert_eq!(evaluate_portfolio(&before, &config.evm)[0].cpi(), 0.8);

    let mut edited = store.get(&id).unwrap().clone();
    edited.ac = 40.0;
    store.upsert(edited).unwrap();

    let after = store.load_all();
    assert_eq!(evaluate_portfolio(&after, &config.evm)[0].cpi(), 1.0);
    // The earlier snapshot is unaffected by the write
    assert_eq!(evaluate_portfolio(&before, &config.evm)[0].cpi(), 0.8);
}

#[test]
fn invalid_edit_lists_every_bad_field() {
    let mut store = demo_store().unwrap();
    let mut edited = store.get("2").unwrap().clone();
    edited.name.clear();
    edited.ac = -1.0;
    edited.design_percent = 140.0;

    let err = store.update(edited).unwrap_err();
    let mut fields: Vec<String> = err.field_errors().iter().map(|e| e.field.clone()).collect();
    fields.sort();
    assert_eq!(fields, vec!["ac", "designPercent", "name"]);
    assert_eq!(store.get("2").unwrap().ac, 2100.0);
}

#[test]
fn remove_then_lookup_fails() {
    let mut store = demo_store().unwrap();
    let removed = store.remove("4").unwrap();
    assert_eq!(removed.code, "PRJ-004");
    assert_eq!(store.len(), 4);
    assert!(store.find("PRJ-004").is_none());
    assert!(matches!(store.remove("4"), Err(Error::NotFound(_))));

    let err = store.upsert(removed).unwrap_err();
    assert!(matches!(err, Error::IdRetired(ref id) if id == "4"));
    assert_eq!(store.len(), 4);
}
