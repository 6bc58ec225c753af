//! End-to-end tests: `DecisionStore` persisting through `FileKeyValueStorage`.

use decider_core::store::DecisionStore;
use tempfile::TempDir;

use crate::file_storage::FileKeyValueStorage;

fn store_at(dir: &TempDir) -> DecisionStore {
    DecisionStore::new(FileKeyValueStorage::with_base_dir(dir.path()))
}

#[test]
fn test_collections_survive_a_process_restart() {
    let dir = TempDir::new().unwrap();

    let (lists, history) = {
        let mut store = store_at(&dir);
        let id = store.add_list("Movies").id;
        store.add_item(id, "Inception");
        store.add_item(id, "Dune");
        store.record_selection("Movies", "Dune");
        (store.lists().to_vec(), store.history().to_vec())
    };

    // A fresh store over the same directory plays the role of a new process.
    let reloaded = store_at(&dir);
    assert_eq!(reloaded.lists(), &lists[..]);
    assert_eq!(reloaded.history(), &history[..]);
    assert_eq!(reloaded.lists()[0].items, vec!["Inception", "Dune"]);
}

#[test]
fn test_first_launch_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_at(&dir);
    assert!(store.lists().is_empty());
    assert!(store.history().is_empty());
}

#[test]
fn test_corrupt_lists_file_loads_empty_and_is_replaced_on_next_save() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("decision_lists.json"), b"<<garbage>>").unwrap();

    let mut store = store_at(&dir);
    assert!(store.lists().is_empty());

    store.add_list("Recovered");

    let reloaded = store_at(&dir);
    assert_eq!(reloaded.lists().len(), 1);
    assert_eq!(reloaded.lists()[0].title, "Recovered");
}

#[test]
fn test_corrupt_history_does_not_affect_lists() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = store_at(&dir);
        store.add_list("Movies");
    }
    std::fs::write(dir.path().join("selection_history.json"), b"not json").unwrap();

    let store = store_at(&dir);
    assert_eq!(store.lists().len(), 1);
    assert!(store.history().is_empty());
}

#[test]
fn test_persisted_blobs_are_self_describing_json() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = store_at(&dir);
        let id = store.add_list("Dinner").id;
        store.add_item(id, "Pizza");
        store.record_selection("Dinner", "Pizza");
    }

    let lists: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("decision_lists.json")).unwrap())
            .unwrap();
    assert_eq!(lists[0]["title"], "Dinner");
    assert_eq!(lists[0]["items"][0], "Pizza");
    assert!(uuid::Uuid::parse_str(lists[0]["id"].as_str().unwrap()).is_ok());

    let history: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("selection_history.json")).unwrap())
            .unwrap();
    assert_eq!(history[0]["listTitle"], "Dinner");
    assert_eq!(history[0]["selectedItem"], "Pizza");
}
