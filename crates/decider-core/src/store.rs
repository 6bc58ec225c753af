//! The central store for decision lists and selection history.
//!
//! `DecisionStore` owns both collections, is their sole mutator, and persists
//! the touched collection through its [`KeyValueStorage`] backend before every
//! mutating operation returns. The UI layer holds a handle to one store
//! instance and never reaches storage directly.

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::codec;
use crate::history::SelectionRecord;
use crate::list::DecisionList;
use crate::storage::KeyValueStorage;

/// The owning component for decision lists and selection history.
///
/// All operations are synchronous and run to completion on the caller's
/// thread; the store assumes a single logical caller at a time. Construct one
/// instance at startup and pass it by reference to whatever needs it.
///
/// Persistence failures never surface through the mutation API: a mutation
/// that cannot be written durably is kept in memory and logged. Missing or
/// undecodable stored data loads as empty collections, indistinguishable from
/// a first launch.
///
/// # Example
///
/// ```
/// use decider_core::storage::MemoryStorage;
/// use decider_core::store::DecisionStore;
///
/// let mut store = DecisionStore::new(MemoryStorage::new());
/// let id = store.add_list("Dinner").id;
/// store.add_item(id, "Pizza");
/// store.record_selection("Dinner", "Pizza");
/// assert_eq!(store.history()[0].selected_item, "Pizza");
/// ```
pub struct DecisionStore {
    storage: Box<dyn KeyValueStorage>,
    lists: Vec<DecisionList>,
    /// Kept sorted newest-first at all times.
    history: Vec<SelectionRecord>,
    /// Bumped on every effective mutation; collaborators poll it to refresh.
    revision: u64,
}

impl DecisionStore {
    const LISTS_KEY: &'static str = "decision_lists";
    const HISTORY_KEY: &'static str = "selection_history";

    /// Creates a store and loads both collections from `storage`.
    ///
    /// Absent or undecodable data resolves to an empty collection. Loaded
    /// history is re-sorted newest-first in case the backing bytes were
    /// produced out of order.
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        let storage: Box<dyn KeyValueStorage> = Box::new(storage);
        let lists = Self::load_collection(storage.as_ref(), Self::LISTS_KEY);
        let mut history: Vec<SelectionRecord> =
            Self::load_collection(storage.as_ref(), Self::HISTORY_KEY);
        history.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

        Self {
            storage,
            lists,
            history,
            revision: 0,
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// All lists, in insertion order.
    pub fn lists(&self) -> &[DecisionList] {
        &self.lists
    }

    /// Looks up a list by id.
    pub fn list(&self, id: Uuid) -> Option<&DecisionList> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// All selection records, newest first.
    pub fn history(&self) -> &[SelectionRecord] {
        &self.history
    }

    /// Monotonic change counter.
    ///
    /// Bumped once per effective mutation; a collaborator that cached a
    /// previous value can poll this to learn whether to re-render.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ------------------------------------------------------------------
    // List mutations
    // ------------------------------------------------------------------

    /// Creates a new list with the given title and appends it.
    ///
    /// The list starts with a fresh id, no items, and the current time.
    pub fn add_list(&mut self, title: impl Into<String>) -> &DecisionList {
        self.lists.push(DecisionList::new(title));
        self.touch();
        self.persist_lists();
        // Safe to unwrap because we just pushed an element
        self.lists.last().unwrap()
    }

    /// Replaces the stored list whose id matches `list`.
    ///
    /// An unknown id is a silent no-op; callers that edited a stale copy of a
    /// deleted list simply lose the edit.
    pub fn update_list(&mut self, list: DecisionList) {
        match self.lists.iter_mut().find(|l| l.id == list.id) {
            Some(slot) => {
                *slot = list;
                self.touch();
                self.persist_lists();
            }
            None => {
                tracing::debug!(id = %list.id, "update_list: unknown list id, ignoring");
            }
        }
    }

    /// Removes the list with the given id. Unknown ids are ignored.
    pub fn delete_list(&mut self, id: Uuid) {
        let before = self.lists.len();
        self.lists.retain(|l| l.id != id);
        if self.lists.len() == before {
            tracing::debug!(%id, "delete_list: unknown list id, ignoring");
            return;
        }
        self.touch();
        self.persist_lists();
    }

    /// Appends an option to the list with the given id.
    ///
    /// Unknown ids are ignored.
    pub fn add_item(&mut self, list_id: Uuid, item: impl Into<String>) {
        match self.lists.iter_mut().find(|l| l.id == list_id) {
            Some(list) => {
                list.push_item(item);
                self.touch();
                self.persist_lists();
            }
            None => {
                tracing::debug!(id = %list_id, "add_item: unknown list id, ignoring");
            }
        }
    }

    /// Removes the option at `index` from the list with the given id.
    ///
    /// Unknown ids and out-of-range indices are ignored.
    pub fn delete_item(&mut self, list_id: Uuid, index: usize) {
        match self.lists.iter_mut().find(|l| l.id == list_id) {
            Some(list) => {
                if index >= list.items.len() {
                    tracing::debug!(
                        id = %list_id,
                        index,
                        len = list.items.len(),
                        "delete_item: index out of range, ignoring"
                    );
                    return;
                }
                list.remove_item(index);
                self.touch();
                self.persist_lists();
            }
            None => {
                tracing::debug!(id = %list_id, "delete_item: unknown list id, ignoring");
            }
        }
    }

    // ------------------------------------------------------------------
    // History mutations
    // ------------------------------------------------------------------

    /// Records one completed selection.
    ///
    /// `list_title` is copied as-is: it is the caller's snapshot of the list
    /// title at selection time. The store never picks an item itself — the
    /// caller chooses (see [`crate::selection::pick_uniform`]) and reports
    /// the result here. Guarding against picking from an empty list is the
    /// caller's job too; by the time this is called the choice already
    /// happened.
    pub fn record_selection(&mut self, list_title: &str, selected_item: &str) -> &SelectionRecord {
        let record = SelectionRecord::new(list_title, selected_item);
        // Newest first: fresh records go to the front.
        self.history.insert(0, record);
        self.touch();
        self.persist_history();
        &self.history[0]
    }

    /// Removes every selection record. Lists are unaffected.
    pub fn clear_history(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.history.clear();
        self.touch();
        self.persist_history();
    }

    // ------------------------------------------------------------------
    // Persistence plumbing
    // ------------------------------------------------------------------

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn load_collection<T: DeserializeOwned>(storage: &dyn KeyValueStorage, key: &str) -> Vec<T> {
        let bytes = match storage.read(key) {
            Ok(Some(bytes)) => bytes,
            // Never written: the first-launch case, not an error.
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key, %err, "failed to read stored collection, starting empty");
                return Vec::new();
            }
        };

        match codec::decode(&bytes) {
            Ok(collection) => collection,
            Err(err) => {
                tracing::warn!(key, %err, "failed to decode stored collection, starting empty");
                Vec::new()
            }
        }
    }

    fn persist_lists(&mut self) {
        Self::persist_collection(self.storage.as_mut(), Self::LISTS_KEY, &self.lists);
    }

    fn persist_history(&mut self) {
        Self::persist_collection(self.storage.as_mut(), Self::HISTORY_KEY, &self.history);
    }

    /// Writes one collection durably. A failed encode leaves the previously
    /// persisted bytes untouched; a failed write keeps the mutation in memory
    /// only. Neither surfaces to the caller.
    fn persist_collection<T: Serialize>(
        storage: &mut dyn KeyValueStorage,
        key: &str,
        collection: &[T],
    ) {
        let bytes = match codec::encode(collection) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key, %err, "failed to encode collection, keeping in memory only");
                return;
            }
        };
        if let Err(err) = storage.write(key, &bytes) {
            tracing::warn!(key, %err, "failed to persist collection, keeping in memory only");
        }
    }
}
