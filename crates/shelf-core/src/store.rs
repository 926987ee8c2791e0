//! Item Store
//!
//! Owns the ordered item list and keeps it identical to the persisted copy.
//! Every mutation writes the whole list back before returning; if that write
//! fails the mutation is undone so memory and storage never diverge.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::error::{ShelfError, ShelfResult};
use crate::item::Item;
use crate::storage::KeyValueStorage;

#[derive(Debug)]
pub struct ItemStore<S> {
    storage: S,
    key: String,
    items: Vec<Item>,
    /// Successful writes since opening
    revision: u64,
}

impl<S: KeyValueStorage> ItemStore<S> {
    /// Open the store, reading whatever list is persisted under `key`
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = read_items(&storage, &key);
        info!("Loaded {} items from '{}'", items.len(), key);
        Self { storage, key, items, revision: 0 }
    }

    /// Read the persisted list. Absent or malformed data yields an empty list.
    pub fn load(&self) -> Vec<Item> {
        read_items(&self.storage, &self.key)
    }

    /// Serialize the in-memory list and overwrite the persisted copy
    pub fn save(&mut self) -> ShelfResult<()> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.set(&self.key, &json)?;
        self.revision += 1;
        debug!("Saved {} items ({} bytes)", self.items.len(), json.len());
        Ok(())
    }

    /// Append an item, returning its index
    pub fn insert(&mut self, item: Item) -> ShelfResult<usize> {
        self.items.push(item);
        if let Err(e) = self.save() {
            self.items.pop();
            return Err(e);
        }
        Ok(self.items.len() - 1)
    }

    /// Replace the item at `index`, returning the previous one
    pub fn replace_at(&mut self, index: usize, item: Item) -> ShelfResult<Item> {
        self.check_index(index)?;
        let previous = std::mem::replace(&mut self.items[index], item);
        if let Err(e) = self.save() {
            self.items[index] = previous;
            return Err(e);
        }
        Ok(previous)
    }

    pub fn remove_at(&mut self, index: usize) -> ShelfResult<Item> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        if let Err(e) = self.save() {
            self.items.insert(index, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Move one item from `from` to `to`, shifting the ones in between by one slot
    pub fn move_to(&mut self, from: usize, to: usize) -> ShelfResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let moved = self.items.remove(from);
        self.items.insert(to, moved);
        if let Err(e) = self.save() {
            let moved = self.items.remove(to);
            self.items.insert(from, moved);
            return Err(e);
        }
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Changes whenever the persisted list does
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Id for a new item: the clock, bumped past any id already in the list
    pub fn next_id(&self, now_ms: u64) -> u64 {
        match self.items.iter().map(|i| i.id).max() {
            None => now_ms,
            Some(last) => match last.checked_add(1) {
                Some(after_last) => now_ms.max(after_last),
                None => self.first_free_id(now_ms),
            },
        }
    }

    /// Lowest unused id at or after `from`, wrapping around to zero
    fn first_free_id(&self, from: u64) -> u64 {
        let taken: HashSet<u64> = self.items.iter().map(|i| i.id).collect();
        (from..=u64::MAX)
            .chain(0..from)
            .find(|id| !taken.contains(id))
            .unwrap_or(from)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn check_index(&self, index: usize) -> ShelfResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ShelfError::IndexOutOfRange { index, len: self.items.len() })
        }
    }
}

fn read_items<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<Item> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Could not read '{}': {}", key, e);
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Item>>(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Ignoring malformed data under '{}': {}", key, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "itemsData";

    fn store_with(names: &[&str]) -> ItemStore<MemoryStorage> {
        let mut store = ItemStore::open(MemoryStorage::new(), KEY);
        for (i, name) in names.iter().enumerate() {
            store.insert(Item::new(i as u64 + 1, *name, format!("{} desc", name))).unwrap();
        }
        store
    }

    fn names(store: &ItemStore<MemoryStorage>) -> Vec<&str> {
        store.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_open_empty() {
        let store = ItemStore::open(MemoryStorage::new(), KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_data_is_empty() {
        for raw in ["not json", "null", "{\"id\":1}", "[{\"name\":\"x\"}]"] {
            let store = ItemStore::open(MemoryStorage::with_entry(KEY, raw), KEY);
            assert!(store.is_empty(), "expected empty list for {raw}");
        }
    }

    #[test]
    fn test_reads_existing_list() {
        let raw = r#"[{"id":1,"name":"A","description":"a","image":null},
                      {"id":2,"name":"B","description":"b","image":"data:image/png;base64,AA=="}]"#;
        let store = ItemStore::open(MemoryStorage::with_entry(KEY, raw), KEY);
        assert_eq!(names(&store), vec!["A", "B"]);
        assert_eq!(store.get(1).unwrap().image.as_deref(), Some("data:image/png;base64,AA=="));
    }

    #[test]
    fn test_every_mutation_round_trips() {
        let mut store = store_with(&["A", "B", "C"]);
        assert_eq!(store.load(), store.items());

        store.replace_at(1, Item::new(2, "B2", "changed")).unwrap();
        assert_eq!(store.load(), store.items());

        store.move_to(0, 2).unwrap();
        assert_eq!(store.load(), store.items());

        store.remove_at(0).unwrap();
        assert_eq!(store.load(), store.items());
        assert_eq!(names(&store), vec!["C", "A"]);
    }

    #[test]
    fn test_move_to_is_remove_then_insert() {
        let mut store = store_with(&["A", "B", "C"]);
        store.move_to(0, 2).unwrap();
        assert_eq!(names(&store), vec!["B", "C", "A"]);

        store.move_to(2, 0).unwrap();
        assert_eq!(names(&store), vec!["A", "B", "C"]);

        let mut store = store_with(&["A", "B", "C", "D"]);
        store.move_to(3, 1).unwrap();
        assert_eq!(names(&store), vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_out_of_range() {
        let mut store = store_with(&["A"]);
        assert!(matches!(
            store.remove_at(3),
            Err(ShelfError::IndexOutOfRange { index: 3, len: 1 })
        ));
        assert!(store.move_to(0, 1).is_err());
        assert!(store.replace_at(1, Item::new(9, "x", "y")).is_err());
        assert_eq!(names(&store), vec!["A"]);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut store = store_with(&["A", "B", "C"]);
        let before = store.items().to_vec();
        store.storage_mut().set_fail_writes(true);

        assert!(store.insert(Item::new(10, "D", "d")).is_err());
        assert!(store.replace_at(0, Item::new(1, "A2", "a")).is_err());
        assert!(store.remove_at(1).is_err());
        assert!(store.move_to(0, 2).is_err());

        assert_eq!(store.items(), before.as_slice());
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_next_id_is_unique() {
        let mut store = ItemStore::open(MemoryStorage::new(), KEY);
        assert_eq!(store.next_id(1000), 1000);
        store.insert(Item::new(1000, "A", "a")).unwrap();
        // Same millisecond
        assert_eq!(store.next_id(1000), 1001);
        assert_eq!(store.next_id(5000), 5000);
    }

    #[test]
    fn test_next_id_after_max_id() {
        let stored = format!(
            r#"[{{"id":{},"name":"Max","description":"m","image":null}},{{"id":1000,"name":"A","description":"a","image":null}}]"#,
            u64::MAX
        );
        let store = ItemStore::open(MemoryStorage::with_entry(KEY, &stored), KEY);
        assert_eq!(store.len(), 2);
        assert_eq!(store.next_id(1000), 1001);
        assert_eq!(store.next_id(7), 7);
        assert_eq!(store.next_id(u64::MAX), 0);
    }

    #[test]
    fn test_revision_counts_writes() {
        let mut store = store_with(&["A", "B"]);
        assert_eq!(store.revision(), 2);
        store.move_to(0, 0).unwrap();
        assert_eq!(store.revision(), 2);
        store.storage_mut().set_fail_writes(true);
        assert!(store.remove_at(0).is_err());
        assert_eq!(store.revision(), 2);
        store.storage_mut().set_fail_writes(false);
        store.remove_at(0).unwrap();
        assert_eq!(store.revision(), 3);
    }
}
