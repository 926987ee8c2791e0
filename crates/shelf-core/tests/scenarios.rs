//! End-to-end shelf scenarios driven through `Shelf::dispatch`.

use shelf_core::{
    FormDraft, FormMode, Item, ItemStore, KeyValueStorage, MemoryStorage, Outcome, Shelf,
    ShelfConfig, ShelfEvent, SubmitStep, TableView,
};

const PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAAB";

fn draft(name: &str, description: &str, new_image: bool) -> FormDraft {
    FormDraft {
        name: name.to_string(),
        description: description.to_string(),
        new_image,
    }
}

fn shelf_with(names: &[&str]) -> Shelf<MemoryStorage> {
    let mut shelf = Shelf::open(MemoryStorage::new(), &ShelfConfig::default());
    for (i, name) in names.iter().enumerate() {
        let step = shelf
            .begin_submit(draft(name, &format!("{name} desc"), false), 1000 + i as u64)
            .unwrap();
        assert!(matches!(step, SubmitStep::Saved(_)));
    }
    shelf
}

fn names(shelf: &Shelf<MemoryStorage>) -> Vec<String> {
    shelf.store().items().iter().map(|i| i.name.clone()).collect()
}

/// Reopen the persisted copy, as a page reload would
fn reload(shelf: &Shelf<MemoryStorage>) -> Vec<Item> {
    let config = ShelfConfig::default();
    ItemStore::open(shelf.store().storage().clone(), config.storage_key).items().to_vec()
}

#[test]
fn test_adds_get_unique_ids() {
    let mut shelf = Shelf::open(MemoryStorage::new(), &ShelfConfig::default());
    for i in 0..25 {
        // Every submit lands in the same millisecond
        shelf.begin_submit(draft(&format!("item {i}"), "d", false), 1_700_000_000_000).unwrap();
    }
    let mut ids: Vec<u64> = shelf.store().items().iter().map(|i| i.id).collect();
    assert_eq!(ids.len(), 25);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 25);
}

#[test]
fn test_move_first_to_last() {
    let mut shelf = shelf_with(&["A", "B", "C"]);
    let outcome = shelf.dispatch(ShelfEvent::Drop { from: 0, to: 2 }).unwrap();
    assert_eq!(outcome, Outcome::ListChanged);
    assert_eq!(names(&shelf), vec!["B", "C", "A"]);
    assert_eq!(reload(&shelf), shelf.store().items());
}

#[test]
fn test_edit_then_delete_earlier_item() {
    let mut shelf = shelf_with(&["A", "B", "C"]);
    assert_eq!(shelf.dispatch(ShelfEvent::Edit(1)).unwrap(), Outcome::EditStarted(1));

    shelf.dispatch(ShelfEvent::RequestDelete(0)).unwrap();
    assert!(shelf.deletion().is_open());
    assert_eq!(shelf.dispatch(ShelfEvent::ConfirmDelete).unwrap(), Outcome::ListChanged);

    assert_eq!(shelf.form().mode(), FormMode::Editing(0));
    assert_eq!(shelf.form().name(), "B");
    assert_eq!(shelf.form().description(), "B desc");
    assert!(!shelf.deletion().is_open());
    assert_eq!(names(&shelf), vec!["B", "C"]);
}

#[test]
fn test_edit_keeps_previous_image() {
    let mut shelf = Shelf::open(MemoryStorage::new(), &ShelfConfig::default());
    let SubmitStep::Decode(ticket) = shelf.begin_submit(draft("Lamp", "Desk lamp", true), 1).unwrap() else {
        panic!("expected a decode step");
    };
    shelf.finish_submit(ticket, PNG.to_string()).unwrap();

    shelf.dispatch(ShelfEvent::Edit(0)).unwrap();
    shelf.dispatch(ShelfEvent::NameChanged("Floor lamp".to_string())).unwrap();
    let form_name = shelf.form().name().to_string();
    let step = shelf.begin_submit(draft(&form_name, "Tall", false), 2).unwrap();

    assert_eq!(step, SubmitStep::Saved(0));
    let item = &shelf.store().items()[0];
    assert_eq!(item.name, "Floor lamp");
    assert_eq!(item.image.as_deref(), Some(PNG));
    assert_eq!(reload(&shelf)[0].image.as_deref(), Some(PNG));
}

#[test]
fn test_cancel_by_click_outside() {
    let mut shelf = shelf_with(&["A", "B"]);
    shelf.dispatch(ShelfEvent::RequestDelete(1)).unwrap();
    assert_eq!(shelf.dispatch(ShelfEvent::CancelDelete).unwrap(), Outcome::StateChanged);
    assert_eq!(shelf.dispatch(ShelfEvent::ConfirmDelete).unwrap(), Outcome::Noop);
    assert_eq!(names(&shelf), vec!["A", "B"]);
}

#[test]
fn test_drop_ignored_while_prompt_open() {
    let mut shelf = shelf_with(&["A", "B"]);
    shelf.dispatch(ShelfEvent::RequestDelete(0)).unwrap();
    assert_eq!(shelf.dispatch(ShelfEvent::Drop { from: 0, to: 1 }).unwrap(), Outcome::Noop);
    assert_eq!(names(&shelf), vec!["A", "B"]);
}

#[test]
fn test_reorder_while_decoding_updates_same_item() {
    let mut shelf = shelf_with(&["A", "B", "C"]);
    shelf.dispatch(ShelfEvent::Edit(0)).unwrap();
    let SubmitStep::Decode(ticket) = shelf.begin_submit(draft("A2", "new", true), 5).unwrap() else {
        panic!("expected a decode step");
    };

    shelf.dispatch(ShelfEvent::Drop { from: 0, to: 2 }).unwrap();
    let index = shelf.finish_submit(ticket, PNG.to_string()).unwrap();

    assert_eq!(index, 2);
    assert_eq!(names(&shelf), vec!["B", "C", "A2"]);
    assert_eq!(shelf.store().items()[2].id, 1000);
}

fn ids(shelf: &Shelf<MemoryStorage>) -> Vec<u64> {
    shelf.store().items().iter().map(|i| i.id).collect()
}

#[test]
fn test_edit_while_add_decodes_keeps_loaded_row() {
    let mut shelf = shelf_with(&["A", "B"]);
    let SubmitStep::Decode(ticket) = shelf.begin_submit(draft("New", "n", true), 100).unwrap() else {
        panic!("expected a decode step");
    };

    shelf.dispatch(ShelfEvent::Edit(0)).unwrap();
    let index = shelf.finish_submit(ticket, PNG.to_string()).unwrap();

    assert_eq!(index, 2);
    assert_eq!(names(&shelf), vec!["A", "B", "New"]);
    assert_eq!(ids(&shelf), vec![1000, 1001, 1002]);
    assert_eq!(shelf.form().mode(), FormMode::Editing(0));
    assert_eq!(shelf.form().name(), "A");
    assert_eq!(reload(&shelf), shelf.store().items());
}

#[test]
fn test_edit_other_row_while_edit_decodes() {
    let mut shelf = shelf_with(&["A", "B", "C"]);
    shelf.dispatch(ShelfEvent::Edit(0)).unwrap();
    let SubmitStep::Decode(ticket) = shelf.begin_submit(draft("A2", "new", true), 5).unwrap() else {
        panic!("expected a decode step");
    };

    shelf.dispatch(ShelfEvent::Edit(2)).unwrap();
    let index = shelf.finish_submit(ticket, PNG.to_string()).unwrap();

    assert_eq!(index, 0);
    assert_eq!(names(&shelf), vec!["A2", "B", "C"]);
    assert_eq!(ids(&shelf), vec![1000, 1001, 1002]);
    assert_eq!(shelf.store().items()[0].image.as_deref(), Some(PNG));
    assert_eq!(shelf.form().mode(), FormMode::Editing(2));
    assert_eq!(shelf.form().name(), "C");
}

#[test]
fn test_delete_earlier_row_while_decoding() {
    let mut shelf = shelf_with(&["A", "B", "C"]);
    shelf.dispatch(ShelfEvent::Edit(2)).unwrap();
    let SubmitStep::Decode(ticket) = shelf.begin_submit(draft("C2", "c", true), 5).unwrap() else {
        panic!("expected a decode step");
    };

    shelf.dispatch(ShelfEvent::RequestDelete(0)).unwrap();
    assert_eq!(shelf.dispatch(ShelfEvent::ConfirmDelete).unwrap(), Outcome::ListChanged);
    let index = shelf.finish_submit(ticket, PNG.to_string()).unwrap();

    assert_eq!(index, 1);
    assert_eq!(names(&shelf), vec!["B", "C2"]);
    assert_eq!(ids(&shelf), vec![1001, 1002]);
    assert_eq!(shelf.form().mode(), FormMode::Idle);
    assert_eq!(reload(&shelf), shelf.store().items());
}

#[test]
fn test_delete_edited_row_while_decoding_appends() {
    let mut shelf = shelf_with(&["A", "B"]);
    shelf.dispatch(ShelfEvent::Edit(1)).unwrap();
    let SubmitStep::Decode(ticket) = shelf.begin_submit(draft("B2", "b", true), 5).unwrap() else {
        panic!("expected a decode step");
    };

    shelf.dispatch(ShelfEvent::RequestDelete(1)).unwrap();
    shelf.dispatch(ShelfEvent::ConfirmDelete).unwrap();
    assert_eq!(shelf.form().mode(), FormMode::Idle);
    let index = shelf.finish_submit(ticket, PNG.to_string()).unwrap();

    assert_eq!(index, 1);
    assert_eq!(names(&shelf), vec!["A", "B2"]);
    assert_eq!(ids(&shelf), vec![1000, 1001]);
}

#[test]
fn test_table_view_tracks_state() {
    let mut shelf = Shelf::open(MemoryStorage::new(), &ShelfConfig::default());
    assert_eq!(shelf.table_view(), TableView::Empty);

    shelf.begin_submit(draft("A", "a", false), 1).unwrap();
    shelf.begin_submit(draft("B", "b", false), 2).unwrap();
    shelf.dispatch(ShelfEvent::Edit(1)).unwrap();

    let view = shelf.table_view();
    let editing: Vec<bool> = view.rows().iter().map(|r| r.editing).collect();
    assert_eq!(editing, vec![false, true]);
}

#[test]
fn test_persisted_under_configured_key() {
    let config = ShelfConfig {
        storage_key: "shelf-test".to_string(),
        ..ShelfConfig::default()
    };
    let mut shelf = Shelf::open(MemoryStorage::new(), &config);
    shelf.begin_submit(draft("A", "a", false), 1).unwrap();

    let storage = shelf.store().storage();
    assert!(storage.get("shelf-test").unwrap().is_some());
    assert!(storage.get("itemsData").unwrap().is_none());
}
