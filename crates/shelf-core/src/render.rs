//! Table projection of the item list.

use crate::item::Item;

pub const NO_ITEMS_MESSAGE: &str = "No items yet. Add your first item above! 🚀";
pub const PLACEHOLDER_ICON: &str = "📷";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    /// Data URL of the stored image
    Image(String),
    Placeholder,
}

/// One rendered row, bound to the item's current index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub index: usize,
    pub id: u64,
    pub thumbnail: Thumbnail,
    pub name: String,
    pub description: String,
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    /// Single "no items" row
    Empty,
    Rows(Vec<RowView>),
}

impl TableView {
    pub fn rows(&self) -> &[RowView] {
        match self {
            TableView::Empty => &[],
            TableView::Rows(rows) => rows,
        }
    }
}

pub fn table_view(items: &[Item], editing: Option<usize>) -> TableView {
    if items.is_empty() {
        return TableView::Empty;
    }
    let rows = items
        .iter()
        .enumerate()
        .map(|(index, item)| RowView {
            index,
            id: item.id,
            thumbnail: match &item.image {
                Some(url) => Thumbnail::Image(url.clone()),
                None => Thumbnail::Placeholder,
            },
            name: item.name.clone(),
            description: item.description.clone(),
            editing: editing == Some(index),
        })
        .collect();
    TableView::Rows(rows)
}
