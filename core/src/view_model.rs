//! Serializable snapshot of the collection handed to templates.

use serde::Serialize;

use crate::collection::{Collection, Group};
use crate::due_date::DueDate;
use crate::types::Todo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub group: Group,
    pub title: String,
    /// Size of the current selection.
    pub data: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub due_date: String,
}

impl From<&Todo> for ItemView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            title: todo.title.clone(),
            completed: todo.completed,
            due_date: todo.due_date.label(),
        }
    }
}

/// One sidebar entry: a due-date label and how many items carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub current_section: SectionView,
    pub selected: Vec<ItemView>,
    pub todos_count: usize,
    pub done_count: usize,
    pub todos_by_date: Vec<GroupView>,
    pub done_todos_by_date: Vec<GroupView>,
}

impl ViewModel {
    pub fn from_collection(collection: &Collection) -> Self {
        let section = collection.section();
        Self {
            current_section: SectionView {
                group: section.group,
                title: section.title.clone(),
                data: collection.count(),
            },
            selected: collection.selected().into_iter().map(ItemView::from).collect(),
            todos_count: collection.len(),
            done_count: collection.done().len(),
            todos_by_date: groups(collection.by_date()),
            done_todos_by_date: groups(collection.done_by_date()),
        }
    }
}

fn groups(grouped: Vec<(DueDate, Vec<&Todo>)>) -> Vec<GroupView> {
    grouped
        .into_iter()
        .map(|(due, items)| GroupView {
            title: due.label(),
            count: items.len(),
        })
        .collect()
}
