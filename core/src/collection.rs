//! In-memory todo state and its derived views.
//!
//! # Design
//! `Collection` owns the item sequence and the current [`Section`]. Every
//! mutation runs [`Collection::recompute`], which rebuilds the derived
//! indexes from scratch in a fixed order:
//!
//! 1. stable-sort all items by due date,
//! 2. collect the completed subset,
//! 3. group all items and the completed subset by due date,
//! 4. select the subset named by the current section,
//! 5. stable-sort the selection so completed items come last.
//!
//! Indexes store positions into `items`, so they are only valid until the
//! next mutation, which always recomputes them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::due_date::DueDate;
use crate::types::{Todo, TodoId, TodoPatch};

pub const ALL_TODOS: &str = "All Todos";
pub const COMPLETED: &str = "Completed";

/// Which half of the sidebar a section belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    AllItems,
    CompletedItems,
}

impl Group {
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::AllItems => "all_items",
            Group::CompletedItems => "completed_items",
        }
    }

    /// Title that selects the whole group rather than one due date.
    pub fn fixed_title(&self) -> &'static str {
        match self {
            Group::AllItems => ALL_TODOS,
            Group::CompletedItems => COMPLETED,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all_items" => Ok(Group::AllItems),
            "completed_items" => Ok(Group::CompletedItems),
            other => Err(format!("unknown group: {other}")),
        }
    }
}

/// The active filter: a group plus either its fixed title or a due-date
/// label. A label with no matching group selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub group: Group,
    pub title: String,
}

impl Section {
    pub fn new(group: Group, title: impl Into<String>) -> Self {
        Self {
            group,
            title: title.into(),
        }
    }

    pub fn all_todos() -> Self {
        Self::new(Group::AllItems, ALL_TODOS)
    }

    pub fn completed() -> Self {
        Self::new(Group::CompletedItems, COMPLETED)
    }

    pub fn is_whole_group(&self) -> bool {
        self.title == self.group.fixed_title()
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::all_todos()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Collection {
    items: Vec<Todo>,
    section: Section,
    done: Vec<usize>,
    by_date: BTreeMap<DueDate, Vec<usize>>,
    done_by_date: BTreeMap<DueDate, Vec<usize>>,
    selected: Vec<usize>,
}

impl Collection {
    /// Take ownership of freshly fetched items, derive their due dates, and
    /// select "All Todos".
    pub fn new(items: Vec<Todo>) -> Self {
        let mut collection = Self {
            items,
            ..Self::default()
        };
        for todo in &mut collection.items {
            todo.refresh_due_date();
        }
        collection.recompute();
        collection
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id.as_str() == id.as_str())
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    /// Number of items in the current selection.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected(&self) -> Vec<&Todo> {
        self.resolve(&self.selected)
    }

    pub fn done(&self) -> Vec<&Todo> {
        self.resolve(&self.done)
    }

    /// All items grouped by due date, groups in date order.
    pub fn by_date(&self) -> Vec<(DueDate, Vec<&Todo>)> {
        self.resolve_groups(&self.by_date)
    }

    /// Completed items grouped by due date, groups in date order.
    pub fn done_by_date(&self) -> Vec<(DueDate, Vec<&Todo>)> {
        self.resolve_groups(&self.done_by_date)
    }

    /// Append a server-confirmed item and reset the section to "All Todos".
    pub fn insert(&mut self, mut todo: Todo) {
        todo.refresh_due_date();
        self.items.push(todo);
        self.section = Section::all_todos();
        self.recompute();
    }

    /// Drop every item whose id matches. Returns whether anything was removed.
    pub fn remove(&mut self, id: &TodoId) -> bool {
        let before = self.items.len();
        self.items.retain(|todo| todo.id.as_str() != id.as_str());
        let removed = self.items.len() != before;
        self.recompute();
        removed
    }

    /// Merge a server-confirmed patch onto the local item in place. Returns
    /// `false` when the item is no longer present, leaving state untouched.
    pub fn merge(&mut self, id: &TodoId, patch: TodoPatch) -> bool {
        let Some(todo) = self
            .items
            .iter_mut()
            .find(|todo| todo.id.as_str() == id.as_str())
        else {
            return false;
        };
        todo.merge(patch);
        todo.refresh_due_date();
        self.recompute();
        true
    }

    /// Change the filter without touching the items or the groupings.
    pub fn set_section(&mut self, section: Section) {
        self.section = section;
        self.select();
    }

    pub fn recompute(&mut self) {
        self.items.sort_by_key(|todo| todo.due_date);

        self.done = (0..self.items.len())
            .filter(|&index| self.items[index].completed)
            .collect();

        self.by_date = group_by_date(&self.items, 0..self.items.len());
        self.done_by_date = group_by_date(&self.items, self.done.iter().copied());

        self.select();
    }

    fn select(&mut self) {
        let source: Vec<usize> = match (self.section.group, self.section.is_whole_group()) {
            (Group::AllItems, true) => (0..self.items.len()).collect(),
            (Group::CompletedItems, true) => self.done.clone(),
            (group, false) => {
                let groups = match group {
                    Group::AllItems => &self.by_date,
                    Group::CompletedItems => &self.done_by_date,
                };
                DueDate::parse_label(&self.section.title)
                    .and_then(|due| groups.get(&due))
                    .cloned()
                    .unwrap_or_default()
            }
        };
        self.selected = source;

        let items = &self.items;
        self.selected.sort_by_key(|&index| items[index].completed);
    }

    fn resolve(&self, indexes: &[usize]) -> Vec<&Todo> {
        indexes.iter().map(|&index| &self.items[index]).collect()
    }

    fn resolve_groups(&self, groups: &BTreeMap<DueDate, Vec<usize>>) -> Vec<(DueDate, Vec<&Todo>)> {
        groups
            .iter()
            .map(|(due, indexes)| (*due, self.resolve(indexes)))
            .collect()
    }
}

fn group_by_date(items: &[Todo], indexes: impl Iterator<Item = usize>) -> BTreeMap<DueDate, Vec<usize>> {
    let mut groups: BTreeMap<DueDate, Vec<usize>> = BTreeMap::new();
    for index in indexes {
        groups.entry(items[index].due_date).or_default().push(index);
    }
    groups
}
