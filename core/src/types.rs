//! Wire DTOs for the `/api/todos` resource.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. The derived
//! `due_date` lives on [`Todo`] for local use only and is skipped by serde,
//! and the request payloads have no such field, so it never reaches the
//! server.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::due_date::{DueDate, UNSET_DAY, UNSET_MONTH, UNSET_YEAR};

/// Server-assigned identifier. Opaque to the client and compared as a string;
/// the wire may carry it as a JSON string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for TodoId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => TodoId(text),
            RawId::Number(number) => TodoId(number.to_string()),
        })
    }
}

fn unset_day() -> String {
    UNSET_DAY.to_string()
}

fn unset_month() -> String {
    UNSET_MONTH.to_string()
}

fn unset_year() -> String {
    UNSET_YEAR.to_string()
}

/// A single todo item as held by the collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "unset_day")]
    pub day: String,
    #[serde(default = "unset_month")]
    pub month: String,
    #[serde(default = "unset_year")]
    pub year: String,
    /// Derived from `month`/`year`; refresh with [`Todo::refresh_due_date`]
    /// after any change to those fields.
    #[serde(skip)]
    pub due_date: DueDate,
}

impl Todo {
    pub fn refresh_due_date(&mut self) {
        self.due_date = DueDate::from_parts(&self.month, &self.year);
    }

    /// Overwrite every field present in `patch`, leaving the rest untouched.
    /// Does not refresh `due_date`.
    pub fn merge(&mut self, patch: TodoPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(day) = patch.day {
            self.day = day;
        }
        if let Some(month) = patch.month {
            self.month = month;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
    }
}

/// An update response decoded key by key. Keys absent from the JSON stay
/// `None`, so merging it preserves whatever the client already had.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPatch {
    #[serde(default)]
    pub id: Option<TodoId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default = "unset_day")]
    pub day: String,
    #[serde(default = "unset_month")]
    pub month: String,
    #[serde(default = "unset_year")]
    pub year: String,
    #[serde(default)]
    pub completed: bool,
}

impl CreateTodo {
    /// A new, incomplete todo with no due date.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            day: unset_day(),
            month: unset_month(),
            year: unset_year(),
            completed: false,
        }
    }
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl UpdateTodo {
    /// Payload that only flips the completion flag.
    pub fn completion(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}
