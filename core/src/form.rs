//! The add/edit form: field state, validation, and payload building.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::due_date::{UNSET_DAY, UNSET_MONTH, UNSET_YEAR};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

pub const MIN_TITLE_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Day,
    Month,
    Year,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Day => "day",
            FormField::Month => "month",
            FormField::Year => "year",
        }
    }

    /// Label of the unselected option of a date select.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Title => "",
            FormField::Day => "Day",
            FormField::Month => "Month",
            FormField::Year => "Year",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(FormField::Title),
            "day" => Ok(FormField::Day),
            "month" => Ok(FormField::Month),
            "year" => Ok(FormField::Year),
            other => Err(format!("unknown form field: {other}")),
        }
    }
}

/// Client-side input rejection. Raised before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("You must enter a title at least 3 characters long.")]
    TitleTooShort,

    #[error("{value:?} is not a valid {field}.")]
    InvalidDate { field: FormField, value: String },
}

/// Contents of the modal form. `bound` is the id of the todo being edited;
/// `None` means the form creates a new one. Date selects hold `None` while
/// their placeholder is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    bound: Option<TodoId>,
    pub title: String,
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

impl TodoForm {
    /// A form pre-filled from an existing todo. Sentinel components show as
    /// the placeholder.
    pub fn populate(todo: &Todo) -> Self {
        Self {
            bound: Some(todo.id.clone()),
            title: todo.title.clone(),
            day: selected(&todo.day, UNSET_DAY),
            month: selected(&todo.month, UNSET_MONTH),
            year: selected(&todo.year, UNSET_YEAR),
        }
    }

    pub fn bound(&self) -> Option<&TodoId> {
        self.bound.as_ref()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Title => Some(self.title.as_str()),
            FormField::Day => self.day.as_deref(),
            FormField::Month => self.month.as_deref(),
            FormField::Year => self.year.as_deref(),
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        if field == FormField::Title {
            self.title = value;
            return;
        }
        let value = (!value.is_empty() && value != field.placeholder()).then_some(value);
        match field {
            FormField::Day => self.day = value,
            FormField::Month => self.month = value,
            FormField::Year => self.year = value,
            FormField::Title => {}
        }
    }

    /// Check the inputs and normalize them into wire form: unselected dates
    /// become sentinels, selected ones are zero-padded.
    pub fn validate(&self) -> Result<FormData, ValidationError> {
        if self.title.chars().count() < MIN_TITLE_LEN {
            return Err(ValidationError::TitleTooShort);
        }
        Ok(FormData {
            title: self.title.clone(),
            day: normalize(FormField::Day, self.day.as_deref(), 1..=31, 2)?,
            month: normalize(FormField::Month, self.month.as_deref(), 1..=12, 2)?,
            year: normalize(FormField::Year, self.year.as_deref(), 1000..=9999, 4)?,
        })
    }
}

fn selected(value: &str, sentinel: &str) -> Option<String> {
    (value != sentinel && !value.is_empty()).then(|| value.to_string())
}

fn normalize(
    field: FormField,
    value: Option<&str>,
    range: std::ops::RangeInclusive<u16>,
    width: usize,
) -> Result<String, ValidationError> {
    let Some(value) = value else {
        return Ok(match field {
            FormField::Year => UNSET_YEAR,
            FormField::Month => UNSET_MONTH,
            _ => UNSET_DAY,
        }
        .to_string());
    };
    match value.trim().parse::<u16>() {
        Ok(number) if range.contains(&number) => Ok(format!("{number:0width$}")),
        _ => Err(ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        }),
    }
}

/// Validated, wire-ready form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub title: String,
    pub day: String,
    pub month: String,
    pub year: String,
}

impl FormData {
    pub fn to_create(&self) -> CreateTodo {
        CreateTodo {
            title: self.title.clone(),
            day: self.day.clone(),
            month: self.month.clone(),
            year: self.year.clone(),
            completed: false,
        }
    }

    /// Full edit: every form field is sent, completion is left alone.
    pub fn to_update(&self) -> UpdateTodo {
        UpdateTodo {
            title: Some(self.title.clone()),
            completed: None,
            day: Some(self.day.clone()),
            month: Some(self.month.clone()),
            year: Some(self.year.clone()),
        }
    }
}
