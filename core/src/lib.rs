//! Client-side core of the to-do list manager.
//!
//! # Overview
//! Three layers compose strictly top-down:
//! - [`TodoClient`] / [`Api`]: builds `HttpRequest` values and parses
//!   `HttpResponse` values for the `/api/todos` resource. The actual round-trip
//!   is delegated to a [`Transport`] supplied by the host.
//! - [`Todos`]: owns the authoritative in-memory list and the current section,
//!   mutating local state only after the server confirms.
//! - [`View`]: renders named templates into a [`Surface`] and turns UI
//!   [`Event`]s into collection operations.
//!
//! # Design
//! - Expected application errors (400/404) travel as data in [`ApiOutcome`];
//!   only transport and decoding failures are `Err(ApiError)`.
//! - [`Collection`] holds the recomputation pipeline with no I/O, so grouping
//!   and sorting are testable without a transport or a surface.

pub mod api;
pub mod client;
pub mod collection;
pub mod due_date;
pub mod error;
pub mod form;
pub mod http;
pub mod outcome;
pub mod surface;
pub mod templates;
pub mod todos;
pub mod transport;
pub mod types;
pub mod view;
pub mod view_model;

pub use api::Api;
pub use client::TodoClient;
pub use collection::{Collection, Group, Section};
pub use due_date::DueDate;
pub use error::ApiError;
pub use form::{FormData, FormField, TodoForm, ValidationError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::ApiOutcome;
pub use surface::{Region, Surface};
pub use templates::{TemplateError, Templates};
pub use todos::{Mutation, Todos};
pub use transport::{Transport, TransportError};
pub use types::{CreateTodo, Todo, TodoId, TodoPatch, UpdateTodo};
pub use view::{Event, Mode, View, ViewError};
pub use view_model::ViewModel;
