//! Collection manager: server round-trips first, local mutation second.

use tracing::{info, warn};

use crate::api::Api;
use crate::collection::{Collection, Group, Section};
use crate::error::ApiError;
use crate::outcome::ApiOutcome;
use crate::transport::Transport;
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};

/// What a mutating call did to local state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Mutation {
    Applied,
    /// The server refused; local state is exactly as before. Carries the
    /// server's message for the user.
    Rejected(String),
}

/// Sole owner and mutator of the todo list.
///
/// Every mutating method waits for the server before touching the
/// [`Collection`]. A rejection or an `Err` leaves it unchanged.
#[derive(Debug)]
pub struct Todos<T> {
    api: Api<T>,
    collection: Collection,
}

impl<T: Transport> Todos<T> {
    /// An empty manager. Call [`Todos::initialize`] to load the server's list.
    pub fn new(api: Api<T>) -> Self {
        Self {
            api,
            collection: Collection::default(),
        }
    }

    pub fn api(&self) -> &Api<T> {
        &self.api
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.collection.get(id)
    }

    pub fn section(&self) -> &Section {
        self.collection.section()
    }

    pub fn initialize(&mut self) -> Result<(), ApiError> {
        let todos = self.api.list_all()?;
        info!(count = todos.len(), "loaded todos");
        self.collection = Collection::new(todos);
        Ok(())
    }

    pub fn add(&mut self, input: &CreateTodo) -> Result<Mutation, ApiError> {
        match self.api.create(input)? {
            ApiOutcome::Success(todo) => {
                info!(id = %todo.id, "created todo");
                self.collection.insert(todo);
                Ok(Mutation::Applied)
            }
            ApiOutcome::Rejected { status, message } => {
                warn!(status, %message, "create rejected");
                Ok(Mutation::Rejected(message))
            }
        }
    }

    pub fn remove(&mut self, id: &TodoId) -> Result<Mutation, ApiError> {
        match self.api.delete(id)? {
            ApiOutcome::Success(()) => {
                info!(%id, "deleted todo");
                self.collection.remove(id);
                Ok(Mutation::Applied)
            }
            ApiOutcome::Rejected { status, message } => {
                warn!(%id, status, %message, "delete rejected");
                Ok(Mutation::Rejected(message))
            }
        }
    }

    /// Send `input`, then overwrite every key the server echoed back onto the
    /// local item. Keys the server leaves out keep their local values.
    pub fn update(&mut self, id: &TodoId, input: &UpdateTodo) -> Result<Mutation, ApiError> {
        match self.api.update(id, input)? {
            ApiOutcome::Success(patch) => {
                if self.collection.merge(id, patch) {
                    info!(%id, "updated todo");
                } else {
                    warn!(%id, "update confirmed for a todo no longer held locally");
                }
                Ok(Mutation::Applied)
            }
            ApiOutcome::Rejected { status, message } => {
                warn!(%id, status, %message, "update rejected");
                Ok(Mutation::Rejected(message))
            }
        }
    }

    /// Change the filter. Recomputes only the selection.
    pub fn set_current_section(&mut self, group: Group, title: impl Into<String>) {
        self.collection.set_section(Section::new(group, title));
    }
}
