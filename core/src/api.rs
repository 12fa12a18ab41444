//! The four API operations, each a build/execute/parse round-trip.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::outcome::ApiOutcome;
use crate::transport::Transport;
use crate::types::{CreateTodo, Todo, TodoId, TodoPatch, UpdateTodo};

/// API client bound to a transport. Knows nothing about the collection or
/// the view.
#[derive(Debug)]
pub struct Api<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_all(&self) -> Result<Vec<Todo>, ApiError> {
        let request = self.client.build_list_todos();
        self.client.parse_list_todos(self.send(request)?)
    }

    pub fn create(&self, input: &CreateTodo) -> Result<ApiOutcome<Todo>, ApiError> {
        let request = self.client.build_create_todo(input)?;
        self.client.parse_create_todo(self.send(request)?)
    }

    pub fn update(&self, id: &TodoId, input: &UpdateTodo) -> Result<ApiOutcome<TodoPatch>, ApiError> {
        let request = self.client.build_update_todo(id, input)?;
        self.client.parse_update_todo(self.send(request)?)
    }

    pub fn delete(&self, id: &TodoId) -> Result<ApiOutcome<()>, ApiError> {
        let request = self.client.build_delete_todo(id);
        self.client.parse_delete_todo(self.send(request)?)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, "sending request");
        let response = self.transport.execute(request).map_err(|err| {
            warn!(%method, %path, error = %err, "request failed");
            ApiError::from(err)
        })?;
        debug!(%method, %path, status = response.status, "received response");
        Ok(response)
    }
}
