//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only the resource URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. [`crate::Api`] glues the two around a transport.
//!
//! Status handling differs per operation and follows the backend contract:
//!
//! | Operation | Success | Rejected (as data) | Anything else |
//! |-----------|---------|--------------------|---------------|
//! | list      | 200     | -                  | `UnexpectedStatus` |
//! | create    | 201     | 400                | `UnexpectedStatus` |
//! | update    | 200     | any other          | -             |
//! | delete    | 204     | 404                | `UnexpectedStatus` |

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::outcome::ApiOutcome;
use crate::types::{CreateTodo, Todo, TodoId, TodoPatch, UpdateTodo};

/// Characters escaped when an id becomes a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Synchronous, stateless client for the `/api/todos` resource.
#[derive(Debug, Clone)]
pub struct TodoClient {
    resource: String,
}

impl TodoClient {
    /// `base_url` is the server origin; the resource lives under
    /// `<base_url>/api/todos`.
    pub fn new(base_url: &str) -> Self {
        Self {
            resource: format!("{}/api/todos", base_url.trim_end_matches('/')),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.resource.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.resource.clone(),
            headers: json_headers(),
            body: Some(encode(input)?),
        })
    }

    pub fn build_update_todo(&self, id: &TodoId, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_path(id),
            headers: json_headers(),
            body: Some(encode(input)?),
        })
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        if response.status != 200 {
            return Err(unexpected(response));
        }
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<ApiOutcome<Todo>, ApiError> {
        match response.status {
            201 => decode(&response.body).map(ApiOutcome::Success),
            400 => Ok(ApiOutcome::rejected(response)),
            _ => Err(unexpected(response)),
        }
    }

    /// The body of a successful update is decoded as a [`TodoPatch`] so the
    /// caller can merge exactly the keys the server returned.
    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<ApiOutcome<TodoPatch>, ApiError> {
        match response.status {
            200 => decode(&response.body).map(ApiOutcome::Success),
            _ => Ok(ApiOutcome::rejected(response)),
        }
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<ApiOutcome<()>, ApiError> {
        match response.status {
            204 => Ok(ApiOutcome::Success(())),
            404 => Ok(ApiOutcome::rejected(response)),
            _ => Err(unexpected(response)),
        }
    }

    fn item_path(&self, id: &TodoId) -> String {
        let segment = utf8_percent_encode(id.as_str(), SEGMENT);
        format!("{}/{segment}", self.resource)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode<T: Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn unexpected(response: HttpResponse) -> ApiError {
    ApiError::UnexpectedStatus {
        status: response.status,
        body: response.body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn id() -> TodoId {
        TodoId::new("42")
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_sends_json_without_due_date() {
        let input = CreateTodo {
            title: "Buy milk".to_string(),
            day: "05".to_string(),
            month: "03".to_string(),
            year: "2022".to_string(),
            completed: false,
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["month"], "03");
        assert!(body.get("due_date").is_none());
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_todo_targets_item_and_skips_absent_fields() {
        let req = client()
            .build_update_todo(&id(), &UpdateTodo::completion(true))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/api/todos/42");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(&id());
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/api/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn item_path_escapes_the_id() {
        let req = client().build_delete_todo(&TodoId::new("a b/c?d"));
        assert_eq!(req.path, "http://localhost:3000/api/todos/a%20b%2Fc%3Fd");
        let req = client().build_delete_todo(&TodoId::new("5f0c-11"));
        assert_eq!(req.path, "http://localhost:3000/api/todos/5f0c-11");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_todos().path, "http://localhost:3000/api/todos");
    }

    #[test]
    fn parse_list_todos_success() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":1,"title":"Test","completed":false,"day":"00","month":"00","year":"0000"}]"#,
        );
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Test");
        assert_eq!(todos[0].id.as_str(), "1");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_create_todo_success() {
        let response = HttpResponse::new(201, r#"{"id":"9","title":"New","completed":false}"#);
        let outcome = client().parse_create_todo(response).unwrap();
        match outcome {
            ApiOutcome::Success(todo) => assert_eq!(todo.title, "New"),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn parse_create_todo_400_is_rejected_not_err() {
        let response = HttpResponse::new(400, "Title is too short.");
        let outcome = client().parse_create_todo(response).unwrap();
        assert_eq!(
            outcome,
            ApiOutcome::Rejected {
                status: 400,
                message: "Title is too short.".to_string()
            }
        );
    }

    #[test]
    fn parse_create_todo_other_status_is_err() {
        let err = client()
            .parse_create_todo(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 500, .. }));
    }

    #[test]
    fn parse_update_todo_keeps_only_returned_keys() {
        let response = HttpResponse::new(200, r#"{"completed":true}"#);
        let outcome = client().parse_update_todo(response).unwrap();
        let ApiOutcome::Success(patch) = outcome else {
            panic!("expected success");
        };
        assert_eq!(patch.completed, Some(true));
        assert!(patch.title.is_none());
    }

    #[test]
    fn parse_update_todo_any_other_status_is_rejected() {
        for status in [400, 404, 500] {
            let outcome = client()
                .parse_update_todo(HttpResponse::new(status, "nope"))
                .unwrap();
            assert!(!outcome.is_success(), "status {status}");
        }
    }

    #[test]
    fn parse_delete_todo_success() {
        let outcome = client().parse_delete_todo(HttpResponse::new(204, "")).unwrap();
        assert_eq!(outcome, ApiOutcome::Success(()));
    }

    #[test]
    fn parse_delete_todo_not_found_is_rejected() {
        let outcome = client()
            .parse_delete_todo(HttpResponse::new(404, "Todo not found."))
            .unwrap();
        assert!(matches!(outcome, ApiOutcome::Rejected { status: 404, .. }));
    }

    #[test]
    fn parse_delete_todo_other_status_is_err() {
        let err = client()
            .parse_delete_todo(HttpResponse::new(503, "busy"))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 503, .. }));
    }
}
