//! In-memory backend for the `/api/todos` resource.
//!
//! Items keep insertion order. Error responses carry a plain-text message
//! body, which the client shows to the user verbatim.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub const MIN_TITLE_LEN: usize = 3;

pub const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters long.";
pub const NOT_FOUND: &str = "The todo could not be found.";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub completed: bool,
}

fn unset_day() -> String {
    "00".to_string()
}

fn unset_month() -> String {
    "00".to_string()
}

fn unset_year() -> String {
    "0000".to_string()
}

#[derive(Deserialize)]
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

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub day: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
    pub completed: Option<bool>,
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

type Rejection = (StatusCode, String);

pub fn app() -> Router {
    app_with(Db::default())
}

/// Router over an existing store, so tests can seed or inspect it.
pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn reject(status: StatusCode, message: &str) -> Rejection {
    (status, message.to_string())
}

fn title_is_valid(title: &str) -> bool {
    title.chars().count() >= MIN_TITLE_LEN
}

fn position(todos: &[Todo], id: &str) -> Option<usize> {
    let id = Uuid::parse_str(id).ok()?;
    todos.iter().position(|todo| todo.id == id)
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), Rejection> {
    if !title_is_valid(&input.title) {
        return Err(reject(StatusCode::BAD_REQUEST, TITLE_TOO_SHORT));
    }
    let todo = Todo {
        id: Uuid::new_v4(),
        title: input.title,
        day: input.day,
        month: input.month,
        year: input.year,
        completed: input.completed,
    };
    info!(id = %todo.id, "created todo");
    db.write().await.push(todo.clone());
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, Rejection> {
    let mut todos = db.write().await;
    let index = position(&todos, &id).ok_or_else(|| reject(StatusCode::NOT_FOUND, NOT_FOUND))?;
    if input.title.as_deref().is_some_and(|title| !title_is_valid(title)) {
        return Err(reject(StatusCode::BAD_REQUEST, TITLE_TOO_SHORT));
    }
    let todo = &mut todos[index];
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(day) = input.day {
        todo.day = day;
    }
    if let Some(month) = input.month {
        todo.month = month;
    }
    if let Some(year) = input.year {
        todo.year = year;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    info!(%id, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, Rejection> {
    let mut todos = db.write().await;
    let index = position(&todos, &id).ok_or_else(|| reject(StatusCode::NOT_FOUND, NOT_FOUND))?;
    todos.remove(index);
    info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
