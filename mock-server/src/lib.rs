use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

/// Read-only list served by the router.
#[derive(Clone)]
pub struct AppState {
    todos: Arc<[Todo]>,
    fail_with: Option<StatusCode>,
}

/// Twenty todos spread over two users, every third one completed.
pub fn seed_todos() -> Vec<Todo> {
    (1..=20)
        .map(|id| Todo {
            user_id: if id <= 10 { 1 } else { 2 },
            id,
            title: format!("todo {id}"),
            completed: id % 3 == 0,
        })
        .collect()
}

pub fn app() -> Router {
    app_with(seed_todos())
}

pub fn app_with(todos: Vec<Todo>) -> Router {
    router(AppState {
        todos: todos.into(),
        fail_with: None,
    })
}

/// Router whose list endpoint always answers with `status`.
pub fn failing_app(status: StatusCode) -> Router {
    router(AppState {
        todos: Arc::from(Vec::new()),
        fail_with: Some(status),
    })
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_todos))
        .route("/todos/{id}", get(get_todo))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app).await
}

async fn list_todos(State(state): State<AppState>, Query(params): Query<ListParams>) -> Response {
    if let Some(status) = state.fail_with {
        debug!(%status, "forced failure");
        return (status, "forced failure").into_response();
    }
    let todos = &state.todos;
    let limit = params.limit.unwrap_or(todos.len());
    debug!(limit, total = todos.len(), "list todos");
    Json(todos.iter().take(limit).cloned().collect::<Vec<_>>()).into_response()
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    state
        .todos
        .iter()
        .find(|todo| todo.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_user_id() {
        let todo = Todo {
            user_id: 1,
            id: 7,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn seed_has_twenty_unique_ids() {
        let todos = seed_todos();
        assert_eq!(todos.len(), 20);
        let mut ids: Vec<u64> = todos.iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert!(todos[2].completed);
        assert!(!todos[0].completed);
    }

    #[test]
    fn list_params_reads_underscore_limit() {
        let params: ListParams = serde_json::from_str(r#"{"_limit":10}"#).unwrap();
        assert_eq!(params.limit, Some(10));
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert!(params.limit.is_none());
    }
}
