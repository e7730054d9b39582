//! Stateless request builder and response parser for the todo endpoint.
//!
//! # Design
//! `TodoClient` holds only the endpoint URL. Listing is split into
//! `build_list_todos`, which produces an `HttpRequest`, and
//! `parse_list_todos`, which consumes the host's `HttpResponse`.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Todo;

/// Number of items the view asks for.
pub const DEFAULT_LIMIT: usize = 10;

/// Synchronous, stateless client for the todo endpoint.
#[derive(Debug, Clone)]
pub struct TodoClient {
    endpoint: String,
}

impl TodoClient {
    /// `endpoint` is the collection URL itself, e.g.
    /// `https://jsonplaceholder.typicode.com/todos`.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_list_todos(&self, limit: usize) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}?_limit={limit}", self.endpoint),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        if !response.is_success() {
            debug!(status = response.status, "list request rejected");
            return Err(ApiError::Status {
                status: response.status,
            });
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000/todos")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos(DEFAULT_LIMIT);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos?_limit=10");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/todos/");
        assert_eq!(client.endpoint(), "http://localhost:3000/todos");
        let req = client.build_list_todos(3);
        assert_eq!(req.path, "http://localhost:3000/todos?_limit=3");
    }

    #[test]
    fn parse_list_todos_success() {
        let todos = client()
            .parse_list_todos(response(200, r#"[{"id":1,"title":"A","completed":false}]"#))
            .unwrap();
        assert_eq!(todos, vec![Todo::new(1, "A", false)]);
    }

    #[test]
    fn parse_list_todos_accepts_any_2xx() {
        let todos = client().parse_list_todos(response(203, "[]")).unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn parse_list_todos_server_error() {
        let err = client()
            .parse_list_todos(response(500, "internal error"))
            .unwrap_err();
        assert_eq!(err, ApiError::Status { status: 500 });
        assert_eq!(err.to_string(), "Error al cargar los TODOs");
    }

    #[test]
    fn parse_list_todos_not_found_is_a_status_error() {
        let err = client().parse_list_todos(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404 }));
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_list_todos_rejects_single_object() {
        let err = client()
            .parse_list_todos(response(200, r#"{"id":1,"title":"A","completed":false}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
