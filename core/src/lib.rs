//! Sans-IO core of the todos view.
//!
//! # Overview
//! Models a single view over a shared list of todo items: a fetch-on-mount
//! effect, local loading/error state, toggle and delete operations that
//! replace the shared list, and a four-way render policy. The core builds
//! `HttpRequest` values and parses `HttpResponse` values without touching
//! the network (host-does-IO pattern).
//!
//! # Design
//! - `TodosView` owns only view state (`loading`, `error`). The list itself
//!   belongs to whoever implements `SetTodos` (usually a `TodoStore`); the
//!   view reads a `&[Todo]` snapshot and sends whole replacement snapshots.
//! - A fetch is represented by a `FetchTicket`. The host executes the ticket's
//!   request and returns the outcome to `TodosView::complete_fetch`.
//! - Rendering is split from state: `TodosView::branch` picks the branch and
//!   the `render` module turns it into HTML or terminal text.

pub mod client;
pub mod error;
pub mod http;
pub mod list;
pub mod render;
pub mod store;
pub mod types;
pub mod view;

pub use client::{TodoClient, DEFAULT_LIMIT};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{SetTodos, TodoStore};
pub use types::Todo;
pub use view::{
    Branch, FetchOutcome, FetchTicket, LateUpdatePolicy, Route, TodosView, ViewEvent,
};
