//! The todos view: local loading/error state over a shared list.
//!
//! # Design
//! `TodosView` never owns the list. Each operation takes the current
//! `&[Todo]` snapshot and, when it wants a change, hands a complete new
//! snapshot to a `SetTodos` implementation.
//!
//! The fetch-on-mount effect is split in two, like `TodoClient`:
//! `mount`/`dependencies_changed` return a `FetchTicket` describing the
//! request, and `complete_fetch` consumes the host's outcome. A ticket issued
//! before `unmount` is *late* when it completes; `LateUpdatePolicy` decides
//! whether such a result still reaches the setter. A late result never
//! touches the local state of the current mount.

use tracing::{debug, info, warn};

use crate::client::{TodoClient, DEFAULT_LIMIT};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::list;
use crate::store::SetTodos;
use crate::types::Todo;

/// What to do with a fetch result that arrives after `unmount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LateUpdatePolicy {
    /// Still hand a loaded list to the setter.
    #[default]
    Apply,
    /// Drop the result without touching any state.
    Discard,
}

/// A pending list request issued by the mount effect.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    request: HttpRequest,
}

impl FetchTicket {
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn into_request(self) -> HttpRequest {
        self.request
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of `TodosView::complete_fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The shared list was replaced with `count` items.
    Loaded { count: usize, late: bool },
    /// The load failed and `message` is now the view's error.
    Failed { message: String, late: bool },
    /// A late result was dropped under `LateUpdatePolicy::Discard`.
    Discarded,
}

/// Render branch, chosen in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(&'a [Todo]),
}

/// Events raised by rows and the navigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Toggle(u64),
    Delete(u64),
    NavigateHome,
}

/// Navigation targets reachable from the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TodosView {
    client: TodoClient,
    policy: LateUpdatePolicy,
    loading: bool,
    error: Option<String>,
    generation: u64,
    active: bool,
    observed_len: Option<usize>,
}

impl TodosView {
    pub fn new(client: TodoClient) -> Self {
        Self::with_policy(client, LateUpdatePolicy::default())
    }

    pub fn with_policy(client: TodoClient, policy: LateUpdatePolicy) -> Self {
        Self {
            client,
            policy,
            loading: true,
            error: None,
            generation: 0,
            active: false,
            observed_len: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn policy(&self) -> LateUpdatePolicy {
        self.policy
    }

    /// Runs the mount effect. Returns a ticket when the list must be fetched.
    ///
    /// Mounting an inactive view starts from fresh local state.
    pub fn mount(&mut self, todos: &[Todo]) -> Option<FetchTicket> {
        if !self.active {
            self.loading = true;
            self.error = None;
            self.observed_len = None;
        }
        self.active = true;
        self.run_effect(todos)
    }

    /// Re-runs the mount effect if the list length changed since the last run.
    ///
    /// Call this after every replacement of the shared list. Emptying the
    /// list through deletes therefore fetches again.
    pub fn dependencies_changed(&mut self, todos: &[Todo]) -> Option<FetchTicket> {
        if !self.active || self.observed_len == Some(todos.len()) {
            return None;
        }
        self.run_effect(todos)
    }

    /// Marks the view inactive. Tickets issued so far become late.
    pub fn unmount(&mut self) {
        if self.active {
            self.active = false;
            self.generation += 1;
            debug!(generation = self.generation, "view unmounted");
        }
    }

    fn run_effect(&mut self, todos: &[Todo]) -> Option<FetchTicket> {
        self.observed_len = Some(todos.len());
        if !todos.is_empty() {
            debug!(len = todos.len(), "shared list already populated, skipping fetch");
            self.loading = false;
            return None;
        }
        let request = self.client.build_list_todos(DEFAULT_LIMIT);
        debug!(path = %request.path, generation = self.generation, "fetching todos");
        Some(FetchTicket {
            generation: self.generation,
            request,
        })
    }

    fn is_late(&self, ticket: &FetchTicket) -> bool {
        !self.active || ticket.generation != self.generation
    }

    /// Applies the host's outcome for `ticket`.
    ///
    /// `outcome` is the raw response, or `ApiError::Transport` when the
    /// round-trip itself failed. For a current ticket `loading` is false
    /// afterwards. A late ticket only ever reaches the setter.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<HttpResponse, ApiError>,
        setter: &mut dyn SetTodos,
    ) -> FetchOutcome {
        let late = self.is_late(&ticket);
        if late {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                policy = ?self.policy,
                "fetch completed after unmount"
            );
            if self.policy == LateUpdatePolicy::Discard {
                return FetchOutcome::Discarded;
            }
        }

        let result = outcome.and_then(|response| self.client.parse_list_todos(response));
        let outcome = match result {
            Ok(todos) => {
                let count = todos.len();
                info!(count, late, "todos loaded");
                setter.set_todos(todos);
                FetchOutcome::Loaded { count, late }
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, late, "failed to load todos");
                if !late {
                    self.error = Some(message.clone());
                }
                FetchOutcome::Failed { message, late }
            }
        };
        if !late {
            self.loading = false;
        }
        outcome
    }

    pub fn toggle_completed(&self, todos: &[Todo], id: u64, setter: &mut dyn SetTodos) {
        setter.set_todos(list::toggle_completed(todos, id));
    }

    pub fn delete_todo(&self, todos: &[Todo], id: u64, setter: &mut dyn SetTodos) {
        setter.set_todos(list::delete_todo(todos, id));
    }

    /// Routes a row or navigation event. Returns the route to follow, if any.
    pub fn dispatch(
        &self,
        event: ViewEvent,
        todos: &[Todo],
        setter: &mut dyn SetTodos,
    ) -> Option<Route> {
        match event {
            ViewEvent::Toggle(id) => {
                self.toggle_completed(todos, id, setter);
                None
            }
            ViewEvent::Delete(id) => {
                self.delete_todo(todos, id, setter);
                None
            }
            ViewEvent::NavigateHome => Some(Route::Home),
        }
    }

    /// Picks the render branch: loading, then error, then empty, then rows.
    pub fn branch<'a>(&'a self, todos: &'a [Todo]) -> Branch<'a> {
        if self.loading {
            return Branch::Loading;
        }
        // An empty message does not count as an error.
        if let Some(message) = self.error.as_deref().filter(|m| !m.is_empty()) {
            return Branch::Error(message);
        }
        if todos.is_empty() {
            Branch::Empty
        } else {
            Branch::Populated(todos)
        }
    }
}
