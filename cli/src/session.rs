//! One mounted view plus the store that owns its list.
//!
//! The session plays the ancestor scope: it owns the `TodoStore`, runs the
//! fetch tickets through a `Transport`, and re-runs the mount effect after
//! every replacement of the list.

use todos_view_core::render::{render_html, render_text};
use todos_view_core::{
    FetchOutcome, FetchTicket, LateUpdatePolicy, Route, TodoClient, TodoStore, TodosView,
    ViewEvent,
};
use tracing::info;

use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Html,
}

pub struct Session<T> {
    view: TodosView,
    store: TodoStore,
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(client: TodoClient, policy: LateUpdatePolicy, transport: T) -> Self {
        Self {
            view: TodosView::with_policy(client, policy),
            store: TodoStore::new(),
            transport,
        }
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn view(&self) -> &TodosView {
        &self.view
    }

    /// Mounts the view and settles any fetch it asks for.
    pub fn mount(&mut self) {
        let ticket = self.view.mount(self.store.todos());
        self.settle(ticket);
    }

    /// Applies a row or navigation event and settles the follow-up effect.
    pub fn dispatch(&mut self, event: ViewEvent) -> Option<Route> {
        let snapshot = self.store.todos().to_vec();
        let route = self.view.dispatch(event, &snapshot, &mut self.store);
        let ticket = self.view.dependencies_changed(self.store.todos());
        self.settle(ticket);
        route
    }

    pub fn unmount(&mut self) {
        self.view.unmount();
    }

    fn settle(&mut self, mut ticket: Option<FetchTicket>) {
        while let Some(pending) = ticket.take() {
            let response = self.transport.execute(pending.request());
            let outcome = self.view.complete_fetch(pending, response, &mut self.store);
            if let FetchOutcome::Loaded { count, .. } = outcome {
                info!(count, revision = self.store.revision(), "list settled");
            }
            ticket = self.view.dependencies_changed(self.store.todos());
        }
    }

    pub fn render(&self, format: Format) -> String {
        let branch = self.view.branch(self.store.todos());
        match format {
            Format::Text => render_text(branch),
            Format::Html => render_html(branch),
        }
    }
}
