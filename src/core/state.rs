//! # Application State
//!
//! Core screen state for Roster. Domain logic only, no TUI types.
//! Presentation state (cursor row, focused form field, visible toast) lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── gateway: Arc<dyn CustomerGateway>   // REST resource
//! ├── store: Store                        // customer snapshot + reducer
//! ├── selected: Option<CustomerId>        // selected customer, by id
//! ├── show_profile: bool                  // profile panel visible
//! ├── show_context_menu: bool             // row menu visible
//! ├── form: Option<FormDraft>             // create/edit form (None = closed)
//! ├── pending_submit: Option<PendingSubmit> // submit the open form is waiting on
//! ├── show_confirm_delete: bool           // delete popup visible
//! ├── list_requested: bool                // initial fetch already issued
//! ├── is_loading: bool                    // initial fetch in flight
//! ├── load_error: Option<String>          // initial fetch failed
//! ├── status_message: String              // status bar text
//! └── notifications: VecDeque             // pending user notifications
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::core::customer::{Customer, CustomerId};
use crate::core::draft::FormDraft;
use crate::core::notification::Notification;
use crate::core::store::Store;
use crate::gateway::CustomerGateway;

/// The gateway call the open form was submitted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingSubmit {
    Create,
    Update(CustomerId),
}

pub struct App {
    pub gateway: Arc<dyn CustomerGateway>,
    pub store: Store,
    pub selected: Option<CustomerId>,
    pub show_profile: bool,
    pub show_context_menu: bool,
    pub form: Option<FormDraft>,
    /// Cleared when the form is cancelled or replaced, so a late result
    /// leaves whatever form is open now alone.
    pub pending_submit: Option<PendingSubmit>,
    pub show_confirm_delete: bool,
    /// Set by the first `Activate`; guarantees a single list fetch.
    pub list_requested: bool,
    pub is_loading: bool,
    pub load_error: Option<String>,
    pub status_message: String,
    pub notifications: VecDeque<Notification>,
}

impl App {
    pub fn new(gateway: Arc<dyn CustomerGateway>) -> Self {
        Self {
            gateway,
            store: Store::new(),
            selected: None,
            show_profile: false,
            show_context_menu: false,
            form: None,
            pending_submit: None,
            show_confirm_delete: false,
            list_requested: false,
            is_loading: false,
            load_error: None,
            status_message: String::from("Welcome to Roster!"),
            notifications: VecDeque::new(),
        }
    }

    pub fn selected_customer(&self) -> Option<&Customer> {
        self.selected.as_ref().and_then(|id| self.store.find(id))
    }

    pub fn is_selected(&self, id: &CustomerId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// The open form edits the selected customer; otherwise it creates one.
    pub fn is_editing(&self) -> bool {
        self.form.is_some() && self.selected.is_some()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }
}
