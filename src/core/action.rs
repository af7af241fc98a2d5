//! # Actions
//!
//! Everything that can happen on the customer screen becomes an `Action`.
//! User presses Enter on a row? That's `Action::SelectCustomer(id)`.
//! The resource answers a create? That's `Action::CustomerCreated(result)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing the I/O the caller should start.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Gateway results come back as actions too, so every store dispatch happens
//! inside `update()` after the matching call has completed.

use log::{debug, info, warn};

use crate::core::customer::{Customer, CustomerFields, CustomerId, Gender};
use crate::core::draft::{Field, FormDraft};
use crate::core::notification::{self, Notification};
use crate::core::state::{App, PendingSubmit};
use crate::core::store::{Dispatched, StoreAction};
use crate::gateway::GatewayError;

#[derive(Debug)]
pub enum Action {
    /// The screen became active. Only the first one fetches.
    Activate,
    ListLoaded(Result<Vec<Customer>, GatewayError>),

    // Selection
    SelectCustomer(CustomerId),
    ToggleContextMenu(CustomerId),
    CloseContextMenu,

    // Form
    OpenCreateForm,
    OpenEditForm,
    EditField { field: Field, value: String },
    BlurField(Field),
    SetGender(Gender),
    CancelForm,
    SubmitForm,
    CustomerCreated(Result<Customer, GatewayError>),
    CustomerUpdated(Result<Customer, GatewayError>),

    // Delete
    RequestDelete,
    CancelDelete,
    ConfirmDelete,
    CustomerDeleted {
        requested: CustomerId,
        result: Result<Option<Customer>, GatewayError>,
    },

    Quit,
}

/// I/O requested by `update()`, performed by the UI adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchList,
    CreateCustomer(CustomerFields),
    UpdateCustomer(CustomerId, CustomerFields),
    DeleteCustomer(CustomerId),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Activate => {
            if app.list_requested {
                debug!("Activate ignored: list already requested");
                return Effect::None;
            }
            app.list_requested = true;
            app.is_loading = true;
            app.status_message = String::from("Loading customers...");
            Effect::FetchList
        }
        Action::ListLoaded(Ok(customers)) => {
            app.is_loading = false;
            app.load_error = None;
            app.status_message = format!("Loaded {} customers", customers.len());
            app.store.dispatch(StoreAction::GetList(customers));
            Effect::None
        }
        Action::ListLoaded(Err(e)) => {
            warn!("Customer list failed to load: {}", e);
            app.is_loading = false;
            app.load_error = Some(e.to_string());
            app.status_message = String::from("Offline");
            app.notify(Notification::fail(notification::MSG_LOAD_FAIL));
            Effect::None
        }

        Action::SelectCustomer(id) => {
            if app.is_selected(&id) {
                app.show_profile = !app.show_profile;
            } else {
                app.selected = Some(id);
                app.show_profile = true;
                app.show_context_menu = false;
            }
            Effect::None
        }
        Action::ToggleContextMenu(id) => {
            if app.is_selected(&id) {
                app.show_context_menu = !app.show_context_menu;
            } else {
                app.selected = Some(id);
                app.show_context_menu = true;
            }
            Effect::None
        }
        Action::CloseContextMenu => {
            app.show_context_menu = false;
            Effect::None
        }

        Action::OpenCreateForm => {
            app.selected = None;
            app.show_context_menu = false;
            app.form = Some(FormDraft::empty());
            app.pending_submit = None;
            Effect::None
        }
        Action::OpenEditForm => {
            let Some(customer) = app.selected_customer() else {
                debug!("OpenEditForm ignored: nothing selected");
                return Effect::None;
            };
            let draft = FormDraft::from_customer(customer);
            app.form = Some(draft);
            app.pending_submit = None;
            app.show_context_menu = false;
            Effect::None
        }
        Action::EditField { field, value } => {
            if let Some(draft) = app.form.as_mut() {
                draft.set(field, value);
            }
            Effect::None
        }
        Action::BlurField(field) => {
            if let Some(draft) = app.form.as_mut() {
                draft.blur(field);
            }
            Effect::None
        }
        Action::SetGender(gender) => {
            if let Some(draft) = app.form.as_mut() {
                draft.set_gender(gender);
            }
            Effect::None
        }
        Action::CancelForm => {
            app.form = None;
            app.pending_submit = None;
            Effect::None
        }
        Action::SubmitForm => {
            let Some(draft) = app.form.as_ref() else {
                return Effect::None;
            };
            if !draft.is_submittable() {
                app.status_message = String::from("Fill in every field before submitting");
                return Effect::None;
            }
            let fields = draft.to_fields();
            match app.selected.clone() {
                Some(id) => {
                    info!("Submitting update for customer {}", id);
                    app.status_message = String::from("Updating customer...");
                    app.pending_submit = Some(PendingSubmit::Update(id.clone()));
                    Effect::UpdateCustomer(id, fields)
                }
                None => {
                    info!("Submitting new customer");
                    app.status_message = String::from("Creating customer...");
                    app.pending_submit = Some(PendingSubmit::Create);
                    Effect::CreateCustomer(fields)
                }
            }
        }
        Action::CustomerCreated(result) => {
            let owns_form = app.pending_submit == Some(PendingSubmit::Create);
            if owns_form {
                app.form = None;
                app.pending_submit = None;
            } else {
                debug!("Create result arrived after its form was closed");
            }
            match result {
                Ok(customer) => {
                    app.status_message = format!("Created {}", customer.name());
                    app.store.dispatch(StoreAction::Create(customer));
                    app.notify(Notification::success(notification::MSG_CREATE_SUCCESS));
                }
                Err(e) => {
                    warn!("Create failed: {}", e);
                    app.status_message = String::from("Create failed");
                    app.notify(Notification::fail(notification::MSG_CREATE_FAIL));
                }
            }
            Effect::None
        }
        Action::CustomerUpdated(result) => {
            let owns_form = match (&app.pending_submit, &result) {
                (Some(PendingSubmit::Update(target)), Ok(customer)) => *target == customer.id,
                (Some(PendingSubmit::Update(_)), Err(_)) => true,
                _ => false,
            };
            if owns_form {
                app.form = None;
                app.pending_submit = None;
            } else {
                debug!("Update result arrived after its form was closed");
            }
            match result {
                Ok(customer) => {
                    app.status_message = format!("Updated {}", customer.name());
                    if owns_form {
                        app.selected = Some(customer.id.clone());
                    }
                    app.store.dispatch(StoreAction::Update(customer));
                    app.notify(Notification::success(notification::MSG_UPDATE_SUCCESS));
                }
                Err(e) => {
                    warn!("Update failed: {}", e);
                    app.status_message = String::from("Update failed");
                    app.notify(Notification::fail(notification::MSG_UPDATE_FAIL));
                }
            }
            Effect::None
        }

        Action::RequestDelete => {
            if app.selected.is_none() {
                debug!("RequestDelete ignored: nothing selected");
                return Effect::None;
            }
            app.show_context_menu = false;
            app.show_confirm_delete = true;
            Effect::None
        }
        Action::CancelDelete => {
            app.show_confirm_delete = false;
            Effect::None
        }
        Action::ConfirmDelete => {
            match (&app.selected, app.show_confirm_delete) {
                (Some(id), true) => {
                    info!("Deleting customer {}", id);
                    app.status_message = String::from("Deleting customer...");
                    Effect::DeleteCustomer(id.clone())
                }
                _ => Effect::None,
            }
        }
        Action::CustomerDeleted { requested, result } => {
            app.show_confirm_delete = false;
            match result {
                Ok(removed) => {
                    let id = removed.map(|c| c.id).unwrap_or(requested);
                    if app.store.dispatch(StoreAction::Delete(id)) == Dispatched::Unmatched {
                        debug!("Deleted customer was already gone from the list");
                    }
                    app.selected = None;
                    app.show_profile = false;
                    app.show_context_menu = false;
                    app.status_message = String::from("Customer deleted");
                    app.notify(Notification::success(notification::MSG_DELETE_SUCCESS));
                }
                Err(e) => {
                    warn!("Delete of {} failed: {}", requested, e);
                    app.status_message = String::from("Delete failed");
                    app.notify(Notification::fail(notification::MSG_DELETE_FAIL));
                }
            }
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
