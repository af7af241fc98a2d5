//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates terminal events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Overlays take input in front of what is under them:
//! confirm popup → form → context menu → table. Ctrl+C quits from anywhere.
//!
//! ## Effects
//!
//! `update()` returns an `Effect` when it needs the network. Each effect is
//! run on its own tokio task which sends the result back as an `Action` over
//! an mpsc channel drained once per loop iteration.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (initial load spinner, visible toast): draws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or background results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::notification::Notification;
use crate::core::state::App;
use crate::gateway::{CustomerGateway, HttpGateway};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ConfirmEvent, ConfirmPopupState, ContextMenuState, CustomerFormState, CustomerTableState,
    FormEvent, MenuEvent, TableEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// A notification currently on screen and when it went up.
pub struct ShownToast {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub table: CustomerTableState,
    pub menu: ContextMenuState,
    pub form: CustomerFormState,
    pub confirm: ConfirmPopupState,
    pub toast: Option<ShownToast>,
    pub toast_ttl: Duration,
}

impl TuiState {
    pub fn new(notification_secs: u64) -> Self {
        Self {
            table: CustomerTableState::new(),
            menu: ContextMenuState::default(),
            form: CustomerFormState::new(),
            confirm: ConfirmPopupState,
            toast: None,
            toast_ttl: Duration::from_secs(notification_secs),
        }
    }

    /// Expire the visible toast and show the next queued notification.
    ///
    /// Returns true when what is on screen changed.
    pub fn rotate_toast(&mut self, app: &mut App, now: Instant) -> bool {
        let mut changed = false;
        if self
            .toast
            .as_ref()
            .is_some_and(|t| now.duration_since(t.shown_at) >= self.toast_ttl)
        {
            self.toast = None;
            changed = true;
        }
        if self.toast.is_none()
            && let Some(notification) = app.notifications.pop_front()
        {
            debug!("Showing notification: {}", notification.message);
            self.toast = Some(ShownToast {
                notification,
                shown_at: now,
            });
            changed = true;
        }
        changed
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Translate a terminal event into a core action, given what is on screen.
///
/// Moves TUI-local state (cursor, focus) as a side effect.
pub fn event_to_action(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    if app.show_confirm_delete {
        return tui.confirm.handle_event(event).map(|e| match e {
            ConfirmEvent::Confirm => Action::ConfirmDelete,
            ConfirmEvent::Cancel => Action::CancelDelete,
        });
    }

    if let Some(draft) = &app.form {
        return tui.form.handle_event(event, draft).map(|e| match e {
            FormEvent::Edit { field, value } => Action::EditField { field, value },
            FormEvent::Blur(field) => Action::BlurField(field),
            FormEvent::SetGender(gender) => Action::SetGender(gender),
            FormEvent::Submit => Action::SubmitForm,
            FormEvent::Cancel => Action::CancelForm,
        });
    }

    if app.show_context_menu {
        // Its row scrolled out of view, so nothing is on screen to act on
        if tui.menu.hidden {
            return Some(Action::CloseContextMenu);
        }
        return tui.menu.handle_event(event).map(|e| match e {
            MenuEvent::Edit => Action::OpenEditForm,
            MenuEvent::Delete => Action::RequestDelete,
            MenuEvent::Close => Action::CloseContextMenu,
        });
    }

    let customers = app.store.customers();
    let id_at = |index: usize| customers.get(index).map(|c| c.id.clone());

    if let TuiEvent::MouseClick(column, row) = event {
        let index = tui.table.hit_test(*column, *row)?;
        tui.table.focus(index);
        return id_at(index).map(Action::SelectCustomer);
    }

    tui.table.sync_rows(customers.len());
    match tui.table.handle_event(event)? {
        TableEvent::Select(index) => id_at(index).map(Action::SelectCustomer),
        TableEvent::ToggleMenu(index) => id_at(index).map(Action::ToggleContextMenu),
        TableEvent::Create => Some(Action::OpenCreateForm),
        TableEvent::Quit => Some(Action::Quit),
    }
}

/// Run `action` through `update()`, reset component state it invalidates,
/// and start any effect it asks for. Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let opens_form = matches!(action, Action::OpenCreateForm | Action::OpenEditForm);
    let opens_menu = matches!(action, Action::ToggleContextMenu(_));

    let effect = update(app, action);

    if opens_form && let Some(draft) = &app.form {
        tui.form.reset(draft);
    }
    if opens_menu {
        tui.menu.reset();
    }

    match effect {
        Effect::Quit => return true,
        Effect::None => {}
        effect => spawn_effect(effect, app.gateway.clone(), tx.clone()),
    }
    false
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let gateway: Arc<dyn CustomerGateway> =
        Arc::new(HttpGateway::new(&config.base_url, &config.path));
    info!("Customer resource: {}", gateway.resource());

    let mut app = App::new(gateway);
    let mut tui = TuiState::new(config.notification_secs);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // The screen is active from the first frame
    dispatch(&mut app, &mut tui, Action::Activate, &tx);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if tui.rotate_toast(&mut app, Instant::now()) {
            needs_redraw = true;
        }

        let animating = app.is_loading || tui.toast.is_some();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = event_to_action(&app, &mut tui, &event)
                && dispatch(&mut app, &mut tui, action, &tx)
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle results from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Roster shutting down");
    ratatui::restore();
    Ok(())
}

fn send(tx: &mpsc::Sender<Action>, action: Action) {
    if tx.send(action).is_err() {
        warn!("Failed to send gateway result: receiver dropped");
    }
}

/// Run one gateway call in the background and report back with an Action.
fn spawn_effect(effect: Effect, gateway: Arc<dyn CustomerGateway>, tx: mpsc::Sender<Action>) {
    info!("Spawning gateway call: {:?}", effect);
    tokio::spawn(async move {
        match effect {
            Effect::FetchList => {
                let result = gateway.list().await;
                send(&tx, Action::ListLoaded(result));
            }
            Effect::CreateCustomer(fields) => {
                let result = gateway.create(&fields).await;
                send(&tx, Action::CustomerCreated(result));
            }
            Effect::UpdateCustomer(id, fields) => {
                let result = gateway.update(&id, &fields).await;
                send(&tx, Action::CustomerUpdated(result));
            }
            Effect::DeleteCustomer(id) => {
                let result = gateway.delete(&id).await;
                send(
                    &tx,
                    Action::CustomerDeleted {
                        requested: id,
                        result,
                    },
                );
            }
            Effect::None | Effect::Quit => {}
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::customer::{CustomerId, Gender};
    use crate::core::draft::Field;
    use crate::test_support::{loaded_app, test_app};

    fn route(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
        match event_to_action(app, tui, &event) {
            Some(action) => {
                let opens_form = matches!(action, Action::OpenCreateForm | Action::OpenEditForm);
                let effect = update(app, action);
                if opens_form && let Some(draft) = &app.form {
                    tui.form.reset(draft);
                }
                effect
            }
            None => Effect::None,
        }
    }

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            route(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_overlay() {
        let mut app = loaded_app();
        let mut tui = TuiState::new(3);
        route(&mut app, &mut tui, TuiEvent::InputChar('a'));
        assert!(app.form.is_some());
        assert_eq!(route(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_enter_selects_cursor_row() {
        let mut app = loaded_app();
        let mut tui = TuiState::new(3);
        route(&mut app, &mut tui, TuiEvent::CursorDown);
        route(&mut app, &mut tui, TuiEvent::Submit);

        assert_eq!(app.selected, Some(CustomerId::new("2")));
        assert!(app.show_profile);
    }

    #[test]
    fn test_menu_then_delete_flow() {
        let mut app = loaded_app();
        let mut tui = TuiState::new(3);
        route(&mut app, &mut tui, TuiEvent::InputChar('m'));
        assert!(app.show_context_menu);
        assert_eq!(app.selected, Some(CustomerId::new("1")));

        // 'q' goes to the menu, not the table
        assert_eq!(route(&mut app, &mut tui, TuiEvent::InputChar('q')), Effect::None);
        route(&mut app, &mut tui, TuiEvent::InputChar('d'));
        assert!(app.show_confirm_delete);
        assert!(!app.show_context_menu);

        let effect = route(&mut app, &mut tui, TuiEvent::InputChar('y'));
        assert_eq!(effect, Effect::DeleteCustomer(CustomerId::new("1")));
    }

    #[test]
    fn test_cancel_delete_with_escape() {
        let mut app = loaded_app();
        let mut tui = TuiState::new(3);
        route(&mut app, &mut tui, TuiEvent::InputChar('m'));
        route(&mut app, &mut tui, TuiEvent::InputChar('d'));
        route(&mut app, &mut tui, TuiEvent::Escape);
        assert!(!app.show_confirm_delete);
        assert_eq!(app.store.len(), 2);
    }

    #[test]
    fn test_create_form_typing_and_submit() {
        let mut app = loaded_app();
        let mut tui = TuiState::new(3);
        route(&mut app, &mut tui, TuiEvent::InputChar('a'));

        let values = [
            "Dung",
            "https://example.com/dung.png",
            "dung@example.com",
            "0912345678",
            "Designer",
            "Hue",
        ];
        for value in values {
            type_text(&mut app, &mut tui, value);
            route(&mut app, &mut tui, TuiEvent::NextField);
        }
        route(&mut app, &mut tui, TuiEvent::CursorRight);

        let draft = app.form.as_ref().unwrap();
        assert!(!draft.has_errors());
        assert_eq!(draft.value(Field::Address), "Hue");
        assert_eq!(draft.gender(), Gender::Female);

        match route(&mut app, &mut tui, TuiEvent::Submit) {
            Effect::CreateCustomer(fields) => {
                assert_eq!(fields.name, "Dung");
                assert_eq!(fields.gender, Gender::Female);
            }
            other => panic!("expected CreateCustomer, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_form_prefilled_from_menu() {
        let mut app = loaded_app();
        let mut tui = TuiState::new(3);
        route(&mut app, &mut tui, TuiEvent::CursorDown);
        route(&mut app, &mut tui, TuiEvent::InputChar('m'));
        route(&mut app, &mut tui, TuiEvent::InputChar('e'));

        assert!(app.is_editing());
        assert_eq!(tui.form.cursor, "B".len());
        route(&mut app, &mut tui, TuiEvent::Backspace);
        type_text(&mut app, &mut tui, "Binh");

        match route(&mut app, &mut tui, TuiEvent::Submit) {
            Effect::UpdateCustomer(id, fields) => {
                assert_eq!(id, CustomerId::new("2"));
                assert_eq!(fields.name, "Binh");
            }
            other => panic!("expected UpdateCustomer, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_list_ignores_row_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new(3);
        assert!(event_to_action(&app, &mut tui, &TuiEvent::Submit).is_none());
        assert!(event_to_action(&app, &mut tui, &TuiEvent::InputChar('m')).is_none());
        assert_eq!(route(&mut app, &mut tui, TuiEvent::InputChar('q')), Effect::Quit);
    }

    #[test]
    fn test_toast_rotation() {
        let mut app = test_app();
        let mut tui = TuiState::new(3);
        app.notify(Notification::success("one"));
        app.notify(Notification::fail("two"));

        let start = Instant::now();
        assert!(tui.rotate_toast(&mut app, start));
        assert_eq!(tui.toast.as_ref().unwrap().notification.message, "one");

        // Still within its display time
        assert!(!tui.rotate_toast(&mut app, start + Duration::from_secs(1)));

        assert!(tui.rotate_toast(&mut app, start + Duration::from_secs(3)));
        assert_eq!(tui.toast.as_ref().unwrap().notification.message, "two");

        assert!(tui.rotate_toast(&mut app, start + Duration::from_secs(7)));
        assert!(tui.toast.is_none());
    }
}
