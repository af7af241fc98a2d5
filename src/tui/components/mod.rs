//! # TUI Components
//!
//! All widgets that make up the customer screen.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: resource, customer count, status, offline marker
//! - `ProfilePanel`: details of the selected customer
//! - `ConfirmPopup`: the delete question
//! - `Toast`: the current notification line
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames and emit events:
//! - `CustomerTable` / `CustomerTableState`: cursor row, mouse hit testing
//! - `ContextMenu` / `ContextMenuState`: highlighted item
//! - `CustomerForm` / `CustomerFormState`: focused control and text cursor
//!
//! Emitted events are mapped onto core `Action`s in `tui::mod`, so no
//! component mutates `App` directly.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file, overlay placement)
//! ├── text.rs            (cursor and width helpers)
//! ├── title_bar.rs
//! ├── customer_table.rs
//! ├── profile_panel.rs
//! ├── context_menu.rs
//! ├── customer_form.rs
//! ├── confirm_popup.rs
//! └── toast.rs
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};

mod title_bar;
pub use title_bar::TitleBar;

pub mod confirm_popup;
pub mod context_menu;
pub mod customer_form;
pub mod customer_table;
pub mod profile_panel;
pub mod text;
pub mod toast;

pub use confirm_popup::{ConfirmEvent, ConfirmPopup, ConfirmPopupState};
pub use context_menu::{ContextMenu, ContextMenuState, MenuEvent};
pub use customer_form::{CustomerForm, CustomerFormState, FormEvent};
pub use customer_table::{CustomerTable, CustomerTableState, TableEvent};
pub use profile_panel::ProfilePanel;
pub use toast::Toast;

/// A `width` x `height` rect centered in `outer`, shrunk to fit if needed.
pub fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [center_v] = Layout::vertical([Constraint::Length(height.min(outer.height))])
        .flex(Flex::Center)
        .areas(outer);
    let [center] = Layout::horizontal([Constraint::Length(width.min(outer.width))])
        .flex(Flex::Center)
        .areas(center_v);
    center
}
