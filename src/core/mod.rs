//! # Core Application Logic
//!
//! This module contains Roster's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (screen state)   │
//!                    │  • Store (customers)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │ ─ spawns gateway calls ▶ │  Gateway   │
//!     │  Adapter   │ ◀─── result Actions ──── │ (reqwest)  │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`customer`]: The `Customer` record and its wire format
//! - [`store`]: The customer collection and its four-action reducer
//! - [`draft`]: Create/edit form values and per-field validation
//! - [`state`]: The `App` struct, all screen state in one place
//! - [`action`]: The `Action` enum, everything that can happen on the screen
//! - [`notification`]: Success/failure messages for the user
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod customer;
pub mod draft;
pub mod notification;
pub mod state;
pub mod store;
