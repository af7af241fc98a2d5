//! Fire-and-forget user notifications.
//!
//! The screen controller queues them on `App::notifications`; the UI layer
//! drains the queue and decides how long to show each one.

use chrono::{DateTime, Local};

pub const MSG_LOAD_FAIL: &str = "Failed to load customer list";
pub const MSG_CREATE_SUCCESS: &str = "Customer created successfully";
pub const MSG_CREATE_FAIL: &str = "Failed to create customer";
pub const MSG_UPDATE_SUCCESS: &str = "Customer updated successfully";
pub const MSG_UPDATE_FAIL: &str = "Failed to update customer";
pub const MSG_DELETE_SUCCESS: &str = "Customer deleted successfully";
pub const MSG_DELETE_FAIL: &str = "Failed to delete customer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Fail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub raised_at: DateTime<Local>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            raised_at: Local::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Fail)
    }
}
