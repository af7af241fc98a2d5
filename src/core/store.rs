//! # Customer Store
//!
//! The authoritative client-side snapshot of the customer collection.
//!
//! ```text
//! snapshot + StoreAction  →  apply()  →  next snapshot
//! ```
//!
//! `apply()` is pure and never touches its input. `Store::dispatch` installs
//! the result as a fresh `Arc`, so anything still holding the previous
//! snapshot keeps seeing it unchanged.

use std::sync::Arc;

use log::{debug, warn};

use crate::core::customer::{Customer, CustomerId};

/// The only four ways the collection can change.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Replace the whole list (payload order is kept).
    GetList(Vec<Customer>),
    /// Append one record at the end.
    Create(Customer),
    /// Replace the record with the same identifier in place.
    Update(Customer),
    /// Remove the record with this identifier.
    Delete(CustomerId),
}

impl StoreAction {
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::GetList(_) => "GET_LIST",
            StoreAction::Create(_) => "CREATE",
            StoreAction::Update(_) => "UPDATE",
            StoreAction::Delete(_) => "DELETE",
        }
    }
}

/// What a dispatch did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    Changed,
    /// UPDATE or DELETE named an identifier that is not in the list.
    Unmatched,
}

/// Reduce `current` by `action` into a new list.
pub fn apply(current: &[Customer], action: &StoreAction) -> Vec<Customer> {
    match action {
        StoreAction::GetList(customers) => customers.clone(),
        StoreAction::Create(customer) => {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend_from_slice(current);
            next.push(customer.clone());
            next
        }
        StoreAction::Update(customer) => {
            let mut next = current.to_vec();
            if let Some(slot) = next.iter_mut().find(|c| c.id == customer.id) {
                *slot = customer.clone();
            }
            next
        }
        StoreAction::Delete(id) => {
            let mut next = current.to_vec();
            if let Some(pos) = next.iter().position(|c| &c.id == id) {
                next.remove(pos);
            }
            next
        }
    }
}

fn matches_existing(current: &[Customer], action: &StoreAction) -> bool {
    match action {
        StoreAction::GetList(_) | StoreAction::Create(_) => true,
        StoreAction::Update(customer) => current.iter().any(|c| c.id == customer.id),
        StoreAction::Delete(id) => current.iter().any(|c| &c.id == id),
    }
}

#[derive(Debug, Default)]
pub struct Store {
    customers: Arc<Vec<Customer>>,
    revision: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&mut self, action: StoreAction) -> Dispatched {
        if !matches_existing(&self.customers, &action) {
            warn!("{} ignored: no customer with that id", action.name());
            return Dispatched::Unmatched;
        }

        let next = apply(&self.customers, &action);
        self.customers = Arc::new(next);
        self.revision += 1;
        debug!(
            "Store dispatch {} -> {} customers (rev {})",
            action.name(),
            self.customers.len(),
            self.revision
        );
        Dispatched::Changed
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<Vec<Customer>> {
        Arc::clone(&self.customers)
    }

    /// Incremented once per applied dispatch.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn find(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| &c.id == id)
    }

    pub fn position(&self, id: &CustomerId) -> Option<usize> {
        self.customers.iter().position(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
