//! Browser-local todo list model.
//!
//! Kept free of any web dependencies so the front-end can persist it with
//! serde and the logic stays testable on the host.

mod list;

#[cfg(test)]
mod list_test;

pub use list::{TodoError, TodoItem, TodoList};
