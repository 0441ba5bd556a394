use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo title must not be empty")]
    EmptyTitle,

    #[error("Todo not found: {0}")]
    NotFound(u64),

    #[error("Stored todo id {0} is duplicated or out of order")]
    InvalidId(u64),

    #[error("No todo ids left to assign")]
    IdsExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Ordered list of todos.
///
/// Ids are handed out from `next_id` and never reused, so they grow in
/// insertion order even after removals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredTodoList")]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

/// Unchecked shape of a persisted list.
#[derive(Deserialize)]
struct StoredTodoList {
    items: Vec<TodoItem>,
    #[serde(default)]
    next_id: u64,
}

impl TryFrom<StoredTodoList> for TodoList {
    type Error = TodoError;

    /// Stored ids must be strictly increasing and titles non-blank.
    /// `next_id` is raised past the largest stored id.
    fn try_from(stored: StoredTodoList) -> Result<Self, Self::Error> {
        let mut items = Vec::with_capacity(stored.items.len());
        let mut last_id = None;

        for mut item in stored.items {
            if last_id.is_some_and(|last| item.id <= last) {
                return Err(TodoError::InvalidId(item.id));
            }
            let title = item.title.trim();
            if title.is_empty() {
                return Err(TodoError::EmptyTitle);
            }
            item.title = title.to_string();
            last_id = Some(item.id);
            items.push(item);
        }

        let after_last = match last_id {
            Some(id) => id.checked_add(1).ok_or(TodoError::IdsExhausted)?,
            None => 1,
        };

        Ok(Self {
            items,
            next_id: stored.next_id.max(after_last),
        })
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items not yet completed.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn add(&mut self, title: &str) -> Result<&TodoItem, TodoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(TodoError::IdsExhausted)?;
        self.items.push(TodoItem {
            id,
            title: title.to_string(),
            completed: false,
        });

        Ok(&self.items[self.items.len() - 1])
    }

    /// Flip the completed flag, returning the new value.
    pub fn toggle(&mut self, id: u64) -> Result<bool, TodoError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(TodoError::NotFound(id))?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    pub fn remove(&mut self, id: u64) -> Result<TodoItem, TodoError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(TodoError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Drop all completed items, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        before - self.items.len()
    }
}
