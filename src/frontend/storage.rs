use gloo_storage::{LocalStorage, Storage, errors::StorageError};
use todo_web::todo::TodoList;

const TODO_STORAGE_KEY: &str = "todo-list";

/// Load the todo list from localStorage, starting empty if nothing is stored
pub fn load_todos() -> TodoList {
    match LocalStorage::get(TODO_STORAGE_KEY) {
        Ok(list) => list,
        Err(StorageError::KeyNotFound(_)) => TodoList::new(),
        Err(e) => {
            web_sys::console::warn_1(&format!("Discarding stored todo list: {}", e).into());
            TodoList::new()
        }
    }
}

/// Save the todo list to localStorage
pub fn save_todos(list: &TodoList) {
    if let Err(e) = LocalStorage::set(TODO_STORAGE_KEY, list) {
        web_sys::console::error_1(&format!("Failed to save todo list: {}", e).into());
    }
}
