//! Landing page markup.
//!
//! The page is described as a plain tree of [`Node`]s so the same content can
//! be rendered by the Leptos front-end, served as HTML by the backend, or
//! inspected in tests without a browser.

mod home;
mod markup;


pub use home::{
    HOME_CONTAINER_CLASS, HOME_GREETING, TODO_LIST_LABEL, TODO_LIST_PATH, home, home_document,
};
pub use markup::Node;
