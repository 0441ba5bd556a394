pub mod page;
pub mod todo;

#[cfg(feature = "backend")]
pub mod api;
