pub mod todo_components;

pub use todo_components::TodoRow;
