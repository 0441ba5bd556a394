mod home;
mod todo_list;

pub use home::Home;
pub use todo_list::TodoList;
