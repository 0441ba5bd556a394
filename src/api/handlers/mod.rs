mod page;
mod system;

pub use page::*;
pub use system::*;
