//! Site state module

mod animation;
mod forms;
mod header;
mod menu;
mod navigation;
mod notices;
mod page;
mod scheduler;

pub use animation::*;
pub use forms::*;
pub use header::*;
pub use menu::*;
pub use navigation::*;
pub use notices::*;
pub use page::*;
pub use scheduler::*;
