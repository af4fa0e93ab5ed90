pub mod config;
pub mod dates;
pub mod error;
pub mod store;
pub mod task;
pub mod task_list;
pub mod ui;

pub use error::{Result, TaskError};
pub use task::{Priority, Status, Task};
pub use task_list::TaskList;
