pub mod db;
pub mod task;

pub use db::{connect, TaskStore};
pub use task::{Priority, Task};
