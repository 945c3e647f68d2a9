pub mod board;
pub mod task;

pub use board::{BoardConfig, Column, FormRules};
pub use task::{Task, TaskId, TaskStatus};
