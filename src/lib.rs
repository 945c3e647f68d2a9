//! # Todo Board Core
//!
//! State, validation and view logic for a two-column to-do board with
//! drag-and-drop between columns.
//!
//! The crate is headless: views draw through the [`view::ListSurface`] and
//! [`view::Notifier`] traits, so any toolkit can host them. All state lives in
//! one [`TaskStore`] that publishes a fresh [`Snapshot`] to its subscribers on
//! every change.

pub mod app;
pub mod domain;
pub mod error;
pub mod store;
pub mod validation;
pub mod view;

// Re-export commonly used types
pub use app::App;
pub use domain::{
    board::{BoardConfig, Column, FormRules},
    task::{Task, TaskId, TaskStatus},
};
pub use error::{Result, TodoError};
pub use store::{Snapshot, Subscription, TaskStore};
pub use validation::{validate, Validatable};
