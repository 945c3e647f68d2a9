use crate::{
    domain::{BoardConfig, Task},
    view::drag::{DragEvent, DropEffect},
};
use chrono::NaiveDate;
use std::fmt::Write;

/// Read-only content of one rendered card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub element_id: String,
    pub title: String,
    /// Formatted due date
    pub subtitle: String,
    pub body: String,
}

/// A single task card; the drag source of the board
#[derive(Debug, Clone)]
pub struct TaskCardView {
    task: Task,
    drag_data_type: String,
    date_format: String,
}

impl TaskCardView {
    pub fn new(task: Task, config: &BoardConfig) -> Self {
        Self {
            task,
            drag_data_type: config.drag_data_type.clone(),
            date_format: config.date_format.clone(),
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn render(&self) -> CardContent {
        CardContent {
            element_id: self.task.id().to_string(),
            title: self.task.title().to_string(),
            subtitle: format_date(self.task.due_date(), &self.date_format),
            body: self.task.description().to_string(),
        }
    }

    /// Puts the task id on the drag payload and allows a move
    pub fn drag_start(&self, event: &mut DragEvent) {
        event
            .data_transfer
            .set_data(&self.drag_data_type, self.task.id().as_str());
        event.data_transfer.effect_allowed = DropEffect::Move;
        tracing::trace!(task_id = %self.task.id(), "Drag started");
    }

    pub fn drag_end(&self, _event: &mut DragEvent) {}
}

/// Formats with a chrono pattern, falling back to ISO on a bad pattern
fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.to_string();
    }
    out
}
