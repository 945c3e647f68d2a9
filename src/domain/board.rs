use crate::{
    domain::task::TaskStatus,
    error::{Result, TodoError},
};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Configuration for one board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub status: TaskStatus,
    pub heading: String,
}

impl Column {
    pub fn new(status: TaskStatus, heading: impl Into<String>) -> Self {
        Self {
            status,
            heading: heading.into(),
        }
    }

    /// Element id of the column's list container
    pub fn list_id(&self) -> String {
        format!("{}-todo-list", self.status.as_key())
    }
}

/// Input rules applied by the task form
///
/// Length bounds are exclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub title_min_length: usize,
    pub title_max_length: usize,
    pub description_max_length: usize,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title_min_length: 2,
            title_max_length: 20,
            description_max_length: 20,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
    pub form: FormRules,
    /// Drag payload type carrying a task id
    pub drag_data_type: String,
    /// chrono format string for the due date on a card
    pub date_format: String,
    pub invalid_input_message: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "To-do Board".to_string(),
            columns: vec![
                Column::new(TaskStatus::Active, "ACTIVE TODO"),
                Column::new(TaskStatus::Finished, "FINISHED TODO"),
            ],
            form: FormRules::default(),
            drag_data_type: "text/plain".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            invalid_input_message: "Invalid input. Please check the fields and try again."
                .to_string(),
        }
    }
}

impl BoardConfig {
    /// Parses a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a usable board
    pub fn validate(&self) -> Result<()> {
        for status in TaskStatus::all() {
            let count = self
                .columns
                .iter()
                .filter(|col| col.status == status)
                .count();
            if count != 1 {
                return Err(TodoError::ConfigError(format!(
                    "expected exactly one column for status {}, found {}",
                    status, count
                )));
            }
        }

        if self.drag_data_type.trim().is_empty() {
            return Err(TodoError::ConfigError(
                "drag_data_type must not be empty".to_string(),
            ));
        }

        if StrftimeItems::new(&self.date_format).any(|item| item == Item::Error) {
            return Err(TodoError::ConfigError(format!(
                "invalid date_format: {:?}",
                self.date_format
            )));
        }

        if self.form.title_min_length >= self.form.title_max_length {
            return Err(TodoError::ConfigError(format!(
                "title_min_length ({}) must be less than title_max_length ({})",
                self.form.title_min_length, self.form.title_max_length
            )));
        }

        Ok(())
    }

    /// Gets the column configuration for a status
    pub fn column_for_status(&self, status: TaskStatus) -> Option<&Column> {
        self.columns.iter().find(|col| col.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.drag_data_type, "text/plain");
        assert_eq!(config.form.title_min_length, 2);
        assert_eq!(config.form.title_max_length, 20);
        assert_eq!(config.form.description_max_length, 20);
    }

    #[test]
    fn test_column_lookup() {
        let config = BoardConfig::default();

        let active = config.column_for_status(TaskStatus::Active).unwrap();
        assert_eq!(active.heading, "ACTIVE TODO");
        assert_eq!(active.list_id(), "active-todo-list");

        let finished = config.column_for_status(TaskStatus::Finished).unwrap();
        assert_eq!(finished.heading, "FINISHED TODO");
        assert_eq!(finished.list_id(), "finished-todo-list");
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = BoardConfig::from_json(r#"{"name": "Chores", "form": {"title_max_length": 40}}"#)
            .unwrap();

        assert_eq!(config.name, "Chores");
        assert_eq!(config.form.title_max_length, 40);
        assert_eq!(config.form.title_min_length, 2);
        assert_eq!(config.columns.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = BoardConfig::from_json("{not json");
        assert!(matches!(result, Err(TodoError::SerializationError(_))));
    }

    #[test]
    fn test_from_json_rejects_missing_column() {
        let json = r#"{"columns": [{"status": "active", "heading": "Doing"}]}"#;
        let result = BoardConfig::from_json(json);
        assert!(matches!(result, Err(TodoError::ConfigError(_))));
    }

    #[test]
    fn test_from_json_rejects_empty_drag_type() {
        let result = BoardConfig::from_json(r#"{"drag_data_type": " "}"#);
        assert!(matches!(result, Err(TodoError::ConfigError(_))));
    }

    #[test]
    fn test_from_json_rejects_bad_date_format() {
        let result = BoardConfig::from_json(r#"{"date_format": "%Q"}"#);
        assert!(matches!(result, Err(TodoError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_title_bounds() {
        let mut config = BoardConfig::default();
        config.form.title_min_length = 30;
        assert!(config.validate().is_err());
    }
}
