use crate::{
    domain::{BoardConfig, TaskId},
    error::{Result, TodoError},
    store::TaskStore,
    validation::{parse_date, Validatable},
    view::Notifier,
};
use chrono::{Local, NaiveDate};
use std::rc::Rc;

/// Phase of the form; `Submitting` never outlives one `submit` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
}

/// Input form for new tasks
pub struct TaskFormView<N: Notifier> {
    store: TaskStore,
    config: Rc<BoardConfig>,
    notifier: N,
    title: String,
    description: String,
    date: String,
    state: FormState,
}

impl<N: Notifier> TaskFormView<N> {
    pub fn new(store: TaskStore, config: Rc<BoardConfig>, notifier: N) -> Self {
        Self {
            store,
            config,
            notifier,
            title: String::new(),
            description: String::new(),
            date: String::new(),
            state: FormState::Idle,
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Raw date text as an HTML date input reports it (`YYYY-MM-DD`)
    pub fn set_date(&mut self, value: impl Into<String>) {
        self.date = value.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Handles a submit event against today's local date
    pub fn submit(&mut self) -> Result<TaskId> {
        self.submit_on(Local::now().date_naive())
    }

    /// Validates the fields and adds a task
    ///
    /// On success the fields are cleared. On failure the notifier fires once,
    /// the fields are kept and the store is not touched.
    pub fn submit_on(&mut self, today: NaiveDate) -> Result<TaskId> {
        self.state = FormState::Submitting;

        let outcome = match self.user_input(today) {
            Ok(due_date) => {
                let id = self
                    .store
                    .add(self.title.clone(), self.description.clone(), due_date);
                self.clear_inputs();
                Ok(id)
            }
            Err(err) => {
                self.notifier.notify(&self.config.invalid_input_message);
                Err(err)
            }
        };

        self.state = FormState::Idle;
        outcome
    }

    /// Runs every field rule; returns the parsed due date when all pass
    fn user_input(&self, today: NaiveDate) -> Result<NaiveDate> {
        let rules = &self.config.form;
        let checks = [
            (
                "title",
                Validatable::text(self.title.as_str())
                    .required()
                    .min_length(rules.title_min_length)
                    .max_length(rules.title_max_length),
            ),
            (
                "description",
                Validatable::text(self.description.as_str())
                    .required()
                    .max_length(rules.description_max_length),
            ),
            (
                "date",
                Validatable::date(self.date.as_str())
                    .required()
                    .min_date(today),
            ),
        ];

        for (field, check) in &checks {
            let violations = check.violations();
            if !violations.is_empty() {
                tracing::debug!(field = *field, ?violations, "Rejected form input");
                return Err(TodoError::ValidationFailed {
                    field: field.to_string(),
                });
            }
        }

        parse_date(&self.date).ok_or_else(|| TodoError::ValidationFailed {
            field: "date".to_string(),
        })
    }

    fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.date.clear();
    }
}
