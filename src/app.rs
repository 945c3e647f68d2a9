use crate::{
    domain::{BoardConfig, TaskStatus},
    error::Result,
    store::TaskStore,
    view::{ListSurface, Notifier, TaskFormView, TaskListView},
};
use std::rc::Rc;

/// A wired board: one store, the input form and both status columns
pub struct App<S: ListSurface + 'static, N: Notifier> {
    config: Rc<BoardConfig>,
    store: TaskStore,
    form: TaskFormView<N>,
    active: TaskListView<S>,
    finished: TaskListView<S>,
}

impl<S: ListSurface + 'static, N: Notifier> App<S, N> {
    /// Builds the board; `surface` is called once per column
    pub fn new(
        config: BoardConfig,
        notifier: N,
        mut surface: impl FnMut(TaskStatus) -> S,
    ) -> Result<Self> {
        config.validate()?;
        let config = Rc::new(config);
        let store = TaskStore::new();

        let form = TaskFormView::new(store.clone(), Rc::clone(&config), notifier);
        let active = TaskListView::new(
            TaskStatus::Active,
            store.clone(),
            Rc::clone(&config),
            surface(TaskStatus::Active),
        )?;
        let finished = TaskListView::new(
            TaskStatus::Finished,
            store.clone(),
            Rc::clone(&config),
            surface(TaskStatus::Finished),
        )?;

        tracing::info!(board = %config.name, "Board initialized");
        Ok(Self {
            config,
            store,
            form,
            active,
            finished,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn form(&self) -> &TaskFormView<N> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskFormView<N> {
        &mut self.form
    }

    /// The column showing tasks with `status`
    pub fn list(&self, status: TaskStatus) -> &TaskListView<S> {
        match status {
            TaskStatus::Active => &self.active,
            TaskStatus::Finished => &self.finished,
        }
    }
}
