use crate::{
    domain::{BoardConfig, Column, Task, TaskId, TaskStatus},
    error::{Result, TodoError},
    store::{Snapshot, Subscription, TaskStore},
    view::{
        card::TaskCardView,
        drag::{DragEvent, DropEffect},
        Component, ListSurface,
    },
};
use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

struct ListState<S> {
    tasks: Vec<Task>,
    surface: S,
}

impl<S: ListSurface> ListState<S> {
    /// Full replace: every rendered card is discarded and rebuilt
    fn render_tasks(&mut self, config: &BoardConfig) {
        self.surface.clear();
        for task in &self.tasks {
            let card = TaskCardView::new(task.clone(), config);
            self.surface.append_card(card.render());
        }
    }
}

/// One status column: a store subscriber and a drop target
///
/// The cached task list changes only when the store publishes.
pub struct TaskListView<S: ListSurface + 'static> {
    column: Column,
    config: Rc<BoardConfig>,
    store: TaskStore,
    state: Rc<RefCell<ListState<S>>>,
    subscription: Option<Subscription>,
}

impl<S: ListSurface + 'static> TaskListView<S> {
    /// Builds the column for `status`, subscribes it and renders its heading
    pub fn new(
        status: TaskStatus,
        store: TaskStore,
        config: Rc<BoardConfig>,
        surface: S,
    ) -> Result<Self> {
        let column = config.column_for_status(status).cloned().ok_or_else(|| {
            TodoError::ConfigError(format!("no column configured for status {}", status))
        })?;

        let mut view = Self {
            column,
            config,
            store,
            state: Rc::new(RefCell::new(ListState {
                tasks: Vec::new(),
                surface,
            })),
            subscription: None,
        };
        view.configure();
        view.render_content();
        Ok(view)
    }

    pub fn status(&self) -> TaskStatus {
        self.column.status
    }

    pub fn heading(&self) -> &str {
        &self.column.heading
    }

    pub fn list_id(&self) -> String {
        self.column.list_id()
    }

    /// Tasks currently assigned to this column
    pub fn tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }

    pub fn surface(&self) -> Ref<'_, S> {
        Ref::map(self.state.borrow(), |state| &state.surface)
    }

    pub fn drag_enter(&self, event: &mut DragEvent) -> bool {
        self.drag_over(event)
    }

    /// Accepts the drag when it carries a task id
    pub fn drag_over(&self, event: &mut DragEvent) -> bool {
        if !event.data_transfer.has_type(&self.config.drag_data_type) {
            return false;
        }
        event.prevent_default();
        event.data_transfer.drop_effect = DropEffect::Move;
        self.state.borrow_mut().surface.set_droppable(true);
        true
    }

    pub fn drag_leave(&self, _event: &mut DragEvent) {
        self.state.borrow_mut().surface.set_droppable(false);
    }

    /// Moves the dragged task into this column
    ///
    /// Returns whether the store changed. Dropping a task on the column it
    /// already sits in changes nothing.
    pub fn drop(&self, event: &mut DragEvent) -> bool {
        event.prevent_default();
        self.state.borrow_mut().surface.set_droppable(false);

        let Some(raw) = event.data_transfer.get_data(&self.config.drag_data_type) else {
            tracing::debug!(column = %self.column.status, "Drop ignored: no task id in payload");
            return false;
        };
        let id: TaskId = match raw.parse() {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(column = %self.column.status, error = %err, "Drop ignored");
                return false;
            }
        };

        self.store.move_task(&id, self.column.status)
    }
}

impl<S: ListSurface + 'static> Component for TaskListView<S> {
    fn configure(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        let state = Rc::clone(&self.state);
        let config = Rc::clone(&self.config);
        let status = self.column.status;
        self.subscription = Some(self.store.subscribe(move |snapshot: &Snapshot| {
            let mut state = state.borrow_mut();
            state.tasks = snapshot.with_status(status);
            state.render_tasks(&config);
            tracing::debug!(column = %status, tasks = state.tasks.len(), "Rendered column");
        }));
    }

    fn render_content(&mut self) {
        let list_id = self.column.list_id();
        let mut state = self.state.borrow_mut();
        state.surface.set_list_id(&list_id);
        state.surface.set_heading(&self.column.heading);
    }
}
