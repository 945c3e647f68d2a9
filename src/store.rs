use crate::domain::{Task, TaskId, TaskStatus};
use chrono::NaiveDate;
use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

type Listener = Rc<dyn Fn(&Snapshot)>;

/// Immutable copy of the task sequence at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    tasks: Rc<[Task]>,
}

impl Snapshot {
    fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            tasks: Rc::from(tasks),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Tasks with the given status, in insertion order
    pub fn with_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::from_tasks(&[])
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Default)]
struct StoreInner {
    tasks: Vec<Task>,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
    /// Bumped on every publish; a round stops once a newer one has gone out
    generation: u64,
}

/// Handle to the authoritative task list
///
/// Every mutation publishes a [`Snapshot`] to all subscribers, synchronously
/// and in registration order. Subscribers may read or mutate the store; a
/// nested mutation supersedes the round in progress, so no subscriber is left
/// holding an older snapshot than the latest one published. A subscriber
/// removed mid-round still receives that round unless it is superseded.
#[derive(Clone, Default)]
pub struct TaskStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("TaskStore")
            .field("tasks", &inner.tasks)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new active task and publishes a snapshot
    ///
    /// No validation happens here; that is the caller's job.
    pub fn add(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
    ) -> TaskId {
        let task = Task::new(title.into(), description.into(), due_date);
        let id = task.id().clone();
        self.inner.borrow_mut().tasks.push(task);

        tracing::debug!(task_id = %id, "Added task");
        self.publish();
        id
    }

    /// Sets a task's status and publishes a snapshot
    ///
    /// An unknown id or an unchanged status is a silent no-op. Returns
    /// whether a snapshot was published.
    pub fn move_task(&self, id: &TaskId, status: TaskStatus) -> bool {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            match inner.tasks.iter_mut().find(|task| task.id() == id) {
                Some(task) => task.set_status(status),
                None => {
                    tracing::debug!(task_id = %id, "Move ignored: task not found");
                    return false;
                }
            }
        };

        if !changed {
            tracing::debug!(task_id = %id, %status, "Move ignored: status unchanged");
            return false;
        }

        tracing::debug!(task_id = %id, %status, "Moved task");
        self.publish();
        true
    }

    /// Registers a subscriber for every future snapshot
    ///
    /// The callback is not invoked with the current state; use
    /// [`TaskStore::snapshot`] for that. The callback stays registered until
    /// the returned [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Snapshot) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Rc::new(listener)));

        Subscription {
            store: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Copy of the current task sequence
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_tasks(&self.inner.borrow().tasks)
    }

    pub fn get(&self, id: &TaskId) -> Option<Task> {
        self.inner
            .borrow()
            .tasks
            .iter()
            .find(|task| task.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().tasks.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn publish(&self) {
        let (generation, snapshot, listeners) = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (inner.generation, Snapshot::from_tasks(&inner.tasks), listeners)
        };

        tracing::trace!(
            subscribers = listeners.len(),
            tasks = snapshot.len(),
            "Publishing snapshot"
        );
        for listener in listeners {
            if self.inner.borrow().generation != generation {
                tracing::trace!(generation, "Snapshot superseded by nested publish");
                break;
            }
            listener(&snapshot);
        }
    }
}

/// Keeps a subscriber registered; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<RefCell<StoreInner>>,
    id: Option<u64>,
}

impl Subscription {
    /// Removes the subscriber now
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Keeps the subscriber registered for the rest of the store's life
    pub fn detach(mut self) {
        self.id = None;
    }

    pub fn is_active(&self) -> bool {
        match (self.id, self.store.upgrade()) {
            (Some(id), Some(inner)) => inner.borrow().listeners.iter().any(|(l, _)| *l == id),
            _ => false,
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(inner) = self.store.upgrade() {
            inner.borrow_mut().listeners.retain(|(l, _)| *l != id);
        }
    }
}
