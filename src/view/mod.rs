pub mod card;
pub mod drag;
pub mod form;
pub mod list;

pub use card::{CardContent, TaskCardView};
pub use drag::{DataTransfer, DragEvent, DropEffect};
pub use form::{FormState, TaskFormView};
pub use list::TaskListView;

use std::{cell::RefCell, rc::Rc};

/// Lifecycle shared by the board's views
pub trait Component {
    /// Wires subscriptions and handlers
    fn configure(&mut self);

    /// Writes the component's own static content
    fn render_content(&mut self);
}

/// Rendering target for one status column, implemented by the host toolkit
pub trait ListSurface {
    fn set_heading(&mut self, heading: &str);
    fn set_list_id(&mut self, id: &str);
    /// Discards every rendered card
    fn clear(&mut self);
    fn append_card(&mut self, card: CardContent);
    /// Toggles the "droppable" visual indicator
    fn set_droppable(&mut self, droppable: bool);
}

/// Surface that keeps what was rendered in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryListSurface {
    pub heading: String,
    pub list_id: String,
    pub cards: Vec<CardContent>,
    pub droppable: bool,
    /// Number of full re-renders
    pub renders: usize,
}

impl MemoryListSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.title.as_str()).collect()
    }
}

impl ListSurface for MemoryListSurface {
    fn set_heading(&mut self, heading: &str) {
        self.heading = heading.to_string();
    }

    fn set_list_id(&mut self, id: &str) {
        self.list_id = id.to_string();
    }

    fn clear(&mut self) {
        self.cards.clear();
        self.renders += 1;
    }

    fn append_card(&mut self, card: CardContent) {
        self.cards.push(card);
    }

    fn set_droppable(&mut self, droppable: bool) {
        self.droppable = droppable;
    }
}

/// Blocking user-visible notification, e.g. an alert dialog
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier that records messages; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
