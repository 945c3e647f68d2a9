/// Operations a drag source allows or a drop target accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
    All,
}

/// Data carried by an in-flight drag, shaped after the browser's `DataTransfer`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    items: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
    pub drop_effect: DropEffect,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing any previous value
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let data = data.into();
        match self.items.iter_mut().find(|(f, _)| f == format) {
            Some(item) => item.1 = data,
            None => self.items.push((format.to_string(), data)),
        }
    }

    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, data)| data.as_str())
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(f, _)| f.as_str())
    }

    pub fn has_type(&self, format: &str) -> bool {
        self.types().any(|f| f == format)
    }
}

/// One drag event delivered to a source or target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragEvent {
    pub data_transfer: DataTransfer,
    default_prevented: bool,
}

impl DragEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event for a later phase of the same drag, carrying the same payload
    pub fn continued(&self) -> Self {
        Self {
            data_transfer: self.data_transfer.clone(),
            default_prevented: false,
        }
    }

    /// Marks the event as handled; on drag-over this signals "drop allowed"
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
