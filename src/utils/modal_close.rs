/// Document-level event seen while a modal is mounted.
#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyDown { key: String },
    /// `path` lists the element ids from the click target up to the root.
    MouseDown { path: Vec<String> },
}

/// Close policy for a modal: Escape, or a click outside `element_id`.
#[derive(Debug)]
pub struct ModalDismiss {
    element_id: String,
    open: bool,
}

impl ModalDismiss {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            open: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns true when `event` closes the modal. Events are ignored while
    /// closed.
    pub fn handle(&mut self, event: &UiEvent) -> bool {
        if !self.open {
            return false;
        }

        let close = match event {
            UiEvent::KeyDown { key } => key == "Escape",
            UiEvent::MouseDown { path } => !path.iter().any(|id| *id == self.element_id),
        };
        if close {
            self.open = false;
        }
        close
    }
}
