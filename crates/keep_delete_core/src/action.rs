use crate::queue::ImageRef;

/// A committed decision on one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Kept { image: ImageRef },
    /// The file now sits in the staging area.
    Deleted { image: ImageRef },
}

impl Action {
    pub fn image(&self) -> &ImageRef {
        match self {
            Action::Kept { image } | Action::Deleted { image } => image,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Action::Deleted { .. })
    }
}

/// Stack of past actions, most recent on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionLog {
    entries: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.entries.push(action);
    }

    pub fn pop(&mut self) -> Option<Action> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&Action> {
        self.entries.last()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_lifo() {
        let mut log = ActionLog::new();
        log.push(Action::Kept {
            image: ImageRef::new("a.jpg"),
        });
        log.push(Action::Deleted {
            image: ImageRef::new("b.png"),
        });
        assert_eq!(log.peek().map(Action::image), Some(&ImageRef::new("b.png")));
        assert!(log.pop().is_some_and(|a| a.is_delete()));
        assert_eq!(
            log.pop(),
            Some(Action::Kept {
                image: ImageRef::new("a.jpg")
            })
        );
        assert!(log.pop().is_none());
        assert!(log.is_empty());
    }
}
