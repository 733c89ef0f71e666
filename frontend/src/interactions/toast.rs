#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
            Severity::Info => "fa-info-circle",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "#d1fae5",
            Severity::Error => "#fee2e2",
            Severity::Info => "#e0f2fe",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#065f46",
            Severity::Error => "#991b1b",
            Severity::Info => "#0369a1",
        }
    }
}

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    /// Playing the slide-out animation; removal follows shortly.
    pub leaving: bool,
}

/// Holds the single toast the page may show.
///
/// Ids only grow, so timers that outlive the toast they were set for find a
/// different id in the slot and do nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    current: Option<Toast>,
    last_id: ToastId,
}

impl ToastSlot {
    /// Replaces whatever is showing.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.last_id += 1;
        self.current = Some(Toast {
            id: self.last_id,
            message: message.into(),
            severity,
            leaving: false,
        });
        self.last_id
    }

    /// Starts the exit animation. False if `id` is gone or already leaving.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && !toast.leaving => {
                toast.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().map(|toast| toast.id) == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_toast_replaces_older() {
        let mut slot = ToastSlot::default();
        let first = slot.show("one", Severity::Info);
        let second = slot.show("two", Severity::Error);
        assert_ne!(first, second);

        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "two");

        // Timers belonging to the replaced toast are harmless.
        assert!(!slot.begin_exit(first));
        assert!(!slot.remove(first));
        assert_eq!(slot.current().unwrap().id, second);
    }

    #[test]
    fn exit_then_remove() {
        let mut slot = ToastSlot::default();
        let id = slot.show("bye", Severity::Success);
        assert!(slot.begin_exit(id));
        assert!(slot.current().unwrap().leaving);
        assert!(!slot.begin_exit(id));
        assert!(slot.remove(id));
        assert!(slot.current().is_none());
    }

    #[test]
    fn palette_follows_severity() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::Success.icon(), "fa-check-circle");
        assert_eq!(Severity::Error.background(), "#fee2e2");
        assert_eq!(Severity::Info.color(), "#0369a1");
    }
}
