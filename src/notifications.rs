//! Overlay notifications shown after a submit attempt.

use crate::locale::Messages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS modifier class for the overlay.
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub lines: Vec<String>,
}

impl Notification {
    pub fn success(messages: &Messages) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: messages.success_title.clone(),
            lines: vec![messages.success_body.clone()],
        }
    }

    /// Aggregated error overlay listing every failing field.
    pub fn errors(messages: &Messages, errors: Vec<String>) -> Self {
        let mut lines = Vec::with_capacity(errors.len() + 1);
        lines.push(messages.error_intro.clone());
        lines.extend(errors.into_iter().map(|e| format!("• {}", e)));
        Self {
            kind: NotificationKind::Error,
            title: messages.error_title.clone(),
            lines,
        }
    }
}

/// Currently open overlays, at most one per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationStack {
    open: Vec<Notification>,
}

impl NotificationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `notification` unless one of its kind is already showing.
    /// Returns whether anything changed.
    pub fn show(&mut self, notification: Notification) -> bool {
        if self.is_open(notification.kind) {
            log::debug!("{:?} notification already open, ignoring", notification.kind);
            return false;
        }
        self.open.push(notification);
        true
    }

    /// Close the overlay of `kind`, if open.
    pub fn dismiss(&mut self, kind: NotificationKind) -> bool {
        let before = self.open.len();
        self.open.retain(|n| n.kind != kind);
        before != self.open.len()
    }

    /// Close everything; returns how many overlays were removed.
    pub fn dismiss_all(&mut self) -> usize {
        let removed = self.open.len();
        self.open.clear();
        removed
    }

    pub fn is_open(&self, kind: NotificationKind) -> bool {
        self.open.iter().any(|n| n.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.open.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_overlay_per_kind() {
        let m = Messages::default();
        let mut stack = NotificationStack::new();

        assert!(stack.show(Notification::errors(&m, vec!["a".into()])));
        assert!(!stack.show(Notification::errors(&m, vec!["b".into(), "c".into()])));
        assert_eq!(stack.len(), 1);
        // the first overlay is kept untouched
        assert_eq!(stack.iter().next().map(|n| n.lines.len()), Some(2));

        assert!(stack.show(Notification::success(&m)));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn dismiss_single_kind() {
        let m = Messages::default();
        let mut stack = NotificationStack::new();
        stack.show(Notification::errors(&m, vec![]));
        stack.show(Notification::success(&m));

        assert!(stack.dismiss(NotificationKind::Error));
        assert!(!stack.dismiss(NotificationKind::Error));
        assert!(stack.is_open(NotificationKind::Success));
        assert!(!stack.is_open(NotificationKind::Error));
    }

    #[test]
    fn dismiss_all_clears_everything() {
        let m = Messages::default();
        let mut stack = NotificationStack::new();
        assert_eq!(stack.dismiss_all(), 0);

        stack.show(Notification::errors(&m, vec!["x".into()]));
        stack.show(Notification::success(&m));
        assert_eq!(stack.dismiss_all(), 2);
        assert!(stack.is_empty());

        // a fresh overlay can be opened again afterwards
        assert!(stack.show(Notification::errors(&m, vec![])));
    }

    #[test]
    fn error_overlay_lists_messages_in_order() {
        let m = Messages::default();
        let n = Notification::errors(&m, vec!["first".into(), "second".into()]);
        assert_eq!(n.title, m.error_title);
        assert_eq!(n.lines, vec![m.error_intro.clone(), "• first".into(), "• second".into()]);
    }
}
