use chrono::Utc;
use common::models::{Notification, NotificationKind};
use serde::{Deserialize, Serialize};

/// The log never holds more than this many entries.
pub const MAX_NOTIFICATIONS: usize = 20;

/// Notifications slice: a bounded recent-events log, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsState {
    pub entries: Vec<Notification>,
    /// Suffix appended to timestamp-based ids so pushes landing within
    /// the same millisecond stay distinct.
    seq: u64,
}

impl NotificationsState {
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }
}

#[derive(Debug, Clone)]
pub enum NotificationsAction {
    Push {
        kind: NotificationKind,
        message: String,
    },
    /// No-op when the id is unknown.
    MarkRead(String),
    MarkAllRead,
    Clear,
}

pub(crate) fn apply(state: &mut NotificationsState, action: NotificationsAction) {
    match action {
        NotificationsAction::Push { kind, message } => {
            let timestamp = Utc::now().timestamp_millis();
            let id = format!("{}-{}", timestamp, state.seq);
            state.seq += 1;

            state.entries.insert(
                0,
                Notification {
                    id,
                    kind,
                    message,
                    timestamp,
                    read: false,
                },
            );
            state.entries.truncate(MAX_NOTIFICATIONS);
        }
        NotificationsAction::MarkRead(id) => {
            if let Some(entry) = state.entries.iter_mut().find(|n| n.id == id) {
                entry.read = true;
            }
        }
        NotificationsAction::MarkAllRead => {
            for entry in &mut state.entries {
                entry.read = true;
            }
        }
        NotificationsAction::Clear => {
            state.entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(state: &mut NotificationsState, message: &str) {
        apply(
            state,
            NotificationsAction::Push {
                kind: NotificationKind::PriceAlert,
                message: message.to_string(),
            },
        );
    }

    #[test]
    fn push_prepends_unread_entry() {
        let mut state = NotificationsState::default();
        push(&mut state, "first");
        push(&mut state, "second");

        assert_eq!(state.entries[0].message, "second");
        assert_eq!(state.entries[1].message, "first");
        assert!(!state.entries[0].read);
        assert_eq!(state.unread_count(), 2);
    }

    #[test]
    fn log_is_capped_at_twenty_newest_first() {
        let mut state = NotificationsState::default();
        for i in 0..25 {
            push(&mut state, &format!("event-{}", i));
        }

        assert_eq!(state.entries.len(), MAX_NOTIFICATIONS);
        assert_eq!(state.entries[0].message, "event-24");
        assert_eq!(state.entries[19].message, "event-5");
    }

    #[test]
    fn ids_are_unique_within_a_burst() {
        let mut state = NotificationsState::default();
        for _ in 0..10 {
            push(&mut state, "burst");
        }

        let mut ids: Vec<&str> = state.entries.iter().map(|n| n.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn mark_read_is_a_noop_for_unknown_ids() {
        let mut state = NotificationsState::default();
        push(&mut state, "only");

        apply(
            &mut state,
            NotificationsAction::MarkRead("missing".to_string()),
        );
        assert_eq!(state.unread_count(), 1);

        let id = state.entries[0].id.clone();
        apply(&mut state, NotificationsAction::MarkRead(id));
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn mark_all_read_leaves_no_unread() {
        let mut state = NotificationsState::default();
        for i in 0..5 {
            push(&mut state, &format!("event-{}", i));
        }

        apply(&mut state, NotificationsAction::MarkAllRead);
        assert_eq!(state.unread_count(), 0);
        assert_eq!(state.entries.len(), 5);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut state = NotificationsState::default();
        push(&mut state, "gone");

        apply(&mut state, NotificationsAction::Clear);
        assert!(state.entries.is_empty());
    }
}
