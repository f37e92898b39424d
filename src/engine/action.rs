use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Direction of one swipe gesture.
///
/// `Up` is the stronger positive signal. The minimal card UI only sends
/// left and right; up must still be representable for front-ends that do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
}

impl SwipeDirection {
    /// The action a swipe in this direction records.
    pub fn action(self) -> ActionKind {
        match self {
            SwipeDirection::Left => ActionKind::Pass,
            SwipeDirection::Right => ActionKind::Like,
            SwipeDirection::Up => ActionKind::SuperLike,
        }
    }
}

/// What a recorded swipe meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Like,
    Pass,
    SuperLike,
}

impl ActionKind {
    /// Positive actions are the only ones eligible for a match.
    pub fn is_positive(self) -> bool {
        matches!(self, ActionKind::Like | ActionKind::SuperLike)
    }
}

/// A record of one decision. Immutable once created; appended to a
/// session's history and only ever removed again by undo.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeAction {
    pub id: Uuid,
    /// Brand id of the session owner.
    pub from_id: String,
    /// Brand id the decision was about.
    pub to_id: String,
    pub kind: ActionKind,
    pub timestamp: DateTime<Utc>,
}

impl SwipeAction {
    /// Records a decision with a fresh unique id and the current time.
    pub fn record(from_id: &str, to_id: &str, kind: ActionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_id: from_id.to_string(),
            to_id: to_id.to_string(),
            kind,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_maps_to_action() {
        assert_eq!(SwipeDirection::Left.action(), ActionKind::Pass);
        assert_eq!(SwipeDirection::Right.action(), ActionKind::Like);
        assert_eq!(SwipeDirection::Up.action(), ActionKind::SuperLike);
    }

    #[test]
    fn only_pass_is_negative() {
        assert!(ActionKind::Like.is_positive());
        assert!(ActionKind::SuperLike.is_positive());
        assert!(!ActionKind::Pass.is_positive());
    }

    #[test]
    fn recorded_actions_get_unique_ids() {
        let a = SwipeAction::record("me", "them", ActionKind::Like);
        let b = SwipeAction::record("me", "them", ActionKind::Like);
        assert_ne!(a.id, b.id);
    }
}
