use crate::{CommentId, CommentUpdate};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    pub fn apply(self, score: i64) -> i64 {
        match self {
            Vote::Up => score.saturating_add(1),
            Vote::Down => score.saturating_sub(1),
        }
    }
}

/// A user intent, emitted by the UI and applied to the comment store
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    CreateComment {
        content: String,
        replying_to: Option<CommentId>,
    },
    UpdateComment(CommentUpdate),
    Vote(CommentId, Vote),
    DeleteComment(CommentId),
}
