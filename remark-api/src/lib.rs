use chrono::{SubsecRound, Utc};

mod action;
pub use action::{Action, Vote};

mod comment;
pub use comment::{Comment, CommentId, CommentUpdate};

mod error;
pub use error::Error;

mod user;
pub use user::{User, UserImage};

pub type Time = chrono::DateTime<Utc>;

/// Current time, at the millisecond precision timestamps are persisted with
pub fn now() -> Time {
    Utc::now().trunc_subsecs(3)
}
