use std::fmt;

use uuid::Uuid;

use crate::{Error, Time, User};

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn generate() -> CommentId {
        CommentId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> CommentId {
        CommentId(String::from(s))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub created_at: Time,
    pub score: i64,
    pub user: User,

    /// Parent comment, `None` for a root comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replying_to: Option<CommentId>,
}

impl Comment {
    pub fn is_root(&self) -> bool {
        self.replying_to.is_none()
    }

    pub fn is_reply_to(&self, parent: &CommentId) -> bool {
        self.replying_to.as_ref() == Some(parent)
    }
}

/// Partial update of a comment: every field that is `Some` overwrites the
/// current value, every `None` leaves it untouched
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub content: Option<String>,
    pub score: Option<i64>,
}

impl CommentUpdate {
    pub fn content(id: CommentId, content: String) -> CommentUpdate {
        CommentUpdate {
            id,
            content: Some(content),
            score: None,
        }
    }

    pub fn score(id: CommentId, score: i64) -> CommentUpdate {
        CommentUpdate {
            id,
            content: None,
            score: Some(score),
        }
    }

    /// Trims the new content, refusing it if nothing is left
    pub fn validate(mut self) -> Result<CommentUpdate, Error> {
        if let Some(content) = self.content.take() {
            let content = content.trim();
            if content.is_empty() {
                return Err(Error::EmptyContent);
            }
            self.content = Some(String::from(content));
        }
        Ok(self)
    }

    pub fn apply_to(&self, c: &mut Comment) {
        if let Some(content) = &self.content {
            c.content = content.clone();
        }
        if let Some(score) = self.score {
            c.score = score;
        }
    }
}
