use crate::CommentId;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Comment not found {0}")]
    CommentNotFound(CommentId),

    #[error("Comment content is empty")]
    EmptyContent,
}
