mod app;
pub use app::{App, AppMsg};

mod comment_card;
pub use comment_card::CommentCard;

mod comment_input;
pub use comment_input::{CommentInput, InputMode};

mod comment_section;
pub use comment_section::CommentSection;

mod delete_dialog;
pub use delete_dialog::DeleteDialog;

mod score;
pub use score::Score;
