use std::rc::Rc;

use remark_client::{api::Action, DataDump};
use yew::prelude::*;

use crate::ui::{CommentCard, CommentInput, InputMode};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentSectionProps {
    pub db: Rc<DataDump>,
    pub on_action: Callback<Action>,
}

#[function_component(CommentSection)]
pub fn comment_section(p: &CommentSectionProps) -> Html {
    html! {
        <section class="comment-list comment-section">
            <section class="comment-list">
                { for p.db.root_comments().into_iter().map(|c| html! {
                    <CommentCard
                        key={ c.id.to_string() }
                        db={ p.db.clone() }
                        id={ c.id.clone() }
                        on_action={ p.on_action.clone() }
                    />
                }) }
            </section>
            <CommentInput
                current_user={ p.db.current_user.clone() }
                mode={ InputMode::Create { replying_to: None } }
                placeholder="Add a comment…"
                on_action={ p.on_action.clone() }
            />
        </section>
    }
}
