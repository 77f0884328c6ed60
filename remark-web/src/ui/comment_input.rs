use remark_client::api::{Action, CommentId, CommentUpdate, User};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq)]
pub enum InputMode {
    Create { replying_to: Option<CommentId> },
    Edit { id: CommentId, content: String },
}

#[derive(Clone, PartialEq, Properties)]
pub struct CommentInputProps {
    pub current_user: User,
    pub mode: InputMode,
    pub on_action: Callback<Action>,

    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::from("send"))]
    pub confirm_text: AttrValue,
    #[prop_or_default]
    pub auto_focus: bool,

    /// Called after the action was emitted
    #[prop_or_default]
    pub on_submitted: Option<Callback<()>>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

#[function_component(CommentInput)]
pub fn comment_input(p: &CommentInputProps) -> Html {
    let textarea_ref = use_node_ref();

    {
        let textarea_ref = textarea_ref.clone();
        use_effect_with_deps(
            move |auto_focus| {
                if *auto_focus {
                    if let Some(t) = textarea_ref.cast::<web_sys::HtmlTextAreaElement>() {
                        util::place_cursor_at_end(&t);
                    }
                }
                || ()
            },
            p.auto_focus,
        );
    }

    let on_submit = {
        let textarea_ref = textarea_ref.clone();
        let mode = p.mode.clone();
        let on_action = p.on_action.clone();
        let on_submitted = p.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let textarea = match textarea_ref.cast::<web_sys::HtmlTextAreaElement>() {
                Some(t) => t,
                None => return,
            };
            let content = textarea.value();
            if content.trim().is_empty() {
                return;
            }
            match &mode {
                InputMode::Create { replying_to } => {
                    on_action.emit(Action::CreateComment {
                        content,
                        replying_to: replying_to.clone(),
                    });
                    textarea.set_value("");
                }
                InputMode::Edit { id, .. } => {
                    on_action.emit(Action::UpdateComment(CommentUpdate::content(
                        id.clone(),
                        content,
                    )));
                }
            }
            if let Some(cb) = &on_submitted {
                cb.emit(());
            }
        })
    };

    let initial_value = match &p.mode {
        InputMode::Create { .. } => String::new(),
        InputMode::Edit { content, .. } => content.clone(),
    };

    html! {
        <form class="comment-input" onsubmit={ on_submit }>
            <textarea
                ref={ textarea_ref }
                name="content"
                required=true
                placeholder={ p.placeholder.clone() }
                value={ initial_value }
            />
            <img
                class="avatar"
                src={ p.current_user.image.png.clone() }
                width="50"
                height="50"
                alt="Your avatar"
            />
            <div class="comment-input-buttons">
                { for p.on_cancel.as_ref().map(|cb| html! {
                    <button type="button" class="btn" onclick={ cb.reform(|_| ()) }>
                        { "Cancel" }
                    </button>
                }) }
                <button type="submit" class="btn btn-primary">
                    { &*p.confirm_text }
                </button>
            </div>
        </form>
    }
}
