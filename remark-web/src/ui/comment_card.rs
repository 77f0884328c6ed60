use std::rc::Rc;

use remark_client::{
    api::{Action, CommentId, Vote},
    DataDump,
};
use yew::prelude::*;

use crate::{
    ui::{CommentInput, DeleteDialog, InputMode, Score},
    util,
};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentCardProps {
    pub db: Rc<DataDump>,
    pub id: CommentId,
    pub on_action: Callback<Action>,
}

#[function_component(CommentCard)]
pub fn comment_card(p: &CommentCardProps) -> Html {
    let show_reply = use_state(|| false);
    let show_edit = use_state(|| false);
    let delete_dialog_open = use_state(|| false);

    // the comment may have been deleted along with one of its parents
    let c = match p.db.comment(&p.id) {
        Some(c) => c,
        None => return html! {},
    };
    let is_own = p.db.is_own(c);
    let replies = p.db.replies(&p.id);

    let on_vote = {
        let id = p.id.clone();
        p.on_action.reform(move |v: Vote| Action::Vote(id.clone(), v))
    };
    let on_delete = {
        let id = p.id.clone();
        let delete_dialog_open = delete_dialog_open.clone();
        p.on_action.reform(move |()| {
            delete_dialog_open.set(false);
            Action::DeleteComment(id.clone())
        })
    };

    let body = match *show_edit {
        false => html! { <p class="comment-content">{ &c.content }</p> },
        true => html! {
            <CommentInput
                current_user={ p.db.current_user.clone() }
                mode={ InputMode::Edit { id: p.id.clone(), content: c.content.clone() } }
                confirm_text="update"
                auto_focus=true
                on_action={ p.on_action.clone() }
                on_submitted={ let s = show_edit.clone(); Callback::from(move |()| s.set(false)) }
                on_cancel={ let s = show_edit.clone(); Callback::from(move |()| s.set(false)) }
            />
        },
    };

    let buttons = (!*show_edit).then(|| {
        let own_buttons = is_own.then(|| html! {
            <>
                <button
                    type="button"
                    class="btn-link btn-danger"
                    onclick={ let d = delete_dialog_open.clone(); Callback::from(move |_| d.set(true)) }
                >
                    { "Delete" }
                </button>
                <button
                    type="button"
                    class="btn-link"
                    onclick={ let s = show_edit.clone(); Callback::from(move |_| s.set(true)) }
                >
                    { "Edit" }
                </button>
            </>
        });
        html! {
            <section class="comment-buttons">
                { for own_buttons }
                <button
                    type="button"
                    class="btn-link"
                    onclick={ let s = show_reply.clone(); Callback::from(move |_| s.set(!*s)) }
                >
                    { "Reply" }
                </button>
            </section>
        }
    });

    let reply_input = show_reply.then(|| html! {
        <CommentInput
            current_user={ p.db.current_user.clone() }
            mode={ InputMode::Create { replying_to: Some(p.id.clone()) } }
            placeholder="Add a reply…"
            confirm_text="reply"
            auto_focus=true
            on_action={ p.on_action.clone() }
            on_submitted={ let s = show_reply.clone(); Callback::from(move |()| s.set(false)) }
        />
    });

    let thread = (*show_reply || !replies.is_empty()).then(|| html! {
        <section class="comment-replies">
            <div class="comment-replies-rule"></div>
            <section class="comment-list">
                { for reply_input }
                { for replies.iter().map(|r| html! {
                    <CommentCard
                        key={ r.id.to_string() }
                        db={ p.db.clone() }
                        id={ r.id.clone() }
                        on_action={ p.on_action.clone() }
                    />
                }) }
            </section>
        </section>
    });

    html! {
        <>
            <article class="comment">
                <header class="comment-header">
                    <picture>
                        <source srcset={ c.user.image.webp.clone() } type="image/webp" />
                        <img
                            class="avatar"
                            src={ c.user.image.png.clone() }
                            alt={ format!("Avatar of {}", c.user.username) }
                            width="50"
                            height="50"
                        />
                    </picture>
                    <p>
                        <span class="username">{ &c.user.username }</span>
                        { for is_own.then(|| html! { <span class="you-badge">{ "you" }</span> }) }
                    </p>
                    <p class="comment-date">{ util::format_time(&c.created_at) }</p>
                </header>
                { body }
                <Score score={ c.score } { on_vote } />
                { for buttons }
            </article>
            { for thread }
            <DeleteDialog
                open={ *delete_dialog_open }
                on_cancel={ let d = delete_dialog_open.clone(); Callback::from(move |()| d.set(false)) }
                on_confirm={ on_delete }
            />
        </>
    }
}
