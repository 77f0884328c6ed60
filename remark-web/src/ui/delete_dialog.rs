use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct DeleteDialogProps {
    pub open: bool,
    pub on_cancel: Callback<()>,
    pub on_confirm: Callback<()>,
}

#[function_component(DeleteDialog)]
pub fn delete_dialog(p: &DeleteDialogProps) -> Html {
    if !p.open {
        return html! {};
    }
    html! {
        <div class="dialog-backdrop" onclick={ p.on_cancel.reform(|_| ()) }>
            <div
                class="dialog-panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby="delete-dialog-title"
                onclick={ Callback::from(|e: MouseEvent| e.stop_propagation()) }
            >
                <h2 id="delete-dialog-title">{ "Delete comment" }</h2>
                <p class="dialog-description">
                    { "Are you sure you want to delete this comment? This will remove the comment and can't be undone." }
                </p>
                <div class="dialog-buttons">
                    <button type="button" class="btn btn-cancel" onclick={ p.on_cancel.reform(|_| ()) }>
                        { "NO, CANCEL" }
                    </button>
                    <button type="button" class="btn btn-danger" onclick={ p.on_confirm.reform(|_| ()) }>
                        { "YES, DELETE" }
                    </button>
                </div>
            </div>
        </div>
    }
}
