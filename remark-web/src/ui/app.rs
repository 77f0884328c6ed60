use remark_client::{api::Action, CommentStore};
use yew::prelude::*;

use crate::{storage::BrowserStorage, ui};

pub enum AppMsg {
    NewUserAction(Action),
}

pub struct App {
    store: CommentStore<BrowserStorage>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            store: CommentStore::initialize(BrowserStorage),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::NewUserAction(a) => {
                tracing::debug!("got new user action {a:?}");
                if let Err(err) = self.store.apply(a) {
                    tracing::warn!(%err, "user action had no effect");
                    return false;
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <main class="comments">
                <ui::CommentSection
                    db={ self.store.dump() }
                    on_action={ ctx.link().callback(AppMsg::NewUserAction) }
                />
            </main>
        }
    }
}
