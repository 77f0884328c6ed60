use remark_client::api::Vote;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ScoreProps {
    pub score: i64,
    pub on_vote: Callback<Vote>,
}

#[function_component(Score)]
pub fn score(p: &ScoreProps) -> Html {
    html! {
        <section class="score">
            <button
                type="button"
                class="score-btn"
                aria-label="Upvote"
                onclick={ p.on_vote.reform(|_| Vote::Up) }
            >
                { "+" }
            </button>
            <span class="score-value">{ p.score }</span>
            <button
                type="button"
                class="score-btn"
                aria-label="Downvote"
                onclick={ p.on_vote.reform(|_| Vote::Down) }
            >
                { "−" }
            </button>
        </section>
    }
}
