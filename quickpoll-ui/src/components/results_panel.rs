use leptos::prelude::*;
use leptos::task::spawn_local;

use quickpoll_app::domain::Tally;
use quickpoll_app::WidgetContext;

use super::{ErrorDisplay, LoadingSpinner, PieChart};

#[derive(Debug, Clone, PartialEq)]
enum ResultsState {
    Loading,
    Empty,
    Loaded(Tally),
    Failed(String),
}

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let ctx = expect_context::<WidgetContext>();
    let state = RwSignal::new(ResultsState::Loading);

    let load = Callback::new({
        let ctx = ctx.clone();
        move |_: ()| {
            let load_results = ctx.load_results.clone();
            state.set(ResultsState::Loading);
            spawn_local(async move {
                match load_results.execute().await {
                    Ok(tally) if tally.is_empty() => state.set(ResultsState::Empty),
                    Ok(tally) => state.set(ResultsState::Loaded(tally)),
                    Err(err) => {
                        tracing::error!("failed to load results: {err}");
                        state.set(ResultsState::Failed(err.user_message().to_string()));
                    }
                }
            });
        }
    });

    // Every mount of the results view fetches a fresh tally.
    load.run(());

    view! {
        <section class="results">
            <h2 class="results__title">"Results"</h2>
            {move || match state.get() {
                ResultsState::Loading => view! { <LoadingSpinner/> }.into_any(),
                ResultsState::Empty => view! {
                    <p class="results__count">"No votes yet. Be the first to vote!"</p>
                }.into_any(),
                ResultsState::Failed(message) => view! {
                    <ErrorDisplay message=message on_retry=load/>
                }.into_any(),
                ResultsState::Loaded(tally) => {
                    let total = tally.total();
                    view! {
                        <p class="results__count">"Total Votes: " {total}</p>
                        <PieChart tally=tally/>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
