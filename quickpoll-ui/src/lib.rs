pub mod components;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use quickpoll_app::application::VoteStorage;
use quickpoll_app::infrastructure::storage::LocalVoteStore;
use quickpoll_app::WidgetContext;

use pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(WidgetContext::from_config());

    view! {
        <Title text="QuickPoll | One-question survey"/>
        <Meta name="description" content="Cast your vote and watch the results live"/>

        <Router>
            <main class="container">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Console escape hatch for re-enabling voting in this browser: run
/// `resetVote()` from the devtools console, then the page reloads into the
/// survey view. The identity token is left intact.
#[wasm_bindgen::prelude::wasm_bindgen(js_name = resetVote)]
pub fn reset_vote() {
    if let Err(err) = LocalVoteStore::new().reset() {
        tracing::error!("vote reset failed: {err}");
        return;
    }
    tracing::info!("vote reset");
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
