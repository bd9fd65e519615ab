use leptos::prelude::*;
use leptos::task::spawn_local;

use quickpoll_app::application::{SubmissionState, VoteStorage};
use quickpoll_app::WidgetContext;
use quickpoll_errors::AppError;

use crate::components::{ResultsPanel, SurveyForm};

/// Which of the two mutually exclusive views is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Survey,
    Results,
}

fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<WidgetContext>();

    let initial = if ctx.store.has_voted() {
        ViewMode::Results
    } else {
        ViewMode::Survey
    };
    let view_mode = RwSignal::new(initial);
    let submission = RwSignal::new(SubmissionState::Idle);
    let validation = RwSignal::new(None::<String>);

    let on_submit = Callback::new({
        let ctx = ctx.clone();
        move |choice: Option<String>| {
            if !submission.get_untracked().accepts_submission() {
                return;
            }

            // Guards run before any state transition or network traffic.
            match ctx.cast_vote.check(choice.as_deref()) {
                Err(AppError::AlreadyVoted) => {
                    notify(AppError::AlreadyVoted.user_message());
                    view_mode.set(ViewMode::Results);
                    return;
                }
                Err(err) => {
                    validation.set(Some(err.user_message().to_string()));
                    return;
                }
                Ok(_) => {}
            }

            validation.set(None);
            submission.set(SubmissionState::Submitting);

            let cast_vote = ctx.cast_vote.clone();
            spawn_local(async move {
                match cast_vote.execute(choice.as_deref()).await {
                    Ok(()) => {
                        submission.set(SubmissionState::Succeeded);
                        notify("Thank you! Your vote has been recorded.");
                        view_mode.set(ViewMode::Results);
                    }
                    Err(err) => {
                        tracing::error!("vote submission failed: {err}");
                        submission.set(SubmissionState::Failed);
                        notify(err.user_message());
                    }
                }
            });
        }
    });

    let poll = ctx.poll.clone();
    let question = poll.question.clone();

    view! {
        <div class="widget">
            <h1 class="widget__title">{question}</h1>
            <Show
                when=move || view_mode.get() == ViewMode::Results
                fallback=move || view! {
                    <SurveyForm
                        poll=poll.clone()
                        on_submit=on_submit
                        is_submitting=Signal::derive(move || submission.get().is_submitting())
                        validation_message=validation
                    />
                }
            >
                <ResultsPanel/>
            </Show>
        </div>
    }
}
