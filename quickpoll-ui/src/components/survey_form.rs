use leptos::prelude::*;

use quickpoll_app::domain::Poll;

#[component]
pub fn SurveyForm(
    poll: Poll,
    #[prop(into)] on_submit: Callback<Option<String>>,
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] validation_message: Signal<Option<String>>,
) -> impl IntoView {
    let choice = RwSignal::new(None::<String>);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(choice.get());
    };

    view! {
        <form class="survey-form" on:submit=on_form_submit>
            <div class="survey-form__options">
                {poll.options.iter().map(|option| {
                    let value = option.clone();
                    let checked_value = option.clone();
                    let selected_value = option.clone();
                    view! {
                        <label class="survey-form__option">
                            <input
                                type="radio"
                                name="vote"
                                value=value
                                prop:checked=move || {
                                    choice.get().as_deref() == Some(checked_value.as_str())
                                }
                                on:change=move |_| choice.set(Some(selected_value.clone()))
                            />
                            {option.clone()}
                        </label>
                    }
                }).collect::<Vec<_>>()}
            </div>
            {move || validation_message.get().map(|message| view! {
                <p class="survey-form__validation">{message}</p>
            })}
            <button
                type="submit"
                class="survey-form__button"
                prop:disabled=move || is_submitting.get()
            >
                {move || if is_submitting.get() { "Submitting..." } else { "Submit Vote" }}
            </button>
        </form>
    }
}
