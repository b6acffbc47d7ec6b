use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo_net::http::Request;
use serde::Serialize;
use gloo_console::log;
use crate::config;

#[derive(Serialize)]
struct SubscribeRequest {
    first_name: String,
    last_name: String,
    email: String,
}

const NOTICE_DISMISS_MS: u32 = 4_000;

/// Newsletter signup form. Field ids and order (first-name, last-name,
/// email) are part of the page contract; the subscribe endpoint lives
/// outside this repo.
#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let error_setter = error.clone();
        let success_setter = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let first_name_value = (*first_name).clone();
            let last_name_value = (*last_name).clone();
            let email_value = (*email).clone();
            let first_name = first_name.clone();
            let last_name = last_name.clone();
            let email = email.clone();
            let error_setter = error_setter.clone();
            let success_setter = success_setter.clone();

            if email_value.trim().is_empty() {
                error_setter.set(Some("Please enter your email address.".to_string()));
                let error_setter = error_setter.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                    error_setter.set(None);
                });
                return;
            }

            wasm_bindgen_futures::spawn_local(async move {
                match Request::post(&format!(
                    "{}/api/newsletter/subscribe",
                    config::get_backend_url()
                ))
                .json(&SubscribeRequest {
                    first_name: first_name_value,
                    last_name: last_name_value,
                    email: email_value,
                })
                .unwrap()
                .send()
                .await
                {
                    Ok(resp) if resp.ok() => {
                        error_setter.set(None);
                        success_setter
                            .set(Some("Thanks for subscribing! Welcome to the community.".to_string()));
                        first_name.set(String::new());
                        last_name.set(String::new());
                        email.set(String::new());
                    }
                    Ok(resp) => {
                        log!("Subscribe request failed with status:", resp.status());
                        error_setter
                            .set(Some("Subscription failed, please try again later.".to_string()));
                    }
                    Err(e) => {
                        log!("Subscribe request failed:", e.to_string());
                        error_setter
                            .set(Some("Subscription failed, please try again later.".to_string()));
                    }
                }

                gloo_timers::future::TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                error_setter.set(None);
                success_setter.set(None);
            });
        })
    };

    html! {
        <form class="newsletter-form" onsubmit={onsubmit}>
            {
                if let Some(error_message) = (*error).as_ref() {
                    html! { <div class="form-notice error">{error_message}</div> }
                } else if let Some(success_message) = (*success).as_ref() {
                    html! { <div class="form-notice success">{success_message}</div> }
                } else {
                    html! {}
                }
            }
            <div class="name-row">
                <div>
                    <label for="first-name" class="sr-only">{"First Name"}</label>
                    <input
                        id="first-name"
                        type="text"
                        placeholder="First Name"
                        value={(*first_name).clone()}
                        onchange={let first_name = first_name.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            first_name.set(input.value());
                        }}
                    />
                </div>
                <div>
                    <label for="last-name" class="sr-only">{"Last Name"}</label>
                    <input
                        id="last-name"
                        type="text"
                        placeholder="Last Name"
                        value={(*last_name).clone()}
                        onchange={let last_name = last_name.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            last_name.set(input.value());
                        }}
                    />
                </div>
            </div>
            <div>
                <label for="email" class="sr-only">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    placeholder="Your Email Address"
                    value={(*email).clone()}
                    onchange={let email = email.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
            </div>
            <button type="submit" class="subscribe-button">{"Subscribe"}</button>
        </form>
    }
}
