//! Join page: account registration and sign-in.
//!
//! Signed-in visitors are sent on to the `from` destination recorded by the
//! route guard, or the dashboard, once the session is `Ready`. Failed submissions show the server message
//! inline and stay on the page.

#[cfg(test)]
#[path = "join_test.rs"]
mod join_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::SessionHandle;
use crate::net::types::Registration;
use crate::state::session::Session;
use crate::util::guard::post_login_destination;

pub const CAMPUS_EMAIL_DOMAIN: &str = "upenn.edu";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum JoinTab {
    Register,
    Login,
}

/// Raw register-form fields before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub subscribed: bool,
}

/// Check the register form and build the request.
///
/// # Errors
///
/// Returns the inline message to show when the form is invalid.
pub fn validate_registration(draft: &RegisterDraft) -> Result<Registration, &'static str> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    if name.is_empty() || email.is_empty() || draft.password.is_empty() {
        return Err("Please fill in every field");
    }
    if draft.password != draft.confirm_password {
        return Err("Passwords don't match");
    }
    if !email.ends_with(CAMPUS_EMAIL_DOMAIN) {
        return Err("Please use a valid Penn email address");
    }
    let mut registration = Registration::new(name, email, draft.password.clone());
    registration.subscribed = draft.subscribed;
    Ok(registration)
}

/// Check the login form.
///
/// # Errors
///
/// Returns the inline message to show when a field is missing.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn JoinPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionHandle>();
    let query = use_query_map();
    let navigate = use_navigate();

    let tab = RwSignal::new(JoinTab::Register);
    let draft = RwSignal::new(RegisterDraft { subscribed: true, ..RegisterDraft::default() });
    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());
    let register_error = RwSignal::new(None::<String>);
    let login_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if session.get().is_signed_in() {
            let from = query.get().get("from");
            navigate(&post_login_destination(from.as_deref()), NavigateOptions::default());
        }
    });

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        register_error.set(None);
        let registration = match validate_registration(&draft.get()) {
            Ok(registration) => registration,
            Err(message) => {
                register_error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = store.get_value().register(&registration).await {
                register_error.set(Some(e.to_string()));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (store, registration);
    };

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        login_error.set(None);
        let (email, password) = match validate_login(&login_email.get(), &login_password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                login_error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = store.get_value().login(&email, &password).await {
                login_error.set(Some(e.to_string()));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (store, email, password);
    };

    view! {
        <div class="join-page">
            <div class="join-container">
                <h1 class="join-title">"Welcome to Opennionated"</h1>
                <p class="join-subtitle">
                    {move || match tab.get() {
                        JoinTab::Register => "Create an account to share your Penn perspective",
                        JoinTab::Login => "Sign in to continue the conversation",
                    }}
                </p>
                <div class="join-tabs">
                    <button
                        class="join-tab"
                        class:active=move || tab.get() == JoinTab::Register
                        on:click=move |_| tab.set(JoinTab::Register)
                    >
                        "Register"
                    </button>
                    <button
                        class="join-tab"
                        class:active=move || tab.get() == JoinTab::Login
                        on:click=move |_| tab.set(JoinTab::Login)
                    >
                        "Login"
                    </button>
                </div>

                <Show when=move || tab.get() == JoinTab::Register>
                    <form class="join-form" on:submit=on_register>
                        <label for="name">"Display Name"</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Name you want displayed publicly"
                            prop:value=move || draft.get().name
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                        <label for="email">"Penn Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="youremail@upenn.edu"
                            prop:value=move || draft.get().email
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            minlength="8"
                            prop:value=move || draft.get().password
                            on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                        />
                        <label for="confirm-password">"Confirm Password"</label>
                        <input
                            id="confirm-password"
                            type="password"
                            prop:value=move || draft.get().confirm_password
                            on:input=move |ev| draft.update(|d| d.confirm_password = event_target_value(&ev))
                        />
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.get().subscribed
                                on:change=move |ev| draft.update(|d| d.subscribed = event_target_checked(&ev))
                            />
                            "Subscribe to our newsletter"
                        </label>
                        <Show when=move || register_error.get().is_some()>
                            <div class="form-error">{move || register_error.get().unwrap_or_default()}</div>
                        </Show>
                        <button class="join-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || tab.get() == JoinTab::Login>
                    <form class="join-form" on:submit=on_login>
                        <label for="login-email">"Email"</label>
                        <input
                            id="login-email"
                            type="email"
                            prop:value=move || login_email.get()
                            on:input=move |ev| login_email.set(event_target_value(&ev))
                        />
                        <label for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            prop:value=move || login_password.get()
                            on:input=move |ev| login_password.set(event_target_value(&ev))
                        />
                        <Show when=move || login_error.get().is_some()>
                            <div class="form-error">{move || login_error.get().unwrap_or_default()}</div>
                        </Show>
                        <button class="join-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
