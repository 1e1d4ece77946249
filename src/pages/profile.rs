//! Profile page: edit display name, email, and newsletter subscription.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::net::types::{ProfileUpdate, User};
use crate::state::session::Session;

/// Build an update holding only the fields that differ from `current`.
pub fn profile_changes(current: &User, name: &str, email: &str, subscribed: bool) -> ProfileUpdate {
    let name = name.trim();
    let email = email.trim();
    ProfileUpdate {
        name: (!name.is_empty() && name != current.name).then(|| name.to_owned()),
        email: (!email.is_empty() && email != current.email).then(|| email.to_owned()),
        subscribed: (subscribed != current.subscribed).then_some(subscribed),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionHandle>();

    let current = session.get_untracked().user.unwrap_or_default();
    let name = RwSignal::new(current.name);
    let email = RwSignal::new(current.email);
    let subscribed = RwSignal::new(current.subscribed);
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = session.get_untracked().user.unwrap_or_default();
        let update = profile_changes(&current, &name.get(), &email.get(), subscribed.get());
        if update == ProfileUpdate::default() {
            message.set(Some("Nothing to update".to_owned()));
            return;
        }
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match store.get_value().update_profile(&update).await {
                Ok(_) => message.set(Some("Profile updated successfully!".to_owned())),
                Err(e) => message.set(Some(e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (store, update);
    };

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>
            <form class="profile-form" on:submit=on_submit>
                <label for="profile-name">"Display Name"</label>
                <input
                    id="profile-name"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <label for="profile-email">"Email"</label>
                <input
                    id="profile-email"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || subscribed.get()
                        on:change=move |ev| subscribed.set(event_target_checked(&ev))
                    />
                    "Subscribe to our newsletter"
                </label>
                <Show when=move || message.get().is_some()>
                    <p class="profile-message">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        </div>
    }
}
