//! Dashboard: the signed-in landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the user's account and author status. Non-authors can create an
//! author profile here; once the server confirms creation the session's author
//! flag is updated locally, avoiding a second round trip.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::config::ApiConfig;
use crate::net::types::AuthorProfileDraft;
use crate::state::session::Session;

pub const MAX_BIO_CHARS: usize = 500;

/// Check the author bio and build the creation request.
///
/// # Errors
///
/// Returns the inline message to show when the bio is empty or too long.
pub fn validate_bio(bio: &str) -> Result<AuthorProfileDraft, &'static str> {
    let bio = bio.trim();
    if bio.is_empty() {
        return Err("Tell readers a little about yourself");
    }
    if bio.chars().count() > MAX_BIO_CHARS {
        return Err("Bio must be 500 characters or fewer");
    }
    Ok(AuthorProfileDraft { bio: bio.to_owned(), profile_image: None })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionHandle>();
    let config = StoredValue::new(expect_context::<ApiConfig>());

    let bio = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let display_name = move || {
        session
            .get()
            .user
            .map(|u| if u.name.is_empty() { u.email } else { u.name })
            .unwrap_or_default()
    };
    let is_author = move || session.get().is_confirmed_author();

    let on_become_author = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_bio(&bio.get()) {
            Ok(draft) => draft,
            Err(e) => {
                message.set(Some(e.to_owned()));
                return;
            }
        };
        let Some(token) = session.get_untracked().token else {
            return;
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        {
            let transport = crate::net::transport::BrowserTransport::new(config.get_value());
            leptos::task::spawn_local(async move {
                match crate::net::api::create_author_profile(&transport, &token, &draft).await {
                    Ok(_) => {
                        store.get_value().update_author_status(true);
                        bio.set(String::new());
                        message.set(Some("Author profile created successfully!".to_owned()));
                    }
                    Err(e) => message.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (config, store, token, draft);
    };

    view! {
        <div class="dashboard-page">
            <h1>"Welcome, " {display_name}</h1>
            <section class="dashboard-card">
                <h2>"Account"</h2>
                <p>{move || session.get().user.map(|u| u.email).unwrap_or_default()}</p>
                <a href="/profile" class="btn">"Edit profile"</a>
            </section>

            <Show
                when=is_author
                fallback=move || {
                    view! {
                        <section class="dashboard-card">
                            <h2>"Become an author"</h2>
                            <p>"Create an author profile to start submitting articles."</p>
                            <form class="author-form" on:submit=on_become_author>
                                <label for="bio">"Bio"</label>
                                <textarea
                                    id="bio"
                                    maxlength="500"
                                    prop:value=move || bio.get()
                                    on:input=move |ev| bio.set(event_target_value(&ev))
                                ></textarea>
                                <button class="btn btn-primary" type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Creating..." } else { "Create author profile" }}
                                </button>
                            </form>
                        </section>
                    }
                }
            >
                <section class="dashboard-card">
                    <h2>"Author"</h2>
                    <p>"Your author profile is active."</p>
                    <a href="/author" class="btn btn-primary">"Author desk"</a>
                </section>
            </Show>

            <Show when=move || message.get().is_some()>
                <p class="dashboard-message">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
