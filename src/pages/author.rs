//! Author desk, reachable only with a server-confirmed author profile.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::types::AuthorProfile;
use crate::state::session::Session;

#[component]
pub fn AuthorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ApiConfig>();

    let profile = RwSignal::new(None::<AuthorProfile>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    if let Some(token) = session.get_untracked().token {
        let transport = crate::net::transport::BrowserTransport::new(config);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_author_profile(&transport, &token).await {
                Ok(p) => profile.set(Some(p)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    let author_name = move || session.get().user.map(|u| u.name).unwrap_or_default();

    view! {
        <div class="author-page">
            <h1>"Author desk"</h1>
            <p class="author-name">{author_name}</p>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                profile
                    .get()
                    .map(|p| {
                        view! {
                            <section class="author-profile">
                                {p.profile_image.map(|src| view! { <img class="author-avatar" src=src alt="Author"/> })}
                                <p class="profile-bio">{p.bio}</p>
                            </section>
                        }
                    })
            }}
            <a href="/dashboard" class="btn">"Back to dashboard"</a>
        </div>
    }
}
