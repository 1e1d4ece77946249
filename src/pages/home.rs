//! Public landing page.

use leptos::prelude::*;

use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <div class="home-page">
            <h1>"Opennionated"</h1>
            <p class="home-tagline">"Student voices from across Penn."</p>
            <div class="home-actions">
                <a href="/articles" class="btn btn-secondary">"Read the latest articles"</a>
                <Show when=move || session.get().is_ready()>
                    <Show
                        when=move || session.get().is_signed_in()
                        fallback=|| view! { <a href="/join" class="btn btn-primary">"Join the conversation"</a> }
                    >
                        <a href="/dashboard" class="btn btn-primary">"Go to your dashboard"</a>
                    </Show>
                </Show>
            </div>
        </div>
    }
}
