//! Top navigation bar with session-aware links and logout.

use leptos::prelude::*;

use crate::app::SessionHandle;
use crate::state::session::Session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionHandle>();
    let menu_open = RwSignal::new(false);

    // Protected pages redirect themselves once the session signal clears.
    let on_logout = move |_: leptos::ev::MouseEvent| {
        store.with_value(|s| s.logout());
        menu_open.set(false);
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-logo">"Opennionated"</a>
            <button class="menu-icon" on:click=move |_| menu_open.update(|open| *open = !*open)>
                <span class="hamburger" class:hamburger-open=move || menu_open.get()></span>
            </button>
            <div class="navbar-links" class:active=move || menu_open.get()>
                <a href="/articles" class="navbar-link" on:click=move |_| menu_open.set(false)>
                    "Articles"
                </a>
                // Account links wait for restore to confirm any persisted token.
                <Show when=move || session.get().is_ready()>
                    <Show
                        when=move || session.get().is_signed_in()
                        fallback=move || {
                            view! {
                                <a href="/join" class="navbar-link navbar-button" on:click=move |_| menu_open.set(false)>
                                    "Join"
                                </a>
                            }
                        }
                    >
                        <a href="/dashboard" class="navbar-link" on:click=move |_| menu_open.set(false)>
                            "Dashboard"
                        </a>
                        <button class="navbar-link navbar-button" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </Show>
            </div>
        </nav>
    }
}
