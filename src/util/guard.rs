//! Route guard for authenticated and author-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in [`ProtectedRoute`], which applies
//! [`guard_decision`] to the live session. Nothing protected renders until the
//! session is `Ready`; an unverified author hint shows the placeholder while
//! the store re-checks it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::SessionHandle;
use crate::state::session::Session;

pub const JOIN_PATH: &str = "/join";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// What a protected route should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not ready yet; render only a neutral placeholder.
    Loading,
    /// Author hint present but unconfirmed; placeholder while re-checking.
    VerifyAuthor,
    /// Signed out; go to the join page, remembering the requested path.
    RedirectToJoin { from: String },
    /// Signed in but not an author.
    RedirectToDashboard,
    Render,
}

/// Decide how a protected route handles `session`.
pub fn guard_decision(session: &Session, require_author: bool, requested_path: &str) -> GuardDecision {
    if !session.is_ready() {
        return GuardDecision::Loading;
    }
    if !session.is_authenticated() {
        return GuardDecision::RedirectToJoin { from: requested_path.to_owned() };
    }
    if require_author && !session.is_confirmed_author() {
        if session.is_author {
            return GuardDecision::VerifyAuthor;
        }
        return GuardDecision::RedirectToDashboard;
    }
    GuardDecision::Render
}

/// Join-page URL carrying the originally requested path in `from`.
pub fn join_redirect_path(from: &str) -> String {
    if is_local_path(from) {
        format!("{JOIN_PATH}?from={from}")
    } else {
        JOIN_PATH.to_owned()
    }
}

/// Where to go after signing in: the remembered local path, else the dashboard.
pub fn post_login_destination(from: Option<&str>) -> String {
    match from {
        Some(path) if is_local_path(path) && path != JOIN_PATH => path.to_owned(),
        _ => DASHBOARD_PATH.to_owned(),
    }
}

/// Same-origin absolute path (rejects `//host` and scheme URLs).
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains(['&', '#', '\\'])
}

/// Renders `children` only when the session passes the guard; redirects otherwise.
#[component]
pub fn ProtectedRoute(
    /// Also require a server-confirmed author profile.
    #[prop(optional)]
    require_author: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionHandle>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| guard_decision(&session.get(), require_author, &location.pathname.get()));

    Effect::new(move || {
        let replace = NavigateOptions { replace: true, ..NavigateOptions::default() };
        match decision.get() {
            GuardDecision::RedirectToJoin { from } => navigate(&join_redirect_path(&from), replace),
            GuardDecision::RedirectToDashboard => navigate(DASHBOARD_PATH, replace),
            GuardDecision::VerifyAuthor => {
                #[cfg(feature = "hydrate")]
                {
                    let store = store.get_value();
                    leptos::task::spawn_local(async move { store.revalidate_author().await });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = store;
            }
            GuardDecision::Loading | GuardDecision::Render => {}
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
