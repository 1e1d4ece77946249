//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config::ApiConfig;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    article::ArticlePage, articles::ArticlesListPage, author::AuthorPage, author_profile::AuthorProfilePage,
    dashboard::DashboardPage, home::HomePage, join::JoinPage, profile::ProfilePage,
};
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;
use crate::util::analytics::{AnalyticsSink, LogAnalytics};
use crate::util::guard::ProtectedRoute;

/// Session store wired to the browser network stack and `localStorage`.
pub type AppSessionStore = SessionStore<BrowserTransport, BrowserStorage>;

/// Context handle for the store. The store is `!Send`, so it lives in local
/// arena storage; pages call `get_value()` to obtain a clone for async work.
pub type SessionHandle = StoredValue<AppSessionStore, LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the one session store for this client, mirrors it into a
/// `RwSignal<Session>` for reactive readers, and starts the restore sequence.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_build_env();
    let store = AppSessionStore::new(
        BrowserTransport::new(config.clone()),
        BrowserStorage,
        Rc::new(LogAnalytics),
    );

    let session = RwSignal::new(store.session());
    store.subscribe(move |snapshot| session.set(snapshot.clone()));

    #[cfg(feature = "hydrate")]
    {
        let restoring = store.clone();
        leptos::task::spawn_local(async move { restoring.restore().await });
    }

    provide_context(config);
    provide_context(session);
    provide_context::<SessionHandle>(StoredValue::new_local(store));

    view! {
        <Stylesheet id="leptos" href="/pkg/opennionated.css"/>
        <Title text="Opennionated"/>

        <Router>
            <PageViewTracker/>
            <Navbar/>
            <main class="main-content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("articles") view=ArticlesListPage/>
                    <Route path=(StaticSegment("articles"), ParamSegment("slug")) view=ArticlePage/>
                    <Route path=(StaticSegment("authors"), ParamSegment("email")) view=AuthorProfilePage/>
                    <Route path=StaticSegment("join") view=JoinPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("author")
                        view=|| view! { <ProtectedRoute require_author=true><AuthorPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Reports a page view whenever the route path changes.
#[component]
fn PageViewTracker() -> impl IntoView {
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        LogAnalytics.page_view(&path);
    });
}
