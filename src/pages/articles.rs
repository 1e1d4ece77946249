//! Public list of published articles, newest first.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::config::ApiConfig;
use crate::net::types::Article;

#[component]
pub fn ArticlesListPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let articles = RwSignal::new(None::<Vec<Article>>);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let transport = crate::net::transport::BrowserTransport::new(config);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_articles(&transport).await {
                Ok(list) => articles.set(Some(list)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <div class="articles-list-page">
            <div class="articles-header">
                <h1>"Latest Articles"</h1>
                <p class="articles-subtitle">"Explore thoughtful perspectives from the Penn community"</p>
            </div>
            {move || {
                if let Some(message) = error.get() {
                    return view! {
                        <div class="articles-error">
                            <h2>"Error"</h2>
                            <p>{message}</p>
                            <a href="/" class="btn btn-primary">"Go to Homepage"</a>
                        </div>
                    }
                        .into_any();
                }
                match articles.get() {
                    None => view! { <h2 class="articles-loading">"Loading articles..."</h2> }.into_any(),
                    Some(list) if list.is_empty() => {
                        view! {
                            <div class="no-articles">
                                <h2>"No articles found"</h2>
                                <p>"Be the first to contribute by writing an article!"</p>
                                <a href="/author" class="btn btn-primary">"Write an Article"</a>
                            </div>
                        }
                            .into_any()
                    }
                    Some(list) => {
                        view! {
                            <div class="articles-grid">
                                {list
                                    .into_iter()
                                    .map(|article| view! { <ArticleCard article=article show_author=true/> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
