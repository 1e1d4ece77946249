//! Single article view at `/articles/:slug`.
//!
//! The body is shown as plain paragraphs. Unapproved articles are visible only
//! to their author, who also sees a pending-review banner.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::config::ApiConfig;
use crate::net::types::{Article, AuthorProfile};
use crate::state::session::Session;

/// Split an article body into paragraphs on blank lines.
pub fn body_paragraphs(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Uppercased first letter, for avatar placeholders.
pub fn initial(text: &str) -> String {
    text.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

/// Byline for a loaded article: the author profile's name when known.
pub fn byline(article: &Article, author: Option<&AuthorProfile>) -> String {
    match author.map(|a| a.name.trim()) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => article.author_display_name(),
    }
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let params = use_params_map();

    let article = RwSignal::new(None::<Article>);
    let author = RwSignal::new(None::<AuthorProfile>);
    let error = RwSignal::new(None::<String>);

    let slug = move || params.read().get("slug").unwrap_or_default();

    // Route changes reuse this component, so refetch per slug.
    Effect::new(move || {
        let slug = slug();
        article.set(None);
        author.set(None);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::util::analytics::{AnalyticsEvent, AnalyticsSink, LogAnalytics};

            let transport = crate::net::transport::BrowserTransport::new(config.get_value());
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_article(&transport, &slug).await {
                    Ok(loaded) => {
                        LogAnalytics.track(&AnalyticsEvent::article_view(&loaded.title));
                        let email = loaded.author_email.clone();
                        article.set(Some(loaded));
                        if let Ok(profile) = crate::net::api::fetch_public_author(&transport, &email).await {
                            author.set(Some(profile));
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (slug, config);
    });

    view! {
        <div class="article-page">
            {move || {
                if let Some(message) = error.get() {
                    return view! {
                        <div class="article-error">
                            <h2>"Error"</h2>
                            <p>{message}</p>
                            <a href="/" class="btn btn-primary">"Go to Homepage"</a>
                        </div>
                    }
                        .into_any();
                }
                let Some(loaded) = article.get() else {
                    return view! { <h2 class="article-loading">"Loading article..."</h2> }.into_any();
                };
                let viewer = session.get().user.map(|u| u.email);
                if !loaded.visible_to(viewer.as_deref()) {
                    return view! {
                        <div class="article-not-approved">
                            <h2>"Article Not Available"</h2>
                            <p>"This article is currently under review and not yet published."</p>
                            <a href="/" class="btn btn-primary">"Go to Homepage"</a>
                        </div>
                    }
                        .into_any();
                }
                render_article(&loaded, author.get().as_ref(), loaded.written_by(viewer.as_deref()), &config.get_value())
                    .into_any()
            }}
        </div>
    }
}

fn render_article(article: &Article, author: Option<&AuthorProfile>, own: bool, config: &ApiConfig) -> impl IntoView {
    let author_href = format!("/authors/{}", article.author_email);
    let avatar = author
        .and_then(|a| a.profile_image.as_deref())
        .and_then(|url| config.asset_url(url));
    let fallback_initial = initial(&article.author_email);
    let name = byline(article, author);
    let image = article.image.as_deref().and_then(|url| config.asset_url(url));
    let title = article.title.clone();
    let alt = title.clone();
    let paragraphs = body_paragraphs(&article.content);
    let tags = article.tags.clone();
    let approved = article.approved;
    let published = article.published_on().to_owned();

    view! {
        {(!approved && own).then(|| view! {
            <div class="article-status-banner">
                <p>"This article is still in the approval process and is only visible to you."</p>
            </div>
        })}
        <div class="article-header">
            <h1>{title}</h1>
            <div class="article-meta">
                <a href=author_href class="author-info">
                    {match avatar {
                        Some(src) => view! { <img src=src alt="Author" class="author-image"/> }.into_any(),
                        None => view! { <div class="author-initial">{fallback_initial}</div> }.into_any(),
                    }}
                    <span class="author-name">
                        <span class="author-prefix">"By "</span>
                        {name}
                    </span>
                    <span class="article-date">{published}</span>
                </a>
                {if approved {
                    view! { <span class="article-status approved">"Live"</span> }.into_any()
                } else {
                    view! { <span class="article-status pending">"In Approval Process"</span> }.into_any()
                }}
            </div>
        </div>
        {image.map(|src| view! {
            <div class="article-image">
                <img src=src alt=alt/>
            </div>
        })}
        <div class="article-content">
            {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
        </div>
        <div class="article-footer">
            <div class="article-tags">
                {tags.into_iter().map(|tag| view! { <span class="article-tag">{tag}</span> }).collect_view()}
            </div>
            {own.then(|| view! {
                <div class="article-actions">
                    <a href="/dashboard" class="btn btn-secondary">"Back to Dashboard"</a>
                </div>
            })}
        </div>
    }
}
