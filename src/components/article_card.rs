//! Article summary card used by the article list and author pages.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::types::Article;
use crate::util::analytics::{AnalyticsEvent, AnalyticsSink, LogAnalytics};

#[component]
pub fn ArticleCard(article: Article, #[prop(optional)] show_author: bool) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let image = article.image.as_deref().and_then(|url| config.asset_url(url));
    let href = format!("/articles/{}", article.slug);
    let author_href = format!("/authors/{}", article.author_email);
    let excerpt = article.excerpt();
    let byline = article.author_display_name();
    let published = article.published_on().to_owned();
    let title = article.title;
    let alt = title.clone();
    let clicked_title = title.clone();

    view! {
        <div class="article-card">
            {match image {
                Some(src) => view! {
                    <div class="article-card-image">
                        <img src=src alt=alt/>
                    </div>
                }.into_any(),
                None => view! { <div class="article-card-image-placeholder"></div> }.into_any(),
            }}
            <div class="article-card-content">
                <h2>{title}</h2>
                <p class="article-card-description">{excerpt}</p>
                <div class="article-card-meta">
                    {show_author.then(|| view! {
                        <span class="article-card-author">
                            <a href=author_href>
                                <span class="author-prefix">"By "</span>
                                {byline}
                            </a>
                        </span>
                        <span class="date-separator">"·"</span>
                    })}
                    <span class="article-card-date">{published}</span>
                </div>
                <a
                    href=href
                    class="btn btn-secondary"
                    on:click=move |_| LogAnalytics.track(&AnalyticsEvent::read_more(&clicked_title))
                >
                    "Read More"
                </a>
            </div>
        </div>
    }
}
