//! Public author profile at `/authors/:email` with the author's approved
//! articles.

#[cfg(test)]
#[path = "author_profile_test.rs"]
mod author_profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::article_card::ArticleCard;
use crate::config::ApiConfig;
use crate::net::types::{Article, AuthorProfile, email_local_part};
use crate::pages::article::initial;

/// Heading name: the profile's name, else the email's local part.
pub fn author_heading(profile: &AuthorProfile, email: &str) -> String {
    let name = profile.name.trim();
    if name.is_empty() { email_local_part(email).to_owned() } else { name.to_owned() }
}

pub fn bio_or_placeholder(profile: &AuthorProfile) -> String {
    let bio = profile.bio.trim();
    if bio.is_empty() { "No bio available.".to_owned() } else { bio.to_owned() }
}

#[component]
pub fn AuthorProfilePage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let params = use_params_map();

    let profile = RwSignal::new(None::<AuthorProfile>);
    let articles = RwSignal::new(Vec::<Article>::new());
    let error = RwSignal::new(None::<String>);

    let email = move || params.read().get("email").unwrap_or_default();

    Effect::new(move || {
        let email = email();
        profile.set(None);
        articles.set(Vec::new());
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let transport = crate::net::transport::BrowserTransport::new(config.get_value());
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_public_author(&transport, &email).await {
                    Ok(found) => {
                        profile.set(Some(found));
                        articles.set(crate::net::api::fetch_author_articles(&transport, &email).await);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (email, config);
    });

    view! {
        <div class="author-profile-page">
            {move || {
                if let Some(message) = error.get() {
                    return view! {
                        <div class="error-message">
                            <h2>"Error"</h2>
                            <p>{message}</p>
                            <a href="/" class="btn btn-primary">"Go to Homepage"</a>
                        </div>
                    }
                        .into_any();
                }
                let Some(found) = profile.get() else {
                    return view! { <div class="loading-indicator">"Loading author profile..."</div> }.into_any();
                };
                let name = author_heading(&found, &email());
                let avatar = found.profile_image.as_deref().and_then(|url| config.get_value().asset_url(url));
                let avatar_initial = initial(&name);
                let avatar_alt = name.clone();
                let articles_heading = format!("Articles by {name}");
                let bio = bio_or_placeholder(&found);
                let list = articles.get();

                view! {
                    <div class="author-header">
                        {match avatar {
                            Some(src) => view! {
                                <div class="author-profile-image"><img src=src alt=avatar_alt/></div>
                            }.into_any(),
                            None => view! { <div class="author-profile-initial">{avatar_initial}</div> }.into_any(),
                        }}
                        <div class="author-profile-details">
                            <h1 class="author-profile-name">{name}</h1>
                            <div class="author-profile-status">"Writer at Opennionated"</div>
                        </div>
                    </div>
                    <div class="author-bio">
                        <h2>"About"</h2>
                        <p>{bio}</p>
                    </div>
                    <div class="author-articles">
                        <h2>{articles_heading}</h2>
                        {if list.is_empty() {
                            view! {
                                <div class="no-articles">
                                    <p>"This author hasn't published any articles yet."</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="articles-grid">
                                    {list.into_iter().map(|article| view! { <ArticleCard article=article/> }).collect_view()}
                                </div>
                            }
                                .into_any()
                        }}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
