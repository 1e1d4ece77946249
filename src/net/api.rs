//! Backend REST endpoints used by the session, author, and article flows.
//!
//! Request builders are pure so the exact method/path/bearer/body of every
//! call can be asserted in tests; the async helpers at the bottom run a
//! request through any [`Transport`] and normalize failures into [`AuthError`].
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses carry the server's `message` when present, otherwise the
//! caller-supplied fallback. Transport failures always use the fallback; the
//! low-level detail is kept as the error source and logged.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::json;

use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::{
    Article, AuthorProfile, AuthorProfileDraft, Credentials, ErrorBody, ProfileUpdate, Registration, sort_newest_first,
};
use crate::error::AuthError;

pub const AUTH_ME_PATH: &str = "/api/auth/me";
pub const AUTH_LOGIN_PATH: &str = "/api/auth/login";
pub const AUTH_REGISTER_PATH: &str = "/api/auth/register";
pub const AUTHOR_PROFILE_PATH: &str = "/api/authors/profile";
pub const USER_PROFILE_PATH: &str = "/api/users/profile";
pub const ARTICLES_PATH: &str = "/api/articles";

pub const LOGIN_FAILED: &str = "Failed to login";
pub const REGISTER_FAILED: &str = "Failed to register";
pub const UPDATE_PROFILE_FAILED: &str = "Failed to update profile";
pub const CREATE_AUTHOR_PROFILE_FAILED: &str = "Failed to create author profile";
pub const FETCH_AUTHOR_PROFILE_FAILED: &str = "Failed to load author profile";
pub const FETCH_ARTICLES_FAILED: &str = "Failed to load articles";
pub const FETCH_ARTICLE_FAILED: &str = "Failed to fetch article";
pub const ARTICLE_NOT_FOUND: &str = "Article not found";
pub const AUTHOR_NOT_FOUND: &str = "Author not found";

pub fn current_user_request(token: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, AUTH_ME_PATH).bearer(token)
}

pub fn login_request(credentials: &Credentials) -> ApiRequest {
    ApiRequest::new(Method::Post, AUTH_LOGIN_PATH).json(json!(credentials))
}

pub fn register_request(registration: &Registration) -> ApiRequest {
    ApiRequest::new(Method::Post, AUTH_REGISTER_PATH).json(json!(registration))
}

pub fn author_profile_request(token: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, AUTHOR_PROFILE_PATH).bearer(token)
}

pub fn create_author_profile_request(token: &str, draft: &AuthorProfileDraft) -> ApiRequest {
    ApiRequest::new(Method::Post, AUTHOR_PROFILE_PATH)
        .bearer(token)
        .json(json!(draft))
}

pub fn update_profile_request(token: &str, update: &ProfileUpdate) -> ApiRequest {
    ApiRequest::new(Method::Put, USER_PROFILE_PATH)
        .bearer(token)
        .json(json!(update))
}

pub fn articles_request() -> ApiRequest {
    ApiRequest::new(Method::Get, ARTICLES_PATH)
}

pub fn article_request(slug: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("{ARTICLES_PATH}/{slug}"))
}

/// Public lookup of another user's author profile.
pub fn public_author_request(email: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("{AUTHOR_PROFILE_PATH}/{email}"))
}

/// Approved articles by one author.
pub fn author_articles_request(email: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("{ARTICLES_PATH}?author={email}&approved=true"))
}

/// Extract the server's `message` from an error body, or use `fallback`.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Like [`error_message`], appending field validation messages as
/// `"<message>: <msg>. <msg>"` when the body lists any.
pub fn validation_error_message(body: &str, fallback: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return fallback.to_owned();
    };
    let message = parsed
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());
    let details: Vec<&str> = parsed
        .errors
        .iter()
        .map(|e| e.msg.as_str())
        .filter(|m| !m.is_empty())
        .collect();
    if details.is_empty() {
        message
    } else {
        format!("{message}: {}", details.join(". "))
    }
}

/// Map a response to `Ok` on 2xx, otherwise a [`AuthError::Rejected`].
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] with the extracted message on non-2xx.
pub fn expect_success(resp: ApiResponse, fallback: &str) -> Result<ApiResponse, AuthError> {
    if resp.is_success() {
        Ok(resp)
    } else {
        Err(AuthError::Rejected {
            status: resp.status,
            message: error_message(&resp.body, fallback),
        })
    }
}

/// Decode a successful response body.
///
/// # Errors
///
/// Returns [`AuthError::InvalidResponse`] carrying `fallback` when decoding fails.
pub fn decode<T: DeserializeOwned>(resp: &ApiResponse, fallback: &str) -> Result<T, AuthError> {
    resp.json::<T>().map_err(|e| {
        leptos::logging::warn!("unexpected response body: {e}");
        AuthError::InvalidResponse { message: fallback.to_owned() }
    })
}

/// Send `request`, require a 2xx status, and decode the body as `T`.
///
/// # Errors
///
/// Returns [`AuthError`] on transport failure, non-2xx status, or a body that
/// does not decode.
pub async fn send_json<T, R>(transport: &T, request: ApiRequest, fallback: &str) -> Result<R, AuthError>
where
    T: Transport,
    R: DeserializeOwned,
{
    let resp = transport.send(request).await.map_err(|source| {
        leptos::logging::warn!("request failed: {source}");
        AuthError::Network { message: fallback.to_owned(), source }
    })?;
    let resp = expect_success(resp, fallback)?;
    decode(&resp, fallback)
}

/// Fetch the author profile for `token` via `GET /api/authors/profile`.
///
/// # Errors
///
/// Returns [`AuthError`] when the request fails or the user has no profile.
pub async fn fetch_author_profile<T: Transport>(transport: &T, token: &str) -> Result<AuthorProfile, AuthError> {
    send_json(transport, author_profile_request(token), FETCH_AUTHOR_PROFILE_FAILED).await
}

/// Create an author profile via `POST /api/authors/profile`.
///
/// # Errors
///
/// Returns [`AuthError`] whose message includes any field validation errors.
pub async fn create_author_profile<T: Transport>(
    transport: &T,
    token: &str,
    draft: &AuthorProfileDraft,
) -> Result<AuthorProfile, AuthError> {
    let request = create_author_profile_request(token, draft);
    let resp = transport.send(request).await.map_err(|source| {
        leptos::logging::warn!("author profile request failed: {source}");
        AuthError::Network { message: CREATE_AUTHOR_PROFILE_FAILED.to_owned(), source }
    })?;
    if !resp.is_success() {
        return Err(AuthError::Rejected {
            status: resp.status,
            message: validation_error_message(&resp.body, CREATE_AUTHOR_PROFILE_FAILED),
        });
    }
    decode(&resp, CREATE_AUTHOR_PROFILE_FAILED)
}

/// List articles via `GET /api/articles`, newest first.
///
/// # Errors
///
/// Returns [`AuthError`] with `"Failed to load articles"` on any failure.
pub async fn fetch_articles<T: Transport>(transport: &T) -> Result<Vec<Article>, AuthError> {
    let mut articles: Vec<Article> = send_json(transport, articles_request(), FETCH_ARTICLES_FAILED).await?;
    sort_newest_first(&mut articles);
    Ok(articles)
}

/// Fetch one article by slug. The message distinguishes a missing article
/// from any other failure; the server's own message is not shown.
///
/// # Errors
///
/// Returns [`AuthError`] with `"Article not found"` on 404, otherwise
/// `"Failed to fetch article"`.
pub async fn fetch_article<T: Transport>(transport: &T, slug: &str) -> Result<Article, AuthError> {
    let resp = transport.send(article_request(slug)).await.map_err(|source| {
        leptos::logging::warn!("article request failed: {source}");
        AuthError::Network { message: FETCH_ARTICLE_FAILED.to_owned(), source }
    })?;
    if !resp.is_success() {
        let message = if resp.status == 404 { ARTICLE_NOT_FOUND } else { FETCH_ARTICLE_FAILED };
        return Err(AuthError::Rejected { status: resp.status, message: message.to_owned() });
    }
    decode(&resp, FETCH_ARTICLE_FAILED)
}

/// Fetch the public author profile for `email`.
///
/// # Errors
///
/// Returns [`AuthError`] with `"Author not found"` on any failure.
pub async fn fetch_public_author<T: Transport>(transport: &T, email: &str) -> Result<AuthorProfile, AuthError> {
    send_json(transport, public_author_request(email), AUTHOR_NOT_FOUND)
        .await
        .map_err(|err| match err {
            AuthError::Rejected { status, .. } => AuthError::Rejected { status, message: AUTHOR_NOT_FOUND.to_owned() },
            other => other,
        })
}

/// Approved articles by `email`, newest first. Failures yield an empty list;
/// the author page still renders the profile.
pub async fn fetch_author_articles<T: Transport>(transport: &T, email: &str) -> Vec<Article> {
    match send_json::<_, Vec<Article>>(transport, author_articles_request(email), FETCH_ARTICLES_FAILED).await {
        Ok(mut articles) => {
            sort_newest_first(&mut articles);
            articles
        }
        Err(err) => {
            leptos::logging::warn!("author articles unavailable: {err:?}");
            Vec::new()
        }
    }
}
