//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Response types are lenient (`#[serde(default)]`) because the backend omits
//! fields freely; request types skip absent optional fields so partial updates
//! never overwrite server values with `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user record as returned by `/api/auth/me`, login, and registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub subscribed: bool,
}

impl User {
    /// Whether the record names anyone. Lenient decoding turns `{}` into a
    /// blank user, which must not count as a signed-in account.
    pub fn is_identified(&self) -> bool {
        !self.id.is_empty() || !self.email.is_empty()
    }
}

/// Successful login/registration body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub subscribed: bool,
}

impl Registration {
    /// New registration, subscribed to the newsletter unless changed.
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            subscribed: true,
        }
    }
}

/// `PUT /api/users/profile` body. Absent fields are left unchanged server-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,
}

/// Author profile as returned by `/api/authors/profile` and the public
/// `/api/authors/profile/{email}` lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub bio: String,
    #[serde(rename = "profileImage", alias = "pfp")]
    pub profile_image: Option<String>,
}

/// A published (or pending) article from `/api/articles`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub description: Option<String>,
    pub author_email: String,
    pub author_name: Option<String>,
    pub image: Option<String>,
    pub approved: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

const EXCERPT_CHARS: usize = 150;

impl Article {
    /// Card text: the description, or the opening of the body.
    pub fn excerpt(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(description) if !description.is_empty() => description.to_owned(),
            _ => {
                let opening: String = self.content.chars().take(EXCERPT_CHARS).collect();
                format!("{opening}...")
            }
        }
    }

    /// Byline name: the stored author name, else the email's local part.
    pub fn author_display_name(&self) -> String {
        self.author_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .map_or_else(|| email_local_part(&self.author_email).to_owned(), str::to_owned)
    }

    /// Calendar date of `createdAt` (`YYYY-MM-DD`), or the raw value when it
    /// is not an ISO timestamp.
    pub fn published_on(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }

    /// Unapproved articles are visible only to their author.
    pub fn visible_to(&self, viewer_email: Option<&str>) -> bool {
        self.approved || self.written_by(viewer_email)
    }

    pub fn written_by(&self, viewer_email: Option<&str>) -> bool {
        viewer_email.is_some_and(|email| !email.is_empty() && email == self.author_email)
    }
}

/// `name@host` -> `name`.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Order articles newest first. `createdAt` is ISO-8601, so string order is
/// chronological.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// `POST /api/authors/profile` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AuthorProfileDraft {
    pub bio: String,
    #[serde(rename = "profileImage", skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Error body shape shared by all endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub errors: Vec<FieldError>,
}

/// One validation failure inside [`ErrorBody::errors`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldError {
    pub msg: String,
}
