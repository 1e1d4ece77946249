//! Client-side authentication session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single authority for who is signed in and whether
//! they may author content. Route guards and pages read [`Session`] snapshots
//! (usually through a reactive signal fed by [`SessionStore::subscribe`]) and
//! call the store's operations to change it. Other features read the token and
//! attach it to their own requests; the store itself only performs
//! auth-domain calls.
//!
//! LIFECYCLE
//! =========
//! `Uninitialized -> Restoring -> Ready`, or straight to `Ready` when no token
//! was persisted. `Ready` is terminal; `logout` returns to the signed-out
//! `Ready` state.
//!
//! AUTHOR HINT
//! ===========
//! `is_author` is persisted as a hint for optimistic UI. It only counts for
//! access control once `author_verified` is set, which happens after a server
//! check (or a caller-confirmed profile creation) for the current token.
//!
//! ERROR HANDLING
//! ==============
//! `login`, `register`, and `update_profile` return [`AuthError`] and leave the
//! session untouched on failure. `restore` and author verification never fail:
//! they degrade to signed-out and not-author respectively. A `/api/auth/me`
//! body naming no user (no id and no email) counts as a failed restore.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::storage::{IS_AUTHOR_KEY, SessionStorage, TOKEN_KEY, decode_flag, encode_flag};
use crate::error::AuthError;
use crate::net::api;
use crate::net::transport::Transport;
use crate::net::types::{AuthPayload, Credentials, ProfileUpdate, Registration, User};
use crate::util::analytics::{AnalyticsEvent, AnalyticsSink};

const RESTORE_FAILED: &str = "session restore failed";

/// Lifecycle stage gating whether session-dependent UI may render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Uninitialized,
    Restoring,
    Ready,
}

/// Snapshot of the authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_author: bool,
    /// Whether `is_author` was confirmed for the current token.
    pub author_verified: bool,
    pub status: SessionStatus,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_ready(&self) -> bool {
        self.status == SessionStatus::Ready
    }

    /// Signed in with a token the server has confirmed. Views that switch on
    /// sign-in state use this so a persisted token is not trusted while
    /// `restore` is still running.
    pub fn is_signed_in(&self) -> bool {
        self.is_ready() && self.is_authenticated()
    }

    /// Author capability usable for access control.
    pub fn is_confirmed_author(&self) -> bool {
        self.is_author && self.author_verified
    }

    fn clear_credentials(&mut self) {
        self.token = None;
        self.user = None;
        self.is_author = false;
        self.author_verified = false;
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&Session)>;

struct Inner<T, S> {
    transport: T,
    storage: S,
    analytics: Rc<dyn AnalyticsSink>,
    session: RefCell<Session>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
}

/// Owner of the [`Session`]. Clones share the same state.
pub struct SessionStore<T, S> {
    inner: Rc<Inner<T, S>>,
}

impl<T, S> Clone for SessionStore<T, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Transport, S: SessionStorage> SessionStore<T, S> {
    /// Create the store, loading the persisted token and author hint.
    ///
    /// The session starts `Uninitialized`; call [`restore`](Self::restore) to
    /// validate the persisted token and reach `Ready`.
    pub fn new(transport: T, storage: S, analytics: Rc<dyn AnalyticsSink>) -> Self {
        let session = Session {
            token: storage.get(TOKEN_KEY).filter(|t| !t.is_empty()),
            user: None,
            is_author: decode_flag(storage.get(IS_AUTHOR_KEY).as_deref()),
            author_verified: false,
            status: SessionStatus::Uninitialized,
        };
        Self {
            inner: Rc::new(Inner {
                transport,
                storage,
                analytics,
                session: RefCell::new(session),
                subscribers: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
            }),
        }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.session.borrow().token.clone()
    }

    /// Call `subscriber` with a fresh snapshot after every session change.
    ///
    /// Subscribers must not subscribe or unsubscribe from inside the callback.
    pub fn subscribe(&self, subscriber: impl Fn(&Session) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.get());
        self.inner.next_subscription.set(id.0 + 1);
        self.inner.subscribers.borrow_mut().push((id, Rc::new(subscriber)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }

    /// Validate the persisted token and move the session to `Ready`.
    ///
    /// Without a persisted token no request is made. A failed `/api/auth/me`
    /// call signs the user out silently. Only the first call does anything.
    pub async fn restore(&self) {
        if self.inner.session.borrow().status != SessionStatus::Uninitialized {
            return;
        }
        let Some(token) = self.token() else {
            self.mutate(|s| s.status = SessionStatus::Ready);
            return;
        };
        self.mutate(|s| s.status = SessionStatus::Restoring);

        let restored = api::send_json::<_, User>(&self.inner.transport, api::current_user_request(&token), RESTORE_FAILED)
            .await
            .and_then(|user| {
                if user.is_identified() {
                    Ok(user)
                } else {
                    Err(AuthError::InvalidResponse { message: RESTORE_FAILED.to_owned() })
                }
            });

        if !self.holds_token(&token) {
            // A login or logout landed while restoring; its state wins.
            self.mutate(|s| s.status = SessionStatus::Ready);
            return;
        }
        match restored {
            Ok(user) => {
                self.mutate(|s| s.user = Some(user));
                self.verify_author_status(&token).await;
                self.mutate(|s| s.status = SessionStatus::Ready);
            }
            Err(err) => {
                leptos::logging::warn!("session restore failed, signing out: {err:?}");
                self.wipe_storage();
                self.mutate(|s| {
                    s.clear_credentials();
                    s.status = SessionStatus::Ready;
                });
            }
        }
    }

    /// Exchange credentials for a token, then confirm author status.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] with the server's message (or `"Failed to login"`).
    /// The session is unchanged on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload, AuthError> {
        let credentials = Credentials { email: email.to_owned(), password: password.to_owned() };
        let result: Result<AuthPayload, AuthError> =
            api::send_json(&self.inner.transport, api::login_request(&credentials), api::LOGIN_FAILED).await;

        match result {
            Ok(payload) => {
                self.establish(&payload, None);
                self.verify_author_status(&payload.token).await;
                self.inner.analytics.track(&AnalyticsEvent::login(true));
                self.identify(&payload.user);
                Ok(payload)
            }
            Err(err) => {
                self.inner.analytics.track(&AnalyticsEvent::login(false));
                Err(err)
            }
        }
    }

    /// Create an account. New accounts are never authors, so no author check
    /// is made.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] with the server's message (or `"Failed to register"`).
    /// The session is unchanged on failure.
    pub async fn register(&self, registration: &Registration) -> Result<AuthPayload, AuthError> {
        let result: Result<AuthPayload, AuthError> =
            api::send_json(&self.inner.transport, api::register_request(registration), api::REGISTER_FAILED).await;

        match result {
            Ok(payload) => {
                self.establish(&payload, Some(false));
                self.inner
                    .analytics
                    .track(&AnalyticsEvent::register_succeeded(registration.subscribed));
                self.identify(&payload.user);
                Ok(payload)
            }
            Err(err) => {
                self.inner.analytics.track(&AnalyticsEvent::register_failed());
                Err(err)
            }
        }
    }

    /// Sign out locally. Never fails and may be called repeatedly.
    pub fn logout(&self) {
        self.wipe_storage();
        self.mutate(|s| {
            s.clear_credentials();
            s.status = SessionStatus::Ready;
        });
        self.inner.analytics.track(&AnalyticsEvent::logout());
    }

    /// Record an author status the caller just confirmed server-side (for
    /// example after creating an author profile). No request is made.
    pub fn update_author_status(&self, is_author: bool) {
        self.apply_author_status(is_author);
    }

    /// Update the user's profile and replace the cached user with the result.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a request when signed
    /// out, otherwise any [`AuthError`] from the call. The session is unchanged
    /// on failure.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, AuthError> {
        let token = self.token().ok_or(AuthError::NotAuthenticated)?;
        let user: User = api::send_json(
            &self.inner.transport,
            api::update_profile_request(&token, update),
            api::UPDATE_PROFILE_FAILED,
        )
        .await?;

        if self.holds_token(&token) {
            let cached = user.clone();
            self.mutate(|s| s.user = Some(cached));
        }
        Ok(user)
    }

    /// Re-check author status for the current token. No-op when signed out.
    pub async fn revalidate_author(&self) {
        if let Some(token) = self.token() {
            self.verify_author_status(&token).await;
        }
    }

    /// `GET /api/authors/profile`: 2xx means author, anything else (including
    /// transport failure) means not. The result is dropped if the token
    /// changed while the request was in flight.
    async fn verify_author_status(&self, token: &str) {
        let is_author = match self.inner.transport.send(api::author_profile_request(token)).await {
            Ok(resp) => resp.is_success(),
            Err(err) => {
                leptos::logging::warn!("author verification failed, treating as not an author: {err}");
                false
            }
        };
        if self.holds_token(token) {
            self.apply_author_status(is_author);
        }
    }

    /// Install a freshly issued token and user. `known_author` is set when the
    /// author status is already certain; otherwise the hint stays unverified
    /// until the caller runs a check.
    fn establish(&self, payload: &AuthPayload, known_author: Option<bool>) {
        self.inner.storage.set(TOKEN_KEY, &payload.token);
        if let Some(is_author) = known_author {
            self.inner.storage.set(IS_AUTHOR_KEY, encode_flag(is_author));
        }
        let token = payload.token.clone();
        let user = payload.user.clone();
        self.mutate(|s| {
            s.token = Some(token);
            s.user = Some(user);
            match known_author {
                Some(is_author) => {
                    s.is_author = is_author;
                    s.author_verified = true;
                }
                None => s.author_verified = false,
            }
            s.status = SessionStatus::Ready;
        });
    }

    fn apply_author_status(&self, is_author: bool) {
        self.inner.storage.set(IS_AUTHOR_KEY, encode_flag(is_author));
        self.mutate(|s| {
            s.is_author = is_author;
            s.author_verified = true;
        });
    }

    fn identify(&self, user: &User) {
        if !user.email.is_empty() {
            self.inner.analytics.identify(&user.email);
        }
    }

    fn holds_token(&self, token: &str) -> bool {
        self.inner.session.borrow().token.as_deref() == Some(token)
    }

    fn wipe_storage(&self) {
        self.inner.storage.remove(TOKEN_KEY);
        self.inner.storage.remove(IS_AUTHOR_KEY);
    }

    /// Apply `change` and notify subscribers. No borrow is held while
    /// subscribers run.
    fn mutate(&self, change: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.inner.session.borrow_mut();
            change(&mut session);
            session.clone()
        };
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, f)| Rc::clone(f))
            .collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}
