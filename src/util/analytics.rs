//! Analytics event reporting.
//!
//! The session emits login/register/logout events and identifies the signed-in
//! user; article pages report views and read-more clicks; the app shell
//! reports page views. Delivery is behind
//! [`AnalyticsSink`]; the bundled [`LogAnalytics`] writes events to the log.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

/// A categorized analytics event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub category: &'static str,
    pub action: &'static str,
    pub label: Option<String>,
    pub value: Option<i64>,
}

impl AnalyticsEvent {
    pub fn new(category: &'static str, action: &'static str) -> Self {
        Self { category, action, label: None, value: None }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn login(succeeded: bool) -> Self {
        Self::new("User", "Login").label(outcome_label(succeeded))
    }

    /// Successful registrations record whether the user opted into the newsletter.
    pub fn register_succeeded(subscribed: bool) -> Self {
        Self::new("User", "Register")
            .label(outcome_label(true))
            .value(i64::from(subscribed))
    }

    pub fn register_failed() -> Self {
        Self::new("User", "Register").label(outcome_label(false))
    }

    pub fn logout() -> Self {
        Self::new("User", "Logout")
    }

    /// One view of the article titled `title`.
    pub fn article_view(title: &str) -> Self {
        Self::new("Article", "View").label(title).value(1)
    }

    pub fn read_more(title: &str) -> Self {
        Self::new("Article", "Click Read More").label(title)
    }
}

fn outcome_label(succeeded: bool) -> &'static str {
    if succeeded { "Success" } else { "Failed" }
}

/// Receives analytics events.
pub trait AnalyticsSink {
    fn track(&self, event: &AnalyticsEvent);
    /// Associate subsequent events with `user_id`. Blank ids are ignored by callers.
    fn identify(&self, user_id: &str);
    fn page_view(&self, path: &str);
}

/// Sink that writes every event to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAnalytics;

impl AnalyticsSink for LogAnalytics {
    fn track(&self, event: &AnalyticsEvent) {
        leptos::logging::log!("analytics: {}", describe(event));
    }

    fn identify(&self, user_id: &str) {
        leptos::logging::log!("analytics: identify {user_id}");
    }

    fn page_view(&self, path: &str) {
        leptos::logging::log!("analytics: page_view {path}");
    }
}

/// One-line `category/action[/label][=value]` rendering.
pub fn describe(event: &AnalyticsEvent) -> String {
    let mut out = format!("{}/{}", event.category, event.action);
    if let Some(label) = &event.label {
        out.push('/');
        out.push_str(label);
    }
    if let Some(value) = event.value {
        out.push('=');
        out.push_str(&value.to_string());
    }
    out
}
