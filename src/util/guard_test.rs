use super::*;
use crate::net::types::User;
use crate::state::session::SessionStatus;

fn signed_in(is_author: bool, author_verified: bool) -> Session {
    Session {
        token: Some("tok1".to_owned()),
        user: Some(User { email: "a@upenn.edu".to_owned(), ..User::default() }),
        is_author,
        author_verified,
        status: SessionStatus::Ready,
    }
}

// =============================================================
// guard_decision
// =============================================================

#[test]
fn not_ready_is_loading_even_with_token() {
    for status in [SessionStatus::Uninitialized, SessionStatus::Restoring] {
        let session = Session { status, ..signed_in(true, true) };
        assert_eq!(guard_decision(&session, false, "/dashboard"), GuardDecision::Loading);
        assert_eq!(guard_decision(&session, true, "/author"), GuardDecision::Loading);
    }
}

#[test]
fn signed_out_redirects_to_join_with_origin() {
    let session = Session { status: SessionStatus::Ready, ..Session::default() };
    assert_eq!(
        guard_decision(&session, false, "/profile"),
        GuardDecision::RedirectToJoin { from: "/profile".to_owned() }
    );
}

#[test]
fn signed_in_renders_plain_route() {
    assert_eq!(guard_decision(&signed_in(false, true), false, "/dashboard"), GuardDecision::Render);
}

#[test]
fn non_author_is_sent_to_dashboard_from_author_route() {
    assert_eq!(guard_decision(&signed_in(false, true), true, "/author"), GuardDecision::RedirectToDashboard);
}

#[test]
fn unverified_author_hint_is_rechecked_not_trusted() {
    assert_eq!(guard_decision(&signed_in(true, false), true, "/author"), GuardDecision::VerifyAuthor);
}

#[test]
fn confirmed_author_renders_author_route() {
    assert_eq!(guard_decision(&signed_in(true, true), true, "/author"), GuardDecision::Render);
}

#[test]
fn render_iff_ready_token_and_confirmed_author() {
    let statuses = [SessionStatus::Uninitialized, SessionStatus::Restoring, SessionStatus::Ready];
    for status in statuses {
        for has_token in [false, true] {
            for is_author in [false, true] {
                for author_verified in [false, true] {
                    let session = Session {
                        token: has_token.then(|| "tok".to_owned()),
                        user: has_token.then(User::default),
                        is_author,
                        author_verified,
                        status,
                    };
                    let ready = status == SessionStatus::Ready;
                    assert_eq!(
                        guard_decision(&session, false, "/x") == GuardDecision::Render,
                        ready && has_token
                    );
                    assert_eq!(
                        guard_decision(&session, true, "/x") == GuardDecision::Render,
                        ready && has_token && is_author && author_verified
                    );
                }
            }
        }
    }
}

// =============================================================
// Redirect paths
// =============================================================

#[test]
fn join_redirect_path_carries_local_origin() {
    assert_eq!(join_redirect_path("/profile"), "/join?from=/profile");
}

#[test]
fn join_redirect_path_drops_unsafe_origin() {
    assert_eq!(join_redirect_path("//evil.example"), "/join");
    assert_eq!(join_redirect_path("https://evil.example"), "/join");
}

#[test]
fn post_login_destination_defaults_to_dashboard() {
    assert_eq!(post_login_destination(None), "/dashboard");
    assert_eq!(post_login_destination(Some("//evil.example")), "/dashboard");
    assert_eq!(post_login_destination(Some("/join")), "/dashboard");
    assert_eq!(post_login_destination(Some("/author")), "/author");
}
