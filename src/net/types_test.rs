use super::*;

#[test]
fn user_accepts_mongo_id_alias_and_missing_fields() {
    let user: User = serde_json::from_str(r#"{"_id":"u1","email":"a@upenn.edu"}"#).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "a@upenn.edu");
    assert_eq!(user.name, "");
    assert!(!user.subscribed);
}

#[test]
fn auth_payload_requires_token() {
    let parsed = serde_json::from_str::<AuthPayload>(r#"{"user":{"email":"a@upenn.edu"}}"#);
    assert!(parsed.is_err());
}

#[test]
fn registration_new_defaults_to_subscribed() {
    let registration = Registration::new("Ada", "ada@upenn.edu", "hunter22");
    assert!(registration.subscribed);
}

#[test]
fn profile_update_skips_absent_fields() {
    let update = ProfileUpdate { name: Some("Ada".to_owned()), ..ProfileUpdate::default() };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Ada" }));
}

#[test]
fn author_profile_draft_uses_camel_case_image_field() {
    let draft = AuthorProfileDraft { bio: "Hi".to_owned(), profile_image: Some("img.png".to_owned()) };
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json, serde_json::json!({ "bio": "Hi", "profileImage": "img.png" }));
}

#[test]
fn empty_user_object_is_not_identified() {
    let blank: User = serde_json::from_str("{}").unwrap();
    assert!(!blank.is_identified());
    let by_email: User = serde_json::from_str(r#"{"email":"a@upenn.edu"}"#).unwrap();
    assert!(by_email.is_identified());
}

fn article(json: serde_json::Value) -> Article {
    serde_json::from_value(json).unwrap()
}

#[test]
fn article_decodes_backend_field_names() {
    let a = article(serde_json::json!({
        "_id": "a1",
        "title": "Dining Halls",
        "slug": "dining-halls",
        "content": "Body",
        "author_email": "ada@upenn.edu",
        "approved": true,
        "createdAt": "2024-03-05T12:00:00.000Z",
        "tags": ["food"]
    }));
    assert_eq!(a.id, "a1");
    assert_eq!(a.published_on(), "2024-03-05");
    assert_eq!(a.tags, vec!["food"]);
    assert!(a.categories.is_empty());
}

#[test]
fn excerpt_prefers_description_then_truncates_body() {
    let described = article(serde_json::json!({ "description": "Short take", "content": "Long body" }));
    assert_eq!(described.excerpt(), "Short take");

    let long = "x".repeat(200);
    let undescribed = article(serde_json::json!({ "description": "  ", "content": long }));
    assert_eq!(undescribed.excerpt(), format!("{}...", "x".repeat(150)));
}

#[test]
fn author_display_name_falls_back_to_email_local_part() {
    let named = article(serde_json::json!({ "author_name": "Ada L.", "author_email": "ada@upenn.edu" }));
    assert_eq!(named.author_display_name(), "Ada L.");
    let unnamed = article(serde_json::json!({ "author_email": "ada@upenn.edu" }));
    assert_eq!(unnamed.author_display_name(), "ada");
}

#[test]
fn unapproved_article_is_visible_only_to_its_author() {
    let pending = article(serde_json::json!({ "author_email": "ada@upenn.edu", "approved": false }));
    assert!(pending.visible_to(Some("ada@upenn.edu")));
    assert!(!pending.visible_to(Some("bob@upenn.edu")));
    assert!(!pending.visible_to(None));

    let live = article(serde_json::json!({ "author_email": "ada@upenn.edu", "approved": true }));
    assert!(live.visible_to(None));
}

#[test]
fn sort_newest_first_orders_by_created_at() {
    let mut articles = vec![
        article(serde_json::json!({ "slug": "old", "createdAt": "2023-01-01T00:00:00Z" })),
        article(serde_json::json!({ "slug": "new", "createdAt": "2024-06-01T00:00:00Z" })),
    ];
    sort_newest_first(&mut articles);
    assert_eq!(articles[0].slug, "new");
}

#[test]
fn author_profile_accepts_pfp_alias() {
    let profile: AuthorProfile = serde_json::from_str(r#"{"name":"Ada","bio":"Econ","pfp":"me.png"}"#).unwrap();
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.profile_image.as_deref(), Some("me.png"));
}
