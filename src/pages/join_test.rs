use super::*;

fn draft() -> RegisterDraft {
    RegisterDraft {
        name: " Ada ".to_owned(),
        email: " ada@upenn.edu ".to_owned(),
        password: "hunter22".to_owned(),
        confirm_password: "hunter22".to_owned(),
        subscribed: false,
    }
}

#[test]
fn validate_registration_trims_and_keeps_subscription_choice() {
    let registration = validate_registration(&draft()).unwrap();
    assert_eq!(registration.name, "Ada");
    assert_eq!(registration.email, "ada@upenn.edu");
    assert_eq!(registration.password, "hunter22");
    assert!(!registration.subscribed);
}

#[test]
fn validate_registration_requires_matching_passwords() {
    let draft = RegisterDraft { confirm_password: "other".to_owned(), ..draft() };
    assert_eq!(validate_registration(&draft), Err("Passwords don't match"));
}

#[test]
fn validate_registration_requires_campus_email() {
    let draft = RegisterDraft { email: "ada@gmail.com".to_owned(), ..draft() };
    assert_eq!(validate_registration(&draft), Err("Please use a valid Penn email address"));
}

#[test]
fn validate_registration_accepts_school_subdomains() {
    let draft = RegisterDraft { email: "ada@seas.upenn.edu".to_owned(), ..draft() };
    assert!(validate_registration(&draft).is_ok());
}

#[test]
fn validate_registration_rejects_blank_fields() {
    let draft = RegisterDraft { name: "   ".to_owned(), ..draft() };
    assert_eq!(validate_registration(&draft), Err("Please fill in every field"));
}

#[test]
fn validate_login_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_login(" a@upenn.edu ", "pw"),
        Ok(("a@upenn.edu".to_owned(), "pw".to_owned()))
    );
    assert_eq!(validate_login("", "pw"), Err("Enter your email and password"));
    assert_eq!(validate_login("a@upenn.edu", ""), Err("Enter your email and password"));
}
