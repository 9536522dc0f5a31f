use super::*;
use auth::{Session, UserProfile};
use serde_json::json;

#[test]
fn should_redirect_unauth_when_token_missing() {
    let state = AuthState {
        session: Session::default(),
    };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let state = AuthState {
        session: Session::signed_in("t1", UserProfile::new(json!({ "id": 1 }))),
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_with_token_but_no_user() {
    let state = AuthState {
        session: Session {
            token: Some("abc".to_owned()),
            user: None,
        },
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_with_user_but_no_token() {
    let state = AuthState {
        session: Session {
            token: None,
            user: Some(UserProfile::new(json!({ "id": 1 }))),
        },
    };
    assert!(should_redirect_unauth(&state));
}
