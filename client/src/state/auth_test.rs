use super::*;
use auth::UserProfile;
use serde_json::json;

#[test]
fn default_state_is_unauthenticated() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.status(), AuthStatus::Unauthenticated);
}

#[test]
fn token_makes_state_authenticated() {
    let state = AuthState {
        session: Session {
            token: Some("abc".to_owned()),
            user: None,
        },
    };
    assert_eq!(state.status(), AuthStatus::Authenticated);
    assert_eq!(state.display_name(), "signed in");
}

#[test]
fn display_name_uses_profile_fields() {
    let state = AuthState {
        session: Session::signed_in("t", UserProfile::new(json!({ "email": "a@b.c" }))),
    };
    assert_eq!(state.display_name(), "a@b.c");
}
