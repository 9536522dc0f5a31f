use super::*;
use serde_json::json;

#[test]
fn profile_details_without_user_shows_placeholder() {
    assert_eq!(profile_details(None), "No profile loaded.");
}

#[test]
fn profile_details_pretty_prints_json() {
    let user = UserProfile::new(json!({ "id": 1 }));
    assert_eq!(profile_details(Some(&user)), "{\n  \"id\": 1\n}");
}
