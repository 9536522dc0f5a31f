use super::*;

#[test]
fn default_points_at_local_backend() {
    assert_eq!(ApiConfig::default().base_url(), "http://localhost:8080");
}

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    let config = ApiConfig::new("  https://api.example.com//  ");
    assert_eq!(config.base_url(), "https://api.example.com");
}

#[test]
fn from_optional_falls_back_on_missing_or_blank() {
    assert_eq!(ApiConfig::from_optional(None), ApiConfig::default());
    assert_eq!(ApiConfig::from_optional(Some("   ")), ApiConfig::default());
}

#[test]
fn from_optional_uses_present_value() {
    let config = ApiConfig::from_optional(Some("http://10.0.0.5:9000/"));
    assert_eq!(config.base_url(), "http://10.0.0.5:9000");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ApiConfig::new("http://localhost:8080/");
    assert_eq!(config.endpoint("/api/login"), "http://localhost:8080/api/login");
    assert_eq!(config.endpoint("api/register"), "http://localhost:8080/api/register");
}
