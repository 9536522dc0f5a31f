use std::path::PathBuf;

use super::*;
use auth::{SessionStorage, TOKEN_KEY, USER_KEY};

fn temp_store() -> (FileStorage, PathBuf) {
    let path = std::env::temp_dir().join(format!("auth-cli-main-{}.json", uuid::Uuid::new_v4()));
    (FileStorage::new(&path), path)
}

fn session_over(store: FileStorage) -> AuthSession {
    let api = ApiClient::new(ApiConfig::default(), ReqwestTransport::new());
    let session = AuthSession::new(store, api, TerminalNavigator);
    session.restore_from_storage();
    session
}

#[test]
fn cli_parses_login_flags() {
    let cli = Cli::try_parse_from([
        "auth-cli",
        "--api-base",
        "http://api.test",
        "login",
        "--email",
        "a@b.c",
        "--password",
        "pw",
    ])
    .unwrap();
    assert_eq!(cli.api_base, "http://api.test");
    assert!(matches!(cli.command, Command::Login { ref email, .. } if email == "a@b.c"));
}

#[test]
fn status_json_hides_token() {
    let (store, path) = temp_store();
    store.set(TOKEN_KEY, "secret-token");
    store.set(USER_KEY, r#"{"id":1}"#);

    let status = status_json(&session_over(FileStorage::new(&path)));

    assert_eq!(status, json!({ "authenticated": true, "user": { "id": 1 } }));
    assert!(!status.to_string().contains("secret-token"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn check_redirects_without_session() {
    let (store, _path) = temp_store();
    let session = session_over(store);

    let err = run_check(&session, "/dashboard".to_owned()).unwrap_err();

    assert!(matches!(err, CliError::Redirected { to: "/login", .. }));
    assert!(run_check(&session, "/register".to_owned()).is_ok());
}

#[test]
fn redirect_error_reads_as_message() {
    let err = CliError::Redirected {
        path: "/dashboard".to_owned(),
        to: "/login",
    };
    assert_eq!(err.to_string(), "navigation to /dashboard redirected to /login");
}

#[test]
fn report_maps_errors_to_failure() {
    let failed = report(Err(CliError::Auth(AuthError::InvalidServerResponse)));
    assert_eq!(format!("{failed:?}"), format!("{:?}", ExitCode::FAILURE));
    assert_eq!(format!("{:?}", report(Ok(()))), format!("{:?}", ExitCode::SUCCESS));
}

#[test]
fn check_proceeds_with_stored_token() {
    let (store, path) = temp_store();
    store.set(TOKEN_KEY, "abc");

    let session = session_over(FileStorage::new(&path));

    assert!(run_check(&session, "/dashboard".to_owned()).is_ok());
    let _ = std::fs::remove_file(path);
}
