use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{Value, json};

use auth::{ApiClient, ApiConfig, AuthError, AuthSession, GuardDecision, NavigationGuard, Navigator, RegisterOutcome};

mod store;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use store::FileStorage;
use transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("navigation to {path} redirected to {to}")]
    Redirected { path: String, to: &'static str },
}

#[derive(Parser, Debug)]
#[command(name = "auth-cli", about = "Sign in to the API and inspect the stored session")]
struct Cli {
    #[arg(long, env = "API_BASE", default_value = auth::DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, env = "AUTH_STORE_PATH", default_value = ".auth-session.json")]
    store: String,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account; signs in when the server issues a session.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Clear the stored session.
    Logout,
    /// Print whether a session is stored and who it belongs to.
    Status,
    /// Re-fetch the signed-in user's profile.
    Profile,
    /// Run the navigation guard for a route path.
    Check { path: String },
}

/// Reports redirects on stderr; a terminal has no router to apply them.
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        eprintln!("navigate: {path}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    report(run(cli).await)
}

/// Print a failed command's message on stderr and map it to the exit status.
fn report(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let api = ApiClient::new(ApiConfig::new(cli.api_base), ReqwestTransport::new());
    let session = AuthSession::new(FileStorage::new(cli.store), api, TerminalNavigator);
    session.restore_from_storage();

    match cli.command {
        Command::Login { email, password } => {
            session.login(&email, &password).await?;
            print_json(&status_json(&session))
        }
        Command::Register { email, password, name } => {
            match session.register(&email, &password, &name).await? {
                RegisterOutcome::SignedIn => print_json(&status_json(&session)),
                RegisterOutcome::Registered { message } => {
                    print_json(&json!({ "registered": true, "message": message }))
                }
            }
        }
        Command::Logout => {
            session.logout();
            print_json(&status_json(&session))
        }
        Command::Status => print_json(&status_json(&session)),
        Command::Profile => {
            let user = session.refresh_profile().await?;
            print_json(user.as_value())
        }
        Command::Check { path } => run_check(&session, path),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_check(session: &AuthSession, path: String) -> Result<(), CliError> {
    match NavigationGuard::new(session.clone()).check(&path) {
        GuardDecision::Proceed => {
            println!("proceed");
            Ok(())
        }
        GuardDecision::Redirect(to) => Err(CliError::Redirected { path, to }),
    }
}

/// Session summary without the token itself.
fn status_json(session: &AuthSession) -> Value {
    let snapshot = session.snapshot();
    json!({
        "authenticated": snapshot.is_authenticated(),
        "user": snapshot.user.map(auth::UserProfile::into_value),
    })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
