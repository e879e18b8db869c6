//! `mentorhub`: command-line client for the mentorship platform API.
//!
//! Every run restores the session persisted in the session file, performs one
//! command through the shared session store, and exits. Login state therefore
//! carries across runs the same way the browser client's `localStorage` does.

mod file_storage;
mod http_transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use session::menu::{MenuAction, menu_for};
use session::token::decode_claims;
use session::{ApiError, AuthError, Credentials, Method, Registration, Role, SessionStore, SystemClock};

use crate::file_storage::{FileStorage, resolve_session_path};
use crate::http_transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `mentorhub login` first")]
    NotSignedIn,
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mentorhub", about = "Mentorship platform API CLI")]
struct Cli {
    #[arg(long, env = "MENTORHUB_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Session file; defaults to `$HOME/.mentorhub/session.json`.
    #[arg(long, env = "MENTORHUB_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Log request and session activity to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and persist the session.
    Login(LoginArgs),
    /// Clear the persisted session.
    Logout,
    /// Create an account (does not sign in).
    Register(RegisterArgs),
    /// Show the signed-in identity and token expiry.
    Whoami,
    /// Print the sidebar menu for the signed-in role.
    Menu,
    /// Fetch the role's dashboard summary.
    Dashboard,
    /// Send an authenticated request and print the JSON response.
    Api(ApiArgs),
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long, env = "MENTORHUB_PASSWORD")]
    password: String,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    full_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    profile_details: String,
    #[arg(long, env = "MENTORHUB_PASSWORD")]
    password: String,
    #[arg(long, value_parser = parse_role, default_value = "Member")]
    role: Role,
}

#[derive(Args, Debug)]
struct ApiArgs {
    #[arg(value_parser = parse_method)]
    method: Method,
    path: String,
    /// JSON request body.
    #[arg(long)]
    data: Option<String>,
}

fn parse_role(raw: &str) -> Result<Role, String> {
    raw.parse()
}

fn parse_method(raw: &str) -> Result<Method, String> {
    raw.parse()
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();
}

fn build_store(cli: &Cli) -> SessionStore {
    let path = resolve_session_path(cli.session_file.clone(), std::env::var_os("HOME").map(PathBuf::from));
    tracing::debug!(path = %path.display(), base_url = %cli.base_url, "building session store");
    SessionStore::new(
        Arc::new(FileStorage::new(path)),
        Arc::new(ReqwestTransport::new(cli.base_url.clone())),
        Arc::new(SystemClock),
    )
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let store = build_store(&cli);
    store.restore();

    match cli.command {
        Command::Login(args) => run_login(&store, args).await,
        Command::Logout => {
            store.logout();
            println!("signed out");
            Ok(())
        }
        Command::Register(args) => run_register(&store, args).await,
        Command::Whoami => run_whoami(&store),
        Command::Menu => run_menu(&store),
        Command::Dashboard => run_dashboard(&store).await,
        Command::Api(args) => run_api(&store, args).await,
    }
}

async fn run_login(store: &SessionStore, args: LoginArgs) -> Result<(), CliError> {
    let identity = store.login(&Credentials::new(args.email.trim(), args.password)).await?;
    println!("signed in as {} ({})", identity.display_name(), identity.role);
    Ok(())
}

async fn run_register(store: &SessionStore, args: RegisterArgs) -> Result<(), CliError> {
    let mut registration =
        Registration::from_full_name(&args.full_name, &args.email, &args.password, &args.profile_details);
    registration.role = args.role;
    store.register(&registration).await?;
    println!("Registration successful! Sign in with `mentorhub login`.");
    Ok(())
}

fn run_whoami(store: &SessionStore) -> Result<(), CliError> {
    let snapshot = store.snapshot();
    let session = snapshot.session.as_ref().ok_or(CliError::NotSignedIn)?;
    let identity = &session.identity;
    println!("{} <{}>", identity.display_name(), identity.email);
    println!("id:      {}", identity.id);
    println!("role:    {}", identity.role);
    println!("expires: {}", expiry_line(&session.token));
    Ok(())
}

fn expiry_line(token: &str) -> String {
    match decode_claims(token).and_then(|claims| claims.expires_at()) {
        Ok(exp) => format!("{exp:.0} (unix seconds)"),
        Err(e) => format!("unknown ({e})"),
    }
}

fn run_menu(store: &SessionStore) -> Result<(), CliError> {
    let identity = store.identity().ok_or(CliError::NotSignedIn)?;
    for line in menu_lines(identity.role) {
        println!("{line}");
    }
    Ok(())
}

fn menu_lines(role: Role) -> Vec<String> {
    menu_for(role)
        .into_iter()
        .map(|item| match item.action {
            MenuAction::Navigate(route) => format!("{:<18} {}", item.label, route.path()),
            MenuAction::Logout => item.label.to_owned(),
        })
        .collect()
}

async fn run_dashboard(store: &SessionStore) -> Result<(), CliError> {
    let identity = store.identity().ok_or(CliError::NotSignedIn)?;
    let summary: Value = store.api().get(identity.role.dashboard_endpoint()).await?;
    print_json(&summary)
}

async fn run_api(store: &SessionStore, args: ApiArgs) -> Result<(), CliError> {
    let body = args.data.as_deref().map(serde_json::from_str::<Value>).transpose()?;
    let response: Value = store.api().request_json(args.method, &args.path, body).await?;
    print_json(&response)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
