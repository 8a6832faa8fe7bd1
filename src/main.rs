use clap::{Args, Parser, Subcommand};
use crypto_dash::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "crypto-dash")]
#[command(version, about = "Role-scoped dashboard for the crypto ETL API")]
struct Cli {
    /// Base URL of the API (overrides DASH_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// File holding the stored token (overrides DASH_SESSION_FILE)
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in and store the bearer token, then show the dashboard
    Login(LoginArgs),

    /// Remove the stored token
    Logout,

    /// Show the dashboard for the stored token
    Show(ShowArgs),

    /// Show who is logged in and whether the API is reachable
    Status,
}

#[derive(Args, Debug)]
struct LoginArgs {
    /// Account name (defaults to DASH_USERNAME)
    #[arg(short, long)]
    username: Option<String>,

    /// Account password (defaults to DASH_PASSWORD)
    #[arg(short, long)]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Also write the dashboard as an HTML page
    #[arg(long)]
    html: Option<PathBuf>,

    /// Print the Chart.js configurations as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logger();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let mut config = Config::new();
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url);
    }
    if let Some(path) = cli.session_file {
        config = config.with_session_file(path);
    }

    match cli.command {
        Commands::Login(args) => login(config, args).await,
        Commands::Logout => {
            let mut page = PageController::new(SessionContext::from_config(config)?);
            page.logout()?;
            println!("Logged out");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show(args) => {
            let mut page = PageController::new(SessionContext::from_config(config)?);
            show(&mut page, &args).await
        }
        Commands::Status => status(config).await,
    }
}

async fn login(config: Config, args: LoginArgs) -> Result<ExitCode, AppError> {
    let credentials = Credentials::new(
        args.username.unwrap_or_else(|| config.credentials.username.clone()),
        args.password.unwrap_or_else(|| config.credentials.password.clone()),
    );
    if !credentials.is_complete() {
        return Err(AppError::InvalidInput(
            "username and password are required".to_string(),
        ));
    }

    let mut page = PageController::new(SessionContext::from_config(config)?);
    if page.login(&credentials).await.is_err() {
        if let Some(alert) = page.take_alert() {
            eprintln!("{alert}");
        }
        return Ok(ExitCode::FAILURE);
    }

    info!("Login successful, loading dashboard");
    show(&mut page, &ShowArgs { html: None, json: false }).await
}

async fn show(page: &mut PageController, args: &ShowArgs) -> Result<ExitCode, AppError> {
    if !page.on_load().await.is_authenticated() {
        println!("Not logged in. Run `crypto-dash login` first.");
        return Ok(ExitCode::FAILURE);
    }

    let dashboard = page.dashboard();
    if args.json {
        let charts: Vec<_> = ChartSlot::ALL
            .iter()
            .filter_map(|slot| dashboard.chart(*slot))
            .map(ChartDescriptor::to_chartjs)
            .collect();
        println!("{}", serde_json::to_string_pretty(&charts)?);
    } else {
        print!("{dashboard}");
    }

    if let Some(path) = &args.html {
        std::fs::write(path, render_html(dashboard)?)?;
        println!("Dashboard written to {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

async fn status(config: Config) -> Result<ExitCode, AppError> {
    let store = FileTokenStore::new(config.session_file.clone());
    let client = Client::new(config)?;

    match client.health().await {
        Ok(greeting) => println!("API: {} ({})", client.config().rest_api.base_url, greeting.message),
        Err(e) => println!("API: {} unreachable ({e})", client.config().rest_api.base_url),
    }

    let Some(token) = store.read()? else {
        println!("Session: anonymous");
        return Ok(ExitCode::SUCCESS);
    };

    match Claims::decode(&token) {
        Ok(claims) => {
            println!("Session: {} [{}]", claims.name, claims.roles.join(", "));
            println!("Endpoint: {}", claims.endpoint());
            if let Some(expires_at) = claims.expires_at() {
                let note = if claims.is_expired() { " (expired)" } else { "" };
                println!("Expires: {}{}", expires_at.to_rfc3339(), note);
            }
        }
        Err(e) => println!("Session: stored token is unreadable ({e})"),
    }
    Ok(ExitCode::SUCCESS)
}
