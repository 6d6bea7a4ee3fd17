use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{info, warn};

use footballdb_cli::CliError;
use footballdb_cli::config::{Settings, load_settings, resolve_connection};
use footballdb_cli::http::{self, AppState};
use footballdb_cli::logging::{LogFormat, init_logging};
use footballdb_core::redact_connection_string;
use footballdb_generate::LocaleKey;
use footballdb_seed::run_seed;
use footballdb_store::{Store, StoreOptions, open_store};

#[derive(Parser, Debug)]
#[command(name = "footballdb", version, about = "Football fake-data seeder and viewer")]
struct Cli {
    /// Settings file; `footballdb.toml` in the working directory when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    /// Append log events to this file instead of stderr.
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the JSON API, the seed trigger and the table page.
    Serve(ServeArgs),
    /// Run the seeding pipeline once and print its report.
    Seed(SeedArgs),
    /// Create any missing table.
    InitSchema(ConnArgs),
}

#[derive(Args, Debug)]
struct ConnArgs {
    /// Database connection string; falls back to DATABASE_URL.
    #[arg(long, value_name = "CONNECTION_STRING")]
    conn: Option<String>,
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[command(flatten)]
    conn: ConnArgs,
    /// Address to listen on.
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,
    /// Directory holding index.html and script.js.
    #[arg(long, value_name = "DIR")]
    public: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SeedArgs {
    #[command(flatten)]
    conn: ConnArgs,
    #[arg(long)]
    teams: Option<u32>,
    #[arg(long)]
    players_per_team: Option<u32>,
    #[arg(long)]
    matches: Option<u32>,
    /// Seed for reproducible data.
    #[arg(long)]
    seed: Option<u64>,
    /// en_US or pt_BR.
    #[arg(long)]
    locale: Option<LocaleKey>,
    #[arg(long)]
    max_in_flight: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_file.as_deref())?;
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Command::Serve(args) => run_serve(args, settings).await,
        Command::Seed(args) => run_seed_once(args, settings).await,
        Command::InitSchema(args) => run_init_schema(args, settings).await,
    }
}

async fn run_serve(args: ServeArgs, mut settings: Settings) -> Result<(), CliError> {
    if let Some(bind) = args.bind {
        settings.server.bind = bind;
    }
    if let Some(public) = args.public {
        settings.server.public_dir = public;
    }
    settings.seed.validate()?;

    let store = connect(args.conn, &settings).await?;
    if let Err(err) = store.ensure_schema().await {
        tracing::error!(event = "schema_setup_failed", error = %err);
        store.close().await;
        return Err(err.into());
    }

    let listener = TcpListener::bind(&settings.server.bind).await?;
    let state = AppState {
        store: Arc::clone(&store),
        seed: settings.seed,
    };
    let served = http::serve(
        listener,
        state,
        &settings.server.public_dir,
        shutdown_signal(),
    )
    .await;

    store.close().await;
    info!(event = "store_closed");
    served.map_err(CliError::from)
}

async fn run_seed_once(args: SeedArgs, mut settings: Settings) -> Result<(), CliError> {
    let generate = &mut settings.seed.generate;
    if let Some(teams) = args.teams {
        generate.teams = teams;
    }
    if let Some(players_per_team) = args.players_per_team {
        generate.players_per_team = players_per_team;
    }
    if let Some(matches) = args.matches {
        generate.matches = matches;
    }
    if let Some(seed) = args.seed {
        generate.seed = Some(seed);
    }
    if let Some(locale) = args.locale {
        generate.locale = locale;
    }
    if let Some(max_in_flight) = args.max_in_flight {
        settings.seed.max_in_flight = max_in_flight;
    }
    settings.seed.validate()?;

    let store = connect(args.conn, &settings).await?;
    let result = run_seed(store.as_ref(), &settings.seed).await;
    store.close().await;

    let report = result?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn run_init_schema(args: ConnArgs, settings: Settings) -> Result<(), CliError> {
    let store = connect(args, &settings).await?;
    let result = store.ensure_schema().await;
    store.close().await;

    result?;
    info!(event = "schema_applied", engine = store.engine());
    Ok(())
}

async fn connect(args: ConnArgs, settings: &Settings) -> Result<Arc<dyn Store>, CliError> {
    let conn = resolve_connection(args.conn, settings).ok_or_else(|| {
        CliError::InvalidConfig(
            "connection string is required (--conn, DATABASE_URL or database_url)".to_string(),
        )
    })?;
    info!(
        event = "store_connecting",
        conn = %redact_connection_string(&conn).redacted
    );

    let options = StoreOptions {
        max_connections: settings.server.max_connections,
        ..StoreOptions::default()
    };
    Ok(open_store(&conn, &options).await?)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_requested"),
        Err(err) => {
            // without a signal listener the server runs until killed
            warn!(event = "signal_listener_failed", error = %err);
            std::future::pending::<()>().await;
        }
    }
}
