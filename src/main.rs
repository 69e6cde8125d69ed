use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use clap::Parser;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use twig::areas::index::DEFAULT_BUCKET_COUNT;
use twig::areas::repository::Repository;
use twig::artifacts::core::clock::{Clock, FixedClock};
use twig::commands::shell::Shell;
use twig::config::{DEFAULT_BRANCH, DEFAULT_STORE_DIR, RepositoryConfig};

const LOG_ENV: &str = "TWIG_LOG";

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal snapshot-based version control shell",
    long_about = "Starts a fresh history in the given directory and reads commands from \
    standard input, one per line. Every commit copies the tracked files into its own \
    folder of the snapshot store. History is kept in memory and ends with the session.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The working directory, defaults to the current one")]
    path: Option<PathBuf>,
    #[arg(
        long,
        env = "TWIG_STORE_DIR",
        default_value = DEFAULT_STORE_DIR,
        help = "Snapshot store folder, relative to the working directory"
    )]
    store_dir: PathBuf,
    #[arg(
        long,
        env = "TWIG_INDEX_BUCKETS",
        default_value_t = DEFAULT_BUCKET_COUNT,
        help = "Number of chains in the commit index"
    )]
    index_buckets: usize,
    #[arg(
        long,
        env = "TWIG_DEFAULT_BRANCH",
        default_value = DEFAULT_BRANCH,
        help = "Name of the initial branch"
    )]
    default_branch: String,
    #[arg(
        long,
        env = "TWIG_COMMIT_DATE",
        value_parser = parse_commit_date,
        help = "Pin every commit timestamp, e.g. \"2023-01-01 12:00:00 +0000\""
    )]
    commit_date: Option<DateTime<FixedOffset>>,
}

fn parse_commit_date(date: &str) -> std::result::Result<DateTime<FixedOffset>, String> {
    FixedClock::try_parse(date)
        .map(|clock| clock.now())
        .map_err(|e| e.to_string())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let stdout = std::io::stdout();
    if !stdout.is_terminal() {
        colored::control::set_override(false);
    }
    let interactive = std::io::stdin().is_terminal();
    let paging = stdout.is_terminal() && std::env::var_os("NO_PAGER").is_none();

    let mut config = RepositoryConfig::new(cli.store_dir, cli.index_buckets, cli.default_branch);
    if let Some(date) = cli.commit_date {
        config = config.with_pinned_date(date);
    }

    let path = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let repository = Repository::new(path, config)?;

    let mut shell = Shell::new(repository, stdout.lock(), std::io::stderr())
        .interactive(interactive)
        .paging(paging);
    shell.start()?;
    shell.run(std::io::stdin().lock())?;

    Ok(())
}
