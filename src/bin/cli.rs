//! seaNews CLI
//!
//! Terminal front end over the news panel session: browse the default
//! maritime feed or search with synonym expansion, page through results
//! interactively, and optionally export the merged set as a JSON snapshot.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use seanews::{
    error::Result,
    models::{Article, Config},
    query::LanguageMode,
    services::{ArticleSearch, GdeltClient},
    session::{FetchStatus, NewsPanel},
    storage::{LocalStorage, NewsStore, Snapshot},
    utils::truncate_graphemes,
};

/// seaNews - Maritime & Logistics News Aggregator
#[derive(Parser, Debug)]
#[command(
    name = "seaNews",
    version,
    about = "Maritime & Logistics News Aggregator"
)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the default maritime feed for the recency window
    Browse {
        #[command(flatten)]
        opts: SearchOpts,
    },

    /// Search articles (keywords are expanded with domain synonyms)
    Search {
        /// Free-text query, e.g. 항만, 해운, 컨테이너, freight, strike
        query: String,

        #[command(flatten)]
        opts: SearchOpts,
    },

    /// Validate the configuration file
    Validate,
}

#[derive(Args, Debug)]
struct SearchOpts {
    /// Language filter: ko, en or all
    #[arg(long, default_value = "ko")]
    lang: LanguageMode,

    /// Do not broaden Korean mode to domestic outlets
    #[arg(long)]
    no_domestic: bool,

    /// Write the merged results as a JSON snapshot under this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print all results at once instead of paging interactively
    #[arg(long)]
    all: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Arc::new(Config::load_or_default(&cli.config));

    match cli.command {
        Command::Browse { opts } => run_session(config, String::new(), opts).await?,
        Command::Search { query, opts } => run_session(config, query, opts).await?,
        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}

/// Run one fetch cycle and render the outcome.
async fn run_session(config: Arc<Config>, query: String, opts: SearchOpts) -> Result<()> {
    let client = GdeltClient::new(&config)?;
    let mut panel = NewsPanel::new(Arc::clone(&config), client);
    panel.set_language(opts.lang);
    panel.set_include_domestic(!opts.no_domestic);

    if query.is_empty() {
        panel.browse().await;
    } else {
        panel.set_query_text(query.as_str());
        panel.submit().await;
    }

    match panel.status().clone() {
        FetchStatus::Error(message) => {
            println!("⚠️ {message}");
        }
        FetchStatus::Success => {
            println!(
                "지난 {} 기준 · 최신순 · {}건",
                config.search.timespan,
                panel.results().len()
            );
            page_through(&mut panel, opts.all)?;

            if let Some(dir) = opts.output {
                let store = LocalStorage::new(dir);
                let snapshot = Snapshot::new(query, panel.results().to_vec());
                store.write_snapshot(&snapshot).await?;
            }
        }
        _ => {}
    }

    Ok(())
}

/// Print the visible window, revealing further pages on request.
fn page_through<S: ArticleSearch>(panel: &mut NewsPanel<S>, all: bool) -> Result<()> {
    let mut printed = 0;
    loop {
        for article in &panel.visible()[printed..] {
            print_article(article);
        }
        printed = panel.visible().len();

        if !panel.can_load_more() {
            break;
        }
        if all {
            panel.load_more();
            continue;
        }

        print!("더보기 ▾ (Enter) / 종료 (q): ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }
        panel.load_more();
    }
    Ok(())
}

fn print_article(article: &Article) {
    println!("• {}", truncate_graphemes(&article.title, 76));
    let meta = if article.source.is_empty() {
        article.date.clone()
    } else if article.date.is_empty() {
        article.source.clone()
    } else {
        article.format("{source} · {date}")
    };
    if !meta.is_empty() {
        println!("  {meta}");
    }
    println!("  {}", article.url);
}
