use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use ytc::config::{self, YtcConfig};
use ytc::output::{self, table};
use ytc::pipeline::{self, VideoTarget};
use ytc::report::TracingReporter;
use ytc::sentiment::{LexiconScorer, TextSentimentScorer};
use ytc::source::YouTubeClient;

#[derive(Parser)]
#[command(name = "ytc", version, about = "Collect video comments and analyze their sentiment")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to config file (default: ~/.ytc/config.toml)
    #[arg(long, global = true, env = "YTC_CONFIG")]
    config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Args)]
struct CollectArgs {
    /// Channel search query (default: config channel_query)
    #[arg(long, conflicts_with = "video")]
    query: Option<String>,

    /// Collect a specific video ID instead of the channel's latest upload
    #[arg(long)]
    video: Option<String>,

    /// YouTube Data API key
    #[arg(long)]
    api_key: Option<String>,

    /// Stage-1 CSV to write (default: config comments_csv)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Stage-1 CSV to read (default: config comments_csv)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Stage-2 CSV to write (default: config sentiment_csv)
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every top-level comment of a video and export them to CSV
    Collect(CollectArgs),

    /// Score a collected CSV and export it with sentiment columns
    Analyze(AnalyzeArgs),

    /// Collect, then analyze the file just written
    Run {
        #[command(flatten)]
        collect: CollectArgs,

        /// Stage-2 CSV to write (default: config sentiment_csv)
        #[arg(long)]
        sentiment_output: Option<PathBuf>,
    },

    /// Score a single piece of text
    Score {
        /// Text to score
        text: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current config (secrets redacted)
    Show,
    /// Create a config template (at --config, or ~/.ytc/config.toml)
    Init,
    /// Print the config file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = YtcConfig::load(cli.config.as_deref())?;
    let json_output = cli.json;

    match cli.command {
        Commands::Collect(args) => {
            let client = youtube_client(&cfg, &args)?;
            let comments_csv = args.output.clone().unwrap_or_else(|| cfg.comments_csv());
            let report = pipeline::run_collect(
                &client,
                &client,
                &video_target(&cfg, &args),
                &comments_csv,
                &TracingReporter,
            )
            .context("Comment collection failed")?;

            if json_output {
                output::print_json(&report)?;
            } else {
                table::print_collect_report(&report);
            }
        }

        Commands::Analyze(args) => {
            let comments_csv = args.input.unwrap_or_else(|| cfg.comments_csv());
            let sentiment_csv = args.output.unwrap_or_else(|| cfg.sentiment_csv());
            let report = pipeline::run_analyze(
                &LexiconScorer::new(),
                &comments_csv,
                &sentiment_csv,
                &TracingReporter,
            )
            .context("Sentiment analysis failed")?;

            if json_output {
                output::print_json(&report)?;
            } else {
                table::print_analyze_report(&report);
            }
        }

        Commands::Run {
            collect: args,
            sentiment_output,
        } => {
            let client = youtube_client(&cfg, &args)?;
            let comments_csv = args.output.clone().unwrap_or_else(|| cfg.comments_csv());
            let sentiment_csv = sentiment_output.unwrap_or_else(|| cfg.sentiment_csv());
            let report = pipeline::run_both(
                &client,
                &client,
                &LexiconScorer::new(),
                &video_target(&cfg, &args),
                &comments_csv,
                &sentiment_csv,
                &TracingReporter,
            )
            .context("Pipeline run failed")?;

            if json_output {
                output::print_json(&report)?;
            } else {
                table::print_collect_report(&report.collect);
                if let Some(ref analyzed) = report.analyze {
                    println!();
                    table::print_analyze_report(analyzed);
                }
            }
        }

        Commands::Score { text } => {
            let scores = LexiconScorer::new().score(&text);
            if json_output {
                output::print_json(&serde_json::json!({
                    "text": text,
                    "sentiment": scores.sentiment(),
                    "scores": scores,
                }))?;
            } else {
                table::print_score(&text, &scores);
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", cfg.display_redacted());
            }
            ConfigAction::Init => {
                let path = match cli.config {
                    Some(p) => p,
                    None => config::config_path()?,
                };
                if config::init_config(&path)? {
                    println!("Created {}", path.display());
                } else {
                    println!("Config already exists: {}", path.display());
                }
            }
            ConfigAction::Path => {
                let path = match cli.config {
                    Some(p) => p,
                    None => config::config_path()?,
                };
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}

fn youtube_client(cfg: &YtcConfig, args: &CollectArgs) -> Result<YouTubeClient> {
    let api_key = config::resolve_api_key(args.api_key.as_deref(), cfg.youtube.as_ref())?;
    Ok(YouTubeClient::new(api_key, cfg.base_url()))
}

fn video_target(cfg: &YtcConfig, args: &CollectArgs) -> VideoTarget {
    match (&args.video, &args.query) {
        (Some(id), _) => VideoTarget::Video(id.clone()),
        (None, Some(q)) => VideoTarget::LatestFromChannel(q.clone()),
        (None, None) => VideoTarget::LatestFromChannel(cfg.channel_query()),
    }
}
