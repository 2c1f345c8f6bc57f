#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

use clap::{ArgGroup, Parser};
use log::{error, info, warn};
use nicotube::exit;
use nicotube::model::SearchOutcome;
use nicotube::normalize::TitleNormalizer;
use nicotube::page::{fetch_watch_page, video_id_from_url, wait_for_title, HtmlFileTitleSource, HtmlTitleSource,
                     Navigation, PageTitleSource, PollConfig, StaticTitle, WatchTracker};
use nicotube::pipeline::MatchPipeline;
use nicotube::render::{render_json, render_text};
use nicotube::search::SnapshotClient;
use nicotube::utils::{create_client, init_logger, read_config, resolve_env_var, CONFIG_FILE};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "nicotube")]
#[command(version)]
#[command(about = "Finds the Niconico videos matching a YouTube video title", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["title", "url", "html", "watch"])))]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// The video title
    #[arg(short = 't', long)]
    title: Option<String>,

    /// A YouTube watch page url
    #[arg(short = 'u', long)]
    url: Option<String>,

    /// A saved watch page, read until a title shows up
    #[arg(long)]
    html: Option<PathBuf>,

    /// Read watch page urls from stdin, one per line
    #[arg(short = 'w', long, default_value_t = false, default_missing_value = "true")]
    watch: bool,

    /// Print the derived search queries instead of searching
    #[arg(short = 'q', long, default_value_t = false, default_missing_value = "true")]
    queries: bool,

    /// Print results as json
    #[arg(short = 'j', long, default_value_t = false, default_missing_value = "true")]
    json: bool,

    /// The config file
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// log level
    #[arg(short = 'l', long = "log-level", default_missing_value = "info")]
    log_level: Option<String>,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config_file = resolve_env_var(args.config_file.as_deref().unwrap_or(CONFIG_FILE));

    init_logger(args.log_level.as_ref(), &config_file);
    info!("Version: {VERSION}");

    let config = read_config(&config_file).unwrap_or_else(|err| exit!("{err}"));
    let normalizer = TitleNormalizer::from_config(&config.normalizer).unwrap_or_else(|err| exit!("{err}"));
    let http_client = create_client(&config.search).build().unwrap_or_else(|err| {
        error!("Failed to build client {err}");
        reqwest::Client::new()
    });
    let poll = PollConfig::from(&config.page);

    if args.watch {
        let client = SnapshotClient::new(Arc::new(http_client.clone()), config.search).unwrap_or_else(|err| exit!("{err}"));
        let pipeline = MatchPipeline::new(normalizer, client);
        watch_stdin(&args, &http_client, &pipeline).await;
        return;
    }

    let title = resolve_title(&args, &http_client, &poll).await;

    if args.queries {
        match title {
            Some(title) => normalizer.derive_queries(&title).iter().for_each(|query| println!("{query}")),
            None => warn!("No video title found"),
        }
        return;
    }

    let client = SnapshotClient::new(Arc::new(http_client), config.search).unwrap_or_else(|err| exit!("{err}"));
    let pipeline = MatchPipeline::new(normalizer, client);
    let outcome = pipeline.run(title.as_deref()).await;
    print_outcome(&outcome, args.json);
}

async fn resolve_title(args: &Args, client: &reqwest::Client, poll: &PollConfig) -> Option<String> {
    if let Some(title) = args.title.as_ref() {
        return StaticTitle(Some(title.clone())).get_page_title();
    }
    if let Some(path) = args.html.as_ref() {
        return wait_for_title(&HtmlFileTitleSource::new(path.clone()), poll).await;
    }
    if let Some(page_url) = args.url.as_ref() {
        return title_from_url(client, page_url).await;
    }
    None
}

async fn title_from_url(client: &reqwest::Client, page_url: &str) -> Option<String> {
    if video_id_from_url(page_url).is_none() {
        warn!("Not a watch page: {page_url}");
        return None;
    }
    match fetch_watch_page(client, page_url).await {
        Ok(html) => HtmlTitleSource::new(html).get_page_title(),
        Err(err) => {
            error!("{err}");
            None
        }
    }
}

async fn watch_stdin(args: &Args, client: &reqwest::Client, pipeline: &MatchPipeline<SnapshotClient>) {
    let mut tracker = WatchTracker::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let page_url = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                error!("Failed to read stdin: {err}");
                break;
            }
        };
        match tracker.observe(page_url.trim()) {
            Navigation::NotWatchPage | Navigation::SameVideo => {}
            Navigation::NewVideo(video_id) => {
                info!("New video: {video_id}");
                let title = title_from_url(client, page_url.trim()).await;
                if args.queries {
                    if let Some(title) = title {
                        pipeline.normalizer().derive_queries(&title).iter().for_each(|query| println!("{query}"));
                    }
                } else {
                    print_outcome(&pipeline.run(title.as_deref()).await, args.json);
                }
            }
        }
    }
}

fn print_outcome(outcome: &SearchOutcome, json: bool) {
    if json {
        match render_json(outcome) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => error!("{err}"),
        }
    } else {
        println!("{}", render_text(outcome));
    }
}
