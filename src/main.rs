//! image-preload - load a set of images concurrently and report the batch

use anyhow::Context;
use clap::Parser;
use image_preload::utils::logging::init_logging;
use image_preload::utils::{format_bytes, format_duration};
use image_preload::{BatchSummary, Config, ImageLoader, LoadedImage, preload_with_summary};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(
    name = "image-preload",
    version,
    long_version = image_preload::BUILD_INFO,
    about = "Load images concurrently and report every slot once the batch settles"
)]
struct Cli {
    /// Image sources: http(s) URLs, file paths, file:// or data: URIs
    #[arg(required = true)]
    sources: Vec<String>,

    /// YAML configuration file
    #[arg(short, long, env = "PRELOAD_CONFIG")]
    config: Option<PathBuf>,

    /// Resolve relative sources against this URL
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Exit with a failure status if any source failed
    #[arg(long)]
    strict: bool,

    /// Log filter, e.g. `debug` or `image_preload=trace`
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Serialize)]
struct SlotReport<'a> {
    index: usize,
    source: &'a str,
    loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes: Option<usize>,
}

impl<'a> SlotReport<'a> {
    fn new(index: usize, source: &'a str, slot: Option<&LoadedImage>) -> Self {
        Self {
            index,
            source,
            loaded: slot.is_some(),
            width: slot.map(LoadedImage::width),
            height: slot.map(LoadedImage::height),
            format: slot.map(LoadedImage::format_name),
            bytes: slot.map(LoadedImage::byte_len),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    summary: &'a BatchSummary,
    results: Vec<SlotReport<'a>>,
}

async fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config.as_deref())
        .await
        .context("loading configuration")?;

    if let Some(base_url) = &cli.base_url {
        config.loader.base_url = Some(base_url.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.client.timeout_secs = Some(timeout);
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    image_preload::config::Validate::validate(&config).context("validating configuration")?;
    Ok(config)
}

fn print_text(sources: &[String], slots: &[Option<LoadedImage>], summary: &BatchSummary) {
    for (index, (source, slot)) in sources.iter().zip(slots).enumerate() {
        match slot {
            Some(image) => println!(
                "[{}] ok {}x{} {} {} {}",
                index,
                image.width(),
                image.height(),
                image.format_name(),
                format_bytes(image.byte_len() as u64),
                source
            ),
            None => println!("[{}] failed {}", index, source),
        }
    }
    println!(
        "{} loaded, {} failed, {} total in {}",
        summary.loaded,
        summary.failed,
        summary.total,
        format_duration(summary.elapsed.as_millis() as u64)
    );
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = load_config(&cli).await?;
    init_logging(&config.logging)?;
    debug!(sources = cli.sources.len(), "Starting preload");

    let loader = ImageLoader::from_config(&config).context("building image loader")?;
    let (slots, summary) = preload_with_summary(cli.sources.clone(), &loader).await?;

    if cli.json {
        let report = Report {
            summary: &summary,
            results: cli
                .sources
                .iter()
                .zip(&slots)
                .enumerate()
                .map(|(index, (source, slot))| SlotReport::new(index, source, slot.as_ref()))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&cli.sources, &slots, &summary);
    }

    Ok(!cli.strict || summary.all_loaded())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
