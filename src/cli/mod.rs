use crate::config::Config;
use crate::core::{extract_video_ids, SchemaGenerator};
use crate::providers::YouTubeDataApi;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "yt-schema")]
#[command(about = "Emit schema.org VideoObject JSON-LD for YouTube videos embedded in an article")]
#[command(version)]
pub struct Cli {
    /// Article to scan; `-` reads stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// YouTube Data API key; the config file, then YOUTUBE_API_KEY, are used when absent
    #[arg(long)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Value for `regionsAllowed`
    #[arg(short, long)]
    pub region: Option<String>,

    /// Pretty-print the JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Only list the video IDs found, one per line
    #[arg(long)]
    pub ids_only: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn read_input(&self) -> Result<String> {
        if self.input == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading article from stdin")?;
            Ok(text)
        } else {
            std::fs::read_to_string(&self.input)
                .with_context(|| format!("reading article {}", self.input))
        }
    }

    /// Config file values with command line flags applied on top.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(key) = &self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(region) = &self.region {
            config.regions_allowed = region.clone();
        }
        config.pretty |= self.pretty;

        Ok(config)
    }

    pub async fn run(&self) -> Result<()> {
        let text = self.read_input()?;
        let ids = extract_video_ids(&text);

        if self.ids_only {
            for id in &ids {
                println!("{}", id);
            }
            return Ok(());
        }

        if ids.is_empty() {
            info!("No YouTube links found, nothing to emit");
            return Ok(());
        }

        let config = self.resolve_config()?;
        let provider = YouTubeDataApi::new(&config)?;
        let generator = SchemaGenerator::new(Box::new(provider), config.regions_allowed.as_str());

        match generator.generate(&text).await {
            Some(document) => {
                info!("Emitting JSON-LD for {} videos", document.videos().len());
                println!("{}", document.to_script_tag(config.pretty)?);
            }
            None => info!("Nothing to emit"),
        }

        Ok(())
    }
}
