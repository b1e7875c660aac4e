//! Pixels - Entry Point

use clap::Parser;
use pixels::api::{encode, BaseOptions, Endpoint};
use pixels::config::ResolvedConfig;
use pixels::model::Category;
use pixels::state::Session;
use std::path::PathBuf;
use tracing::info;

/// Pixels - browse, search and download Pixabay images in the terminal
#[derive(Parser, Debug)]
#[command(name = "pixels")]
#[command(version)]
#[command(about = "Terminal browser for searching, filtering, downloading and sharing Pixabay images")]
pub struct Args {
    /// Start with this search term (at least three characters)
    #[arg(short, long, conflicts_with = "category")]
    pub search: Option<String>,

    /// Start with this category selected (e.g. nature, animals)
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Pixabay API key (overrides config file and PIXELS_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Directory downloaded images are saved to
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the first-page request URL and exit
    #[arg(long)]
    pub print_url: bool,
}

impl Args {
    /// Session seeded with the command-line search term and category.
    fn preset_session(&self) -> Session {
        Session::with_preset(self.search.clone(), self.category)
    }
}

/// First-page URL for `session`. The key is masked when none is configured.
fn first_page_url(config: &ResolvedConfig, session: &mut Session) -> String {
    let request = session.initial_fetch();
    let key = config.api_key.as_deref().unwrap_or("***");
    let endpoint = Endpoint::new(config.base_url.as_str(), key);
    encode(&endpoint, &BaseOptions::default(), Some(&request.params))
        .url()
        .to_string()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pixels::config::load_config_with_precedence(args.config.clone())?;
        let merged = pixels::config::merge_config(config_file);
        let with_env = pixels::config::apply_env_overrides(merged);
        pixels::config::apply_cli_overrides(
            with_env,
            args.api_key.clone(),
            args.download_dir.clone(),
        )
    };

    if args.print_url {
        let mut session = args.preset_session();
        println!("{}", first_page_url(&config, &mut session));
        return Ok(());
    }

    pixels::logging::init(&config.log_file_path)?;

    info!(
        base_url = %config.base_url,
        download_dir = %config.download_dir.display(),
        has_api_key = config.api_key.is_some(),
        "Configuration loaded and resolved"
    );

    pixels::view::run_with_config(&config, args.preset_session())?;

    Ok(())
}
