use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{error, info, warn};

use postlist::logger::configure_logger;
use postlist::post_list::PostsRoot;
use postlist::server::{build_state, server_run};

use crate::config::open_config;
use crate::config_data::CONFIG_SAMPLE;

mod config;
mod config_data;

const CFG_FILE_NAME: &str = "postlist.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Posts root, overrides the configuration
    #[arg(short, long)]
    posts_dir: Option<String>,

    /// Render the list once to stdout instead of serving it
    #[arg(long)]
    print: bool,

    /// With --print, write the list as JSON
    #[arg(long, requires = "print")]
    json: bool,

    /// Print a sample configuration and exit
    #[arg(long)]
    sample_config: bool,
}

async fn print_list(state: &postlist::server::AppState, json: bool) -> Result<()> {
    let output = if json {
        let view = state.render_view().await?;
        serde_json::to_string_pretty(&view)?
    } else {
        state.render_html().await?
    };
    println!("{}", output);
    Ok(())
}

#[ntex::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    if args.sample_config {
        print!("{}", CONFIG_SAMPLE);
        return Ok(ExitCode::SUCCESS);
    }

    let config_path = args.config_path.map(PathBuf::from);
    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run postlist --help");
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let posts_root = match args.posts_dir.map(PathBuf::from).or_else(|| config.paths.posts_dir.clone()) {
        Some(dir) => PostsRoot::new(dir),
        None => PostsRoot::from_current_dir().context("Could not resolve the current directory")?,
    };

    if args.print {
        let state = build_state(&config, posts_root)?;
        if let Err(err) = print_list(&state, args.json).await {
            error!("{:#}", err);
            return Ok(ExitCode::FAILURE);
        }
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting Postlist =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    info!("Listening on {}:{}", config.server.address, config.server.port);

    server_run(config, posts_root).await?;
    Ok(ExitCode::SUCCESS)
}
