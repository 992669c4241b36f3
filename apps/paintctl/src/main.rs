use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dispatch_core::{CommandList, Dispatcher};
use url::Url;

mod config;
mod scene;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "paintctl", about = "Send painter commands to a painter server")]
struct Cli {
    /// Base endpoint of the painter server; overrides config file and env.
    #[arg(long)]
    endpoint: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a newline-separated command script (one command per line) and
    /// dispatch it as a single request.
    Send {
        /// Script file; stdin when omitted or `-`.
        file: Option<PathBuf>,
    },
    /// Draw the fixed scene.
    Draw,
    /// Draw a figure, then move it across the board in timed steps.
    DrawMove,
    /// Clear the artboard.
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let cli = Cli::parse();

    let settings = load_settings();
    let endpoint = cli.endpoint.unwrap_or(settings.endpoint);
    let endpoint =
        Url::parse(&endpoint).with_context(|| format!("invalid endpoint '{endpoint}'"))?;
    let dispatcher = Dispatcher::new(endpoint);

    match cli.command {
        Command::Send { file } => {
            let script = read_script(file.as_deref())?;
            let _ = dispatcher
                .on_trigger(|| CommandList::from_lines(&script))
                .await;
        }
        Command::Draw => {
            let _ = dispatcher.on_trigger(scene::draw_scene).await;
        }
        Command::DrawMove => {
            let interval = Duration::from_millis(settings.interval_ms);
            dispatcher
                .schedule_sequence(scene::draw_and_move_steps(), interval)
                .wait()
                .await;
        }
        Command::Reset => {
            let _ = dispatcher.on_trigger(scene::reset_scene).await;
        }
    }

    Ok(())
}

fn read_script(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read script '{}'", path.display())),
        _ => {
            let mut script = String::new();
            io::stdin()
                .read_to_string(&mut script)
                .context("failed to read script from stdin")?;
            Ok(script)
        }
    }
}
