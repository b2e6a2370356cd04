use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use chartsnap::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Directory the snapshot file is written to (defaults to CHARTSNAP_DATA_DIR or project/data)
    #[clap(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Without a subcommand every country chart is collected and exported
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the country chart playlists
    Countries,

    /// Look up Spotify data outside of the snapshot
    Lookup(LookupOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct LookupOptions {
    #[command(subcommand)]
    pub command: LookupSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LookupSubcommand {
    /// Show track details
    Track { id: String },

    /// Show the audio features of a track
    Features { id: String },

    /// List the track ids of an album
    Album { id: String },

    /// Show the current chart of a single country
    Chart { country: String },
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        None => cli::export(cli.data_dir).await,
        Some(Command::Countries) => cli::countries(),
        Some(Command::Lookup(opt)) => {
            let target = match opt.command {
                LookupSubcommand::Track { id } => cli::Lookup::Track(id),
                LookupSubcommand::Features { id } => cli::Lookup::Features(id),
                LookupSubcommand::Album { id } => cli::Lookup::Album(id),
                LookupSubcommand::Chart { country } => cli::Lookup::Chart(country),
            };
            cli::lookup(target).await
        }
        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
