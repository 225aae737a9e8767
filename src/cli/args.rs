//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// ytnotes - Turn YouTube video transcripts into concise AI-generated notes
#[derive(Parser, Debug)]
#[command(name = "ytnotes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the web form
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate notes for a video and print them
    Summarize {
        /// YouTube video link
        url: String,

        /// Preferred transcript language, repeatable (overrides transcript.languages)
        #[arg(short, long = "lang", value_name = "CODE")]
        languages: Vec<String>,
    },

    /// Print the joined transcript of a video
    Transcript {
        /// YouTube video link
        url: String,

        /// Preferred transcript language, repeatable (overrides transcript.languages)
        #[arg(short, long = "lang", value_name = "CODE")]
        languages: Vec<String>,
    },

    /// Print the video identifier and thumbnail for a link
    Resolve {
        /// YouTube video link
        url: String,
    },

    /// Check configuration and credentials
    Doctor {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
