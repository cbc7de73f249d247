use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(about = "AI-powered conversational translation CLI")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Target language code (e.g., ja, en, zh-CN)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Provider name
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Attach an image or .txt file (repeatable)
    #[arg(short = 'a', long = "attach")]
    pub attach: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive conversational translation mode
    Chat {
        /// Target language code (e.g., ja, en, zh-CN)
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Provider name
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// List supported target languages
    Languages,
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
}
