use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "quizrelay", version, about = "Quiz-question generating relay for an OpenAI-compatible API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP relay server
    Serve(ServeArgs),
    /// Validate the process configuration
    Check,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Bind port
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,
}
