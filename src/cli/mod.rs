use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod chat;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the chat web server
    Serve {
        /// Set the server host address, all interfaces by default so
        /// the server is reachable from outside a container
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8000")]
        port: String,
    },
    /// Chat with the HR policy assistant in the terminal
    Chat {},
}

/// HR policy assistant chat frontend. The answer API endpoint is read
/// from the `API_URL` environment variable.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Chat {}) => {
            chat::run().await?;
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
