//! Encore - terminal driver for the playback sequencer

use clap::Parser;
use encore_cli::{CliConfig, Command, Flow, Session};
use encore_core::{LibrarySync, UserId};
use encore_server_client::{FileLibrary, LibraryClient, ServerConfig};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "encore")]
#[command(about = "Drive the Encore playback sequencer from the terminal", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./encore.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// User whose library to load
    #[arg(short, long, env = "ENCORE_USER")]
    user: Option<String>,

    /// Read the library from a JSON file
    #[arg(short, long)]
    library: Option<PathBuf>,

    /// Fetch the library from an Encore server
    #[arg(short, long)]
    server: Option<String>,
}

/// Library that is always empty (no source configured)
struct EmptyLibrary;

#[async_trait::async_trait]
impl LibrarySync for EmptyLibrary {
    async fn fetch(&self, _user: &UserId) -> encore_core::Result<Vec<encore_core::Track>> {
        Ok(Vec::new())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore=info,encore_cli=info,encore_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(user) = cli.user {
        config.user = user;
    }
    if let Some(file) = cli.library {
        config.library.file = Some(file);
    }
    if let Some(server) = cli.server {
        config.library.server_url = Some(server);
    }
    config.validate()?;

    let library: Box<dyn LibrarySync> = match (&config.library.server_url, &config.library.file) {
        (Some(url), _) => {
            let server = match &config.library.access_token {
                Some(token) => ServerConfig::with_token(url.clone(), token.clone()),
                None => ServerConfig::new(url.clone()),
            };
            Box::new(LibraryClient::new(server)?)
        }
        (None, Some(file)) => Box::new(FileLibrary::new(file.clone())),
        (None, None) => {
            tracing::warn!("No library source configured; starting with an empty library");
            Box::new(EmptyLibrary)
        }
    };

    let mut session = Session::new(
        &config.playback_config(),
        config.notification_timeout(),
        library,
        UserId::new(config.user.clone()),
    );

    session.login().await;
    println!("{}", session.render_up_next());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        let (flow, output) = session.execute(command).await;
        if !output.is_empty() {
            println!("{}", output);
        }
        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}
