mod command;
mod surface;
mod transport;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use todo_core::{Api, Templates, TodoClient, Todos, View};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::command::{Command, HELP};
use crate::surface::TerminalSurface;
use crate::transport::UreqTransport;

/// Terminal client for the todos API.
#[derive(Debug, Parser)]
#[command(name = "todo", version)]
struct Args {
    /// Server origin; requests go to `<base-url>/api/todos`.
    #[arg(long, env = "TODO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Directory of `.hbs` files replacing the built-in templates by name.
    #[arg(long, env = "TODO_TEMPLATES")]
    templates: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let templates = match &args.templates {
        Some(dir) => Templates::with_overrides(dir)
            .with_context(|| format!("loading templates from {}", dir.display()))?,
        None => Templates::builtin().context("compiling built-in templates")?,
    };

    info!(base_url = %args.base_url, "starting");
    let api = Api::new(TodoClient::new(&args.base_url), UreqTransport::new());
    let surface = TerminalSurface::new(io::stdout());
    let mut view = View::new(Todos::new(api), templates, surface)?;
    view.start().context("loading todos")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            // The surface has already shown the alert; keep the session going.
            Command::Event(event) => {
                if let Err(err) = view.handle(event) {
                    error!(error = %err, "command failed");
                }
            }
        }
    }
    Ok(())
}
