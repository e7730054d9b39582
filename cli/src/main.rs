#![forbid(unsafe_code)]

mod repl;
mod session;
mod transport;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use session::{Format, Session};
use todos_view_core::{LateUpdatePolicy, TodoClient, ViewEvent};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use transport::UreqTransport;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch and browse a todo list", long_about = None)]
struct Cli {
    /// Todo collection URL; `?_limit=10` is appended when fetching.
    #[arg(
        long,
        env = "TODOS_ENDPOINT",
        default_value = "https://jsonplaceholder.typicode.com/todos",
        global = true
    )]
    endpoint: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// What to do with a fetch that completes after the view unmounted.
    #[arg(long, value_enum, default_value_t = LatePolicy::Apply, global = true)]
    late_updates: LatePolicy,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the list and render it once (default).
    Show,
    /// Load the list, toggle one item locally, and render.
    Toggle { id: u64 },
    /// Load the list, delete one item locally, and render.
    Delete { id: u64 },
    /// Interactive session over the loaded list.
    Repl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LatePolicy {
    Apply,
    Discard,
}

impl From<LatePolicy> for LateUpdatePolicy {
    fn from(policy: LatePolicy) -> Self {
        match policy {
            LatePolicy::Apply => LateUpdatePolicy::Apply,
            LatePolicy::Discard => LateUpdatePolicy::Discard,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("TODOS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "todos_view=debug,todos_view_core=debug,info"
        } else {
            "todos_view=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = TodoClient::new(&cli.endpoint);
    info!(endpoint = client.endpoint(), "starting");
    let mut session = Session::new(client, cli.late_updates.into(), UreqTransport::new());
    session.mount();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => {}
        Commands::Toggle { id } => {
            session.dispatch(ViewEvent::Toggle(id));
        }
        Commands::Delete { id } => {
            session.dispatch(ViewEvent::Delete(id));
        }
        Commands::Repl => return run_repl(&mut session, cli.format, &mut out),
    }
    writeln!(out, "{}", session.render(cli.format)).context("failed to write output")?;
    session.unmount();
    Ok(())
}

fn run_repl<T: transport::Transport>(
    session: &mut Session<T>,
    format: Format,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "{}", session.render(format))?;
    writeln!(out, "{}", repl::HELP)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match repl::parse(&line) {
            Ok(repl::Command::Quit) => break,
            Ok(repl::Command::Help) => writeln!(out, "{}", repl::HELP)?,
            Ok(repl::Command::Show) => writeln!(out, "{}", session.render(format))?,
            Ok(repl::Command::Event(event)) => {
                if let Some(route) = session.dispatch(event) {
                    writeln!(out, "-> {}", route.path())?;
                    break;
                }
                writeln!(out, "{}", session.render(format))?;
            }
            Err(err) => writeln!(out, "{err:#}")?,
        }
        out.flush()?;
    }

    session.unmount();
    Ok(())
}
