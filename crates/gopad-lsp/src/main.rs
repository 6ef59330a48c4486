use clap::Parser;
use tower_lsp::{LspService, Server};

mod capabilities;
mod document;
mod handlers;
mod logging;
mod server;

#[derive(Parser)]
#[command(name = "gopad-lsp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Completion and hover language server for Go buffers")]
struct Cli {
    /// Use stdio for communication (required)
    #[arg(long)]
    stdio: bool,

    /// Mirror debug messages to the client's log window
    #[arg(long)]
    debug: bool,

    /// Log filter for stderr, e.g. "debug" or "gopad_lsp=trace" (defaults to RUST_LOG, then "info")
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Disable ANSI colors in log output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if !args.stdio {
        eprintln!("Error: --stdio flag is required");
        std::process::exit(1);
    }

    logging::init_logger(args.no_color, args.log_level.as_deref())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting gopad-lsp");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| server::Backend::new(client, args.debug));

    Server::new(stdin, stdout, socket).serve(service).await;

    tracing::info!("gopad-lsp stopped");
    Ok(())
}
