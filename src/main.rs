use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

mod cli;

#[derive(Parser)]
#[command(
    name = "shaderlab",
    version,
    about = "GLSL completion, hover, and signature help"
)]
struct Cli {
    /// Use this config file instead of searching for shaderlab.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the Language Server Protocol server on stdio
    Lsp,
    /// Print hover documentation for the symbol at a position
    Hover(cli::query::PositionArgs),
    /// Print completion candidates at a position
    Complete(cli::query::CompleteArgs),
    /// Print signature help for the call enclosing a position
    Signature(cli::query::PositionArgs),
    /// List the known GLSL symbols
    Symbols(cli::symbols::SymbolsArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = cli::load_config(cli.config.as_deref()).and_then(|loaded| {
        cli::init_logging(cli.verbose, loaded.config.log_level.as_deref());
        loaded.log_source();
        let config = loaded.config;
        match cli.command {
            Command::Lsp => cli::cmd_lsp(config),
            Command::Hover(args) => cli::query::cmd_hover(&config, args),
            Command::Complete(args) => cli::query::cmd_complete(&config, args),
            Command::Signature(args) => cli::query::cmd_signature(&config, args),
            Command::Symbols(args) => cli::symbols::cmd_symbols(&config, args),
        }
    });

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
