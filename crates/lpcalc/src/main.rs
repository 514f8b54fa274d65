//! `lpcalc` -- sandboxed formula evaluator CLI.
//!
//! Front end for the evaluator that powers the embedded calculator widget
//! on generated landing pages. It parses CLI arguments with clap, builds
//! the runtime context, and dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Build runtime context from global args
    let ctx = RuntimeContext::from_global_args(&cli.global);

    // Set up logging based on verbosity. This also makes the widget's
    // swallowed evaluation diagnostics visible on stderr.
    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("lpcalc=debug,lpcalc_widget=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Dispatch to command handler
    let result = match cli.command {
        Commands::Eval(args) => commands::eval::run(&ctx, &args),
        Commands::Check(args) => commands::check::run(&ctx, &args),
        Commands::Render(args) => commands::render::run(&ctx, &args),
        Commands::Version => commands::version::run(&ctx),
    };

    if let Err(e) = result {
        if !ctx.quiet {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
