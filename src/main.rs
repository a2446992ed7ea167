//! plinthd: the plinth server daemon.
//!
//! Builds the command tree, resolves configuration, wires the interrupt
//! handler to a fresh lifetime context, and hands control to the server
//! run loop. Clean shutdown exits 0; any command or startup failure
//! prints the error and exits 1.

use clap::{CommandFactory, Parser};

use plinth::cli::{ServeArgs, ServerCli, ServerCommand};
use plinth::config::{self, Overrides};
use plinth::lifecycle::signals::install_interrupt_handler;
use plinth::lifecycle::shutdown::{Shutdown, ShutdownCause};
use plinth::observability::logging;
use plinth::server::Server;

#[tokio::main]
async fn main() {
    logging::init();

    let cli = match ServerCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => exit_on_parse_error(err),
    };

    match cli.command {
        Some(ServerCommand::Serve(args)) => {
            if let Err(err) = serve(args).await {
                // Errors share stdout with the rest of the console output;
                // the exit code is the machine-readable failure signal.
                println!("Error: {err}");
                std::process::exit(1);
            }
        }
        None => {
            // No subcommand: print usage and exit cleanly.
            let _ = ServerCli::command().print_help();
        }
    }
}

async fn serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load(args.config.as_deref(), Overrides { port: args.port })?;

    // The serve session gets its own child context so a future supervisor
    // can cancel it without tearing down the whole process scope.
    let root = Shutdown::new();
    let session = root.child();
    install_interrupt_handler(&session)?;

    Server::new(config).run(&session).await;

    // Owner releases the context on the way out; a no-op if a signal
    // already cancelled it.
    session.cancel(ShutdownCause::Completed);
    Ok(())
}

fn exit_on_parse_error(err: clap::Error) -> ! {
    if err.use_stderr() {
        // Real parse failure: message on stdout, exit 1.
        println!("{err}");
        std::process::exit(1);
    }
    // --help and --version travel clap's error path but exit 0.
    err.exit()
}
