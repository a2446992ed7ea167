//! plinth: management CLI for the plinth server.
//!
//! No management commands exist yet; a bare invocation prints usage and
//! exits 0. Parse failures print the error and exit 1.

use clap::{CommandFactory, Parser};

use plinth::cli::PlinthCli;

fn main() {
    let PlinthCli {} = match PlinthCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if err.use_stderr() {
                println!("{err}");
                std::process::exit(1);
            }
            // --help and --version exit 0 through clap's error path.
            err.exit()
        }
    };

    let _ = PlinthCli::command().print_help();
}
