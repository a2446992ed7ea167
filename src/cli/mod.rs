//! Command-tree construction for both binaries.
//!
//! Command trees are built per invocation by the derive structs below; there
//! is no shared mutable registry, so tests can construct as many independent
//! instances as they like.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command line for the `plinthd` daemon.
#[derive(Debug, Parser)]
#[command(name = "plinthd", about = "The plinth server daemon", version)]
pub struct ServerCli {
    #[command(subcommand)]
    pub command: Option<ServerCommand>,
}

/// Subcommands understood by the daemon.
#[derive(Debug, Subcommand)]
pub enum ServerCommand {
    /// Run the plinth server
    Serve(ServeArgs),
}

/// Arguments for `plinthd serve`. Takes no positionals.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port for the server (default: 8080)
    ///
    /// Left unset here so the config layer can tell "flag given" apart from
    /// "fell through to environment or compiled default".
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Command line for the `plinth` management CLI.
///
/// No management commands are wired up yet; a bare invocation prints usage.
#[derive(Debug, Parser)]
#[command(name = "plinth", about = "Management CLI for the plinth server", version)]
pub struct PlinthCli {}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_trees_are_well_formed() {
        ServerCli::command().debug_assert();
        PlinthCli::command().debug_assert();
    }

    #[test]
    fn test_serve_port_flag() {
        let cli = ServerCli::try_parse_from(["plinthd", "serve", "--port", "9090"]).unwrap();
        match cli.command {
            Some(ServerCommand::Serve(args)) => assert_eq!(args.port, Some(9090)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_defaults() {
        let cli = ServerCli::try_parse_from(["plinthd", "serve"]).unwrap();
        match cli.command {
            Some(ServerCommand::Serve(args)) => {
                assert_eq!(args.port, None);
                assert!(args.config.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_rejects_positionals() {
        assert!(ServerCli::try_parse_from(["plinthd", "serve", "extra"]).is_err());
    }

    #[test]
    fn test_serve_rejects_bad_port() {
        assert!(ServerCli::try_parse_from(["plinthd", "serve", "--port", "notaport"]).is_err());
    }

    #[test]
    fn test_independent_instances() {
        let first = ServerCli::try_parse_from(["plinthd", "serve", "--port", "7070"]).unwrap();
        let second = ServerCli::try_parse_from(["plinthd", "serve"]).unwrap();
        let port_of = |cli: ServerCli| match cli.command {
            Some(ServerCommand::Serve(args)) => args.port,
            other => panic!("unexpected command: {other:?}"),
        };
        assert_eq!(port_of(first), Some(7070));
        assert_eq!(port_of(second), None);
    }
}
