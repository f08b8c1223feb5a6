//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "coursesite")]
#[command(author, version, about = "Serve or export the course catalog site", long_about = None)]
pub struct Cli {
    /// What to do; serves the site when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Serve the site over HTTP (BIND_ADDR)
    Serve,

    /// Write every page as static HTML
    Export {
        /// Output directory
        #[arg(default_value = "dist")]
        dir: PathBuf,
    },
}

impl Cli {
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_without_arguments() {
        let cli = Cli::try_parse_from(["coursesite"]).unwrap();
        assert_eq!(cli.command(), &Command::Serve);
    }

    #[test]
    fn export_defaults_to_dist() {
        let cli = Cli::try_parse_from(["coursesite", "export"]).unwrap();
        assert_eq!(
            cli.command(),
            &Command::Export {
                dir: PathBuf::from("dist")
            }
        );

        let cli = Cli::try_parse_from(["coursesite", "export", "public"]).unwrap();
        assert_eq!(
            cli.command(),
            &Command::Export {
                dir: PathBuf::from("public")
            }
        );
    }

    #[test]
    fn help_and_unknown_commands_are_reported_by_clap() {
        let help = Cli::try_parse_from(["coursesite", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let unknown = Cli::try_parse_from(["coursesite", "deploy"]).unwrap_err();
        assert_eq!(unknown.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }
}
