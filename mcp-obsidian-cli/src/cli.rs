use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mcp-obsidian")]
#[command(version)]
#[command(about = "An MCP server for Obsidian vaults")]
#[command(long_about = "
mcp-obsidian is an MCP (Model Context Protocol) server that exposes an
Obsidian vault through the Local REST API community plugin. It lets an
assistant list, read, search, edit and journal into your notes.

Configuration comes from the environment:
  OBSIDIAN_API_KEY               API key from the Local REST API plugin (required)
  OBSIDIAN_PROTOCOL              http or https (default: https)
  OBSIDIAN_HOST                  default: 127.0.0.1
  OBSIDIAN_PORT                  default: 27124
  OBSIDIAN_SSL_CERT_PATH         PEM certificate to trust
  OBSIDIAN_SSL_CERT_BASE64       base64-encoded PEM certificate to trust
  OBSIDIAN_TIMEOUT_SECS          request timeout (default: 6)
  OBSIDIAN_DISABLE_SIMPLE_SEARCH set to true to hide obsidian_simple_search
  OBSIDIAN_ENABLE_JOURNALING     set to true to expose obsidian_journal_entry
  OBSIDIAN_DEBUG_LOG             write DEBUG logs to this file

Example usage:
  mcp-obsidian serve     # Run as MCP server
  mcp-obsidian tools     # Show the tools that would be served
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server over stdio (default)
    #[command(long_about = "
Runs mcp-obsidian as an MCP server on stdin/stdout. This is the default
when no subcommand is given. The set of tools is decided once at startup
from OBSIDIAN_DISABLE_SIMPLE_SEARCH and OBSIDIAN_ENABLE_JOURNALING.

Example:
  mcp-obsidian serve
")]
    Serve,
    /// List the tools the server would expose
    Tools,
    /// Invoke a single tool and print its output
    #[command(long_about = "
Invokes one tool against the configured vault and prints the text content
it returns. Useful for checking the connection to the Local REST API.

Examples:
  mcp-obsidian call obsidian_list_files_in_vault
  mcp-obsidian call obsidian_get_file_contents --arguments '{\"filepath\": \"Inbox.md\"}'
")]
    Call {
        /// Tool name, e.g. obsidian_get_file_contents
        name: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        arguments: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_help_works() {
        let error = Cli::try_parse_from_args(["mcp-obsidian", "--help"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_works() {
        let error = Cli::try_parse_from_args(["mcp-obsidian", "--version"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from_args(["mcp-obsidian"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.debug);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_serve_subcommand() {
        let cli = Cli::try_parse_from_args(["mcp-obsidian", "-d", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_call_defaults_to_empty_arguments() {
        let cli =
            Cli::try_parse_from_args(["mcp-obsidian", "call", "obsidian_list_files_in_vault"])
                .unwrap();
        match cli.command {
            Some(Commands::Call { name, arguments }) => {
                assert_eq!(name, "obsidian_list_files_in_vault");
                assert_eq!(arguments, "{}");
            }
            other => panic!("Expected call command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_call_requires_name() {
        assert!(Cli::try_parse_from_args(["mcp-obsidian", "call"]).is_err());
    }
}
