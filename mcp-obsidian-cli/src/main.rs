use anyhow::{bail, Context};
use mcp_obsidian::mcp::{McpServer, McpTool, ToolRegistry};
use mcp_obsidian::Config;
use mcp_obsidian_cli::cli::{Cli, Commands};
use mcp_obsidian_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use mcp_obsidian_cli::logging;
use rmcp::model::RawContent;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    let command = cli.command.unwrap_or(Commands::Serve);

    // A missing .env is fine; real environment variables take precedence.
    let dotenv = dotenvy::dotenv();

    // Resolved before logging so OBSIDIAN_DEBUG_LOG can add the file layer.
    let config = Config::from_env();
    let debug_log = config.as_ref().ok().and_then(|c| c.debug_log.clone());
    logging::init(
        logging::log_level(cli.quiet, cli.debug, cli.verbose),
        debug_log.as_deref(),
    );

    match &dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            process::exit(EXIT_WARNING);
        }
    };

    let exit_code = match command {
        Commands::Serve => {
            tracing::info!("Starting MCP server");
            run_server(&config).await
        }
        Commands::Tools => run_tools(&config),
        Commands::Call { name, arguments } => run_call(&config, &name, &arguments).await,
    };

    process::exit(exit_code);
}

async fn run_server(config: &Config) -> i32 {
    use is_terminal::IsTerminal;
    use rmcp::serve_server;
    use rmcp::transport::io::stdio;
    use tokio_util::sync::CancellationToken;

    let server = match McpServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to create MCP server: {}", e);
            return EXIT_WARNING;
        }
    };
    tracing::info!(
        "Serving {} tools: {:?}",
        server.list_tool_names().len(),
        server.list_tool_names()
    );

    if std::io::stdin().is_terminal() {
        tracing::warn!("stdin is a terminal; mcp-obsidian serve expects an MCP client on stdio");
    }

    let ct = CancellationToken::new();
    let ct_clone = ct.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => tracing::error!("Failed to listen for ctrl+c: {}", e),
        }
        ct_clone.cancel();
    });

    match serve_server(server, stdio()).await {
        Ok(running_service) => {
            tracing::info!("MCP server started successfully");

            tokio::select! {
                result = running_service.waiting() => {
                    if let Err(e) = result {
                        tracing::error!("MCP server task failed: {}", e);
                        return EXIT_WARNING;
                    }
                    tracing::info!("MCP client disconnected");
                }
                _ = ct.cancelled() => {}
            }

            tracing::info!("MCP server exited successfully");
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            EXIT_WARNING
        }
    }
}

fn run_tools(config: &Config) -> i32 {
    let registry = match ToolRegistry::build(&config.toggles) {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("Failed to build tool registry: {}", e);
            return EXIT_WARNING;
        }
    };

    for name in registry.list_tool_names() {
        let summary = registry
            .get_tool(name)
            .and_then(|tool| tool.description().lines().next())
            .unwrap_or_default();
        println!("{name}: {summary}");
    }
    EXIT_SUCCESS
}

async fn run_call(config: &Config, name: &str, arguments: &str) -> i32 {
    match call_tool(config, name, arguments).await {
        Ok(output) => {
            println!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            EXIT_ERROR
        }
    }
}

async fn call_tool(config: &Config, name: &str, arguments: &str) -> anyhow::Result<String> {
    let arguments: serde_json::Value =
        serde_json::from_str(arguments).context("--arguments is not valid JSON")?;
    let serde_json::Value::Object(arguments) = arguments else {
        bail!("--arguments must be a JSON object");
    };

    let server = McpServer::new(config)?;
    let result = server
        .call(name, Some(arguments))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e.message))?;

    let text: Vec<&str> = result
        .content
        .iter()
        .filter_map(|content| match &content.raw {
            RawContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect();
    Ok(text.join("\n"))
}
