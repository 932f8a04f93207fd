mod config;
mod error;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use postman::{ApiRequest, Method, PostmanClient};
use serde_json::Value;

use config::{API_KEY_ENV, Config};
use error::{Error, Result};

const CONFIG_FILE: &str = "postman-mcp.toml";

#[derive(Parser)]
#[command(name = "postman-mcp")]
#[command(about = "Postman API client for MCP tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the API key by fetching the authenticated user
    Check,
    /// Send a GET request and print the JSON response
    Get {
        /// API path, e.g. /workspaces
        path: String,
        /// Query parameter as key=value (repeatable)
        #[arg(short, long = "query")]
        query: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let config = Config::load_or_default(&cli.config)?;
    let client = connect(&config, std::env::var(API_KEY_ENV).ok())?;

    match cli.command {
        Commands::Check => cmd_check(&client).await,
        Commands::Get { path, query } => cmd_get(&client, &path, &query).await,
    }
}

fn connect(config: &Config, env_key: Option<String>) -> Result<PostmanClient> {
    let api_key = config.api_key(env_key)?;
    let client = PostmanClient::provision(Some(&api_key), None, config.client_options())?;
    tracing::debug!(base_url = client.base_url(), "client ready");
    Ok(client)
}

async fn cmd_check(client: &PostmanClient) -> Result<()> {
    let me = client.get("/me").await?;
    let user = &me["user"];

    match user["username"].as_str() {
        Some(username) => println!("Authenticated as {username} (id {})", user["id"]),
        None => println!("Authenticated against {}", client.base_url()),
    }
    Ok(())
}

async fn cmd_get(client: &PostmanClient, path: &str, query: &[String]) -> Result<()> {
    let mut request = ApiRequest::new(Method::GET, path);
    for pair in query {
        let (key, value) = parse_query(pair)?;
        request = request.query(key, value);
    }

    let body = client.send(request).await?;
    println!("{}", render(&body));
    Ok(())
}

fn parse_query(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| Error::InvalidQuery(pair.to_string()))
}

fn render(body: &Value) -> String {
    match body {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_query_pairs() {
        assert_eq!(parse_query("workspace=abc").unwrap(), ("workspace", "abc"));
        assert_eq!(parse_query("filter=a=b").unwrap(), ("filter", "a=b"));
        assert_eq!(parse_query("empty=").unwrap(), ("empty", ""));
        assert!(matches!(
            parse_query("novalue"),
            Err(Error::InvalidQuery(_))
        ));
        assert!(parse_query("=x").is_err());
    }

    #[test]
    fn render_body() {
        assert_eq!(render(&json!("plain text")), "plain text");
        assert_eq!(render(&Value::Null), "null");
        assert!(render(&json!({"a": 1})).contains("\"a\": 1"));
    }

    #[test]
    fn cli_parses_get_with_queries() {
        let cli = Cli::parse_from(["postman-mcp", "get", "/collections", "-q", "workspace=w1"]);
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
        match cli.command {
            Commands::Get { path, query } => {
                assert_eq!(path, "/collections");
                assert_eq!(query, vec!["workspace=w1".to_string()]);
            }
            Commands::Check => panic!("expected get"),
        }
    }

    #[test]
    fn connect_requires_key() {
        let config = Config::default();
        assert!(matches!(connect(&config, None), Err(Error::Config(_))));
        assert!(matches!(
            connect(&config, Some(String::new())),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn connect_uses_env_key_then_file() {
        let config = Config::parse(
            "[postman]\napi_key = \"PMAK-file\"\nbase_url = \"http://localhost:9/\"",
        )
        .unwrap();
        let client = connect(&config, None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9");
        assert!(connect(&Config::default(), Some("PMAK-env".into())).is_ok());
    }
}
