mod commands;
mod output;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use vkapi::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "vkapi")]
#[command(about = "Invoke VK API methods from the command line")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Raw, global = true)]
    output: OutputFormat,

    /// Access token sent as `access_token`
    #[arg(long, env = "VKAPI_ACCESS_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// API version sent as `v`
    #[arg(long, env = "VKAPI_VERSION", default_value = "5.199", global = true)]
    api_version: String,

    /// Response language sent as `lang`
    #[arg(long, env = "VKAPI_LANG", default_value = "en", global = true)]
    lang: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call a single API method
    Call(commands::call::CallArgs),
}

impl Cli {
    fn client_config(&self) -> Result<ClientConfig> {
        let token = match self.token.as_deref() {
            Some(token) if !token.is_empty() => token,
            _ => bail!("No access token: pass --token or set VKAPI_ACCESS_TOKEN"),
        };
        Ok(ClientConfig::new(token, &self.api_version, &self.lang))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vkapi=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let client = Client::new(cli.client_config()?)?;

    match &cli.command {
        Commands::Call(args) => commands::call::run(args, &client, cli.output).await?,
    }

    Ok(())
}
