use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;
use voisia_bridge::anthropic::{self, AnthropicThinking};
use voisia_bridge::config::config_search_paths;
use voisia_bridge::models::ModelCatalog;
use voisia_bridge::openai;
use voisia_bridge::{logging, BridgeClient, BridgeConfig, Conversation, VoisiaMessage};

#[derive(Parser)]
#[command(
    name = "voisia-bridge",
    about = "Send Voisia conversations to Anthropic or OpenAI through the backend",
    version
)]
struct Cli {
    /// Path to config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Backend URL (overrides config)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// Also write logs under <DIR>/logs
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Print config search paths and exit
    #[arg(long)]
    show_config_paths: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Ask an Anthropic model
    Anthropic {
        #[command(flatten)]
        turn: TurnArgs,

        /// System prompt (overrides config)
        #[arg(long)]
        system: Option<String>,

        /// Enable extended thinking with this token budget
        #[arg(long)]
        thinking_budget: Option<u32>,
    },
    /// Ask an OpenAI model
    Openai {
        #[command(flatten)]
        turn: TurnArgs,

        /// Instructions (overrides config)
        #[arg(long)]
        instructions: Option<String>,
    },
    /// List the model catalog
    Models {
        /// Ask the backend instead of reading `models_file`
        #[arg(long)]
        remote: bool,
    },
}

#[derive(Args)]
struct TurnArgs {
    /// The new user message
    #[arg(short, long)]
    prompt: String,

    /// JSON file with earlier messages (an array of {role, content})
    #[arg(long)]
    history: Option<PathBuf>,

    /// Model id (overrides config)
    #[arg(short, long)]
    model: Option<String>,
}

impl TurnArgs {
    fn conversation(&self) -> anyhow::Result<Vec<VoisiaMessage>> {
        let mut messages = match &self.history {
            Some(path) => read_history(path)?,
            None => Vec::new(),
        };
        messages.push(VoisiaMessage::user(self.prompt.clone()));
        Ok(messages)
    }
}

fn read_history(path: &Path) -> anyhow::Result<Vec<VoisiaMessage>> {
    let content = std::fs::read_to_string(path)?;
    let conversation: Conversation = serde_json::from_str(&content)?;
    Ok(conversation.into_messages())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = logging::init_tracing(cli.log_dir.as_deref())?;

    if cli.show_config_paths {
        println!("Config search paths:");
        for (i, path) in config_search_paths().iter().enumerate() {
            println!("  {}. {}", i + 1, path.display());
        }
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("no command given, see --help");
    };

    let mut config = BridgeConfig::find_and_load(cli.config.as_deref())?;
    config.apply_backend_url(cli.backend_url);

    info!(
        backend = %config.backend.base_url,
        log_file = ?log_file,
        "voisia-bridge v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = BridgeClient::from_config(&config)?;

    let output = match command {
        Command::Anthropic {
            turn,
            system,
            thinking_budget,
        } => {
            let mut params = config.anthropic.clone();
            if let Some(model) = turn.model.clone() {
                params.model = model;
            }
            if system.is_some() {
                params.system = system;
            }
            if let Some(budget) = thinking_budget {
                params.thinking = Some(AnthropicThinking::enabled(budget));
            }
            params.validate()?;

            let resp = client
                .generate_anthropic_response(turn.conversation()?, &params)
                .await?;
            json!({
                "message": anthropic::create_voisia_message(&resp),
                "usage": anthropic::extract_token_usage(&resp),
            })
        }
        Command::Openai { turn, instructions } => {
            let mut params = config.openai.clone();
            if let Some(model) = turn.model.clone() {
                params.model = model;
            }
            if instructions.is_some() {
                params.instructions = instructions;
            }
            params.validate()?;

            let resp = client
                .generate_openai_response(turn.conversation()?, &params)
                .await?;
            json!({
                "message": openai::create_voisia_message(&resp)?,
                "usage": openai::extract_token_usage(&resp),
            })
        }
        Command::Models { remote } => {
            let models = if remote {
                client.available_models().await?
            } else {
                let path = config
                    .models_file
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("models_file is not configured, use --remote"))?;
                ModelCatalog::load(path)?.models
            };
            serde_json::to_value(models)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
