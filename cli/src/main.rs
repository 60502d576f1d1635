mod api;
mod parse;


use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use payloads::{
    ApiError, EventKind, EventRequest, GenerateRequest, NewCampaign, NewProspect, NewWorkspace, Sequence,
    SequenceStep,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use crate::api::ApiClient;
use crate::parse::{ParseError, parse_property, parse_step};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "outreach-cli", about = "Outreach backend REST CLI")]
struct Cli {
    #[arg(long, env = "OUTREACH_API_BASE", default_value = payloads::DEFAULT_API_BASE)]
    base_url: String,

    #[arg(long, env = "OUTREACH_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Ping,
    Workspace(WorkspaceCommand),
    Prospect(ProspectCommand),
    Generate(GenerateArgs),
    Campaign(CampaignCommand),
    Event(EventCommand),
}

#[derive(Args, Debug)]
struct WorkspaceCommand {
    #[command(subcommand)]
    command: WorkspaceSubcommand,
}

#[derive(Subcommand, Debug)]
enum WorkspaceSubcommand {
    Create {
        #[arg(long, default_value = payloads::DEFAULT_WORKSPACE_NAME)]
        name: String,
        #[arg(long, default_value = "")]
        owner_email: String,
    },
}

#[derive(Args, Debug)]
struct ProspectCommand {
    #[command(subcommand)]
    command: ProspectSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProspectSubcommand {
    Create {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        title: String,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, default_value = "")]
    product: String,
    #[arg(long, default_value = "")]
    audience: String,
    #[arg(long, default_value = payloads::DEFAULT_TONE)]
    tone: String,
    #[arg(long, default_value = "")]
    call_to_action: String,
}

#[derive(Args, Debug)]
struct CampaignCommand {
    #[command(subcommand)]
    command: CampaignSubcommand,
}

#[derive(Subcommand, Debug)]
enum CampaignSubcommand {
    List,
    Create {
        #[arg(long, default_value = payloads::DEFAULT_CAMPAIGN_NAME)]
        name: String,
        #[arg(long)]
        workspace_id: Option<String>,
        #[arg(long = "step", value_name = "DAY:SUBJECT:BODY", help = "Repeat for each step, in send order")]
        steps: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct EventCommand {
    #[command(subcommand)]
    command: EventSubcommand,
}

#[derive(Subcommand, Debug)]
enum EventSubcommand {
    Send {
        #[arg(long = "type", value_name = "TYPE")]
        kind: EventKind,
        #[arg(long = "property", value_name = "KEY=VALUE")]
        properties: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = ApiClient::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    tracing::debug!(base_url = client.base_url(), "using backend");

    match cli.command {
        Command::Ping => {
            client.ping().await?;
            print_json(&health_report(client.base_url()))
        }
        Command::Workspace(WorkspaceCommand {
            command: WorkspaceSubcommand::Create { name, owner_email },
        }) => print_json(&client.create_workspace(&NewWorkspace { name, owner_email }).await?),
        Command::Prospect(ProspectCommand {
            command: ProspectSubcommand::Create { email, first_name, last_name, company, title },
        }) => {
            let body = NewProspect { email, first_name, last_name, company, title };
            print_json(&client.create_prospect(&body).await?)
        }
        Command::Generate(args) => {
            let body = GenerateRequest {
                product: args.product,
                audience: args.audience,
                tone: args.tone,
                call_to_action: args.call_to_action,
            };
            print_json(&client.generate_copy(&body).await?)
        }
        Command::Campaign(campaign) => run_campaign(&client, campaign).await,
        Command::Event(EventCommand {
            command: EventSubcommand::Send { kind, properties },
        }) => {
            let body = event_request(kind, &properties)?;
            print_json(&client.send_event(&body).await?)
        }
    }
}

async fn run_campaign(client: &ApiClient, campaign: CampaignCommand) -> Result<(), CliError> {
    match campaign.command {
        CampaignSubcommand::List => print_json(&client.list_campaigns().await?),
        CampaignSubcommand::Create { name, workspace_id, steps } => {
            let body = NewCampaign { name, workspace_id, sequence: sequence_from_args(&steps)? };
            print_json(&client.create_campaign(&body).await?)
        }
    }
}

/// Steps from `--step` flags, or the starter sequence when none were given.
fn sequence_from_args(raw: &[String]) -> Result<Sequence, ParseError> {
    if raw.is_empty() {
        return Ok(Sequence::starter());
    }
    let steps = raw
        .iter()
        .map(|step| parse_step(step))
        .collect::<Result<Vec<SequenceStep>, _>>()?;
    Ok(Sequence::from(steps))
}

/// Event body from `--property` flags, tagged `"demo": true` unless the caller set `demo`.
fn event_request(kind: EventKind, raw: &[String]) -> Result<EventRequest, ParseError> {
    let mut properties = Map::new();
    for entry in raw {
        let (key, value) = parse_property(entry)?;
        properties.insert(key, value);
    }
    properties.entry("demo").or_insert(Value::Bool(true));
    Ok(EventRequest { kind, properties })
}

/// JSON printed by `ping` once `/healthz` answers 2xx.
fn health_report(base_url: &str) -> Value {
    serde_json::json!({ "status": "ok", "base_url": base_url })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
