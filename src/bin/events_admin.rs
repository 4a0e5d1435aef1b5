use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use events_admin::{
    AppConfig, AppState, DestroyTarget, init_logging,
    presentation::{
        commands,
        dto::event_dto::{
            BooleanLike, ConnectEventRequest, DestroyEventsRequest, ListEventsRequest,
        },
    },
};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "events-admin", about = "Administer event/topic connections")]
struct Cli {
    /// Database url; overrides EVENTS_ADMIN_DATABASE_URL.
    #[arg(long, env = "EVENTS_ADMIN_DATABASE_URL")]
    database_url: Option<String>,

    /// Pretty-print the JSON envelope.
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List events with connection counts.
    List {
        /// `connected` or `unconnected`; anything else lists all events.
        #[arg(long)]
        filter: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        page: Option<i64>,
        /// `start_time`, `source_id` or `name`.
        #[arg(long)]
        order: Option<String>,
        /// Boolean-like; truthy sorts ascending.
        #[arg(long)]
        asc: Option<String>,
    },
    /// Connect an event to a topic through a sync client.
    Connect {
        #[arg(long)]
        event_id: i64,
        #[arg(long)]
        topic_id: i64,
        #[arg(long)]
        client: String,
    },
    /// Destroy events, their topics, or both.
    Destroy {
        #[arg(long, value_parser = parse_target)]
        target: DestroyTarget,
        /// Event ids to destroy.
        event_ids: Vec<i64>,
    },
}

fn parse_target(value: &str) -> Result<DestroyTarget, String> {
    value.parse()
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    init_logging(&config.logging.filter);

    let state = AppState::new(&config)
        .await
        .with_context(|| format!("Failed to open {}", config.database.url))?;

    let payload = match cli.command {
        Command::List {
            filter,
            page,
            order,
            asc,
        } => {
            let request = ListEventsRequest {
                filter,
                page,
                order,
                asc: asc.map(BooleanLike::Text),
            };
            to_json(&commands::list_events(&state, request).await, cli.pretty)?
        }
        Command::Connect {
            event_id,
            topic_id,
            client,
        } => {
            let request = ConnectEventRequest {
                event_id,
                topic_id,
                client,
            };
            to_json(&commands::connect_event(&state, request).await, cli.pretty)?
        }
        Command::Destroy { target, event_ids } => {
            let request = DestroyEventsRequest { event_ids, target };
            to_json(&commands::destroy_events(&state, request).await, cli.pretty)?
        }
    };

    println!("{payload}");
    state.repository.pool().close().await;
    Ok(())
}
