use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use codeclub::config::{Config, ConfigStore};
use codeclub::logging::init_tracing;
use codeclub::messages::MessageChannel;
use codeclub::notifications::{
    Delivery, InboundPush, Notification, NotificationDisplay, NotificationSession, OutboundPush,
    PushClient, PushReceiver, PushTarget,
};
use codeclub::repository::FixturePostRepository;
use codeclub::ui::feed::FeedScreen;
use codeclub::ui::PresentationPolicy;

#[derive(Debug, Parser)]
#[command(name = "codeclub", version, about = "Coding-club client core tools")]
struct Cli {
    /// Log to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply the inbound display rules to a push payload.
    Route {
        /// JSON file with the platform payload.
        #[arg(long)]
        payload: PathBuf,
        /// Id of the signed-in user.
        #[arg(long)]
        user: Option<String>,
    },
    /// Send a push through the configured endpoint.
    Send(SendArgs),
    /// Run the feed screen over recorded emissions and print the result.
    Feed {
        /// JSON array of tri-state results.
        #[arg(long)]
        fixture: PathBuf,
    },
}

#[derive(Debug, Args)]
struct SendArgs {
    #[arg(long, conflicts_with = "token", required_unless_present = "token")]
    topic: Option<String>,
    #[arg(long)]
    token: Option<String>,
    #[arg(long)]
    title: String,
    #[arg(long)]
    body: String,
    #[arg(long)]
    channel: Option<String>,
    /// Data payload entries as key=value.
    #[arg(long = "data", value_parser = parse_key_value)]
    data: Vec<(String, String)>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

struct StdoutDisplay;

impl NotificationDisplay for StdoutDisplay {
    fn show(&self, notification: &Notification) {
        println!(
            "[{}] #{} {}: {}",
            notification.channel_name, notification.slot_id, notification.title, notification.body
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = ConfigStore::open(path).context("Failed to load configuration")?;

    match cli.command {
        Command::Route { payload, user } => route(&config, payload, user),
        Command::Send(args) => send(&config, args).await,
        Command::Feed { fixture } => feed(&config, fixture).await,
    }
}

fn route(config: &ConfigStore, payload: PathBuf, user: Option<String>) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&payload)
        .with_context(|| format!("Failed to read payload '{}'", payload.display()))?;
    let push: InboundPush = serde_json::from_str(&content).context("Invalid push payload")?;

    let receiver = PushReceiver::new(
        StdoutDisplay,
        NotificationSession::new(),
        config.get().push.fallback_notification_id,
    );
    match receiver.handle(&push, user.as_deref()) {
        Delivery::Displayed { slot_id } => tracing::info!(slot_id, "Displayed"),
        Delivery::Suppressed => println!("suppressed: sent by the current user"),
    }
    Ok(())
}

async fn send(config: &ConfigStore, args: SendArgs) -> anyhow::Result<()> {
    let target = match (args.topic, args.token) {
        (Some(topic), _) => PushTarget::Topic(topic),
        (None, Some(token)) => PushTarget::Token(token),
        (None, None) => bail!("either --topic or --token is required"),
    };

    let mut push = OutboundPush::new(target, args.title, args.body);
    for (key, value) in args.data {
        push = push.with_data(key, value);
    }
    if let Some(channel) = args.channel {
        push = push.with_channel(channel);
    }

    let client = PushClient::new(config.get().push)?;
    client.send(&push).await?;
    println!("sent");
    Ok(())
}

async fn feed(config: &ConfigStore, fixture: PathBuf) -> anyhow::Result<()> {
    let repository = Arc::new(FixturePostRepository::from_path(&fixture)?);
    let messages = MessageChannel::new();
    let policy = PresentationPolicy::from(&config.get().presentation);

    let screen = FeedScreen::new(repository.clone(), messages.clone(), policy);
    screen.load();
    println!("loading: {}", screen.state().loading);

    repository.wait_drained().await;

    let state = screen.state();
    println!("loading: {}", state.loading);
    println!("posts: {}", state.posts.len());
    for post in &state.posts {
        println!("  {} by {} ({} likes)", post.id, post.author_name, post.like_count());
    }
    if let Some(message) = messages.take() {
        println!("message ({:?}): {}", message.kind, message.message);
    }

    screen.close();
    Ok(())
}
