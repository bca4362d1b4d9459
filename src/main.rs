use anyhow::Context;
use clap::Parser;
use slackless::config::Settings;
use slackless::telemetry::{get_subscriber, init_subscriber};
use slackless::Payload;
use tracing::info;

/// Post a message to a Slack incoming webhook.
///
/// Unset options fall back to the SLACK_* environment variables.
#[derive(Debug, Parser)]
#[command(name = "slackless", version, about)]
struct Args {
    /// Webhook URL (https://hooks.slack.com/services/...)
    #[arg(long)]
    url: Option<String>,

    /// Name to post as
    #[arg(long)]
    username: Option<String>,

    /// Emoji token used as the avatar, without colons
    #[arg(long)]
    icon: Option<String>,

    /// Channel to post to instead of the webhook default
    #[arg(long)]
    channel: Option<String>,

    /// Do not turn @names and #channels into links
    #[arg(long)]
    no_link_names: bool,

    /// Read MESSAGE as a JSON payload instead of plain text
    #[arg(long)]
    json: bool,

    /// Print the request body instead of sending it
    #[arg(long)]
    dry_run: bool,

    message: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("slackless".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let args = Args::parse();

    let mut settings = Settings::from_env();
    if args.url.is_some() {
        settings.webhook_url = args.url;
    }
    if args.username.is_some() {
        settings.username = args.username;
    }
    if args.icon.is_some() {
        settings.icon_emoji = args.icon;
    }
    if args.channel.is_some() {
        settings.channel = args.channel;
    }
    if args.no_link_names {
        settings.link_names = false;
    }

    let payload = if args.json {
        let value: serde_json::Value =
            serde_json::from_str(&args.message).context("MESSAGE is not valid JSON")?;
        Payload::try_from(value)?
    } else {
        Payload::from(args.message)
    };

    let client = settings.into_client()?;

    if args.dry_run {
        println!("{}", client.compose(payload)?.to_json()?);
        return Ok(());
    }

    client.send(payload)?;
    client.flush().await;
    info!("Done");

    Ok(())
}
