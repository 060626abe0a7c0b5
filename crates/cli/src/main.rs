use anyhow::Result;
use clap::{Parser, Subcommand};
use gesture_detect::commands::{
    detect_command, inspect_command, label_command, load_detector_config,
};
use gesture_detect::default_log_filter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Traffic gesture detection client.
///
/// Picks a video, posts it to the detection service and prints the gesture
/// label. State handling and the HTTP call come from `gesture_core`; this
/// binary only parses arguments and prints.
#[derive(Parser, Debug)]
#[command(
    name = "gesture-detect",
    version,
    about = "Upload a traffic police gesture video for automatic detection",
    long_about = None
)]
struct Cli {
    /// Log submission progress to stderr.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the library version.
    Version,

    /// Turn detection slugs (e.g. `turn-left`) into display labels.
    Label {
        /// One or more slugs to format.
        #[arg(required = true)]
        slugs: Vec<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Upload a video to the detection endpoint and show the detected gesture.
    ///
    /// This will:
    /// - Reject files whose MIME type is not `video/*`.
    /// - Post the file as multipart form data to the endpoint.
    /// - Print the formatted gesture label, or the failure message.
    Detect {
        /// Path to the video file.
        #[arg(long)]
        file: String,

        /// Detection endpoint URL. Overrides the config file.
        #[arg(long)]
        endpoint: Option<String>,

        /// Optional detector config file (JSON or YAML).
        #[arg(long)]
        config: Option<String>,

        /// Optional request timeout in seconds. By default the request may wait indefinitely.
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show how a file would be handled without sending it anywhere.
    Inspect {
        /// Path to the file.
        #[arg(long)]
        file: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(cli.verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Default to the Version command if none is provided.
    match cli.command.unwrap_or(Command::Version) {
        Command::Version => {
            println!("gesture-detect v{}", gesture_core::version());
        }
        Command::Label { slugs, json } => label_command(&slugs, json)?,
        Command::Detect { file, endpoint, config, timeout_secs, json } => {
            let config = load_detector_config(config.as_deref(), endpoint, timeout_secs)?;
            detect_command(&file, &config, json).await?
        }
        Command::Inspect { file, json } => inspect_command(&file, json)?,
    }

    Ok(())
}
