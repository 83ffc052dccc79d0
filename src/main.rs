use clap::Parser;
use lost_sounds::config::Settings;
use lost_sounds::media::MediaReference;
use lost_sounds::news::NewsClient;
use lost_sounds::playback::VirtualPlayer;
use lost_sounds::resolve_config_path;
use lost_sounds::ui::{parse_input, Args, InputAction, TerminalView, HELP_TEXT};
use lost_sounds::widget::{NewsFeed, Widget};
use std::error::Error;
use std::fs::File;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const COMMAND_BUFFER_SIZE: usize = 64;
const UPDATE_CAPACITY: usize = 256;

/// Installs the log subscriber, writing to `--log-file` when given and stderr otherwise.
fn init_tracing(args: &Args) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;
    let writer = match &args.log_file {
        Some(path) => BoxMakeWriter::new(Mutex::new(File::create(path)?)),
        None => BoxMakeWriter::new(std::io::stderr),
    };
    let registry = tracing_subscriber::registry().with(filter);
    if args.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(args.log_file.is_none())
                    .with_writer(writer),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(&args)?;

    // Load configuration from file or use defaults
    let config_path = resolve_config_path(args.config.as_deref())?;
    let mut settings = Settings::load(&config_path)?;

    // Command-line arguments override the file
    if let Some(source_url) = &args.source_url {
        settings.source_url = source_url.clone();
    }
    if let Some(duration) = args.duration {
        settings.simulated_duration_secs = duration;
    }
    if args.no_news {
        settings.news_enabled = false;
    }
    settings.validate()?;
    info!("Starting with source {}", settings.source_url);

    let media = MediaReference::new(settings.source_url.clone());
    if !media.media_id().is_known() {
        warn!("Source URL '{}' carries no media identifier.", settings.source_url);
    }

    let (mut widget, handle) = Widget::new(media.clone(), COMMAND_BUFFER_SIZE, UPDATE_CAPACITY);
    if settings.news_enabled {
        match NewsClient::new(&settings.news_endpoint) {
            Ok(client) => {
                info!("Reading headlines from {}", client.endpoint());
                widget = widget.with_news_feed(NewsFeed {
                    api: Arc::new(client),
                    tag: settings.news_tag.clone(),
                    per_page: settings.news_page_size,
                });
            }
            Err(e) => warn!("News feed disabled: {}", e),
        }
    }

    let view = TerminalView::new(&media);
    let view_task = tokio::spawn(view.run(widget.subscribe()));
    let widget_task = tokio::spawn(async move {
        let mut widget = widget;
        widget.run().await;
    });

    let player = VirtualPlayer::spawn(
        settings.simulated_duration_secs,
        settings.progress_interval(),
        handle.progress_sink(),
    );
    handle.attach_player(player).await;

    // Main input loop
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, shutting down.");
                break;
            }
            line = lines.next_line() => match line {
                Ok(Some(line)) => match parse_input(&line) {
                    Some(InputAction::Quit) => break,
                    Some(InputAction::Help) => eprintln!("{}", HELP_TEXT),
                    Some(action) => {
                        if let Some(command) = action.into_command(settings.skip_seconds) {
                            if !handle.send(command).await {
                                break;
                            }
                        }
                    }
                    None => debug!("Ignoring unrecognized input: {:?}", line),
                },
                Ok(None) => {
                    info!("Input closed, shutting down.");
                    break;
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    }

    handle.shutdown().await;
    widget_task.await?;
    view_task.await?;
    Ok(())
}
