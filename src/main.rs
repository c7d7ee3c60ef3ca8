use std::sync::Arc;

use futures::StreamExt;

use ariana_bot::channels::{Channel, CliChannel, TelegramChannel, TelegramMode};
use ariana_bot::config::{BotConfig, TransportMode};
use ariana_bot::flow::{FlowEngine, SessionStore};
use ariana_bot::nlu::create_classifier;
use ariana_bot::store::{LibSqlBackend, VisitorStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = BotConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    eprintln!("🤖 Ariana v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   NLU: {:?}", config.nlu.backend);

    // ── Database ─────────────────────────────────────────────────────
    let store: Arc<dyn VisitorStore> = Arc::new(
        LibSqlBackend::new_local(&config.db_path)
            .await
            .unwrap_or_else(|e| {
                eprintln!(
                    "Error: Failed to open database at {}: {}",
                    config.db_path.display(),
                    e
                );
                std::process::exit(1);
            }),
    );
    store.run_migrations().await?;

    eprintln!("   Database: {}", config.db_path.display());

    // ── Conversation engine ──────────────────────────────────────────
    let classifier = create_classifier(&config.nlu)?;
    let engine = Arc::new(FlowEngine::new(
        Arc::clone(&store),
        classifier,
        SessionStore::new(config.session_idle_timeout),
    ));

    // Sweep idle sessions every 60s
    {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
            loop {
                interval.tick().await;
                let pruned = engine.prune_idle_sessions().await;
                if pruned > 0 {
                    tracing::info!(pruned, "Pruned idle sessions");
                }
            }
        });
    }

    // ── Channel ──────────────────────────────────────────────────────
    let channel: Box<dyn Channel> = match config.telegram_token.clone() {
        Some(token) => {
            let mode = match config.transport {
                TransportMode::Poll => TelegramMode::Poll,
                TransportMode::Webhook => TelegramMode::Webhook {
                    public_url: config.webhook_url.clone().unwrap_or_default(),
                    port: config.port,
                },
            };
            eprintln!("   Telegram: enabled ({:?})", config.transport);
            Box::new(TelegramChannel::new(token, mode))
        }
        None => {
            eprintln!("   Telegram: disabled (no TELEGRAM_BOT_TOKEN)");
            eprintln!("   Type /start to begin the demo. Ctrl-D to exit.");
            Box::new(CliChannel::new())
        }
    };
    eprintln!("   Channel: {}\n", channel.name());

    if let Err(e) = channel.health_check().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let mut stream = channel.start().await?;

    while let Some(msg) = stream.next().await {
        match engine.handle(&msg).await {
            Ok(replies) => {
                for reply in replies {
                    if let Err(e) = channel.respond(&msg, reply).await {
                        tracing::warn!("Failed to send reply: {e}");
                    }
                }
            }
            Err(e) => {
                tracing::error!("Error handling message: {e}");
            }
        }
    }

    channel.shutdown().await.ok();

    Ok(())
}
