//! CLI channel — stdin/stdout REPL for demoing the bot without a
//! Telegram token. Quick replies show up as a bracketed button hint.

use async_trait::async_trait;
use futures::stream;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::channels::{Channel, IncomingMessage, KeyboardAction, MessageStream, Reply};
use crate::error::ChannelError;

/// A simple CLI channel that reads from stdin and writes to stdout.
pub struct CliChannel;

impl CliChannel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Channel for CliChannel {
    fn name(&self) -> &str {
        "cli"
    }

    async fn start(&self) -> Result<MessageStream, ChannelError> {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

        tokio::spawn(async move {
            let stdin = tokio::io::stdin();
            let reader = BufReader::new(stdin);
            let mut lines = reader.lines();

            // Print prompt
            eprint!("> ");

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let line = line.trim().to_string();
                        if line.is_empty() {
                            eprint!("> ");
                            continue;
                        }
                        let msg = IncomingMessage::new("cli", "local-user", &line);
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                    Ok(None) => break, // EOF
                    Err(e) => {
                        tracing::error!("Error reading stdin: {}", e);
                        break;
                    }
                }
            }
        });

        let stream = stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|msg| (msg, rx))
        });

        Ok(Box::pin(stream))
    }

    async fn respond(&self, _msg: &IncomingMessage, reply: Reply) -> Result<(), ChannelError> {
        println!("\n{}\n", reply.text);
        if let KeyboardAction::Show(rows) = &reply.keyboard {
            println!("{}", button_hint(rows));
        }
        eprint!("> ");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), ChannelError> {
        Ok(())
    }

    async fn shutdown(&self) -> Result<(), ChannelError> {
        Ok(())
    }
}

/// Render keyboard rows as `[Yes] [No]` lines, one line per row.
fn button_hint(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|b| format!("[{b}]"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_channel_name() {
        assert_eq!(CliChannel::new().name(), "cli");
    }

    #[test]
    fn button_hint_renders_rows() {
        let rows = vec![vec![
            "Yes".to_string(),
            "No".to_string(),
            "Why would I?".to_string(),
        ]];
        assert_eq!(button_hint(&rows), "[Yes] [No] [Why would I?]");
    }

    #[test]
    fn button_hint_splits_multiple_rows() {
        let rows = vec![vec!["a".to_string()], vec!["b".to_string()]];
        assert_eq!(button_hint(&rows), "[a]\n[b]");
    }

    #[tokio::test]
    async fn respond_always_succeeds() {
        let ch = CliChannel::new();
        let msg = IncomingMessage::new("cli", "local-user", "hi");
        let reply = Reply::with_buttons("Pick one", &["Yes", "No"]);
        assert!(ch.respond(&msg, reply).await.is_ok());
    }
}
