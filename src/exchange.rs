//! One request/response cycle per user submission.
//!
//! Submitting appends the human message and clears the draft synchronously,
//! then runs the webhook call on a spawned task; the completion comes back
//! to the UI loop as an [`ExchangeEvent`]. Overlapping submissions are
//! allowed: each carries a monotonic sequence number that is logged, and
//! completions apply in arrival order.

use crate::app::App;
use crate::chat_message::Side;
use crate::config::Config;
use crate::constants::{BOT_AVATAR, BOT_NAME};
use crate::errors::{MaraiError, MaraiResult};
use log::{error, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Lifecycle of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Sending,
    Appended,
    Failed,
}

/// Completion of one in-flight submission, delivered to the UI loop.
#[derive(Debug)]
pub enum ExchangeEvent {
    Reply { seq: u64, text: String },
    Failed { seq: u64 },
}

/// One element of the webhook's reply array. Rasa-style replies may carry
/// more fields (images, buttons); only `text` is consulted.
#[derive(Debug, Deserialize)]
struct WebhookReply {
    #[serde(default)]
    text: Option<String>,
}

pub struct ExchangeController {
    client: Client,
    webhook_url: String,
    next_seq: u64,
    tx: mpsc::UnboundedSender<ExchangeEvent>,
}

impl ExchangeController {
    pub fn new(config: &Config) -> MaraiResult<(Self, mpsc::UnboundedReceiver<ExchangeEvent>)> {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| MaraiError::config_error(format!("failed to build http client: {}", e)))?;
        let controller = Self {
            client,
            webhook_url: config.webhook_url.clone(),
            next_seq: 0,
            tx,
        };
        Ok((controller, rx))
    }

    /// Submits the current draft. A whitespace-only draft is silently
    /// ignored; otherwise the human message is appended and the draft
    /// cleared before the request is issued, and neither is rolled back
    /// if the request later fails.
    pub fn submit(&mut self, app: &mut App) -> SubmissionState {
        let draft = app.draft().to_string();
        if draft.trim().is_empty() {
            return SubmissionState::Idle;
        }

        app.append_message("", "", Side::Right, draft.clone());
        app.clear_draft();

        let seq = self.next_seq;
        self.next_seq += 1;
        info!("submission #{}: {} bytes", seq, draft.len());

        let client = self.client.clone();
        let url = self.webhook_url.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let started = Instant::now();
            match fetch_reply(&client, &url, &draft).await {
                Ok(text) => {
                    info!(
                        "submission #{} resolved in {}ms",
                        seq,
                        started.elapsed().as_millis()
                    );
                    let _ = tx.send(ExchangeEvent::Reply { seq, text });
                }
                Err(e) => {
                    error!("submission #{} failed: {}", seq, e);
                    let _ = tx.send(ExchangeEvent::Failed { seq });
                }
            }
        });

        SubmissionState::Sending
    }
}

/// Applies one completion to the conversation. Failures append nothing:
/// the human message stays and the error lives only in the log.
pub fn apply_event(app: &mut App, event: ExchangeEvent) -> SubmissionState {
    match event {
        ExchangeEvent::Reply { text, .. } => {
            app.append_message(BOT_NAME, BOT_AVATAR, Side::Left, text);
            SubmissionState::Appended
        }
        ExchangeEvent::Failed { seq } => {
            info!("submission #{} left without a reply", seq);
            SubmissionState::Failed
        }
    }
}

/// POSTs `{"message": ...}` and reads the first element's `text` field from
/// the reply array. An empty array or a missing field falls back to the
/// empty string rather than an undefined value.
async fn fetch_reply(client: &Client, url: &str, message: &str) -> MaraiResult<String> {
    let response = client
        .post(url)
        .json(&json!({ "message": message }))
        .send()
        .await
        .map_err(|e| MaraiError::api_error(format!("request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(MaraiError::api_error(format!(
            "webhook returned {}",
            status
        )));
    }

    let replies: Vec<WebhookReply> = response
        .json()
        .await
        .map_err(|e| MaraiError::parse_error(format!("malformed webhook reply: {}", e)))?;

    Ok(replies
        .into_iter()
        .next()
        .and_then(|r| r.text)
        .unwrap_or_default())
}
