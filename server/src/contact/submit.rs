use std::fmt::Debug;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use super::form::ContactForm;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request to the contact endpoint failed")]
    Transport(#[from] reqwest::Error),
    #[error("contact endpoint responded with {0}")]
    Status(reqwest::StatusCode),
}

/// Somewhere a filled-in contact form can be sent. Returns the raw reply
/// body; interpreting it is up to [`ContactForm::submit`].
#[async_trait]
pub trait ContactSink: Debug + Send + Sync {
    async fn deliver(&self, form: &ContactForm) -> Result<String, SubmitError>;
}

/// The Apps Script web app that collects messages from the site.
#[derive(Debug, Clone)]
pub struct ScriptEndpoint {
    client: reqwest::Client,
    url: Url,
}

impl ScriptEndpoint {
    pub fn new(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl ContactSink for ScriptEndpoint {
    #[instrument(skip_all, fields(url = %self.url), err)]
    async fn deliver(&self, form: &ContactForm) -> Result<String, SubmitError> {
        let response = self
            .client
            .post(self.url.clone())
            .header("Content-Type", "application/json")
            .json(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status));
        }

        Ok(response.text().await?)
    }
}

#[derive(Debug, Deserialize)]
struct EndpointReply {
    result: Option<String>,
}

const SUCCESS_SENTINEL: &str = "success";

/// How a submission went, from the visitor's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The endpoint answered `{"result": "success"}`.
    Sent,
    /// The endpoint answered, but with anything else.
    Rejected,
    /// We never got a usable answer.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Submission {
    pub fn notice(self) -> Notice {
        match self {
            Submission::Sent => Notice {
                kind: NoticeKind::Success,
                message: "Message sent successfully!",
            },
            Submission::Rejected => Notice {
                kind: NoticeKind::Failure,
                message: "Something went wrong. Try again.",
            },
            Submission::Failed => Notice {
                kind: NoticeKind::Failure,
                message: "CORS or network error occurred.",
            },
        }
    }
}

fn is_success_reply(body: &str) -> bool {
    serde_json::from_str::<EndpointReply>(body)
        .ok()
        .and_then(|reply| reply.result)
        .is_some_and(|result| result == SUCCESS_SENTINEL)
}

impl ContactForm {
    /// Sends the form once. Clears every field on success and leaves them
    /// alone otherwise. No retries and no timeout.
    #[instrument(skip_all)]
    pub async fn submit(&mut self, sink: &dyn ContactSink) -> Submission {
        tracing::debug!(empty = self.is_empty(), "Submitting contact form");

        match sink.deliver(self).await {
            Ok(body) if is_success_reply(&body) => {
                tracing::info!("Contact form delivered");
                self.clear();

                Submission::Sent
            }
            Ok(body) => {
                tracing::warn!(body = %body, "Contact endpoint did not report success");

                Submission::Rejected
            }
            Err(error) => {
                tracing::error!(error = ?error, "Contact form submission failed");

                Submission::Failed
            }
        }
    }
}
