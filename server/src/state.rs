use std::sync::Arc;

use color_eyre::eyre::WrapErr;
use tracing::instrument;
use url::Url;

use crate::contact::{ContactSink, ScriptEndpoint};

const DEFAULT_CONTACT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbz6zQDfigIF6aTPM_TpO9Yj4H72RN0Q5CgA1CE7-K1Frkx0Z9Wp096sAl1vmw6E63Vt/exec";

#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub endpoint: Url,
    /// Whether the visible "Send Message" button posts the form. Off by
    /// default, the page then renders the button without a form around it.
    pub form_wired: bool,
}

impl ContactConfig {
    #[instrument(name = "ContactConfig::from_env")]
    pub fn from_env() -> crate::Result<Self> {
        let endpoint = std::env::var("CONTACT_ENDPOINT_URL")
            .unwrap_or_else(|_| DEFAULT_CONTACT_ENDPOINT.to_string());
        let endpoint =
            Url::parse(&endpoint).wrap_err("Invalid CONTACT_ENDPOINT_URL not parsable")?;

        let form_wired = match std::env::var("CONTACT_FORM_WIRED") {
            Ok(raw) => parse_flag(&raw)
                .wrap_err_with(|| format!("Invalid CONTACT_FORM_WIRED value `{raw}`"))?,
            Err(_) => false,
        };

        Ok(Self {
            endpoint,
            form_wired,
        })
    }
}

fn parse_flag(raw: &str) -> crate::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(color_eyre::eyre::eyre!("expected a boolean, got `{other}`")),
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    #[instrument(name = "ServerConfig::from_env")]
    pub fn from_env() -> crate::Result<Self> {
        let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let port = port
            .parse::<u16>()
            .wrap_err_with(|| format!("Invalid PORT `{port}`"))?;

        Ok(Self { port })
    }
}

#[derive(Debug, Clone)]
pub struct VersionInfo {
    pub package_version: &'static str,
    pub git_commit: Option<&'static str>,
}

impl VersionInfo {
    pub fn from_build() -> Self {
        Self {
            package_version: env!("CARGO_PKG_VERSION"),
            git_commit: option_env!("GIT_COMMIT"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub contact: ContactConfig,
    pub sink: Arc<dyn ContactSink>,
    pub versions: VersionInfo,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> crate::Result<Self> {
        let contact = ContactConfig::from_env()?;

        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("Couldn't build the HTTP client")?;
        let sink = ScriptEndpoint::new(client, contact.endpoint.clone());

        Ok(AppState {
            contact,
            sink: Arc::new(sink),
            versions: VersionInfo::from_build(),
        })
    }
}
