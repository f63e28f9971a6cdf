use std::sync::Arc;

use axum::extract::FromRef;

use crate::{contact::ContactSink, state::VersionInfo, AppState, ContactConfig};

impl FromRef<AppState> for ContactConfig {
    fn from_ref(state: &AppState) -> Self {
        state.contact.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ContactSink> {
    fn from_ref(state: &AppState) -> Self {
        state.sink.clone()
    }
}

impl FromRef<AppState> for VersionInfo {
    fn from_ref(state: &AppState) -> Self {
        state.versions.clone()
    }
}
