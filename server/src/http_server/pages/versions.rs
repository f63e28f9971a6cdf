use axum::extract::State;
use maud::{html, Markup};

use crate::state::VersionInfo;

pub(crate) async fn versions(State(versions): State<VersionInfo>) -> Markup {
    html! {
      p { "UP Pumps contact site " (versions.package_version) }
      p { "Git Commit: " (versions.git_commit.unwrap_or("unknown")) }
    }
}
