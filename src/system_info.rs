use git_version::git_version;
use serde::Serialize;

// include -modified if the working tree has uncommitted changes
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub name: &'static str,
    pub version: String,
    pub commit: &'static str,
    pub build: &'static str,
}

pub fn get_system_info() -> SystemInfo {
    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    let latest = option_env!("LATEST_TAG").unwrap_or("");
    let ahead = option_env!("COMMITS_AHEAD").unwrap_or("");
    let version = match option_env!("RELEASE_VERSION") {
        Some(tag) if !tag.is_empty() => format!("release {}", tag),
        _ if !latest.is_empty() && !ahead.is_empty() => {
            format!("development branch {} commits ahead of {}", ahead, latest)
        }
        _ if !latest.is_empty() => format!("development branch ahead of {}", latest),
        _ => format!("development {}", env!("CARGO_PKG_VERSION")),
    };

    SystemInfo {
        name: env!("CARGO_PKG_NAME"),
        version,
        commit: COMMIT,
        build,
    }
}
