use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CHANNEL_QUERY: &str = "Pop the Balloon";
pub const DEFAULT_COMMENTS_CSV: &str = "pop_the_balloon_comments.csv";
pub const DEFAULT_SENTIMENT_CSV: &str = "pop_the_balloon_sentiment_analysis.csv";
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";
/// Plain-text key file looked up in the working directory as a last resort.
pub const API_KEY_FILE: &str = "api_key.txt";

/// `[youtube]` block from config.toml.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct YouTubeConfig {
    pub api_key: Option<String>,
    pub api_key_command: Option<String>,
    pub base_url: Option<String>,
    pub channel_query: Option<String>,
}

/// `[paths]` block from config.toml.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct PathsConfig {
    pub comments_csv: Option<PathBuf>,
    pub sentiment_csv: Option<PathBuf>,
}

/// Top-level ytc config file structure.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct YtcConfig {
    pub youtube: Option<YouTubeConfig>,
    pub paths: Option<PathsConfig>,
}

impl YtcConfig {
    /// Load config from `path`, or ~/.ytc/config.toml. Returns default if the
    /// file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => config_path()?,
        };
        if !path.exists() {
            return Ok(YtcConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn channel_query(&self) -> String {
        self.youtube
            .as_ref()
            .and_then(|y| y.channel_query.clone())
            .unwrap_or_else(|| DEFAULT_CHANNEL_QUERY.to_string())
    }

    pub fn base_url(&self) -> Option<String> {
        self.youtube.as_ref().and_then(|y| y.base_url.clone())
    }

    pub fn comments_csv(&self) -> PathBuf {
        self.paths
            .as_ref()
            .and_then(|p| p.comments_csv.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COMMENTS_CSV))
    }

    pub fn sentiment_csv(&self) -> PathBuf {
        self.paths
            .as_ref()
            .and_then(|p| p.sentiment_csv.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SENTIMENT_CSV))
    }

    /// Display config with secrets redacted.
    pub fn display_redacted(&self) -> String {
        let mut lines = Vec::new();
        if let Some(ref yt) = self.youtube {
            lines.push("[youtube]".to_string());
            if let Some(ref key) = yt.api_key {
                lines.push(format!("  api_key = \"{}\"", redact(key)));
            }
            if let Some(ref cmd) = yt.api_key_command {
                lines.push(format!("  api_key_command = \"{}\"", cmd));
            }
            if let Some(ref url) = yt.base_url {
                lines.push(format!("  base_url = \"{}\"", url));
            }
            if let Some(ref q) = yt.channel_query {
                lines.push(format!("  channel_query = \"{}\"", q));
            }
        }
        if let Some(ref paths) = self.paths {
            lines.push("[paths]".to_string());
            if let Some(ref p) = paths.comments_csv {
                lines.push(format!("  comments_csv = \"{}\"", p.display()));
            }
            if let Some(ref p) = paths.sentiment_csv {
                lines.push(format!("  sentiment_csv = \"{}\"", p.display()));
            }
        }
        if lines.is_empty() {
            lines.push("(nothing configured, using defaults)".to_string());
        }
        lines.join("\n")
    }
}

fn redact(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}

/// Resolve the API key through the chain: CLI flag > env var > config key >
/// config command > key file in the working directory.
pub fn resolve_api_key(cli_flag: Option<&str>, config: Option<&YouTubeConfig>) -> Result<String> {
    resolve_credential(cli_flag, API_KEY_ENV, config, Path::new(API_KEY_FILE))
}

fn resolve_credential(
    cli_flag: Option<&str>,
    env_var_name: &str,
    config: Option<&YouTubeConfig>,
    key_file: &Path,
) -> Result<String> {
    // 1. CLI flag
    if let Some(key) = cli_flag {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    // 2. Environment variable
    if let Ok(val) = std::env::var(env_var_name) {
        if !val.is_empty() {
            return Ok(val);
        }
    }

    if let Some(yt) = config {
        // 3. Config file api_key
        if let Some(ref key) = yt.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }

        // 4. External command
        if let Some(ref cmd) = yt.api_key_command {
            if !cmd.is_empty() {
                let output = std::process::Command::new("sh")
                    .arg("-c")
                    .arg(cmd)
                    .output()
                    .with_context(|| format!("Failed to run api_key_command: {cmd}"))?;

                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    bail!(
                        "api_key_command failed (exit {}): {}",
                        output.status.code().unwrap_or(-1),
                        stderr.trim()
                    );
                }

                let secret = String::from_utf8(output.stdout)
                    .context("api_key_command output is not valid UTF-8")?
                    .trim()
                    .to_string();

                if !secret.is_empty() {
                    return Ok(secret);
                }
            }
        }
    }

    // 5. Key file
    if key_file.exists() {
        let key = std::fs::read_to_string(key_file)
            .with_context(|| format!("Failed to read {}", key_file.display()))?;
        let key = key.trim();
        if key.is_empty() {
            bail!("API key file {} is empty", key_file.display());
        }
        return Ok(key.to_string());
    }

    bail!(
        "No API key found. Provide via --api-key, {} env var, ~/.ytc/config.toml, or {}",
        env_var_name,
        key_file.display()
    );
}

/// Path to the config file: ~/.ytc/config.toml
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".ytc").join("config.toml"))
}

/// Default config template content.
pub fn default_config_template() -> &'static str {
    r#"# ~/.ytc/config.toml
# API key resolution order: --api-key > YOUTUBE_API_KEY > api_key > api_key_command > ./api_key.txt

[youtube]
# api_key = "your-youtube-data-api-key"
# api_key_command = "your-secrets-manager-command-here"
# base_url = "https://www.googleapis.com/youtube/v3"
# channel_query = "Pop the Balloon"

[paths]
# comments_csv = "pop_the_balloon_comments.csv"
# sentiment_csv = "pop_the_balloon_sentiment_analysis.csv"
"#
}

/// Write the config template to `path` unless a file is already there.
/// Returns whether a file was created.
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, default_config_template())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}
