mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./requestarr.toml",
        "~/.config/requestarr/config.toml",
        "/etc/requestarr/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.overseerr_baseurl.is_empty() {
        anyhow::bail!("overseerr_baseurl is not set");
    }

    if config.overseerr_api_key.is_empty() {
        anyhow::bail!("overseerr_api_key is not set");
    }

    for (index, rule) in config.rules.iter().enumerate() {
        if rule.apply.root_folder.is_empty() {
            anyhow::bail!("Rule {} has an empty root_folder", rule.label(index));
        }
        if rule.apply.server_id < 0 {
            anyhow::bail!("Rule {} has a negative server_id", rule.label(index));
        }
    }

    // A catch-all rule shadows every later rule of the same media type.
    for (index, rule) in config.rules.iter().enumerate() {
        if rule.match_criteria.is_unconstrained()
            && config.rules[index + 1..]
                .iter()
                .any(|r| r.media_type == rule.media_type)
        {
            tracing::warn!(
                "Rule {} matches everything of type '{}'; later '{}' rules are unreachable",
                rule.label(index),
                rule.media_type,
                rule.media_type
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_credentials() {
        let config = Config {
            overseerr_baseurl: "http://localhost:5055".into(),
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("overseerr_api_key"));
    }

    #[test]
    fn validate_accepts_minimal_config() {
        let config = Config {
            overseerr_baseurl: "http://localhost:5055".into(),
            overseerr_api_key: "key".into(),
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
