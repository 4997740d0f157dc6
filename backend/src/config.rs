use std::path::PathBuf;

use crate::error::{SyncError, SyncResult};

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2024-01-01";
pub const DEFAULT_SNAPSHOT_PATH: &str = "frontend/assets/content.json";

/// Connection settings for the CMS query API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Read token; needed only for private datasets.
    pub token: Option<String>,
    pub use_cdn: bool,
    /// Replaces `https://{project_id}.api.sanity.io`, e.g. for a local mock.
    pub api_base_url: Option<String>,
}

impl CmsConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: DEFAULT_DATASET.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: None,
            use_cdn: false,
            api_base_url: None,
        }
    }

    pub fn base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let host = if self.use_cdn { "apicdn.sanity.io" } else { "api.sanity.io" };
                format!("https://{}.{}", self.project_id, host)
            }
        }
    }

    pub fn query_url(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.base_url(),
            self.api_version.trim_start_matches('v'),
            self.dataset
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub cms: CmsConfig,
    pub snapshot_path: PathBuf,
}

impl SyncConfig {
    pub fn from_env() -> SyncResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let project_id = get("SANITY_PROJECT_ID")
            .ok_or_else(|| SyncError::Config("SANITY_PROJECT_ID must be set".to_string()))?;
        let use_cdn = match get("SANITY_USE_CDN").as_deref() {
            None => false,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(other) => {
                return Err(SyncError::Config(format!(
                    "SANITY_USE_CDN must be true or false, got '{}'",
                    other
                )))
            }
        };

        let cms = CmsConfig {
            project_id,
            dataset: get("SANITY_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string()),
            api_version: get("SANITY_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            token: get("SANITY_TOKEN"),
            use_cdn,
            api_base_url: get("SANITY_API_BASE_URL"),
        };

        Ok(Self {
            cms,
            snapshot_path: PathBuf::from(
                get("SNAPSHOT_PATH").unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string()),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply() {
        let config = SyncConfig::from_lookup(lookup(&[("SANITY_PROJECT_ID", "abc123")])).unwrap();
        assert_eq!(config.cms, CmsConfig::new("abc123"));
        assert_eq!(config.snapshot_path, PathBuf::from(DEFAULT_SNAPSHOT_PATH));
        assert_eq!(
            config.cms.query_url(),
            "https://abc123.api.sanity.io/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn missing_project_id_is_a_config_error() {
        let err = SyncConfig::from_lookup(lookup(&[("SANITY_PROJECT_ID", "   ")])).unwrap_err();
        assert!(matches!(err, SyncError::Config(_)));
    }

    #[test]
    fn overrides() {
        let config = SyncConfig::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_DATASET", "staging"),
            ("SANITY_API_VERSION", "v2023-05-03"),
            ("SANITY_TOKEN", "sk-read"),
            ("SANITY_USE_CDN", "true"),
            ("SNAPSHOT_PATH", "/tmp/site/content.json"),
        ]))
        .unwrap();
        assert_eq!(config.cms.token.as_deref(), Some("sk-read"));
        assert_eq!(config.snapshot_path, PathBuf::from("/tmp/site/content.json"));
        assert_eq!(
            config.cms.query_url(),
            "https://abc123.apicdn.sanity.io/v2023-05-03/data/query/staging"
        );
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let config = CmsConfig {
            api_base_url: Some("http://127.0.0.1:4010/".to_string()),
            ..CmsConfig::new("abc123")
        };
        assert_eq!(
            config.query_url(),
            "http://127.0.0.1:4010/v2024-01-01/data/query/production"
        );
    }

    #[test]
    fn bad_cdn_flag_is_rejected() {
        let err = SyncConfig::from_lookup(lookup(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_USE_CDN", "maybe"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("SANITY_USE_CDN"));
    }
}
