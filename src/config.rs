//! Site profile configuration.
//!
//! The profile holds everything the auto-generator treats as constant: the
//! fetch settings, the branded fallback values used when a page lacks
//! metadata, and the organization node appended to every graph.
//!
//! The built-in [`SiteProfile::default`] reproduces the Future Vision
//! Computers profile. A YAML file passed with `--config` may override any
//! subset of it:
//!
//! ```yaml
//! language: en-US
//! fetch:
//!   timeout_secs: 20
//! organization:
//!   name: Example Academy
//!   same_as:
//!     - https://facebook.com/example
//! ```

use crate::error::GeneratorError;
use serde::Deserialize;
use tracing::{info, instrument};

/// Top-level configuration for a run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    /// BCP 47 tag written to `inLanguage`.
    pub language: String,
    pub fetch: FetchSettings,
    pub defaults: MetadataFallbacks,
    pub organization: OrganizationProfile,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            language: "en-IN".to_string(),
            fetch: FetchSettings::default(),
            defaults: MetadataFallbacks::default(),
            organization: OrganizationProfile::default(),
        }
    }
}

/// HTTP settings for the single page fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FetchSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Branded values substituted when a page has no usable metadata.
///
/// Keywords and timestamps are not configurable: they are derived from the
/// category and the clock at extraction time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MetadataFallbacks {
    pub title: String,
    pub description: String,
    pub image: String,
    pub author: String,
}

impl Default for MetadataFallbacks {
    fn default() -> Self {
        Self {
            title: "Untitled Blog Post".to_string(),
            description: "Educational blog post from Future Vision Computers.".to_string(),
            image: "https://futurevisioncomputers.com/wp-content/uploads/2025/10/default.jpg"
                .to_string(),
            author: "Siddharth Parakh".to_string(),
        }
    }
}

/// The publishing organization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrganizationProfile {
    /// Node identifier shared by the publisher reference and the
    /// Organization node.
    pub id: String,
    pub name: String,
    pub url: String,
    pub logo: String,
    pub image: String,
    pub description: String,
    pub same_as: Vec<String>,
    pub telephone: String,
    pub address: AddressProfile,
    pub latitude: String,
    pub longitude: String,
}

impl Default for OrganizationProfile {
    fn default() -> Self {
        Self {
            id: "#FutureVision".to_string(),
            name: "Future Vision Computer Institute".to_string(),
            url: "https://futurevisioncomputers.com/".to_string(),
            logo: "https://futurevisioncomputers.com/wp-content/uploads/2024/07/fv-logo-final-current.png"
                .to_string(),
            image: "https://futurevisioncomputers.com/wp-content/uploads/2025/10/future-vision-campus.jpg"
                .to_string(),
            description: "Future Vision Computers in Surat publishes educational blogs and tutorials on Advanced Excel, Power BI, Python, and Data Science."
                .to_string(),
            same_as: vec![
                "https://facebook.com/fvcomputers".to_string(),
                "https://linkedin.com/company/fvcomputers".to_string(),
                "https://instagram.com/fvcomputers".to_string(),
            ],
            telephone: "+91-9825771678".to_string(),
            address: AddressProfile::default(),
            latitude: "21.1702".to_string(),
            longitude: "72.8311".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AddressProfile {
    pub street_address: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for AddressProfile {
    fn default() -> Self {
        Self {
            street_address: "Citylight, Vesu, Pal Area".to_string(),
            locality: "Surat".to_string(),
            region: "Gujarat".to_string(),
            postal_code: "395007".to_string(),
            country: "IN".to_string(),
        }
    }
}

/// Load the site profile, falling back to the built-in one when no path is
/// given.
#[instrument(level = "info")]
pub async fn load_config(path: Option<&str>) -> Result<SiteProfile, GeneratorError> {
    let Some(path) = path else {
        info!("No config file given; using built-in site profile");
        return Ok(SiteProfile::default());
    };
    let profile: SiteProfile = load_yaml(path).await?;
    info!(organization = %profile.organization.name, "Loaded site profile");
    Ok(profile)
}

/// Read and deserialize a YAML file. Shared by the site profile and the
/// generator form files.
pub async fn load_yaml<T>(path: &str) -> Result<T, GeneratorError>
where
    T: serde::de::DeserializeOwned,
{
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| GeneratorError::Read {
            path: path.to_string(),
            source,
        })?;
    parse_yaml(path, &raw)
}

fn parse_yaml<T>(path: &str, raw: &str) -> Result<T, GeneratorError>
where
    T: serde::de::DeserializeOwned,
{
    serde_yaml::from_str(raw).map_err(|source| GeneratorError::Yaml {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_profile_keeps_defaults() {
        let yaml = r#"
language: en-US
organization:
  name: Example Academy
  address:
    locality: Pune
"#;
        let profile: SiteProfile = parse_yaml("inline.yaml", yaml).unwrap();
        assert_eq!(profile.language, "en-US");
        assert_eq!(profile.organization.name, "Example Academy");
        assert_eq!(profile.organization.address.locality, "Pune");
        assert_eq!(profile.organization.address.region, "Gujarat");
        assert_eq!(profile.organization.id, "#FutureVision");
        assert_eq!(profile.fetch, FetchSettings::default());
        assert_eq!(profile.defaults.title, "Untitled Blog Post");
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let err = parse_yaml::<SiteProfile>("broken.yaml", "fetch: [unterminated").unwrap_err();
        assert!(matches!(err, GeneratorError::Yaml { .. }));
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[tokio::test]
    async fn test_load_config_without_path_uses_builtin() {
        let profile = load_config(None).await.unwrap();
        assert_eq!(profile, SiteProfile::default());
        assert_eq!(profile.fetch.timeout_secs, 10);
        assert_eq!(profile.fetch.user_agent, "Mozilla/5.0");
    }

    #[tokio::test]
    async fn test_load_config_missing_file() {
        let err = load_config(Some("/definitely/not/here.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Read { .. }));
    }

    #[tokio::test]
    async fn test_load_config_from_file() {
        let path = std::env::temp_dir().join("edu_schema_gen_profile_test.yaml");
        tokio::fs::write(&path, "fetch:\n  timeout_secs: 3\n")
            .await
            .unwrap();
        let profile = load_config(path.to_str()).await.unwrap();
        assert_eq!(profile.fetch.timeout_secs, 3);
        assert_eq!(profile.fetch.user_agent, "Mozilla/5.0");
        let _ = tokio::fs::remove_file(&path).await;
    }
}
