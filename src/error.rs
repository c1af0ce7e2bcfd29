//! Error type shared by every generator.
//!
//! Only failures that abort a run live here. Missing page metadata and pages
//! without FAQ-looking content are not errors: they resolve to defaults and
//! are reported through the checklist instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The URL field was blank; rejected before any network call.
    #[error("please enter a valid blog URL")]
    EmptyUrl,

    /// The URL could not be parsed; rejected before any network call.
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport error, timeout or non-2xx status while fetching the page.
    #[error("error fetching blog data: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    /// True for errors caused by the request itself rather than the network
    /// or the filesystem.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::EmptyUrl | Self::InvalidUrl { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_message() {
        assert_eq!(
            GeneratorError::EmptyUrl.to_string(),
            "please enter a valid blog URL"
        );
    }

    #[test]
    fn test_malformed_input_classification() {
        let invalid = GeneratorError::InvalidUrl {
            url: "not a url".to_string(),
            source: url::Url::parse("not a url").unwrap_err(),
        };
        assert!(invalid.is_malformed_input());
        assert!(GeneratorError::EmptyUrl.is_malformed_input());

        let io = GeneratorError::Io(std::io::Error::other("disk full"));
        assert!(!io.is_malformed_input());
    }
}
