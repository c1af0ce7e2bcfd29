//! JSON output for generated schemas.
//!
//! Every generator hands back a serializable schema and a fixed filename.
//! This module renders it as 2-space indented UTF-8 JSON and writes it to
//! the output directory:
//!
//! ```text
//! output_dir/
//! ├── blog_schema.json           # auto
//! ├── course_schema.json         # course
//! ├── blog_posting_schema.json   # blog
//! ├── ms_office_training_schema.json  # course-faq
//! ├── course_full_schema.json    # full-course
//! └── blog_full_schema.json      # full-blog
//! ```

use crate::error::GeneratorError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Render a schema as indented JSON. Non-ASCII text is written as-is.
pub fn to_pretty_json<T: Serialize>(schema: &T) -> Result<String, GeneratorError> {
    Ok(serde_json::to_string_pretty(schema)?)
}

/// Wrap rendered JSON in the `<script>` tag expected in a page `<head>`.
pub fn script_tag(json: &str) -> String {
    format!("<script type=\"application/ld+json\">\n{}\n</script>", json)
}

/// Write rendered JSON to `{output_dir}/{file_name}`.
///
/// # Returns
///
/// The path of the written file.
#[instrument(level = "info", skip(json), fields(bytes = json.len()))]
pub async fn write_schema(
    json: &str,
    output_dir: &str,
    file_name: &str,
) -> Result<PathBuf, GeneratorError> {
    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(%output_dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = Path::new(output_dir).join(file_name);
    info!(path = %path.display(), "Writing JSON");
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON-LD file");

    Ok(path)
}
