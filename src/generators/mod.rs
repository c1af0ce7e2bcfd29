//! Schema generators.
//!
//! There are two kinds of generator:
//!
//! | Generator | Module | Input | Output file |
//! |-----------|--------|-------|-------------|
//! | Auto blog | [`auto`] | URL + category, page is fetched | `blog_schema.json` |
//! | Course | [`course`] | YAML form | `course_schema.json` |
//! | Blog posting | [`blog`] | YAML form | `blog_posting_schema.json` |
//! | Course + FAQ | [`course_faq`] | YAML form | `<course>_schema.json` |
//! | Full course | [`edu`] | YAML form | `course_full_schema.json` |
//! | Full blog | [`edu`] | YAML form | `blog_full_schema.json` |
//!
//! Form generators implement [`SchemaForm`]: a pure function from the form
//! to a JSON value. Every form field defaults to the institute's stock
//! example value, so an empty or absent form file still produces a complete
//! example schema.

use crate::config::load_yaml;
use crate::error::GeneratorError;
use crate::models::ChecklistEntry;
use crate::outputs::json::to_pretty_json;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, instrument};

pub mod auto;
pub mod blog;
pub mod course;
pub mod course_faq;
pub mod edu;

/// A form-driven template-fill generator.
pub trait SchemaForm: DeserializeOwned + Default {
    /// Short name used in logs.
    const NAME: &'static str;

    /// Output filename for this form.
    fn file_name(&self) -> String;

    /// Fill the schema template. `today` stands in for any date left empty.
    fn generate(&self, today: NaiveDate) -> Value;
}

/// A rendered schema ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedSchema {
    pub file_name: String,
    pub json: String,
    /// Only the auto-generator reports a checklist.
    pub checklist: Vec<ChecklistEntry>,
}

/// Load a form from YAML, or use its defaults when no path is given.
pub async fn load_form<F: SchemaForm>(path: Option<&str>) -> Result<F, GeneratorError> {
    match path {
        Some(path) => load_yaml(path).await,
        None => Ok(F::default()),
    }
}

/// Load, fill, and render a form generator.
#[instrument(level = "info", skip_all, fields(generator = F::NAME))]
pub async fn run_form<F: SchemaForm>(
    path: Option<&str>,
    today: NaiveDate,
) -> Result<GeneratedSchema, GeneratorError> {
    let form: F = load_form(path).await?;
    let schema = form.generate(today);
    let json = to_pretty_json(&schema)?;
    info!(bytes = json.len(), "Generated schema");

    Ok(GeneratedSchema {
        file_name: form.file_name(),
        json,
        checklist: Vec::new(),
    })
}

/// The date as `YYYY-MM-DD`, falling back to `today`.
pub(crate) fn date_or_today(date: Option<NaiveDate>, today: NaiveDate) -> String {
    date.unwrap_or(today).to_string()
}

/// Drop blank entries and surrounding whitespace from a list field.
pub(crate) fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_or_today() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
        assert_eq!(date_or_today(None, today), "2025-10-17");
        let set = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(date_or_today(Some(set), today), "2025-01-05");
    }

    #[test]
    fn test_clean_list() {
        let items = vec![" Word ".to_string(), "".to_string(), "Excel".to_string()];
        assert_eq!(clean_list(&items), vec!["Word", "Excel"]);
    }

    #[tokio::test]
    async fn test_run_form_with_defaults() {
        let today = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
        let generated = run_form::<course::CourseForm>(None, today).await.unwrap();
        assert_eq!(generated.file_name, "course_schema.json");
        assert!(generated.checklist.is_empty());
        let value: Value = serde_json::from_str(&generated.json).unwrap();
        assert_eq!(value["@type"], "Course");
    }

    #[tokio::test]
    async fn test_run_form_from_yaml_file() {
        let path = std::env::temp_dir().join("edu_schema_gen_course_form.yaml");
        tokio::fs::write(&path, "course_name: Tally Prime\ncourse_fee: 3000\n")
            .await
            .unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
        let generated = run_form::<course::CourseForm>(path.to_str(), today)
            .await
            .unwrap();
        let value: Value = serde_json::from_str(&generated.json).unwrap();
        assert_eq!(value["name"], "Tally Prime");
        assert_eq!(value["hasCourseInstance"]["offers"]["price"], "3000");
        let _ = tokio::fs::remove_file(&path).await;
    }
}
