//! Course schema with branch locations, paired with an FAQ page.
//!
//! Produces a two-element array: the `Course` node and an `FAQPage` node.

use crate::generators::SchemaForm;
use crate::utils::file_stem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

const MAX_BRANCHES: usize = 3;
pub(crate) const MAX_FAQS: usize = 10;

/// How a course is delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum CourseMode {
    #[default]
    Offline,
    Online,
    Both,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Branch {
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub telephone: String,
}

impl Default for Branch {
    fn default() -> Self {
        Self {
            street: String::new(),
            city: String::new(),
            region: String::new(),
            postal_code: String::new(),
            country: "IN".to_string(),
            telephone: String::new(),
        }
    }
}

/// A question/answer pair typed into a form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
}

/// FAQ entries with both halves filled in, as schema.org `Question` nodes.
pub(crate) fn faq_questions(faqs: &[FaqInput]) -> Vec<Value> {
    faqs.iter()
        .take(MAX_FAQS)
        .filter(|faq| !faq.question.is_empty() && !faq.answer.is_empty())
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer
                }
            })
        })
        .collect()
}

pub(crate) fn faq_page(faqs: &[FaqInput]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": faq_questions(faqs)
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CourseFaqForm {
    pub course_name: String,
    pub course_description: String,
    pub course_url: String,
    pub course_duration: String,
    pub course_fee: String,
    pub course_mode: CourseMode,
    pub provider_name: String,
    pub provider_url: String,
    pub provider_logo: String,
    pub branches: Vec<Branch>,
    pub faqs: Vec<FaqInput>,
}

impl Default for CourseFaqForm {
    fn default() -> Self {
        Self {
            course_name: "MS Office Training".to_string(),
            course_description: "Learn Microsoft Office (Word, Excel, PowerPoint) from beginner to advanced level with certification.".to_string(),
            course_url: "https://yourwebsite.com/ms-office".to_string(),
            course_duration: "3 Months".to_string(),
            course_fee: "₹5000".to_string(),
            course_mode: CourseMode::Offline,
            provider_name: "Siddharth Computer Institute".to_string(),
            provider_url: "https://yourwebsite.com".to_string(),
            provider_logo: "https://yourwebsite.com/logo.png".to_string(),
            branches: Vec::new(),
            faqs: Vec::new(),
        }
    }
}

impl CourseFaqForm {
    /// Branches with at least a street and a city.
    fn locations(&self) -> Vec<Value> {
        self.branches
            .iter()
            .take(MAX_BRANCHES)
            .filter(|branch| !branch.street.is_empty() && !branch.city.is_empty())
            .map(|branch| {
                json!({
                    "@type": "Place",
                    "name": format!("{} - {}", self.provider_name, branch.city),
                    "address": {
                        "@type": "PostalAddress",
                        "streetAddress": branch.street,
                        "addressLocality": branch.city,
                        "addressRegion": branch.region,
                        "postalCode": branch.postal_code,
                        "addressCountry": branch.country
                    },
                    "telephone": branch.telephone
                })
            })
            .collect()
    }
}

impl SchemaForm for CourseFaqForm {
    const NAME: &'static str = "course-faq";

    fn file_name(&self) -> String {
        format!("{}_schema.json", file_stem(&self.course_name))
    }

    fn generate(&self, _today: NaiveDate) -> Value {
        let course = json!({
            "@context": "https://schema.org",
            "@type": "Course",
            "name": self.course_name,
            "description": self.course_description,
            "provider": {
                "@type": "Organization",
                "name": self.provider_name,
                "url": self.provider_url,
                "logo": self.provider_logo
            },
            "hasCourseInstance": {
                "@type": "CourseInstance",
                "courseMode": self.course_mode,
                "courseWorkload": self.course_duration,
                "offers": {
                    "@type": "Offer",
                    "price": self.course_fee,
                    "priceCurrency": "INR",
                    "availability": "https://schema.org/InStock",
                    "url": self.course_url
                },
                "location": self.locations()
            }
        });

        json!([course, faq_page(&self.faqs)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 17).unwrap()
    }

    #[test]
    fn test_file_name_from_course_name() {
        assert_eq!(
            CourseFaqForm::default().file_name(),
            "ms_office_training_schema.json"
        );
    }

    #[test]
    fn test_file_name_never_leaves_output_dir() {
        let form = CourseFaqForm {
            course_name: "C/C++ Programming".to_string(),
            ..CourseFaqForm::default()
        };
        assert_eq!(form.file_name(), "c_c___programming_schema.json");

        let form = CourseFaqForm {
            course_name: "../x".to_string(),
            ..CourseFaqForm::default()
        };
        let name = form.file_name();
        assert_eq!(name, "___x_schema.json");
        assert!(!name.contains('/') && !name.contains(".."));
    }

    #[tokio::test]
    async fn test_slashed_course_name_writes_inside_output_dir() {
        let dir = std::env::temp_dir().join("edu_schema_gen_course_faq_name");
        let form = CourseFaqForm {
            course_name: "C/C++ Programming".to_string(),
            ..CourseFaqForm::default()
        };
        let path = crate::outputs::json::write_schema("{}", dir.to_str().unwrap(), &form.file_name())
            .await
            .unwrap();
        assert_eq!(path.parent(), Some(dir.as_path()));
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[test]
    fn test_course_and_faq_pair() {
        let form: CourseFaqForm = serde_yaml::from_str(
            r#"
course_mode: Both
branches:
  - street: G-40 Navmanglam Complex
    city: Surat
    region: Gujarat
  - street: Only street
  - street: Ring Road
    city: Vadodara
faqs:
  - question: Is there a certificate?
    answer: Yes, on completion.
  - question: Unanswered?
"#,
        )
        .unwrap();
        let schema = form.generate(today());
        let nodes = schema.as_array().unwrap();
        assert_eq!(nodes.len(), 2);

        let instance = &nodes[0]["hasCourseInstance"];
        assert_eq!(instance["courseMode"], "Both");
        let locations = instance["location"].as_array().unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0]["name"], "Siddharth Computer Institute - Surat");
        assert_eq!(locations[1]["address"]["addressCountry"], "IN");

        assert_eq!(nodes[1]["@type"], "FAQPage");
        let questions = nodes[1]["mainEntity"].as_array().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0]["acceptedAnswer"]["text"], "Yes, on completion.");
    }

    #[test]
    fn test_faq_capped_at_ten() {
        let faqs: Vec<FaqInput> = (0..12)
            .map(|i| FaqInput {
                question: format!("Q{}?", i),
                answer: "A".to_string(),
            })
            .collect();
        assert_eq!(faq_questions(&faqs).len(), 10);
    }
}
