//! Hand-filled blog posting schema with optional images, video, related
//! courses, and related links.
//!
//! Each repeated section holds at most five entries. Entries missing their
//! required fields are skipped rather than emitted half-empty.

use crate::generators::{SchemaForm, clean_list, date_or_today};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};

const MAX_ENTRIES: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageInput {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VideoInput {
    pub name: String,
    pub description: String,
    pub thumbnail_url: String,
    pub content_url: String,
    pub embed_url: String,
    /// ISO 8601 duration, e.g. `PT5M30S`.
    pub duration: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelatedCourse {
    pub name: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelatedLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlogForm {
    pub headline: String,
    pub description: String,
    pub author_name: String,
    pub author_url: String,
    pub publisher_name: String,
    pub publisher_logo: String,
    pub blog_url: String,
    pub date_published: Option<NaiveDate>,
    pub date_modified: Option<NaiveDate>,
    pub keywords: Vec<String>,
    pub article_section: String,
    pub images: Vec<ImageInput>,
    pub video: VideoInput,
    pub courses: Vec<RelatedCourse>,
    pub related_links: Vec<RelatedLink>,
}

impl Default for BlogForm {
    fn default() -> Self {
        Self {
            headline: "Master Excel Formulas for Business Analytics".to_string(),
            description: "Learn the top Excel formulas every marketer and data analyst should know.".to_string(),
            author_name: "Siddharth".to_string(),
            author_url: "https://www.yourdomain.com/about".to_string(),
            publisher_name: "Siddharth Computer Institute".to_string(),
            publisher_logo: "https://www.yourdomain.com/images/logo.png".to_string(),
            blog_url: "https://www.yourdomain.com/blog/excel-formulas".to_string(),
            date_published: None,
            date_modified: None,
            keywords: vec![
                "Excel Training".to_string(),
                "Business Analytics".to_string(),
                "Education".to_string(),
                "Marketing Skills".to_string(),
            ],
            article_section: "Education".to_string(),
            images: Vec::new(),
            video: VideoInput::default(),
            courses: Vec::new(),
            related_links: Vec::new(),
        }
    }
}

impl BlogForm {
    fn images(&self) -> Vec<Value> {
        self.images
            .iter()
            .take(MAX_ENTRIES)
            .filter(|image| !image.url.is_empty())
            .map(|image| {
                json!({
                    "@type": "ImageObject",
                    "url": image.url,
                    "caption": image.caption
                })
            })
            .collect()
    }

    /// The video object, only when it has both a name and a content URL.
    fn video(&self, upload_date: &str) -> Option<Value> {
        let video = &self.video;
        if video.name.is_empty() || video.content_url.is_empty() {
            return None;
        }
        Some(json!({
            "@type": "VideoObject",
            "name": video.name,
            "description": video.description,
            "thumbnailUrl": video.thumbnail_url,
            "uploadDate": upload_date,
            "contentUrl": video.content_url,
            "embedUrl": video.embed_url,
            "duration": video.duration
        }))
    }

    fn mentions(&self) -> Vec<Value> {
        self.courses
            .iter()
            .take(MAX_ENTRIES)
            .filter(|course| !course.name.is_empty() && !course.url.is_empty())
            .map(|course| {
                json!({
                    "@type": "Course",
                    "name": course.name,
                    "description": course.description,
                    "provider": {
                        "@type": "Organization",
                        "name": self.publisher_name,
                        "sameAs": self.blog_url
                    },
                    "url": course.url
                })
            })
            .collect()
    }

    fn related_links(&self) -> Vec<&str> {
        self.related_links
            .iter()
            .take(MAX_ENTRIES)
            .filter(|link| !link.name.is_empty() && !link.url.is_empty())
            .map(|link| link.url.as_str())
            .collect()
    }
}

impl SchemaForm for BlogForm {
    const NAME: &'static str = "blog";

    fn file_name(&self) -> String {
        "blog_posting_schema.json".to_string()
    }

    fn generate(&self, today: NaiveDate) -> Value {
        let published = date_or_today(self.date_published, today);
        let mut schema = json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": self.headline,
            "description": self.description,
            "author": {
                "@type": "Person",
                "name": self.author_name,
                "url": self.author_url
            },
            "publisher": {
                "@type": "Organization",
                "name": self.publisher_name,
                "logo": {
                    "@type": "ImageObject",
                    "url": self.publisher_logo
                }
            },
            "datePublished": published,
            "dateModified": date_or_today(self.date_modified, today),
            "mainEntityOfPage": {
                "@type": "WebPage",
                "@id": self.blog_url
            },
            "articleSection": self.article_section,
            "keywords": clean_list(&self.keywords)
        });

        let images = self.images();
        if !images.is_empty() {
            schema["image"] = Value::Array(images);
        }
        if let Some(video) = self.video(&published) {
            schema["video"] = video;
        }
        let mentions = self.mentions();
        if !mentions.is_empty() {
            schema["mentions"] = Value::Array(mentions);
        }
        let related = self.related_links();
        if !related.is_empty() {
            schema["relatedLink"] = json!(related);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 17).unwrap()
    }

    #[test]
    fn test_minimal_blog_has_no_optional_sections() {
        let schema = BlogForm::default().generate(today());
        assert_eq!(schema["@type"], "BlogPosting");
        assert_eq!(schema["datePublished"], "2025-10-17");
        assert_eq!(schema["keywords"].as_array().unwrap().len(), 4);
        let object = schema.as_object().unwrap();
        for key in ["image", "video", "mentions", "relatedLink"] {
            assert!(!object.contains_key(key), "{} should be absent", key);
        }
    }

    #[test]
    fn test_optional_sections_filtered() {
        let form: BlogForm = serde_yaml::from_str(
            r#"
date_published: 2025-09-01
images:
  - url: https://example.com/a.png
    caption: Chart
  - caption: no url
video:
  name: Formulas in 5 minutes
  content_url: https://example.com/v.mp4
courses:
  - name: Advanced Excel
    url: https://example.com/courses/excel
  - name: Missing URL
related_links:
  - name: Docs
    url: https://learn.microsoft.com
"#,
        )
        .unwrap();
        let schema = form.generate(today());

        assert_eq!(schema["image"].as_array().unwrap().len(), 1);
        assert_eq!(schema["video"]["uploadDate"], "2025-09-01");
        assert_eq!(schema["mentions"].as_array().unwrap().len(), 1);
        assert_eq!(
            schema["mentions"][0]["provider"]["name"],
            "Siddharth Computer Institute"
        );
        assert_eq!(schema["relatedLink"], json!(["https://learn.microsoft.com"]));
    }

    #[test]
    fn test_sections_capped_at_five() {
        let form = BlogForm {
            images: (0..8)
                .map(|i| ImageInput {
                    url: format!("https://example.com/{}.png", i),
                    caption: String::new(),
                })
                .collect(),
            ..BlogForm::default()
        };
        let schema = form.generate(today());
        assert_eq!(schema["image"].as_array().unwrap().len(), 5);
    }
}
