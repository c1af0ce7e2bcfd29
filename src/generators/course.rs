//! Course schema: a single `Course` node with its provider, one scheduled
//! instance, curriculum, and audience.

use crate::generators::{SchemaForm, clean_list, date_or_today};
use crate::utils::slug;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};

/// Topics every course is tagged with.
const COURSE_ABOUT: [&str; 3] = ["Computer Skills", "Office Productivity", "IT Training"];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CourseForm {
    // Institute
    pub institute_name: String,
    pub institute_url: String,
    pub institute_logo: String,
    pub institute_phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country_code: String,
    pub social_links: Vec<String>,

    // Course
    pub course_name: String,
    pub course_code: String,
    pub course_description: String,
    pub course_mode: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// ISO 8601 duration, e.g. `P2M`.
    pub duration: String,
    pub course_fee: u32,
    pub currency: String,
    pub certification: String,

    // Curriculum
    pub topics: Vec<String>,
    pub learning_methods: Vec<String>,

    // Instructor
    pub instructor_name: String,
    pub instructor_description: String,

    pub audience_type: String,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            institute_name: "Future Computer Institute".to_string(),
            institute_url: "https://futurevisioncomputers.com/".to_string(),
            institute_logo: "https://futurevisioncomputers.com/wp-content/uploads/2024/07/fv-logo-final-current.png".to_string(),
            institute_phone: "+91-9825771678".to_string(),
            street_address: "g-40, Navmanglam Complex, Citylight".to_string(),
            city: "Surat".to_string(),
            state: "Gujarat".to_string(),
            postal_code: "395007".to_string(),
            country_code: "IN".to_string(),
            social_links: vec![
                "https://facebook.com/siddharthcomputers".to_string(),
                "https://instagram.com/siddharthcomputers".to_string(),
            ],
            course_name: "MS Office Professional Training".to_string(),
            course_code: "MSO-101".to_string(),
            course_description: "A complete Microsoft Office course covering Word, Excel, PowerPoint, and Outlook from beginner to advanced level.".to_string(),
            course_mode: vec!["Offline".to_string()],
            start_date: None,
            end_date: None,
            duration: "P2M".to_string(),
            course_fee: 4500,
            currency: "INR".to_string(),
            certification: "Certificate of Completion".to_string(),
            topics: vec![
                "MS Word".to_string(),
                "MS Excel (Formulas, Charts, Functions, Data Analysis)".to_string(),
                "MS PowerPoint".to_string(),
                "MS Outlook".to_string(),
            ],
            learning_methods: vec![
                "Hands-on Practice".to_string(),
                "Assignments".to_string(),
                "Live Demos".to_string(),
                "Project Work".to_string(),
            ],
            instructor_name: "Siddharth Patel".to_string(),
            instructor_description: "Certified computer trainer with 10+ years of experience.".to_string(),
            audience_type: "Students, Job Seekers, Working Professionals".to_string(),
        }
    }
}

impl CourseForm {
    fn postal_address(&self) -> Value {
        json!({
            "@type": "PostalAddress",
            "streetAddress": self.street_address,
            "addressLocality": self.city,
            "addressRegion": self.state,
            "postalCode": self.postal_code,
            "addressCountry": self.country_code
        })
    }

    /// Enrollment page: `<institute url>/courses/<course-slug>`.
    pub fn offer_url(&self) -> String {
        format!(
            "{}/courses/{}",
            self.institute_url.trim_end_matches('/'),
            slug(&self.course_name, '-')
        )
    }
}

impl SchemaForm for CourseForm {
    const NAME: &'static str = "course";

    fn file_name(&self) -> String {
        "course_schema.json".to_string()
    }

    fn generate(&self, today: NaiveDate) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "Course",
            "name": self.course_name,
            "alternateName": self.course_name,
            "courseCode": self.course_code,
            "description": self.course_description,
            "provider": {
                "@type": "EducationalOrganization",
                "name": self.institute_name,
                "url": self.institute_url,
                "logo": self.institute_logo,
                "address": self.postal_address(),
                "telephone": self.institute_phone,
                "sameAs": clean_list(&self.social_links)
            },
            "hasCourseInstance": {
                "@type": "CourseInstance",
                "courseMode": self.course_mode,
                "startDate": date_or_today(self.start_date, today),
                "endDate": date_or_today(self.end_date, today),
                "duration": self.duration,
                "instructor": {
                    "@type": "Person",
                    "name": self.instructor_name,
                    "description": self.instructor_description
                },
                "location": {
                    "@type": "Place",
                    "name": format!("{} - {}", self.institute_name, self.city),
                    "address": self.postal_address()
                },
                "offers": {
                    "@type": "Offer",
                    "price": self.course_fee.to_string(),
                    "priceCurrency": self.currency,
                    "availability": "https://schema.org/InStock",
                    "url": self.offer_url(),
                    "validFrom": today.to_string()
                }
            },
            "educationalCredentialAwarded": self.certification,
            "timeRequired": self.duration,
            "teaches": clean_list(&self.topics),
            "learningResourceType": clean_list(&self.learning_methods),
            "about": COURSE_ABOUT,
            "audience": {
                "@type": "Audience",
                "audienceType": self.audience_type
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 17).unwrap()
    }

    #[test]
    fn test_default_course_schema() {
        let schema = CourseForm::default().generate(today());
        assert_eq!(schema["@context"], "https://schema.org");
        assert_eq!(schema["@type"], "Course");
        assert_eq!(schema["courseCode"], "MSO-101");
        assert_eq!(schema["provider"]["address"]["addressLocality"], "Surat");
        assert_eq!(schema["hasCourseInstance"]["startDate"], "2025-10-17");
        assert_eq!(schema["hasCourseInstance"]["offers"]["price"], "4500");
        assert_eq!(
            schema["hasCourseInstance"]["location"]["name"],
            "Future Computer Institute - Surat"
        );
        assert_eq!(schema["teaches"].as_array().unwrap().len(), 4);
        assert_eq!(schema["about"][2], "IT Training");
    }

    #[test]
    fn test_offer_url_slug() {
        let form = CourseForm::default();
        assert_eq!(
            form.offer_url(),
            "https://futurevisioncomputers.com/courses/ms-office-professional-training"
        );
    }

    #[test]
    fn test_explicit_dates_are_kept() {
        let form = CourseForm {
            start_date: NaiveDate::from_ymd_opt(2025, 11, 1),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 1),
            ..CourseForm::default()
        };
        let schema = form.generate(today());
        assert_eq!(schema["hasCourseInstance"]["startDate"], "2025-11-01");
        assert_eq!(schema["hasCourseInstance"]["endDate"], "2026-01-01");
        assert_eq!(schema["hasCourseInstance"]["offers"]["validFrom"], "2025-10-17");
    }

    #[test]
    fn test_form_from_yaml() {
        let form: CourseForm = serde_yaml::from_str(
            "course_name: Tally Prime\nsocial_links: [' https://x.com/a ', '']\nstart_date: 2025-12-01\n",
        )
        .unwrap();
        assert_eq!(form.course_code, "MSO-101");
        let schema = form.generate(today());
        assert_eq!(schema["name"], "Tally Prime");
        assert_eq!(schema["provider"]["sameAs"], json!(["https://x.com/a"]));
        assert_eq!(schema["hasCourseInstance"]["startDate"], "2025-12-01");
    }
}
