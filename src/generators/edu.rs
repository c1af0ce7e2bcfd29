//! Full course and full blog schemas.
//!
//! These are the richest templates: the course variant emits the institute
//! as an `EducationalOrganization` + `LocalBusiness`, the course itself, and
//! an FAQ page; the blog variant emits the posting and an FAQ page.
//!
//! The course's `course_mode`, `course_fee` and `currency` fields have no
//! slot in the rest of the template. They are written as two extra blocks:
//! `hasCourseInstance` (mode plus duration as `courseWorkload`) and a
//! course-level `offers`.

use crate::generators::course_faq::{FaqInput, faq_page};
use crate::generators::{SchemaForm, clean_list, date_or_today};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

const OPEN_DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum EducationalLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

fn alignment(level: impl Serialize) -> Value {
    json!({
        "@type": "AlignmentObject",
        "alignmentType": "educationalLevel",
        "targetName": level
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FullCourseForm {
    // Institute
    pub institute_name: String,
    pub institute_url: String,
    pub institute_logo: String,
    pub institute_phone: String,
    pub institute_email: String,
    pub institute_address: String,
    pub latitude: String,
    pub longitude: String,
    pub area_served: String,
    pub map_url: String,
    pub social_links: Vec<String>,
    pub opens: String,
    pub closes: String,

    // Course
    pub course_name: String,
    pub course_code: String,
    pub course_description: String,
    pub course_url: String,
    pub course_fee: String,
    pub currency: String,
    pub duration: String,
    pub course_mode: Vec<String>,
    pub level: EducationalLevel,
    pub prerequisites: String,
    pub language: String,
    pub certification: String,

    // Learning details
    pub topics: Vec<String>,
    pub methods: Vec<String>,
    pub outcomes: Vec<String>,

    // Media
    pub image_urls: Vec<String>,
    pub video_url: String,
    pub video_embed: String,

    // Instructor
    pub instructor_name: String,
    pub instructor_bio: String,
    pub author_same_as: Vec<String>,
    pub author_knows_about: Vec<String>,

    // Trust signals
    pub rating_value: String,
    pub review_count: String,
    pub license_url: String,
    pub citations: Vec<String>,
    pub keywords: Vec<String>,
    pub about: Vec<String>,

    pub faqs: Vec<FaqInput>,
}

impl Default for FullCourseForm {
    fn default() -> Self {
        Self {
            institute_name: "Future Vision Computer Institute".to_string(),
            institute_url: "https://futurevisioncomputers.com/".to_string(),
            institute_logo: String::new(),
            institute_phone: "+91-9825771678".to_string(),
            institute_email: "info@futurevisioncomputers.com".to_string(),
            institute_address: "G-40, Navmanglam Complex, Citylight, Surat, Gujarat 395007, India".to_string(),
            latitude: "21.1702".to_string(),
            longitude: "72.8311".to_string(),
            area_served: "Surat, Gujarat, India".to_string(),
            map_url: "https://goo.gl/maps/xyz".to_string(),
            social_links: vec![
                "https://facebook.com/fvcomputers".to_string(),
                "https://instagram.com/fvcomputers".to_string(),
            ],
            opens: "08:00".to_string(),
            closes: "20:00".to_string(),
            course_name: "MS Office Professional Training".to_string(),
            course_code: "MSO-101".to_string(),
            course_description: "A complete Microsoft Office course from beginner to expert level.".to_string(),
            course_url: "https://yourwebsite.com/courses/ms-office".to_string(),
            course_fee: "₹5000".to_string(),
            currency: "INR".to_string(),
            duration: "3 Months".to_string(),
            course_mode: vec!["Offline".to_string()],
            level: EducationalLevel::Beginner,
            prerequisites: "Basic computer knowledge".to_string(),
            language: "en-IN".to_string(),
            certification: "Certificate of Completion".to_string(),
            topics: vec![
                "MS Word".to_string(),
                "Excel".to_string(),
                "PowerPoint".to_string(),
                "Outlook".to_string(),
            ],
            methods: vec![
                "Hands-on Practice".to_string(),
                "Assignments".to_string(),
                "Projects".to_string(),
            ],
            outcomes: vec![
                "Create Excel dashboards".to_string(),
                "Design PowerPoint templates".to_string(),
            ],
            image_urls: vec!["https://yourwebsite.com/images/ms-office.webp".to_string()],
            video_url: String::new(),
            video_embed: String::new(),
            instructor_name: "Siddharth Parakh".to_string(),
            instructor_bio: "Certified trainer with 20+ years of experience.".to_string(),
            author_same_as: vec!["https://linkedin.com/in/siddharthparakh".to_string()],
            author_knows_about: vec![
                "Excel".to_string(),
                "Power BI".to_string(),
                "Computer Skills".to_string(),
            ],
            rating_value: "4.8".to_string(),
            review_count: "152".to_string(),
            license_url: "https://yourwebsite.com/license".to_string(),
            citations: vec!["https://learn.microsoft.com/en-us/office/".to_string()],
            keywords: vec![
                "MS Office".to_string(),
                "Excel".to_string(),
                "Computer Course".to_string(),
                "Job Oriented".to_string(),
            ],
            about: vec![
                "Microsoft Office".to_string(),
                "IT Training".to_string(),
                "Office Productivity".to_string(),
            ],
            faqs: Vec::new(),
        }
    }
}

impl FullCourseForm {
    fn organization(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": ["EducationalOrganization", "LocalBusiness"],
            "name": self.institute_name,
            "url": self.institute_url,
            "logo": self.institute_logo,
            "telephone": self.institute_phone,
            "email": self.institute_email,
            "address": self.institute_address,
            "areaServed": self.area_served,
            "geo": {
                "@type": "GeoCoordinates",
                "latitude": self.latitude,
                "longitude": self.longitude
            },
            "hasMap": self.map_url,
            "openingHoursSpecification": [{
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": OPEN_DAYS,
                "opens": self.opens,
                "closes": self.closes
            }],
            "sameAs": clean_list(&self.social_links)
        })
    }

    /// `null` when no video URL is given.
    fn video(&self) -> Value {
        if self.video_url.is_empty() {
            return Value::Null;
        }
        json!({
            "@type": "VideoObject",
            "url": self.video_url,
            "embedUrl": self.video_embed
        })
    }

    fn course(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "Course",
            "identifier": {
                "@type": "PropertyValue",
                "propertyID": "CourseCode",
                "value": self.course_code
            },
            "name": self.course_name,
            "description": self.course_description,
            "url": self.course_url,
            "image": clean_list(&self.image_urls),
            "video": self.video(),
            "provider": {
                "@type": "EducationalOrganization",
                "name": self.institute_name,
                "url": self.institute_url
            },
            "educationalLevel": self.level,
            "coursePrerequisites": self.prerequisites,
            "educationalCredentialAwarded": self.certification,
            "inLanguage": self.language,
            "timeRequired": self.duration,
            "hasCourseInstance": {
                "@type": "CourseInstance",
                "courseMode": self.course_mode,
                "courseWorkload": self.duration
            },
            "offers": {
                "@type": "Offer",
                "price": self.course_fee,
                "priceCurrency": self.currency,
                "availability": "https://schema.org/InStock",
                "url": self.course_url
            },
            "teaches": clean_list(&self.topics),
            "learningResourceType": clean_list(&self.methods),
            "learningOutcome": clean_list(&self.outcomes),
            "aggregateRating": {
                "@type": "AggregateRating",
                "ratingValue": self.rating_value,
                "reviewCount": self.review_count
            },
            "author": {
                "@type": "Person",
                "name": self.instructor_name,
                "description": self.instructor_bio,
                "sameAs": clean_list(&self.author_same_as),
                "knowsAbout": clean_list(&self.author_knows_about),
                "worksFor": {
                    "@type": "Organization",
                    "name": self.institute_name
                }
            },
            "educationalAlignment": alignment(self.level),
            "potentialAction": {
                "@type": "EnrollAction",
                "target": format!("{}/enroll", self.course_url),
                "name": format!("Enroll in {}", self.course_name)
            },
            "license": self.license_url,
            "citation": clean_list(&self.citations),
            "keywords": clean_list(&self.keywords),
            "about": clean_list(&self.about),
            "interactionStatistic": {
                "@type": "InteractionCounter",
                "interactionType": "https://schema.org/LikeAction",
                "userInteractionCount": "300"
            }
        })
    }
}

impl SchemaForm for FullCourseForm {
    const NAME: &'static str = "full-course";

    fn file_name(&self) -> String {
        "course_full_schema.json".to_string()
    }

    fn generate(&self, _today: NaiveDate) -> Value {
        json!([self.organization(), self.course(), faq_page(&self.faqs)])
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FullBlogForm {
    pub headline: String,
    pub description: String,
    pub blog_url: String,
    pub image_url: String,
    pub date_published: Option<NaiveDate>,
    pub date_modified: Option<NaiveDate>,
    pub author_name: String,
    pub author_same_as: Vec<String>,
    pub author_knows_about: Vec<String>,
    pub publisher_name: String,
    pub publisher_logo: String,
    pub publisher_social: Vec<String>,
    pub keywords: Vec<String>,
    pub about: Vec<String>,
    pub word_count: u32,
    pub license_url: String,
    pub citations: Vec<String>,
    pub free_access: bool,
    pub video_url: String,
    pub video_embed: String,
    pub video_duration: String,
    pub faqs: Vec<FaqInput>,
}

impl Default for FullBlogForm {
    fn default() -> Self {
        Self {
            headline: "Master Excel Formulas for Business Analytics".to_string(),
            description: "Learn essential Excel formulas every analyst should know.".to_string(),
            blog_url: "https://yourdomain.com/blog/excel-formulas".to_string(),
            image_url: String::new(),
            date_published: None,
            date_modified: None,
            author_name: "Siddharth".to_string(),
            author_same_as: vec!["https://linkedin.com/in/siddharthparakh".to_string()],
            author_knows_about: vec![
                "Excel".to_string(),
                "Analytics".to_string(),
                "Data Visualization".to_string(),
            ],
            publisher_name: "Future Vision Computer Institute".to_string(),
            publisher_logo: String::new(),
            publisher_social: vec![
                "https://facebook.com/fvcomputers".to_string(),
                "https://linkedin.com/company/fvcomputers".to_string(),
            ],
            keywords: vec![
                "Excel".to_string(),
                "Education".to_string(),
                "Data Analytics".to_string(),
            ],
            about: vec![
                "Microsoft Excel".to_string(),
                "Business Analytics".to_string(),
            ],
            word_count: 1200,
            license_url: "https://yourdomain.com/license".to_string(),
            citations: vec!["https://learn.microsoft.com/en-us/office/".to_string()],
            free_access: true,
            video_url: String::new(),
            video_embed: String::new(),
            video_duration: "PT5M".to_string(),
            faqs: Vec::new(),
        }
    }
}

impl SchemaForm for FullBlogForm {
    const NAME: &'static str = "full-blog";

    fn file_name(&self) -> String {
        "blog_full_schema.json".to_string()
    }

    fn generate(&self, today: NaiveDate) -> Value {
        let mut blog = json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": self.headline,
            "description": self.description,
            "url": self.blog_url,
            "image": self.image_url,
            "datePublished": date_or_today(self.date_published, today),
            "dateModified": date_or_today(self.date_modified, today),
            "isAccessibleForFree": self.free_access,
            "author": {
                "@type": "Person",
                "name": self.author_name,
                "sameAs": clean_list(&self.author_same_as),
                "knowsAbout": clean_list(&self.author_knows_about)
            },
            "publisher": {
                "@type": "Organization",
                "name": self.publisher_name,
                "logo": {
                    "@type": "ImageObject",
                    "url": self.publisher_logo
                },
                "sameAs": clean_list(&self.publisher_social)
            },
            "keywords": clean_list(&self.keywords),
            "about": clean_list(&self.about),
            "wordCount": self.word_count,
            "articleBody": self.description,
            "license": self.license_url,
            "citation": clean_list(&self.citations),
            "educationalAlignment": alignment(EducationalLevel::Intermediate),
            "speakable": {
                "@type": "SpeakableSpecification",
                "xpath": ["/html/head/title", "/html/body/h1"]
            },
            "audience": {
                "@type": "Audience",
                "audienceType": "Students and Professionals"
            },
            "isPartOf": {
                "@type": "Blog",
                "name": "Education Blog"
            },
            "potentialAction": {
                "@type": "ReadAction",
                "target": self.blog_url,
                "name": format!("Read {}", self.headline)
            }
        });

        if !self.video_url.is_empty() {
            blog["video"] = json!({
                "@type": "VideoObject",
                "url": self.video_url,
                "embedUrl": self.video_embed,
                "duration": self.video_duration
            });
        }

        json!([blog, faq_page(&self.faqs)])
    }
}
