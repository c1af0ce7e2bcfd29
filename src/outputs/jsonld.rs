//! JSON-LD graph assembly for the auto-generator.
//!
//! The assembled [`StructuredDocument`] always holds three nodes, in this
//! order: the blog article, its FAQ page, and the publishing organization.
//! Node types are carried by [`GraphNode`]'s `@type` tag, so a node can
//! never be serialized without one.

use crate::config::{OrganizationProfile, SiteProfile};
use crate::models::{AboutTopic, EnrichedSignals, FaqEntry, PageMetadata};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use url::{Position, Url};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const FAQ_ID_SUFFIX: &str = "#faq";

const ARTICLE_IMAGE_WIDTH: u32 = 1200;
const ARTICLE_IMAGE_HEIGHT: u32 = 630;
const PUBLISHER_LOGO_WIDTH: u32 = 600;
const PUBLISHER_LOGO_HEIGHT: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredDocument {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@graph")]
    pub graph: Vec<GraphNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum GraphNode {
    BlogPosting(ArticleNode),
    #[serde(rename = "FAQPage")]
    FaqPage(FaqPageNode),
    Organization(OrganizationNode),
}

impl GraphNode {
    pub fn type_name(&self) -> &'static str {
        match self {
            GraphNode::BlogPosting(_) => "BlogPosting",
            GraphNode::FaqPage(_) => "FAQPage",
            GraphNode::Organization(_) => "Organization",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleNode {
    #[serde(rename = "@id")]
    pub id: String,
    pub headline: String,
    pub description: String,
    pub image: ImageObject,
    pub author: Person,
    pub publisher: Publisher,
    pub date_published: String,
    pub date_modified: String,
    pub is_accessible_for_free: bool,
    pub in_language: String,
    pub is_family_friendly: bool,
    pub genre: String,
    pub keywords: Vec<String>,
    pub audience: EducationalAudience,
    pub about: Vec<AboutTopic>,
    pub potential_action: ReadAction,
    pub main_entity_of_page: WebPage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPageNode {
    #[serde(rename = "@id")]
    pub id: String,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationNode {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub logo: String,
    pub image: String,
    pub description: String,
    pub same_as: Vec<String>,
    pub address: PostalAddress,
    pub telephone: String,
    pub location: Place,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl ImageObject {
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            kind: "ImageObject".to_string(),
            url: url.into(),
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub url: String,
}

/// The publisher as embedded in the article; shares its `@id` with the
/// standalone Organization node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalAudience {
    #[serde(rename = "@type")]
    pub kind: String,
    pub educational_role: String,
    pub audience_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadAction {
    #[serde(rename = "@type")]
    pub kind: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: String,
    pub text: String,
}

impl From<&FaqEntry> for Question {
    fn from(entry: &FaqEntry) -> Self {
        Self {
            kind: "Question".to_string(),
            name: entry.question.clone(),
            accepted_answer: Answer {
                kind: "Answer".to_string(),
                text: entry.answer.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: String,
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "@type")]
    pub kind: String,
    pub geo: GeoCoordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: String,
    pub latitude: String,
    pub longitude: String,
}

/// `scheme://host[:port]` of the source URL, used as the author URL.
pub fn site_root(source: &Url) -> String {
    source[..Position::BeforePath].to_string()
}

/// Build the article / FAQ page / organization graph.
///
/// `source_id` is the URL exactly as the user supplied it; `source` is its
/// parsed form.
#[instrument(level = "info", skip_all, fields(url = %source_id))]
pub fn assemble(
    metadata: &PageMetadata,
    signals: &EnrichedSignals,
    category: &str,
    source_id: &str,
    source: &Url,
    profile: &SiteProfile,
) -> StructuredDocument {
    let organization = &profile.organization;

    let article = ArticleNode {
        id: source_id.to_string(),
        headline: metadata.title.clone(),
        description: metadata.description.clone(),
        image: ImageObject::new(&metadata.image, ARTICLE_IMAGE_WIDTH, ARTICLE_IMAGE_HEIGHT),
        author: Person {
            kind: "Person".to_string(),
            name: metadata.author.clone(),
            url: site_root(source),
        },
        publisher: publisher(organization),
        date_published: metadata.published.clone(),
        date_modified: metadata.modified.clone(),
        is_accessible_for_free: true,
        in_language: profile.language.clone(),
        is_family_friendly: true,
        genre: format!("{} Blog", category),
        keywords: signals.keywords.clone(),
        audience: EducationalAudience {
            kind: "EducationalAudience".to_string(),
            educational_role: "learner".to_string(),
            audience_type: signals.audience.join(", "),
        },
        about: signals.about.clone(),
        potential_action: ReadAction {
            kind: "ReadAction".to_string(),
            target: source_id.to_string(),
        },
        main_entity_of_page: WebPage {
            kind: "WebPage".to_string(),
            id: source_id.to_string(),
        },
    };

    let faq_page = FaqPageNode {
        id: format!("{}{}", source_id, FAQ_ID_SUFFIX),
        main_entity: signals.faq.iter().map(Question::from).collect(),
    };

    let document = StructuredDocument {
        context: SCHEMA_CONTEXT.to_string(),
        graph: vec![
            GraphNode::BlogPosting(article),
            GraphNode::FaqPage(faq_page),
            GraphNode::Organization(organization_node(organization)),
        ],
    };
    info!(
        nodes = ?document.graph.iter().map(GraphNode::type_name).collect::<Vec<_>>(),
        faq = signals.faq.len(),
        "Assembled JSON-LD graph"
    );
    document
}

fn publisher(organization: &OrganizationProfile) -> Publisher {
    Publisher {
        kind: "Organization".to_string(),
        id: organization.id.clone(),
        name: organization.name.clone(),
        url: organization.url.clone(),
        logo: ImageObject::new(
            &organization.logo,
            PUBLISHER_LOGO_WIDTH,
            PUBLISHER_LOGO_HEIGHT,
        ),
    }
}

fn organization_node(organization: &OrganizationProfile) -> OrganizationNode {
    let address = &organization.address;
    OrganizationNode {
        id: organization.id.clone(),
        name: organization.name.clone(),
        url: organization.url.clone(),
        logo: organization.logo.clone(),
        image: organization.image.clone(),
        description: organization.description.clone(),
        same_as: organization.same_as.clone(),
        address: PostalAddress {
            kind: "PostalAddress".to_string(),
            street_address: address.street_address.clone(),
            address_locality: address.locality.clone(),
            address_region: address.region.clone(),
            postal_code: address.postal_code.clone(),
            address_country: address.country.clone(),
        },
        telephone: organization.telephone.clone(),
        location: Place {
            kind: "Place".to_string(),
            geo: GeoCoordinates {
                kind: "GeoCoordinates".to_string(),
                latitude: organization.latitude.clone(),
                longitude: organization.longitude.clone(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FaqSource;

    fn metadata() -> PageMetadata {
        PageMetadata {
            title: "Pivot Tables".to_string(),
            description: "All about pivots".to_string(),
            image: "https://example.com/pivot.png".to_string(),
            author: "Asha".to_string(),
            published: "2025-09-01".to_string(),
            modified: "2025-09-02".to_string(),
            keywords: "Excel".to_string(),
        }
    }

    fn signals() -> EnrichedSignals {
        EnrichedSignals {
            keywords: vec!["Excel".to_string(), "Pivot".to_string()],
            about: vec![AboutTopic::thing("Advanced Excel"), AboutTopic::thing("Excel")],
            audience: vec!["Students".to_string(), "Analysts".to_string()],
            faq: vec![FaqEntry {
                question: "What is a pivot?".to_string(),
                answer: "A summary table.".to_string(),
            }],
            faq_source: FaqSource::Scraped,
        }
    }

    fn build() -> StructuredDocument {
        let url = "https://example.com:8443/blog/pivots";
        assemble(
            &metadata(),
            &signals(),
            "Advanced Excel",
            url,
            &Url::parse(url).unwrap(),
            &SiteProfile::default(),
        )
    }

    #[test]
    fn test_graph_order() {
        let doc = build();
        let types: Vec<&str> = doc.graph.iter().map(GraphNode::type_name).collect();
        assert_eq!(types, vec!["BlogPosting", "FAQPage", "Organization"]);
    }

    #[test]
    fn test_article_fields() {
        let doc = build();
        let GraphNode::BlogPosting(article) = &doc.graph[0] else {
            panic!("first node must be the article");
        };
        assert_eq!(article.id, "https://example.com:8443/blog/pivots");
        assert_eq!(article.author.url, "https://example.com:8443");
        assert_eq!(article.publisher.id, "#FutureVision");
        assert_eq!(article.genre, "Advanced Excel Blog");
        assert_eq!(article.audience.audience_type, "Students, Analysts");
        assert_eq!(article.in_language, "en-IN");
        assert!(article.is_accessible_for_free && article.is_family_friendly);
        assert_eq!(article.image.width, 1200);
        assert_eq!(article.publisher.logo.height, 60);
    }

    #[test]
    fn test_faq_page_id_and_entities() {
        let doc = build();
        let GraphNode::FaqPage(faq) = &doc.graph[1] else {
            panic!("second node must be the FAQ page");
        };
        assert_eq!(faq.id, "https://example.com:8443/blog/pivots#faq");
        assert_eq!(faq.main_entity.len(), 1);
        assert_eq!(faq.main_entity[0].accepted_answer.text, "A summary table.");
    }

    #[test]
    fn test_every_node_carries_type_tag() {
        let value = serde_json::to_value(build()).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        let graph = value["@graph"].as_array().unwrap();
        let types: Vec<&str> = graph.iter().map(|n| n["@type"].as_str().unwrap()).collect();
        assert_eq!(types, vec!["BlogPosting", "FAQPage", "Organization"]);
        assert_eq!(graph[0]["mainEntityOfPage"]["@type"], "WebPage");
        assert_eq!(graph[1]["mainEntity"][0]["acceptedAnswer"]["@type"], "Answer");
        assert_eq!(graph[2]["location"]["geo"]["latitude"], "21.1702");
        assert_eq!(graph[2]["address"]["postalCode"], "395007");
    }

    #[test]
    fn test_json_round_trip() {
        let doc = build();
        let json = serde_json::to_string_pretty(&doc).unwrap();
        let parsed: StructuredDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);

        let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, serde_json::to_value(&doc).unwrap());
    }

    #[test]
    fn test_organization_is_independent_of_input() {
        let other_url = "https://other.org/x";
        let other = assemble(
            &metadata(),
            &signals(),
            "Python",
            other_url,
            &Url::parse(other_url).unwrap(),
            &SiteProfile::default(),
        );
        assert_eq!(other.graph[2], build().graph[2]);
    }
}
