//! Command-line interface definitions.
//!
//! Each generator is a subcommand. Global options control where the JSON-LD
//! file is written and whether it is echoed to stdout.

use clap::{Parser, Subcommand};

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Scrape a live blog post
/// edu_schema_gen auto --url https://example.com/post --category "Power BI"
///
/// # Fill the course template from a form file and print a <script> tag
/// edu_schema_gen -o ./schemas --print --script-tag course --form course.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory the JSON-LD file is written to
    #[arg(short, long, global = true, default_value = ".")]
    pub output_dir: String,

    /// Optional path to a site profile YAML file
    #[arg(short, long, global = true, env = "SCHEMA_GEN_CONFIG")]
    pub config: Option<String>,

    /// Also print the generated JSON to stdout
    #[arg(long, global = true)]
    pub print: bool,

    /// Wrap printed JSON in a <script type="application/ld+json"> tag
    #[arg(long, global = true)]
    pub script_tag: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a blog post and generate BlogPosting + FAQPage + Organization JSON-LD
    Auto {
        /// Blog URL to scrape
        #[arg(short, long)]
        url: String,

        /// Blog category, e.g. "Advanced Excel", "Python", "Power BI"
        #[arg(short = 'k', long, default_value = "Advanced Excel")]
        category: String,
    },
    /// Course JSON-LD with provider, schedule, and curriculum
    Course {
        /// YAML form file; built-in example values are used when omitted
        #[arg(short, long)]
        form: Option<String>,
    },
    /// Hand-filled BlogPosting JSON-LD
    Blog {
        #[arg(short, long)]
        form: Option<String>,
    },
    /// Course with branch locations plus an FAQPage
    CourseFaq {
        #[arg(short, long)]
        form: Option<String>,
    },
    /// Organization + Course + FAQPage with full SEO metadata
    FullCourse {
        #[arg(short, long)]
        form: Option<String>,
    },
    /// BlogPosting + FAQPage with full SEO metadata
    FullBlog {
        #[arg(short, long)]
        form: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_parsing() {
        let cli = Cli::parse_from([
            "edu_schema_gen",
            "auto",
            "--url",
            "https://example.com/post",
            "--category",
            "Python",
        ]);

        assert_eq!(cli.output_dir, ".");
        assert!(!cli.print);
        match cli.command {
            Command::Auto { url, category } => {
                assert_eq!(url, "https://example.com/post");
                assert_eq!(category, "Python");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_default_category() {
        let cli = Cli::parse_from(["edu_schema_gen", "auto", "-u", "https://example.com"]);
        match cli.command {
            Command::Auto { category, .. } => assert_eq!(category, "Advanced Excel"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "edu_schema_gen",
            "course-faq",
            "-f",
            "faq.yaml",
            "-o",
            "/tmp/schemas",
            "--print",
            "--script-tag",
        ]);

        assert_eq!(cli.output_dir, "/tmp/schemas");
        assert!(cli.print && cli.script_tag);
        match cli.command {
            Command::CourseFaq { form } => assert_eq!(form.as_deref(), Some("faq.yaml")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_form_is_optional() {
        let cli = Cli::parse_from(["edu_schema_gen", "full-blog"]);
        assert!(matches!(cli.command, Command::FullBlog { form: None }));
    }
}
