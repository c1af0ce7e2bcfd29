//! # edu_schema_gen
//!
//! Generates schema.org JSON-LD for an education institute's web pages:
//! courses, blog posts, and FAQs.
//!
//! ## Features
//!
//! - `auto`: fetches a live blog post, reads its metadata tags, derives
//!   keywords, topics, audience, and FAQ entries from the page text, and
//!   assembles a BlogPosting + FAQPage + Organization graph
//! - `course`, `blog`, `course-faq`, `full-course`, `full-blog`: fill fixed
//!   schema templates from YAML form files
//! - Writes 2-space indented UTF-8 JSON, optionally echoing it (or a ready to
//!   paste `<script>` tag) to stdout
//!
//! ## Usage
//!
//! ```sh
//! edu_schema_gen auto --url https://example.com/post --category Python
//! edu_schema_gen -o ./schemas course --form course.yaml
//! ```
//!
//! ## Architecture
//!
//! The auto generator runs a one-way pipeline:
//! 1. **Fetching**: a single GET with a fixed user agent and timeout
//! 2. **Extraction**: metadata fields, each defaulted when missing
//! 3. **Enrichment**: keyword set, about topics, audience, FAQ entries
//! 4. **Assembly**: the JSON-LD graph, written to `blog_schema.json`

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod generators;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::{Cli, Command};
use generators::auto::AutoRequest;
use generators::blog::BlogForm;
use generators::course::CourseForm;
use generators::course_faq::CourseFaqForm;
use generators::edu::{FullBlogForm, FullCourseForm};
use generators::{GeneratedSchema, run_form};
use outputs::{checklist, json};
use utils::ensure_writable_dir;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("edu_schema_gen starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.command, output_dir = %args.output_dir, "Parsed CLI arguments");

    let profile = config::load_config(args.config.as_deref()).await?;

    // Early check: ensure output dir is writable
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Generate ----
    let today = Local::now().date_naive();
    let generated: Result<GeneratedSchema, error::GeneratorError> = match &args.command {
        Command::Auto { url, category } => {
            let request = AutoRequest::new(url.as_str(), category.as_str());
            generators::auto::run(&request, &profile).await
        }
        Command::Course { form } => run_form::<CourseForm>(form.as_deref(), today).await,
        Command::Blog { form } => run_form::<BlogForm>(form.as_deref(), today).await,
        Command::CourseFaq { form } => run_form::<CourseFaqForm>(form.as_deref(), today).await,
        Command::FullCourse { form } => run_form::<FullCourseForm>(form.as_deref(), today).await,
        Command::FullBlog { form } => run_form::<FullBlogForm>(form.as_deref(), today).await,
    };

    let generated = match generated {
        Ok(generated) => generated,
        Err(e) => {
            if e.is_malformed_input() {
                error!(error = %e, "Rejected input");
            } else {
                error!(error = %e, "Schema generation failed");
            }
            return Err(e.into());
        }
    };

    // ---- Output ----
    let path = json::write_schema(&generated.json, &args.output_dir, &generated.file_name).await?;
    info!(path = %path.display(), "Generated JSON-LD schema");

    if args.print {
        if args.script_tag {
            println!("{}", json::script_tag(&generated.json));
        } else {
            println!("{}", generated.json);
        }
    }

    if !generated.checklist.is_empty() {
        eprint!("{}", checklist::render(&generated.checklist));
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
