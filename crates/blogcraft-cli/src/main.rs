//! `blogcraft` - command-line host for the BlogCraft composition engine.
//!
//! # Usage
//!
//! ```bash
//! blogcraft slug "Hello, World!"
//! blogcraft stats post.md
//! blogcraft preview post.md --tailwind
//! blogcraft publish post.md --title "My Post" --tags "rust, web" --image cover.png
//! ```
//!
//! A body path of `-` reads from stdin. Set `RUST_LOG=debug` to see session activity on stderr.

use blogcraft_core::{
    Alignment, ArticleRecord, ComposerConfig, ComposerSession, FileUpload, FontFamily,
    compute_metrics_with, derive_slug,
};
use blogcraft_preview::{PreviewClasses, PreviewRenderer};
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(version, about = "BlogCraft - compose, preview and publish blog posts", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true, env = "BLOGCRAFT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the URL slug for a title
    Slug {
        /// Post title
        title: String,
    },
    /// Print word count, character count and reading time of a body
    Stats {
        /// Body file (`-` for stdin)
        body: PathBuf,
    },
    /// Render a body to preview HTML
    Preview {
        /// Body file (`-` for stdin)
        body: PathBuf,

        /// HTML-escape the body before rendering
        #[arg(long)]
        escape: bool,

        /// Attach the web UI's Tailwind classes
        #[arg(long)]
        tailwind: bool,
    },
    /// Build a draft record and print it as JSON
    Draft(RecordArgs),
    /// Build a published record and print it as JSON
    Publish(RecordArgs),
}

#[derive(Args)]
struct RecordArgs {
    /// Body file (`-` for stdin)
    body: PathBuf,

    /// Post title
    #[arg(long)]
    title: String,

    /// Subtitle
    #[arg(long, default_value = "")]
    subtitle: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    tags: String,

    /// SEO title
    #[arg(long, default_value = "")]
    meta_title: String,

    /// SEO description
    #[arg(long, default_value = "")]
    meta_description: String,

    /// Override the slug derived from the title
    #[arg(long)]
    slug: Option<String>,

    /// Thumbnail image
    #[arg(long)]
    thumbnail: Option<PathBuf>,

    /// Images to append to the body, in order
    #[arg(long = "image")]
    images: Vec<PathBuf>,

    /// Video URL to append to the body
    #[arg(long)]
    video: Option<String>,

    /// Font size in pixels (12-24)
    #[arg(long)]
    font_size: Option<u32>,

    /// Font family (Inter, Georgia, Courier New, Arial)
    #[arg(long)]
    font_family: Option<FontFamily>,

    /// Text color as #rrggbb
    #[arg(long)]
    text_color: Option<String>,

    /// Background color as #rrggbb
    #[arg(long)]
    bg_color: Option<String>,

    /// Text alignment (left, center, right)
    #[arg(long)]
    align: Option<Alignment>,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Slug { title } => {
            println!("{}", derive_slug(&title));
        }
        Commands::Stats { body } => {
            let body = read_body(&body)?;
            let metrics = compute_metrics_with(&body, config.words_per_minute);
            println!("words: {}", metrics.word_count);
            println!("characters: {}", metrics.char_count);
            println!("graphemes: {}", metrics.grapheme_count);
            println!("reading time: {} min", metrics.reading_time_minutes);
        }
        Commands::Preview {
            body,
            escape,
            tailwind,
        } => {
            let body = read_body(&body)?;
            let mut options = config.preview.clone();
            options.escape_html |= escape;
            if tailwind {
                options.classes = PreviewClasses::tailwind();
            }
            let renderer = PreviewRenderer::new(options).into_diagnostic()?;
            println!("{}", renderer.render(&body));
        }
        Commands::Draft(args) => {
            let session = build_session(config, args)?;
            print_record(&session.save_draft(chrono::Utc::now()))?;
        }
        Commands::Publish(args) => {
            let session = build_session(config, args)?;
            print_record(&session.publish(chrono::Utc::now()))?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Result<ComposerConfig> {
    match path {
        Some(path) => ComposerConfig::from_path(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to load config {}", path.display())),
        None => Ok(ComposerConfig::default()),
    }
}

fn read_body(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .into_diagnostic()
            .wrap_err("failed to read body from stdin")?;
        return Ok(body);
    }

    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read body {}", path.display()))
}

fn read_upload(path: &Path) -> Result<FileUpload> {
    let bytes = std::fs::read(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let declared_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(FileUpload::new(name, declared_type, bytes))
}

fn build_session(config: ComposerConfig, args: RecordArgs) -> Result<ComposerSession> {
    let mut session = ComposerSession::with_config(config).into_diagnostic()?;

    session.set_title(args.title);
    session.set_subtitle(args.subtitle);
    session.set_body(read_body(&args.body)?);
    session.set_tags_input(args.tags);
    session.set_meta_title(args.meta_title);
    session.set_meta_description(args.meta_description);
    if let Some(slug) = args.slug {
        session.set_slug(slug);
    }

    if let Some(path) = &args.thumbnail {
        if !session.set_thumbnail(&read_upload(path)?) {
            tracing::warn!(path = %path.display(), "thumbnail is not an image, skipped");
        }
    }
    for path in &args.images {
        if session.attach_image(&read_upload(path)?).is_none() {
            tracing::warn!(path = %path.display(), "not an image, skipped");
        }
    }
    session.embed_video(args.video.as_deref());

    if let Some(px) = args.font_size {
        session.set_font_size(px).into_diagnostic()?;
    }
    if let Some(family) = args.font_family {
        session.set_font_family(family);
    }
    if let Some(color) = &args.text_color {
        session.set_text_color(color).into_diagnostic()?;
    }
    if let Some(color) = &args.bg_color {
        session.set_background_color(color).into_diagnostic()?;
    }
    if let Some(alignment) = args.align {
        session.set_alignment(alignment);
    }

    Ok(session)
}

fn print_record(record: &ArticleRecord) -> Result<()> {
    let json = record.to_json_pretty().into_diagnostic()?;
    println!("{json}");
    Ok(())
}
