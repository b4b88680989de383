// ABOUTME: CLI for extracting HTML head metadata using metatag-core.
// ABOUTME: Reads a document from file/stdin/sample and prints reports or preview fields.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use metatag_core::{parse_meta_html, to_json, to_markdown, Surface};

/// Built-in sample document, mirroring a well-tagged page head.
const SAMPLE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>MetaTag Previewer — Test Page</title>
  <meta name="description" content="Preview how your pages appear on search and social surfaces." />
  <meta name="keywords" content="seo, meta tags, open graph, twitter card" />
  <link rel="canonical" href="https://metatag-previewer.dev/example" />
  <meta property="og:title" content="MetaTag Previewer — Test Page" />
  <meta property="og:description" content="Instantly preview SERP and social embeds from your HTML head." />
  <meta property="og:url" content="https://metatag-previewer.dev/example" />
  <meta property="og:image" content="https://images.example.com/hero.jpg" />
  <meta name="twitter:card" content="summary_large_image" />
  <meta name="twitter:title" content="MetaTag Previewer — Test Page" />
  <meta name="twitter:description" content="Instant previews for search and social." />
  <meta name="twitter:image" content="https://images.example.com/hero.jpg" />
</head>
</html>
"#;

/// Extract head metadata from an HTML document and print derived reports.
#[derive(Parser, Debug)]
#[command(name = "metatag")]
#[command(about = "Extract HTML head metadata and print reports or preview fields", long_about = None)]
struct Args {
    /// HTML file to parse, or "-" to read from stdin.
    input: Option<String>,

    /// Use the built-in sample document instead of an input.
    #[arg(long, default_value_t = false)]
    sample: bool,

    /// Output format: json (default), markdown/md, warnings.
    #[arg(short = 'f', long = "format", default_value = "json")]
    format: String,

    /// Print resolved preview fields for one surface instead of a report:
    /// search, chat, microblog, professional.
    #[arg(long)]
    preview: Option<String>,

    /// Output file path (default: stdout).
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn parse_surface(name: &str) -> Result<Surface> {
    match name {
        "search" => Ok(Surface::Search),
        "chat" => Ok(Surface::ChatEmbed),
        "microblog" => Ok(Surface::Microblog),
        "professional" => Ok(Surface::ProfessionalNetwork),
        other => bail!(
            "unknown preview surface: {} (expected search, chat, microblog, or professional)",
            other
        ),
    }
}

fn load_input(args: &Args) -> Result<String> {
    if args.sample {
        if args.input.is_some() {
            bail!("--sample cannot be combined with an input path");
        }
        return Ok(SAMPLE.to_string());
    }

    match args.input.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
        }
        None => bail!("provide an HTML file, \"-\" for stdin, or --sample"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let html = load_input(&args)?;
    let record = parse_meta_html(&html);

    let output = if let Some(ref surface) = args.preview {
        let fields = parse_surface(surface)?.resolve(&record);
        if args.compact {
            serde_json::to_string(&fields)?
        } else {
            serde_json::to_string_pretty(&fields)?
        }
    } else {
        match args.format.as_str() {
            "json" => {
                if args.compact {
                    serde_json::to_string(&record)?
                } else {
                    to_json(&record)
                }
            }
            "markdown" | "md" => to_markdown(&record),
            "warnings" => record.warnings.join("\n"),
            other => bail!("unknown format: {} (expected json, markdown, or warnings)", other),
        }
    };

    if let Some(ref path) = args.output {
        fs::write(path, &output).with_context(|| format!("failed to write {:?}", path))?;
    } else {
        println!("{}", output);
    }

    Ok(())
}
