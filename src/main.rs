// src/main.rs
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use autoseo::domain::{ArticleInput, CustomSeo};
use autoseo::lifecycle::{self, CONFIG_ENV};

#[derive(Parser)]
#[command(name = "autoseo", version, about = "Generate SEO metadata for blog articles")]
struct Cli {
    /// TOML file overriding the default SEO policy
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze an article and print the full AutoSEO result
    Analyze(AnalyzeArgs),
    /// Score operator-supplied SEO fields against an article
    Reanalyze(ReanalyzeArgs),
    /// Print the ranked keywords of an article
    Keywords(KeywordsArgs),
}

#[derive(Args)]
struct ContentArgs {
    #[arg(long)]
    title: String,

    /// Article body file, or "-" for stdin
    #[arg(long)]
    content: String,
}

#[derive(Args)]
struct AnalyzeArgs {
    #[command(flatten)]
    article: ContentArgs,

    #[arg(long)]
    slug: String,

    #[arg(long)]
    excerpt: Option<String>,

    #[arg(long)]
    cover_image: Option<String>,

    #[arg(long)]
    author: Option<String>,

    /// RFC 3339 timestamp, defaults to now
    #[arg(long)]
    published_at: Option<DateTime<Utc>>,
}

#[derive(Args)]
struct ReanalyzeArgs {
    #[command(flatten)]
    article: ContentArgs,

    #[arg(long)]
    seo_title: String,

    #[arg(long)]
    seo_description: String,

    #[arg(long)]
    focus_keyword: String,

    /// Comma-separated keyword list
    #[arg(long, value_delimiter = ',')]
    keywords: Vec<String>,
}

#[derive(Args)]
struct KeywordsArgs {
    #[arg(long, default_value = "")]
    title: String,

    /// Article body file, or "-" for stdin
    #[arg(long)]
    content: String,
}

fn main() -> Result<()> {
    lifecycle::init_logging();
    let cli = Cli::parse();

    let analyzer = lifecycle::build_analyzer(cli.config.as_ref())
        .context("Failed to load SEO configuration")?;

    match cli.command {
        Command::Analyze(args) => {
            let content = read_content(&args.article.content)?;
            let article = ArticleInput {
                title: args.article.title,
                content,
                slug: args.slug,
                excerpt: args.excerpt,
                cover_image: args.cover_image,
                author: args.author,
                published_at: args.published_at,
            };
            print_json(&analyzer.generate_auto_seo(&article), cli.compact)
        }
        Command::Reanalyze(args) => {
            let content = read_content(&args.article.content)?;
            let custom = CustomSeo {
                title: args.seo_title,
                description: args.seo_description,
                focus_keyword: args.focus_keyword,
                keywords: parse_keywords(args.keywords),
            };
            let analysis = analyzer.reanalyze_with_custom(&args.article.title, &content, &custom);
            print_json(&analysis, cli.compact)
        }
        Command::Keywords(args) => {
            let content = read_content(&args.content)?;
            let keywords = analyzer.extract_keywords(&format!("{} {}", args.title, content));
            print_json(&keywords, cli.compact)
        }
    }
}

fn read_content(source: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read article content from stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(source).with_context(|| format!("Failed to read article file {source}"))
}

/// Trims `--keywords` entries and drops the blank ones left by stray commas.
fn parse_keywords(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect()
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}
