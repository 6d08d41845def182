use crate::cli::{Cli, Commands};
use crate::domain::constants::DEFAULT_AUTHOR;
use crate::domain::models::{Endpoints, ScaffoldFailure};
use crate::services::fetch::{JinaFetcher, PageFetcher};
use crate::services::output::{print_one, print_out, progress};
use crate::services::scaffold::{build_scaffold_report, scaffold_topic};
use crate::services::settings::{load_settings, resolve_api_key};
use crate::services::storage::audit;
use crate::services::topics;
use chrono::Utc;
use std::path::Path;

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Scaffold { keep_going } => run_scaffold(cli, *keep_going),
        Commands::Topics { query } => run_topics(cli, query.as_deref()),
        Commands::Show { slug } => run_show(cli, slug),
        Commands::Validate => run_validate(cli),
        Commands::Fetch { url } => run_fetch(cli, url),
    }
}

fn run_scaffold(cli: &Cli, keep_going: bool) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let api_key = resolve_api_key()?;
    let loaded = topics::load_topics(Path::new(&cli.topics))?;
    let author = settings
        .general
        .author
        .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());
    let endpoints = Endpoints::default();
    let root = Path::new(&cli.out_dir);

    progress(
        cli.json,
        format!("scaffolding {} topics into {}", loaded.len(), root.display()),
    );

    let mut succeeded = Vec::new();
    let mut failed = Vec::new();
    for (i, topic) in loaded.iter().enumerate() {
        progress(
            cli.json,
            format!("[{}/{}] {}", i + 1, loaded.len(), topic.slug),
        );
        match scaffold_topic(root, topic, &author, &api_key, &endpoints, Utc::now()) {
            Ok(dir) => {
                progress(cli.json, format!("  wrote configs to {}", dir.display()));
                succeeded.push(topic.slug.clone());
            }
            Err(e) if keep_going => {
                progress(cli.json, format!("  failed: {}", e));
                failed.push(ScaffoldFailure {
                    slug: topic.slug.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }
    }

    let report = build_scaffold_report(loaded.len(), succeeded, failed);
    audit(
        "scaffold",
        serde_json::json!({
            "total": report.total,
            "succeeded": report.succeeded.len(),
            "failed": report.failed.len()
        }),
    );
    print_one(cli.json, report, |r| {
        format!("scaffolded {}/{} topics ({})", r.succeeded.len(), r.total, r.overall)
    })
}

fn run_topics(cli: &Cli, query: Option<&str>) -> anyhow::Result<()> {
    let loaded = topics::load_topics(Path::new(&cli.topics))?;
    let items = topics::discover(&loaded, query);
    print_out(cli.json, &items, |t| {
        format!("{}\t{}\t{}", t.slug, t.title, t.description)
    })
}

fn run_show(cli: &Cli, slug: &str) -> anyhow::Result<()> {
    let loaded = topics::load_topics(Path::new(&cli.topics))?;
    let topic = topics::show(&loaded, slug)?;
    if cli.json {
        print_one(true, topic, |_| String::new())
    } else {
        println!("slug: {}", topic.slug);
        println!("title: {}", topic.title);
        println!("keywords: {}", topic.keywords.join(", "));
        println!("products: {}", topic.target_products.join(", "));
        println!("collections: {}", topic.target_collections.join(", "));
        println!("description: {}", topic.description);
        Ok(())
    }
}

fn run_validate(cli: &Cli) -> anyhow::Result<()> {
    let loaded = topics::load_topics(Path::new(&cli.topics))?;
    topics::validate(&loaded)?;
    print_one(cli.json, "valid", |_| "topics valid".to_string())
}

fn run_fetch(cli: &Cli, url: &str) -> anyhow::Result<()> {
    let settings = load_settings()?;
    let api_key = resolve_api_key()?;
    let mut fetcher = JinaFetcher::new(api_key);
    if let Some(ms) = settings.general.fetch_timeout_ms {
        fetcher = fetcher.with_timeout(ms);
    }
    if let Some(base) = settings.general.fetch_base_url {
        fetcher = fetcher.with_endpoint(base);
    }
    audit("fetch", serde_json::json!({ "url": url }));
    run_fetch_with(cli.json, &fetcher, url)
}

fn run_fetch_with(json: bool, fetcher: &dyn PageFetcher, url: &str) -> anyhow::Result<()> {
    match fetcher.fetch_page_text(url) {
        Some(text) => {
            if json {
                print_one(
                    true,
                    serde_json::json!({
                        "url": url,
                        "available": true,
                        "chars": text.chars().count(),
                        "text": text
                    }),
                    |_| String::new(),
                )
            } else {
                println!("{}", text);
                Ok(())
            }
        }
        None => print_one(
            json,
            serde_json::json!({ "url": url, "available": false }),
            |_| format!("content unavailable: {}", url),
        ),
    }
}
