use clap::{Parser, Subcommand};
use deckhand::{config, output, pipeline, scan};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "deckhand")]
#[command(about = "Incremental build orchestrator for markdown slide decks")]
#[command(long_about = "\
Incremental build orchestrator for markdown slide decks

Your filesystem is the catalog. Every markdown file under the content root
is one presentation; directories become categories.

Content structure:

  slides/
  ├── welcome.md                   # Top-level deck → category \"General\"
  ├── rust/
  │   ├── intro-to-systems.md      # Category \"Rust\"
  │   └── ownership.md
  └── web-platform/
      └── css-layout.md            # Category \"Web Platform\"

Each deck renders (via the configured renderer, slidev by default) into
dist/<url-path>/, where the url path joins the directory segments and the
filename with dashes (rust/intro-to-systems.md → rust-intro-to-systems).
Only decks whose content hash changed since the last successful build are
re-rendered; deleted sources have their output cleaned up. A landing page
listing every deck is regenerated on each build.

Metadata resolution:
  Title:       frontmatter `title:` → capitalized filename
  Description: first line of frontmatter `info:` (leading # stripped)
  Category:    first directory under the content root → \"General\"

Run 'deckhand gen-config' to generate a documented deckhand.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory holding the deck sources
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Directory for the fingerprint store
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Landing page template
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// Config file (default: ./deckhand.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Base URL prefix the decks are served under
    #[arg(long)]
    base: Option<String>,

    /// Ignore fingerprints and rebuild every deck
    #[arg(long)]
    force: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build all changed decks and regenerate the landing page
    Build(BuildArgs),
    /// List discovered decks by category without building
    Scan,
    /// Print a stock deckhand.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => config::Config::load(path)?,
        None => config::Config::load_or_default()?,
    };
    if let Some(source) = cli.source {
        cfg.content_dir = source;
    }
    if let Some(output) = cli.output {
        cfg.output_dir = output;
    }
    if let Some(cache_dir) = cli.cache_dir {
        cfg.cache_dir = cache_dir;
    }
    if let Some(template) = cli.template {
        cfg.template = template;
    }

    match cli.command {
        Command::Build(args) => {
            if let Some(base) = args.base {
                cfg.base = base;
            }
            println!("==> Building decks from {}", cfg.content_dir.display());
            println!("Base path: {}", cfg.base);
            if args.force {
                println!("Force rebuild enabled - all decks will be rebuilt");
            }
            let report = pipeline::run_build(&cfg, args.force)?;
            output::print_build_report(&report);
            println!("==> Index page: {}", cfg.output_dir.join("index.html").display());
        }
        Command::Scan => {
            let sources = scan::scan(&cfg.content_dir)?;
            output::print_scan(&sources);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
