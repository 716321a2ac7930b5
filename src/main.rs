//! tagcloud - tag cloud and tag list directives for static sites.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::{fs, io::Write};
use tagcloud::{
    RenderContext, SiteConfig, TagCloud, TagIndex, TagList,
    directive::{self, Expanded},
    log,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Directives => {
            for name in directive::names() {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Cloud { markup } => {
            let (index, config) = load_inputs(&cli)?;
            let ctx = RenderContext::new(&index, &config);
            write_stdout(&TagCloud::new(&markup.join(" ")).render(&ctx))
        }
        Commands::List { markup } => {
            let (index, config) = load_inputs(&cli)?;
            let ctx = RenderContext::new(&index, &config);
            write_stdout(&TagList::new(&markup.join(" ")).render(&ctx))
        }
        Commands::Expand { template, output } => {
            let (index, config) = load_inputs(&cli)?;
            let ctx = RenderContext::new(&index, &config);

            let source = fs::read_to_string(template)
                .with_context(|| format!("Failed to read template {}", template.display()))?;
            let Expanded { text, rendered, unknown } = directive::expand(&source, &ctx);

            log!("expand"; "{rendered} directives rendered in {}", template.display());
            if !unknown.is_empty() {
                log!("expand"; "left untouched: {}", unknown.join(", "));
            }

            match output {
                Some(path) => fs::write(path, &text)
                    .with_context(|| format!("Failed to write {}", path.display())),
                None => write_stdout(&text),
            }
        }
    }
}

/// Load the tag index and the site config named on the command line.
fn load_inputs(cli: &Cli) -> Result<(TagIndex, SiteConfig)> {
    let config = load_config(cli)?;
    let index = TagIndex::from_path(&cli.tags)
        .with_context(|| format!("Failed to load tag index {}", cli.tags.display()))?;
    log!("tags"; "{} tags from {}", index.len(), cli.tags.display());
    Ok((index, config))
}

/// Load config from the `--config` file, falling back to defaults when it
/// does not exist, then apply CLI overrides.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let mut config = if cli.config.exists() {
        SiteConfig::from_path(&cli.config)
            .with_context(|| format!("Failed to load config {}", cli.config.display()))?
    } else {
        log!("config"; "{} not found, using defaults", cli.config.display());
        SiteConfig::default()
    };
    config.apply_overrides(cli.root.as_ref(), cli.tag_dir.as_ref());

    log!("render"; "root `{}`, tag_dir `{}`", config.root(), config.tag_dir());
    Ok(config)
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes()).context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}
