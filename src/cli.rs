//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render tag clouds and tag lists for a static site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file (default: tagcloud.toml)
    #[arg(short = 'C', long, default_value = "tagcloud.toml")]
    pub config: PathBuf,

    /// Tag index file, a JSON object of tag -> [post, ...]
    #[arg(short, long, default_value = "tags.json")]
    pub tags: PathBuf,

    /// Override `[base].root`
    #[arg(long)]
    pub root: Option<String>,

    /// Override `[base].tag_dir`
    #[arg(long = "tag-dir")]
    pub tag_dir: Option<String>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the tag cloud
    Cloud {
        /// Directive markup, e.g. `counter:true`
        markup: Vec<String>,
    },

    /// Render the tag list items
    List {
        /// Directive markup, e.g. `counter:true`
        markup: Vec<String>,
    },

    /// Expand `{% tag_cloud %}` / `{% tag_list %}` directives in a template
    Expand {
        /// Template file to expand
        template: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List registered directive names
    Directives,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cloud_with_markup() {
        let cli = Cli::try_parse_from(["tagcloud", "cloud", "counter:true"]).unwrap();
        match cli.command {
            Commands::Cloud { markup } => assert_eq!(markup, ["counter:true"]),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("tagcloud.toml"));
        assert_eq!(cli.tags, PathBuf::from("tags.json"));
    }

    #[test]
    fn test_parse_list_without_markup() {
        let cli = Cli::try_parse_from(["tagcloud", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List { markup } if markup.is_empty()));
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "tagcloud", "-C", "site.toml", "-t", "idx.json", "--root", "http://x.test",
            "--tag-dir", "topics", "list",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert_eq!(cli.tags, PathBuf::from("idx.json"));
        assert_eq!(cli.root.as_deref(), Some("http://x.test"));
        assert_eq!(cli.tag_dir.as_deref(), Some("topics"));
    }

    #[test]
    fn test_parse_expand() {
        let cli = Cli::try_parse_from(["tagcloud", "expand", "aside.html", "-o", "out.html"]).unwrap();
        match cli.command {
            Commands::Expand { template, output } => {
                assert_eq!(template, PathBuf::from("aside.html"));
                assert_eq!(output, Some(PathBuf::from("out.html")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
