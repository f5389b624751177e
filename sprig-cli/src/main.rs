//! Sprig CLI
//!
//! Parses an HTML document and prints its element tree or the elements
//! matching a descendant selector.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use sprig_core::common::TagMetadata;
use sprig_core::common::warning::warn_once;
use sprig_core::dom::{Document, Element};
use sprig_core::html::print_tree;
use sprig_core::select::SelectorChain;
use sprig_core::{load_document, parse_document, select_chain};

/// Sprig — parse HTML and query it with descendant selectors
#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the element tree of a file
    sprig --tree ./index.html

    # List matching elements
    sprig -s 'div#main p span.item' ./index.html

    # Query a page over HTTP and dump the matches as JSON
    sprig -s 'ul.nav li' --json https://example.com

    # Parse inline HTML
    sprig --html '<div><p class="x">hi</p></div>' -s 'div p.x'
"#)]
struct Cli {
    /// Path to HTML file or URL to load
    #[arg(value_name = "FILE|URL")]
    path: Option<String>,

    /// Parse HTML string directly instead of file/URL
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Descendant selector to match, e.g. `div#main p.item`
    #[arg(short, long, value_name = "SELECTOR")]
    selector: Option<String>,

    /// Print the element tree
    #[arg(long)]
    tree: bool,

    /// Print output as JSON
    #[arg(long)]
    json: bool,

    /// JSON array of known tag names (replaces the built-in list)
    #[arg(long, value_name = "FILE", requires = "void_tags")]
    tags: Option<PathBuf>,

    /// JSON array of void tag names (replaces the built-in list)
    #[arg(long, value_name = "FILE", requires = "tags")]
    void_tags: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tags = load_tags(&cli);

    let Some(document) = load_doc(&cli, &tags)? else {
        println!("{}", "No document: the input contains no tags".yellow());
        return Ok(());
    };

    let tree = cli.tree || cli.selector.is_none();
    if tree {
        print_document(&document, cli.json)?;
    }

    if let Some(selector) = &cli.selector {
        let chain = SelectorChain::compile(selector);
        if chain.is_empty() {
            warn_once("CLI", "empty selector matches nothing");
        }
        let matches = select_chain(&document, &chain);
        print_matches(&chain, &matches, cli.json)?;
    }

    Ok(())
}

/// Build tag metadata from the command line, falling back to the built-in lists
fn load_tags(cli: &Cli) -> TagMetadata {
    match (&cli.tags, &cli.void_tags) {
        (Some(known), Some(void)) => TagMetadata::load(known, void),
        _ => TagMetadata::builtin(),
    }
}

/// Load document from CLI arguments
fn load_doc(cli: &Cli, tags: &TagMetadata) -> Result<Option<Document>> {
    if let Some(html) = &cli.html {
        Ok(parse_document(html, tags))
    } else if let Some(path) = &cli.path {
        load_document(path, tags).with_context(|| format!("could not load {path}"))
    } else {
        bail!("a file path, URL, or --html is required")
    }
}

fn print_document(document: &Document, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(document)?);
    } else {
        println!("{}", "=== Element Tree ===".bold());
        print_tree(document, document.root());
        println!("{} elements", document.iter().count());
    }
    Ok(())
}

fn print_matches(chain: &SelectorChain, matches: &[&Element], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(matches)?);
        return Ok(());
    }

    println!("{} {}", "=== Matches for".bold(), chain.to_string().cyan());
    for element in matches {
        print!("{}", format!("#{}", element.id.0).dimmed());
        print!(" <{}", element.name.green());
        if let Some(id) = element.id_attr() {
            print!(" id=\"{id}\"");
        }
        if !element.classes.is_empty() {
            print!(" class=\"{}\"", element.classes.join(" "));
        }
        print!(">");
        if !element.text.is_empty() {
            print!(" {}", element.text);
        }
        println!();
    }
    println!("{} matches", matches.len());
    Ok(())
}
