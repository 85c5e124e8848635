mod cache;
mod catalog;
mod config;
mod executor;
mod matcher;
mod model;
mod parser;
mod pinned;
mod scanner;
mod store;

use crate::cache::{UsageCache, is_favorite};
use crate::catalog::{Catalog, build_catalog};
use crate::config::{load_config, resolve_locale};
use crate::matcher::FuzzyMatcher;
use crate::model::CatalogEntry;
use crate::pinned::PinnedList;
use crate::scanner::search_roots;
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::warn;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of grid columns (bounds the favorites row)
    #[arg(short, long)]
    columns: Option<usize>,

    /// Force a 2-letter locale instead of $LANG
    #[arg(short, long)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the catalog, optionally filtered by a fuzzy query
    List {
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Print the favorites row (most-launched visible entries)
    Favorites,
    /// Print the pinned entries in their pinned order
    Pinned,
    /// Add a command to the pinned list
    Pin { exec: String },
    /// Remove a command from the pinned list
    Unpin { exec: String },
    /// Launch a command and record the click
    Launch { exec: String },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config()?;
    let columns = args.columns.unwrap_or(config.general.columns);
    let locale = resolve_locale(&config, args.locale.as_deref());

    match args.command.unwrap_or(Command::List { query: None }) {
        Command::List { query } => {
            let catalog = build_catalog(&search_roots(), &locale);
            let pinned = PinnedList::load_default();
            let top = UsageCache::load_default().top_n(columns);

            match query {
                Some(query) => {
                    let mut matcher = FuzzyMatcher::new();
                    for entry in matcher.filter(&query, catalog.visible()) {
                        print_entry(entry, &pinned, &top);
                    }
                }
                None => {
                    for entry in catalog.visible() {
                        print_entry(entry, &pinned, &top);
                    }
                }
            }
        }
        Command::Favorites => {
            let catalog = build_catalog(&search_roots(), &locale);
            let cache = UsageCache::load_default();
            for entry in catalog.favorites_row(&cache.top_n(columns)) {
                println!("{}\t{}\t{}", entry.name, entry.exec, cache.count(&entry.exec));
            }
        }
        Command::Pinned => {
            let catalog = build_catalog(&search_roots(), &locale);
            let pinned = PinnedList::load_default();
            for entry in resolve_pinned(&catalog, &pinned) {
                println!("{}\t{}", entry.name, entry.exec);
            }
        }
        Command::Pin { exec } => {
            PinnedList::load_default().pin(&exec);
        }
        Command::Unpin { exec } => {
            PinnedList::load_default().unpin(&exec);
        }
        Command::Launch { exec } => {
            let catalog = build_catalog(&search_roots(), &locale);
            if catalog.find_by_exec(&exec).is_none() {
                warn!("{:?} is not in the catalog, launching anyway", exec);
            }
            executor::launch(&exec)?;
            UsageCache::load_default().record_launch(&exec);
        }
    }

    Ok(())
}

/// Pinned commands resolved against the visible catalog, in pin order.
/// Commands pointing at hidden or vanished entries are dropped.
fn resolve_pinned<'a>(catalog: &'a Catalog, pinned: &PinnedList) -> Vec<&'a CatalogEntry> {
    pinned
        .items()
        .iter()
        .filter_map(|exec| catalog.visible().find(|e| e.exec == *exec))
        .collect()
}

fn print_entry(entry: &CatalogEntry, pinned: &PinnedList, top: &[(String, u32)]) {
    let mut flags = String::new();
    if pinned.is_pinned(&entry.exec) {
        flags.push('p');
    }
    if is_favorite(top, &entry.exec) {
        flags.push('f');
    }
    println!(
        "{}\t{}\t{}\t{}",
        entry.name, entry.exec, flags, entry.comment
    );
}
