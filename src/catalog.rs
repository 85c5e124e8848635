use crate::model::CatalogEntry;
use crate::parser::parse_descriptor_file;
use crate::scanner::{DescriptorFile, scan};
use log::{debug, info};
use std::collections::HashSet;
use std::path::PathBuf;

/// The deduplicated application catalog, sorted by display name.
///
/// Built once at startup and immutable afterwards. Hidden entries
/// (`NoDisplay=true`) stay in the collection so usage and pinned
/// records can still be resolved against them, but they are excluded
/// from the visible view.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

/// Scan the given roots and assemble the catalog for one locale.
pub fn build_catalog(roots: &[PathBuf], locale: &str) -> Catalog {
    let files = scan(roots);
    let catalog = Catalog::from_files(&files, locale);
    info!("Catalog holds {} entries", catalog.len());
    catalog
}

impl Catalog {
    /// Assemble from scanned files, in root-precedence order. The first
    /// file claiming a `DescriptorId` wins; later ones are not parsed.
    pub fn from_files(files: &[DescriptorFile], locale: &str) -> Self {
        let mut seen_ids = HashSet::new();
        let mut parsed = Vec::new();

        for file in files {
            if !seen_ids.insert(file.id.clone()) {
                debug!(
                    "{} already claimed by a higher-precedence root, skipping {:?}",
                    file.id.as_str(),
                    file.path
                );
                continue;
            }
            let entry = parse_descriptor_file(&file.path, locale);
            if entry.is_valid() {
                parsed.push(entry);
            }
        }

        Self::from_entries(parsed)
    }

    /// Value-level dedup and sort. Distinct files advertising the same
    /// `(name, exec, mime_type)` collapse to the first one seen.
    pub fn from_entries(parsed: Vec<CatalogEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut entries: Vec<CatalogEntry> = Vec::new();

        for entry in parsed {
            if seen.insert(entry.dedup_key()) {
                entries.push(entry);
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    /// Entries shown in the default view.
    pub fn visible(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| !e.no_display)
    }

    /// Look up any entry, hidden ones included, by its command.
    pub fn find_by_exec(&self, exec: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.exec == exec)
    }

    /// Resolve a `top_n` ranking to visible catalog entries. Records
    /// whose exec points at a hidden or vanished entry are dropped, not
    /// resurrected.
    pub fn favorites_row(&self, top: &[(String, u32)]) -> Vec<&CatalogEntry> {
        top.iter()
            .filter_map(|(exec, _)| {
                self.entries
                    .iter()
                    .find(|e| !e.no_display && e.exec == *exec)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
