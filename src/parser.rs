use crate::model::CatalogEntry;
use std::fs;
use std::path::Path;

/// Read and parse one descriptor file. Unreadable files yield an empty
/// record, which the catalog filters out like any other invalid entry.
pub fn parse_descriptor_file(path: &Path, locale: &str) -> CatalogEntry {
    match fs::read_to_string(path) {
        Ok(contents) => parse_entry(&contents, locale),
        Err(_) => CatalogEntry::default(),
    }
}

/// Parse the text of a descriptor file into a catalog record.
///
/// Only the first `[Desktop Entry]` section is scanned; scanning stops
/// at the next bracketed section header. `Name` and `Comment` prefer
/// the locale-suffixed key (`Name[de]=`), falling back to the plain key
/// when the localized one is absent or blank. `Exec` is cut at the
/// first `%` placeholder since argument substitution never happens at
/// launch time.
pub fn parse_entry(contents: &str, locale: &str) -> CatalogEntry {
    let loc_name = format!("Name[{}]", locale);
    let loc_comment = format!("Comment[{}]", locale);

    let mut entry = CatalogEntry::default();
    let mut name = String::new();
    let mut name_loc = String::new();
    let mut comment = String::new();
    let mut comment_loc = String::new();
    let mut in_section = false;

    for line in contents.lines() {
        let line = line.trim_end();
        if line.starts_with('[') {
            if in_section {
                break;
            }
            in_section = line.starts_with("[Desktop Entry]");
            continue;
        }
        if !in_section {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        if key == "Name" {
            name = value.to_string();
        } else if key == loc_name {
            name_loc = value.to_string();
        } else if key == "Comment" {
            comment = value.to_string();
        } else if key == loc_comment {
            comment_loc = value.to_string();
        } else if key == "Exec" {
            entry.exec = strip_placeholders(value);
        } else if key == "Icon" {
            entry.icon = value.to_string();
        } else if key == "MimeType" {
            entry.mime_type = value.to_string();
        } else if key == "NoDisplay" {
            entry.no_display = value == "true";
        }
    }

    entry.name = if name_loc.is_empty() { name } else { name_loc };
    entry.comment = if comment_loc.is_empty() {
        comment
    } else {
        comment_loc
    };
    entry
}

/// Cut the command at the first `%` field code, dropping the space that
/// precedes it.
fn strip_placeholders(exec: &str) -> String {
    match exec.find('%') {
        Some(idx) => exec[..idx].trim_end().to_string(),
        None => exec.to_string(),
    }
}
