use crate::model::DescriptorId;
use log::{debug, info};
use std::env;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One candidate descriptor file, tagged with its cross-root identity.
#[derive(Debug, Clone)]
pub struct DescriptorFile {
    pub id: DescriptorId,
    pub path: PathBuf,
}

/// Descriptor search roots, highest precedence first: the user's data
/// dir, the two fixed system dirs, then one `applications` dir per
/// entry of `$XDG_DATA_DIRS`.
pub fn search_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    let home = env::var("HOME").unwrap_or_default();

    let data_home =
        env::var("XDG_DATA_HOME").unwrap_or_else(|_| format!("{}/.local/share", home));
    roots.push(PathBuf::from(data_home).join("applications"));
    roots.push(PathBuf::from("/usr/share/applications"));
    roots.push(PathBuf::from("/usr/local/share/applications"));

    if let Ok(data_dirs) = env::var("XDG_DATA_DIRS") {
        for dir in data_dirs.split(':') {
            if !dir.is_empty() {
                roots.push(PathBuf::from(dir).join("applications"));
            }
        }
    }

    roots
}

/// Enumerate `.desktop` files under the given roots, in root order.
/// Roots that do not exist are skipped. File order within a root is
/// whatever the walk yields; only root precedence carries meaning.
pub fn scan(roots: &[PathBuf]) -> Vec<DescriptorFile> {
    let mut files = Vec::new();

    for root in roots {
        if !root.exists() {
            debug!("Search root {:?} does not exist, skipping", root);
            continue;
        }
        debug!("Scanning descriptor files in {:?}", root);
        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("desktop") {
                continue;
            }
            if let Some(id) = descriptor_id(root, path) {
                files.push(DescriptorFile {
                    id,
                    path: path.to_path_buf(),
                });
            }
        }
    }

    info!("Found {} descriptor files", files.len());
    files
}

fn descriptor_id(root: &Path, path: &Path) -> Option<DescriptorId> {
    let rel = path.strip_prefix(root).ok()?;
    Some(DescriptorId::from_relative_path(rel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_root(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("gridrun-scanner-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn finds_descriptor_files_recursively() {
        let root = temp_root("recursive");
        fs::create_dir_all(root.join("kde")).unwrap();
        fs::write(root.join("firefox.desktop"), "[Desktop Entry]\n").unwrap();
        fs::write(root.join("kde/kate.desktop"), "[Desktop Entry]\n").unwrap();
        fs::write(root.join("README.txt"), "not a descriptor").unwrap();

        let mut ids: Vec<String> = scan(&[root])
            .into_iter()
            .map(|f| f.id.as_str().to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["firefox.desktop", "kde-kate.desktop"]);
    }

    #[test]
    fn missing_root_is_skipped() {
        let root = temp_root("present");
        fs::write(root.join("app.desktop"), "[Desktop Entry]\n").unwrap();
        let missing = env::temp_dir().join("gridrun-scanner-no-such-dir");

        let files = scan(&[missing, root]);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].id.as_str(), "app.desktop");
    }

    #[test]
    fn root_order_is_preserved() {
        let first = temp_root("order-first");
        let second = temp_root("order-second");
        fs::write(first.join("a.desktop"), "").unwrap();
        fs::write(second.join("b.desktop"), "").unwrap();

        let files = scan(&[first.clone(), second]);
        assert_eq!(files[0].id.as_str(), "a.desktop");
        assert_eq!(files[1].id.as_str(), "b.desktop");
    }

    #[test]
    fn same_relative_path_collides_across_roots() {
        let user = temp_root("collide-user");
        let system = temp_root("collide-system");
        fs::create_dir_all(user.join("gtk")).unwrap();
        fs::create_dir_all(system.join("gtk")).unwrap();
        fs::write(user.join("gtk/editor.desktop"), "").unwrap();
        fs::write(system.join("gtk/editor.desktop"), "").unwrap();

        let files = scan(&[user, system]);
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].id, files[1].id);
    }
}
