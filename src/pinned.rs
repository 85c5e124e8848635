use crate::store::{StoreError, store_path};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

/// User-curated, duplicate-free ordered list of launch commands.
///
/// Stored as plain text, one command per line. Every mutation rewrites
/// the whole file; removal preserves the order of what remains.
pub struct PinnedList {
    path: Option<PathBuf>,
    items: Vec<String>,
}

impl PinnedList {
    /// Load from the default cache location.
    pub fn load_default() -> Self {
        match store_path("pinned") {
            Some(path) => Self::load(path),
            None => Self {
                path: None,
                items: Vec::new(),
            },
        }
    }

    /// Load the list from `path`, creating the file empty when missing.
    /// Blank lines are skipped.
    pub fn load(path: PathBuf) -> Self {
        let items = match fs::read_to_string(&path) {
            Ok(contents) => Some(
                contents
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(String::from)
                    .collect(),
            ),
            Err(_) => {
                info!("Pinned list {:?} not found, creating", path);
                None
            }
        };

        let list = Self {
            path: Some(path),
            items: items.unwrap_or_default(),
        };
        if list.items.is_empty() {
            if let Err(err) = list.save() {
                warn!("Could not create pinned list: {}", err);
            }
        }
        list
    }

    /// Append `exec` unless already pinned, then persist.
    pub fn pin(&mut self, exec: &str) {
        if self.is_pinned(exec) {
            return;
        }
        self.items.push(exec.to_string());
        if let Err(err) = self.save() {
            warn!("Could not persist pinned list: {}", err);
        }
    }

    /// Remove `exec` if pinned, keeping the remaining order, then
    /// persist.
    pub fn unpin(&mut self, exec: &str) {
        let Some(idx) = self.items.iter().position(|e| e == exec) else {
            return;
        };
        self.items.remove(idx);
        if let Err(err) = self.save() {
            warn!("Could not persist pinned list: {}", err);
        }
    }

    pub fn is_pinned(&self, exec: &str) -> bool {
        self.items.iter().any(|e| e == exec)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let mut out = String::new();
        for item in &self.items {
            out.push_str(item);
            out.push('\n');
        }
        fs::write(path, out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("gridrun-pinned-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir.join("pinned")
    }

    #[test]
    fn missing_file_loads_empty_and_creates_it() {
        let path = temp_path("missing");
        let list = PinnedList::load(path.clone());
        assert!(list.items().is_empty());
        assert!(path.exists());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let path = temp_path("blank");
        fs::write(&path, "firefox\n\nedit\n\n").unwrap();
        let list = PinnedList::load(path);
        assert_eq!(list.items(), ["firefox", "edit"]);
    }

    #[test]
    fn whitespace_only_lines_are_skipped() {
        let path = temp_path("whitespace");
        fs::write(&path, "firefox\n   \n\t\nedit\n").unwrap();
        let list = PinnedList::load(path);
        assert_eq!(list.items(), ["firefox", "edit"]);
    }

    #[test]
    fn pin_appends_and_persists() {
        let path = temp_path("pin");
        let mut list = PinnedList::load(path.clone());
        list.pin("firefox");
        list.pin("edit");

        let reloaded = PinnedList::load(path);
        assert_eq!(reloaded.items(), ["firefox", "edit"]);
    }

    #[test]
    fn pin_is_idempotent() {
        let path = temp_path("idempotent");
        let mut list = PinnedList::load(path);
        list.pin("firefox");
        list.pin("edit");
        list.pin("firefox");
        assert_eq!(list.items(), ["firefox", "edit"]);
    }

    #[test]
    fn unpin_preserves_remaining_order() {
        let path = temp_path("order");
        let mut list = PinnedList::load(path.clone());
        list.pin("a");
        list.pin("b");
        list.pin("c");
        list.unpin("b");
        assert_eq!(list.items(), ["a", "c"]);

        let reloaded = PinnedList::load(path);
        assert_eq!(reloaded.items(), ["a", "c"]);
    }

    #[test]
    fn pin_then_unpin_restores_prior_state() {
        let path = temp_path("roundtrip");
        let mut list = PinnedList::load(path);
        list.pin("a");
        list.pin("b");
        let before = list.items().to_vec();
        list.pin("z");
        list.unpin("z");
        assert_eq!(list.items(), before.as_slice());
    }

    #[test]
    fn unpin_absent_is_a_noop() {
        let path = temp_path("absent");
        let mut list = PinnedList::load(path);
        list.pin("a");
        list.unpin("never-pinned");
        assert_eq!(list.items(), ["a"]);
    }

    #[test]
    fn is_pinned_checks_membership() {
        let path = temp_path("member");
        let mut list = PinnedList::load(path);
        list.pin("firefox");
        assert!(list.is_pinned("firefox"));
        assert!(!list.is_pinned("edit"));
    }
}
