use std::path::Path;

/// Identity of a descriptor file across search roots: its root-relative
/// path with separators replaced by '-', so `kde/org.kde.kate.desktop`
/// under any root maps to the same id and a higher-precedence root can
/// mask a lower one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DescriptorId(String);

impl DescriptorId {
    pub fn from_relative_path(rel: &Path) -> Self {
        let joined = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("-");
        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One launchable application, as presented in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,      // Display name, locale-resolved
    pub exec: String,      // Command line, placeholder tokens stripped
    pub icon: String,      // Icon name or absolute path
    pub comment: String,   // Description, locale-resolved
    pub mime_type: String, // Secondary dedup discriminator
    pub no_display: bool,  // Present but hidden from the default view
}

impl CatalogEntry {
    /// An entry without a name or a command cannot be shown or launched.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.exec.is_empty()
    }

    /// Key for value-level deduplication. Comment is deliberately not
    /// part of the key: two files advertising the same name/exec/mime
    /// collapse to the first one seen.
    pub fn dedup_key(&self) -> (String, String, String) {
        (
            self.name.clone(),
            self.exec.clone(),
            self.mime_type.clone(),
        )
    }
}
