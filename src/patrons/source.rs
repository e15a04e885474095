use crate::foundation::error::{CreditsError, CreditsResult};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Names from user-supplied text: one per line, trimmed, blank lines dropped.
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Read a name list file (see [`parse_name_list`]).
pub fn read_name_list(path: &Path) -> CreditsResult<Vec<String>> {
    use anyhow::Context as _;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read patron list '{}'", path.display()))?;
    Ok(parse_name_list(&text))
}

/// Alphabetical order ignoring case; names equal under lowercasing keep their input order.
pub fn sort_case_insensitive(names: &mut [String]) {
    names.sort_by_cached_key(|n| n.to_lowercase());
}

/// Last fetched patron list, stored as `{ "timestamp": ..., "patrons": [...] }`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PatronCache {
    /// Unix seconds at which the list was cached.
    pub timestamp: String,
    /// Cached names in display order.
    pub patrons: Vec<String>,
}

impl PatronCache {
    /// Snapshot `patrons` with the current time.
    pub fn new(patrons: Vec<String>) -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            timestamp: secs.to_string(),
            patrons,
        }
    }

    /// Load a cache file.
    pub fn read(path: &Path) -> CreditsResult<Self> {
        use anyhow::Context as _;
        let file = std::fs::File::open(path)
            .with_context(|| format!("open patron cache '{}'", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| CreditsError::serde(format!("patron cache '{}': {e}", path.display())))
    }

    /// Write the cache as pretty JSON, creating parent directories.
    pub fn write(&self, path: &Path) -> CreditsResult<()> {
        use anyhow::Context as _;
        crate::encode::ffmpeg::ensure_parent_dir(path)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("create patron cache '{}'", path.display()))?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)
            .map_err(|e| CreditsError::serde(format!("patron cache '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), count = self.patrons.len(), "patron cache written");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/patrons/source.rs"]
mod tests;
