//! Download manifests: output filename to share link.
//!
//! ```toml
//! "paper.pdf" = "https://drive.google.com/file/d/1AbC/view"
//! "data.zip" = "https://drive.google.com/file/d/2DeF/view"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    files: BTreeMap<String, String>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, filename: impl Into<String>, url: impl Into<String>) {
        self.files.insert(filename.into(), url.into());
    }

    /// Entries ordered by filename.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files
            .iter()
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Parses a `NAME=URL` command line pair.
pub fn parse_link(arg: &str) -> std::result::Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, url)) if !name.is_empty() && !url.is_empty() => {
            Ok((name.to_owned(), url.to_owned()))
        }
        _ => Err(format!("expected NAME=URL, got `{arg}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn parses_toml_table() {
        let manifest = Manifest::from_toml(
            r#"
            "b.zip" = "https://drive.google.com/file/d/2/view"
            "a.pdf" = "https://drive.google.com/file/d/1/view"
            "#,
        )
        .unwrap();

        let names: Vec<&str> = manifest.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a.pdf", "b.zip"]);
        assert_eq!(manifest.len(), 2);
    }

    #[test]
    fn rejects_non_string_values() {
        let err = Manifest::from_toml("count = 3").unwrap_err();
        assert!(matches!(err, FetchError::Manifest(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("files.toml");
        std::fs::write(&path, "\"x.bin\" = \"https://drive.google.com/file/d/x\"\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(
            manifest.iter().collect::<Vec<_>>(),
            [("x.bin", "https://drive.google.com/file/d/x")]
        );
    }

    #[test]
    fn link_pairs_split_on_first_equals() {
        assert_eq!(
            parse_link("out.pdf=https://host/file/d/1/view?a=b").unwrap(),
            (
                "out.pdf".to_string(),
                "https://host/file/d/1/view?a=b".to_string()
            )
        );
        assert!(parse_link("no-separator").is_err());
        assert!(parse_link("=https://host").is_err());
    }
}
