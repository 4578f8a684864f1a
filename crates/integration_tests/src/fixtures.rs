use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Reads JSON fixtures relative to a root directory.
pub struct FixtureLoader {
    fixtures_dir: PathBuf,
}

impl FixtureLoader {
    pub fn new(fixtures_dir: impl AsRef<Path>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.as_ref().to_path_buf(),
        }
    }

    /// Load a JSON fixture file
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Value> {
        let full_path = self.resolve(path.as_ref());

        let content = std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read fixture file: {:?}", full_path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON fixture: {:?}", full_path))
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path.as_ref()).exists()
    }

    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.fixtures_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_relative_and_absolute() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ok.json"), r#"{"validated": true}"#).unwrap();
        std::fs::write(dir.path().join("bad.json"), "{").unwrap();

        let loader = FixtureLoader::new(dir.path());
        assert_eq!(loader.load("ok.json").unwrap()["validated"], true);
        assert!(loader.load(dir.path().join("ok.json")).is_ok());
        assert!(loader.exists("ok.json"));
        assert!(!loader.exists("missing.json"));

        let err = loader.load("bad.json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON fixture"));
        let err = loader.load("missing.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read fixture file"));
    }
}
