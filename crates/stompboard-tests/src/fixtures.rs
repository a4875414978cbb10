//! Test fixture utilities for creating synthetic pedal directories.

use std::fs;
use std::path::{Path, PathBuf};

use stompboard_spec::PedalSpec;
use tempfile::TempDir;

/// A temporary project with a pedals directory and a models directory.
///
/// The models directory is not created; the batch driver creates it.
pub struct PedalsFixture {
    pub root: TempDir,
    pub pedals_dir: PathBuf,
    pub models_dir: PathBuf,
}

impl PedalsFixture {
    /// Create a new fixture with an empty pedals directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let pedals_dir = root.path().join("pedals");
        let models_dir = root.path().join("src").join("models").join("pedals");
        fs::create_dir_all(&pedals_dir).expect("Failed to create pedals dir");
        Self {
            root,
            pedals_dir,
            models_dir,
        }
    }

    /// Get the project root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write `spec` as `<slug>.json` in the pedals directory.
    pub fn add_record(&self, spec: &PedalSpec) -> PathBuf {
        let json = spec.to_json_pretty().expect("Failed to serialize record");
        self.add_raw(&format!("{}.json", spec.slug), &json)
    }

    /// Write arbitrary content under `file_name` in the pedals directory.
    pub fn add_raw(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.pedals_dir.join(file_name);
        fs::write(&path, content).expect("Failed to write record");
        path
    }

    /// Path of the model generated for `slug`.
    pub fn model_path(&self, slug: &str) -> PathBuf {
        self.models_dir.join(format!("{}.json", slug))
    }

    /// Names of the files in the models directory, sorted.
    pub fn model_files(&self) -> Vec<String> {
        let mut names: Vec<String> = match fs::read_dir(&self.models_dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }
}

impl Default for PedalsFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A small catalog covering each manufacturer color and each knob layout.
pub fn sample_catalog() -> Vec<PedalSpec> {
    vec![
        PedalSpec::builder("Boss", "SY-1")
            .pedal_type("other")
            .dimensions("4.77\" x 2.6\" x 1.39\"")
            .controls(["Variation", "Type", "Level"])
            .build(),
        PedalSpec::builder("Walrus Audio", "Julia V2")
            .pedal_type("chorus")
            .dimensions("2.5\" x 4.75\" x 1.5\"")
            .controls(["Rate", "Depth", "Lag", "D-P-W", "Wave"])
            .build(),
        PedalSpec::builder("Zoom", "MS-70CDR")
            .pedal_type("chorus")
            .dimensions("3.06 x 5.17 x 2.22 in")
            .controls(["Param 1", "Param 2", "Param 3", "Tap"])
            .build(),
        PedalSpec::builder("Electro-Harmonix", "Big Muff Pi")
            .pedal_type("fuzz")
            .dimensions("7\" x 5.75\" x 2.75\"")
            .controls(["Volume", "Tone", "Sustain"])
            .build(),
        PedalSpec::builder("Acme", "Blank Plate")
            .dimensions("2.6 x 4.8 x 1.5")
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_layout() {
        let fixture = PedalsFixture::new();
        assert!(fixture.pedals_dir.is_dir());
        assert!(!fixture.models_dir.exists());
        assert!(fixture.model_files().is_empty());
    }

    #[test]
    fn test_add_record_uses_slug() {
        let fixture = PedalsFixture::new();
        let spec = &sample_catalog()[0];
        let path = fixture.add_record(spec);
        assert_eq!(path, fixture.pedals_dir.join("boss-sy-1.json"));
        assert!(path.is_file());
    }

    #[test]
    fn test_sample_catalog_slugs_unique() {
        let catalog = sample_catalog();
        let mut slugs: Vec<_> = catalog.iter().map(|s| s.slug.clone()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), catalog.len());
    }
}
