//! Loading and storing pedal records and model descriptions.
//!
//! Every failure is tied to the file it happened on so the batch driver can
//! report it and move on to the next record.

use std::fs;
use std::path::{Path, PathBuf};

use stompboard_spec::{is_valid_slug, ModelError, PedalModel, PedalSpec};
use thiserror::Error;
use walkdir::WalkDir;

/// Recognized record extension.
pub const RECORD_EXTENSION: &str = "json";

/// A failure on a single record file.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record could not be read.
    #[error("failed to read {path}: {source}")]
    RecordReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record is not valid JSON of the expected shape.
    #[error("failed to parse {path}: {source}")]
    RecordParseFailure {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The record parsed but no model could be generated from it.
    #[error("failed to generate model from {path}: {source}")]
    Model {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    /// The slug cannot be used as a file name.
    #[error("invalid slug '{slug}' in {path}")]
    InvalidSlug { path: PathBuf, slug: String },

    /// The model could not be written.
    #[error("failed to write {path}: {source}")]
    RecordWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RecordError {
    /// Stable code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            RecordError::RecordReadFailure { .. } => "RECORD_READ",
            RecordError::RecordParseFailure { .. } => "RECORD_PARSE",
            RecordError::Model { source, .. } => source.code(),
            RecordError::InvalidSlug { .. } => "RECORD_SLUG",
            RecordError::RecordWriteFailure { .. } => "RECORD_WRITE",
        }
    }

    /// The file the failure happened on.
    pub fn path(&self) -> &Path {
        match self {
            RecordError::RecordReadFailure { path, .. }
            | RecordError::RecordParseFailure { path, .. }
            | RecordError::Model { path, .. }
            | RecordError::InvalidSlug { path, .. }
            | RecordError::RecordWriteFailure { path, .. } => path,
        }
    }
}

/// Lists the `*.json` files directly inside `dir`, sorted by path.
///
/// Subdirectories are not searched. Symlinks are followed, so a linked record
/// counts as a record. A `*.json` entry that cannot be inspected (a dangling
/// link, say) is still listed and fails when it is read, so the batch run
/// reports it.
///
/// # Errors
/// Fails if `dir` itself cannot be read.
pub fn list_records(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).min_depth(1).max_depth(1) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_record_path(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(err) if err.depth() > 0 => {
                if let Some(path) = err.path().filter(|p| is_record_path(p)) {
                    files.push(path.to_path_buf());
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
    files.sort();
    Ok(files)
}

fn is_record_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == RECORD_EXTENSION)
}

fn read(path: &Path) -> Result<String, RecordError> {
    fs::read_to_string(path).map_err(|source| RecordError::RecordReadFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a pedal record.
pub fn load_pedal_spec(path: &Path) -> Result<PedalSpec, RecordError> {
    let content = read(path)?;
    PedalSpec::from_json(&content).map_err(|source| RecordError::RecordParseFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a model description.
///
/// A component whose primitive kind is outside box, cylinder, and plane fails
/// as [`RecordError::Model`] with `UnsupportedGeometryKind`.
pub fn load_model(path: &Path) -> Result<PedalModel, RecordError> {
    let content = read(path)?;
    let parse_failure = |source| RecordError::RecordParseFailure {
        path: path.to_path_buf(),
        source,
    };

    let value: serde_json::Value = serde_json::from_str(&content).map_err(parse_failure)?;
    PedalModel::check_component_kinds(&value).map_err(|source| RecordError::Model {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_value(value).map_err(parse_failure)
}

/// Path of the model file for `slug` inside `models_dir`.
pub fn model_path(models_dir: &Path, slug: &str) -> PathBuf {
    models_dir.join(format!("{}.{}", slug, RECORD_EXTENSION))
}

/// Writes `model` to `<models_dir>/<slug>.json`, replacing any previous file.
///
/// `source` is the record the model came from, used in error reports.
pub fn write_model(
    models_dir: &Path,
    model: &PedalModel,
    source: &Path,
) -> Result<PathBuf, RecordError> {
    if !is_valid_slug(&model.slug) {
        return Err(RecordError::InvalidSlug {
            path: source.to_path_buf(),
            slug: model.slug.clone(),
        });
    }

    let out_path = model_path(models_dir, &model.slug);
    let write_failure = |source: std::io::Error| RecordError::RecordWriteFailure {
        path: out_path.clone(),
        source,
    };

    let json = model
        .to_json_pretty()
        .map_err(|e| write_failure(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    fs::write(&out_path, json).map_err(write_failure)?;
    Ok(out_path)
}

/// Writes a pedal record to `<pedals_dir>/<slug>.json`.
pub fn write_pedal_spec(pedals_dir: &Path, spec: &PedalSpec) -> Result<PathBuf, RecordError> {
    let out_path = model_path(pedals_dir, &spec.slug);
    if !is_valid_slug(&spec.slug) {
        return Err(RecordError::InvalidSlug {
            path: out_path,
            slug: spec.slug.clone(),
        });
    }

    let write_failure = |source: std::io::Error| RecordError::RecordWriteFailure {
        path: out_path.clone(),
        source,
    };
    let json = spec
        .to_json_pretty()
        .map_err(|e| write_failure(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    fs::write(&out_path, json).map_err(write_failure)?;
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stompboard_spec::generate_pedal_model;
    use tempfile::TempDir;

    fn spec() -> PedalSpec {
        PedalSpec::builder("Zoom", "G1X Four")
            .pedal_type("other")
            .dimensions("7.2 x 5.4 x 2.2")
            .controls(["Volume", "Param"])
            .build()
    }

    #[test]
    fn test_list_records_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.json"), "{}").unwrap();

        let files = list_records(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_list_records_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let err = list_records(&dir.path().join("not-here")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_records_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let target = elsewhere.path().join("real.json");
        fs::write(&target, "{}").unwrap();
        symlink(&target, dir.path().join("linked.json")).unwrap();
        symlink(elsewhere.path().join("gone.json"), dir.path().join("dangling.json")).unwrap();
        symlink(elsewhere.path(), dir.path().join("subdir.json")).unwrap();

        let files = list_records(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("dangling.json"), dir.path().join("linked.json")]
        );

        let err = load_pedal_spec(&files[0]).unwrap_err();
        assert_eq!(err.code(), "RECORD_READ");
    }

    #[test]
    fn test_load_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        let err = load_pedal_spec(&missing).unwrap_err();
        assert_eq!(err.code(), "RECORD_READ");
        assert_eq!(err.path(), missing.as_path());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let err = load_pedal_spec(&broken).unwrap_err();
        assert_eq!(err.code(), "RECORD_PARSE");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_write_and_reload_model() {
        let dir = TempDir::new().unwrap();
        let model = generate_pedal_model(&spec()).unwrap();
        let path = write_model(dir.path(), &model, Path::new("zoom.json")).unwrap();
        assert_eq!(path, dir.path().join("zoom-g1x-four.json"));
        assert_eq!(load_model(&path).unwrap(), model);
    }

    #[test]
    fn test_load_model_unknown_primitive() {
        let dir = TempDir::new().unwrap();
        let mut value = generate_pedal_model(&spec()).unwrap().to_value().unwrap();
        value["components"][0]["type"] = serde_json::json!("sphere");
        let path = dir.path().join("odd.json");
        fs::write(&path, value.to_string()).unwrap();

        let err = load_model(&path).unwrap_err();
        assert_eq!(err.code(), "MODEL_003");
        assert!(matches!(
            err,
            RecordError::Model {
                source: ModelError::UnsupportedGeometryKind { ref kind },
                ..
            } if kind == "sphere"
        ));

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_model(&path).unwrap_err().code(), "RECORD_PARSE");
    }

    #[test]
    fn test_write_model_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = model_path(dir.path(), "zoom-g1x-four");
        fs::write(&path, "stale").unwrap();

        let model = generate_pedal_model(&spec()).unwrap();
        write_model(dir.path(), &model, Path::new("zoom.json")).unwrap();
        assert_eq!(load_model(&path).unwrap(), model);
    }

    #[test]
    fn test_write_model_rejects_unsafe_slug() {
        let dir = TempDir::new().unwrap();
        let mut model = generate_pedal_model(&spec()).unwrap();
        model.slug = "../escape".to_string();
        let err = write_model(dir.path(), &model, Path::new("evil.json")).unwrap_err();
        assert_eq!(err.code(), "RECORD_SLUG");
        assert!(!dir.path().join("../escape.json").exists());
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let model = generate_pedal_model(&spec()).unwrap();
        let err = write_model(&dir.path().join("nope"), &model, Path::new("zoom.json"))
            .unwrap_err();
        assert_eq!(err.code(), "RECORD_WRITE");
    }

    #[test]
    fn test_write_pedal_spec() {
        let dir = TempDir::new().unwrap();
        let path = write_pedal_spec(dir.path(), &spec()).unwrap();
        assert_eq!(path, dir.path().join("zoom-g1x-four.json"));
        assert_eq!(load_pedal_spec(&path).unwrap(), spec());
    }
}
