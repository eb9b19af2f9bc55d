//! RON file and directory loading shared by every registry.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;

/// Parse a single RON document from a string.
///
/// `origin` is only used to label errors.
pub fn parse_ron<T: DeserializeOwned>(contents: &str, origin: &str) -> Result<T, DataLoadError> {
    ron::from_str(contents).map_err(|e| DataLoadError::ParseError {
        path: origin.to_string(),
        details: e.to_string(),
    })
}

/// Read and parse a single RON file.
pub fn load_ron_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(display));
    }
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: display.clone(),
        details: e.to_string(),
    })?;
    parse_ron(&contents, &display)
}

/// Load every `*.ron` file in a directory, keyed by file stem.
///
/// Files that fail to parse are returned as errors alongside the successes so
/// the caller can log them without dropping the rest of the directory.
/// Results are sorted by key so load order does not depend on the filesystem.
pub fn load_ron_dir<T: DeserializeOwned>(
    dir: &Path,
) -> Result<(Vec<(String, T)>, Vec<DataLoadError>), DataLoadError> {
    if !dir.exists() {
        return Err(DataLoadError::FileNotFound(dir.display().to_string()));
    }

    let entries = fs::read_dir(dir).map_err(|e| DataLoadError::ReadError {
        path: dir.display().to_string(),
        details: e.to_string(),
    })?;

    let mut loaded = Vec::new();
    let mut failures = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        match load_ron_file::<T>(&path) {
            Ok(value) => loaded.push((stem.to_string(), value)),
            Err(e) => failures.push(e),
        }
    }

    loaded.sort_by(|a, b| a.0.cmp(&b.0));
    Ok((loaded, failures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        #[serde(default)]
        power: i32,
    }

    #[test]
    fn parses_ron_with_defaults() {
        let sample: Sample = parse_ron("(name: \"Dagger\")", "inline").unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "Dagger".into(),
                power: 0
            }
        );
    }

    #[test]
    fn parse_error_carries_origin() {
        let err = parse_ron::<Sample>("(nme: 3)", "items/broken.ron").unwrap_err();
        match err {
            DataLoadError::ParseError { path, .. } => assert_eq!(path, "items/broken.ron"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_directory_is_reported() {
        let err = load_ron_dir::<Sample>(Path::new("does/not/exist")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound(_)));
    }
}
