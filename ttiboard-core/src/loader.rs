//! Load provider results and history series from upstream JSON.
//!
//! Results may be a JSON array, a single object, an object with a
//! `results` array, or a directory of such `.json` files (read in file-name
//! order). History is an array of points or an object with a `history`
//! array. Everything loaded is contract-checked before it is returned.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::domain::{
    validate_history, validate_results, ContractError, HistoryDataPoint, ProviderResult,
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: {source}")]
    Contract {
        path: PathBuf,
        #[source]
        source: ContractError,
    },
}

/// Load and validate provider results from a file or directory.
pub fn load_results(path: &Path) -> Result<Vec<ProviderResult>, LoadError> {
    let results = if path.is_dir() {
        load_results_from_dir(path)?
    } else {
        results_from_value(path, read_json(path)?)?
    };

    validate_results(&results).map_err(|source| LoadError::Contract {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), providers = results.len(), "loaded results");
    Ok(results)
}

/// Load and validate the history series from a file.
pub fn load_history(path: &Path) -> Result<Vec<HistoryDataPoint>, LoadError> {
    let value = read_json(path)?;
    let value = match value {
        Value::Object(mut map) if map.contains_key("history") => {
            map.remove("history").unwrap_or(Value::Null)
        }
        other => other,
    };
    let history: Vec<HistoryDataPoint> =
        serde_json::from_value(value).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate_history(&history).map_err(|source| LoadError::Contract {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), points = history.len(), "loaded history");
    Ok(history)
}

fn load_results_from_dir(dir: &Path) -> Result<Vec<ProviderResult>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();

    let mut results = Vec::new();
    for file in files {
        let mut batch = results_from_value(&file, read_json(&file)?)?;
        results.append(&mut batch);
    }
    Ok(results)
}

fn results_from_value(path: &Path, value: Value) -> Result<Vec<ProviderResult>, LoadError> {
    let parse_err = |source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    };

    match value {
        Value::Array(_) => serde_json::from_value(value).map_err(parse_err),
        Value::Object(mut map) if map.contains_key("results") => {
            let inner = map.remove("results").unwrap_or(Value::Null);
            serde_json::from_value(inner).map_err(parse_err)
        }
        other => serde_json::from_value::<ProviderResult>(other)
            .map(|r| vec![r])
            .map_err(parse_err),
    }
}

fn read_json(path: &Path) -> Result<Value, LoadError> {
    let data = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
