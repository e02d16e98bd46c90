use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::StoreError;
use crate::request_config::{decode_bytes, encode, RequestConfig};

/// Writes `config` to `path`, replacing whatever was there.
pub fn save(config: &RequestConfig, path: &Path) -> Result<(), StoreError> {
    let data = encode(config).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, data).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote request configuration to {}", path.display());
    return Ok(());
}

pub fn load(path: &Path) -> Result<RequestConfig, StoreError> {
    let data = fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", data.len(), path.display());
    return decode_bytes(&data).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    });
}
