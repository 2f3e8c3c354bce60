//! Reading and writing `config.toml`
//!
//! Writes go to a temporary file in the same directory which then replaces
//! the config file, so readers never see a partial file. The file being
//! replaced is first copied to `config.toml.backup`.

use crate::error::FileAction;
use crate::{Config, ConfigError, ConfigResult, CONFIG_VERSION};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Reads the config at `path`; `None` when there is no file
pub(crate) fn read(path: &Path) -> ConfigResult<Option<Config>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::io(FileAction::Read, path, e)),
    };

    if contents.trim().is_empty() {
        return Err(ConfigError::Empty {
            path: path.to_path_buf(),
        });
    }

    let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if config.version > CONFIG_VERSION {
        log::warn!(
            "{} declares version {}, this build understands {}",
            path.display(),
            config.version,
            CONFIG_VERSION
        );
    }

    Ok(Some(config))
}

/// Validates `config` and replaces the file at `path` with it
pub(crate) fn write(path: &Path, config: &Config) -> ConfigResult<()> {
    config.validate().map_err(ConfigError::Invalid)?;
    let encoded = toml::to_string_pretty(config)?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| ConfigError::io(FileAction::CreateDir, dir, e))?;

    if path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup).map_err(|e| ConfigError::io(FileAction::Backup, &backup, e))?;
        log::debug!("Previous config kept at {}", backup.display());
    }

    let mut staged =
        NamedTempFile::new_in(dir).map_err(|e| ConfigError::io(FileAction::Write, path, e))?;
    staged
        .write_all(encoded.as_bytes())
        .map_err(|e| ConfigError::io(FileAction::Write, path, e))?;
    staged
        .persist(path)
        .map_err(|e| ConfigError::io(FileAction::Write, path, e.error))?;

    log::info!("Config saved to {}", path.display());
    Ok(())
}

/// Where [`write`] keeps the file it replaced
pub(crate) fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("toml.backup")
}
