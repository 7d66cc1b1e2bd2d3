//! Locating `config.toml`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

const APP_DIR: &str = "cinelist";
const FILE_NAME: &str = "config.toml";

/// Resolves the config file path from `--dir` and the environment.
///
/// Order: `{dir}/config.toml`, `$XDG_CONFIG_HOME/cinelist/config.toml`,
/// then `$HOME/.config/cinelist/config.toml`.
///
/// # Errors
///
/// Returns an error if neither `--dir`, `XDG_CONFIG_HOME` nor `HOME` is usable.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    config_file(
        dir.map(PathBuf::as_path),
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

/// Environment-free core of [`resolve_config_path`]. Empty or relative
/// `XDG_CONFIG_HOME` values are ignored, as the XDG base directory rules
/// require.
fn config_file(
    dir: Option<&Path>,
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.join(FILE_NAME));
    }

    if let Some(xdg) = xdg_config_home
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
    {
        return Ok(xdg.join(APP_DIR).join(FILE_NAME));
    }

    match home.filter(|h| !h.is_empty()) {
        Some(home) => Ok(PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(FILE_NAME)),
        None => bail!("cannot locate config.toml: pass --dir or set HOME"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_dir_wins() {
        // Arrange
        let dir = Path::new("/srv/cinelist");

        // Act
        let path = config_file(
            Some(dir),
            Some(OsString::from("/xdg")),
            Some(OsString::from("/home/u")),
        )
        .unwrap();

        // Assert
        assert_eq!(path, Path::new("/srv/cinelist/config.toml"));
    }

    #[test]
    fn test_xdg_config_home() {
        // Arrange & Act
        let path = config_file(
            None,
            Some(OsString::from("/xdg")),
            Some(OsString::from("/home/u")),
        )
        .unwrap();

        // Assert
        assert_eq!(path, Path::new("/xdg/cinelist/config.toml"));
    }

    #[test]
    fn test_relative_xdg_falls_back_to_home() {
        // Arrange & Act
        let path = config_file(
            None,
            Some(OsString::from("relative/dir")),
            Some(OsString::from("/home/u")),
        )
        .unwrap();

        // Assert
        assert_eq!(path, Path::new("/home/u/.config/cinelist/config.toml"));
    }

    #[test]
    fn test_no_location_is_an_error() {
        // Arrange & Act
        let result = config_file(None, Some(OsString::new()), None);

        // Assert
        assert!(result.is_err());
    }
}
