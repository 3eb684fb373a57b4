//! The favorites file: one absolute path per line, no header. The two built-in entries (home
//! and the root) are never written.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Entries below this index are built in and never removed or rewritten.
pub const SYNTHETIC: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub name: String,
    pub path: String,
    pub active: bool,
}

impl Favorite {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: display_name(&path),
            path,
            active: false,
        }
    }
}

#[derive(Debug)]
pub enum FavoritesError {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for FavoritesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FavoritesError::Read { path, source } => {
                write!(f, "reading favorites {}: {}", path.display(), source)
            }
            FavoritesError::Write { path, source } => {
                write!(f, "saving favorites {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FavoritesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FavoritesError::Read { source, .. } | FavoritesError::Write { source, .. } => {
                Some(source)
            }
        }
    }
}

/// Home (active) and the root.
pub fn built_in(home_dir: &str) -> Vec<Favorite> {
    vec![
        Favorite {
            name: "home".to_string(),
            path: home_dir.to_string(),
            active: true,
        },
        Favorite::new("/"),
    ]
}

/// The built-in entries followed by the file's paths in file order. A missing file adds nothing.
pub fn load(file: &Path, home_dir: &str) -> Result<Vec<Favorite>, FavoritesError> {
    let mut favorites = built_in(home_dir);
    let data = match std::fs::read(file) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(favorites),
        Err(source) => {
            return Err(FavoritesError::Read {
                path: file.to_path_buf(),
                source,
            })
        }
    };
    // Paths are bytes on disk; a line that is not UTF-8 is kept with replacement characters.
    for line in data.split(|&b| b == b'\n') {
        let line = String::from_utf8_lossy(line);
        let line = line.trim_end();
        if !line.is_empty() {
            favorites.push(Favorite::new(line));
        }
    }
    Ok(favorites)
}

/// Rewrite the file with every non-built-in path, creating its directory when needed.
pub fn save(file: &Path, favorites: &[Favorite]) -> Result<(), FavoritesError> {
    let wrap = |source| FavoritesError::Write {
        path: file.to_path_buf(),
        source,
    };
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    let mut out = io::BufWriter::new(std::fs::File::create(file).map_err(wrap)?);
    for fav in favorites.iter().skip(SYNTHETIC) {
        writeln!(out, "{}", fav.path).map_err(wrap)?;
    }
    out.flush().map_err(wrap)
}

/// Paths compare equal regardless of a trailing `/`.
pub fn same_path(a: &str, b: &str) -> bool {
    a.trim_end_matches('/') == b.trim_end_matches('/')
}

pub fn find(favorites: &[Favorite], path: &str) -> Option<usize> {
    favorites.iter().position(|f| same_path(&f.path, path))
}

fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/files/favorites.rs"]
mod tests;
