use std::io;
use std::path::Path;

/// Entry names of `dir`, sorted, with directories marked by a trailing `/`.
///
/// Symlinks are followed to decide whether an entry is a directory; a dangling link is listed
/// as a plain name.
pub fn list_dir(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = match std::fs::metadata(entry.path()) {
            Ok(meta) => meta.is_dir(),
            Err(_) => entry.file_type().map(|t| t.is_dir()).unwrap_or(false),
        };
        if is_dir {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

pub fn is_dir_name(name: &str) -> bool {
    name.ends_with('/')
}

#[cfg(test)]
#[path = "../../tests/unit/files/listing.rs"]
mod tests;
