use super::*;

fn paths(favorites: &[Favorite]) -> Vec<&str> {
    favorites.iter().map(|f| f.path.as_str()).collect()
}

#[test]
fn load_prepends_home_and_root() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("favorites");
    std::fs::write(&file, "/tmp\n/etc").unwrap();

    let favorites = load(&file, "/home/ann/").unwrap();
    assert_eq!(paths(&favorites), vec!["/home/ann/", "/", "/tmp", "/etc"]);
    assert!(favorites[0].active);
    assert!(favorites[1..].iter().all(|f| !f.active));
    assert_eq!(favorites[0].name, "home");
    assert_eq!(favorites[2].name, "tmp");
}

#[test]
fn missing_file_gives_only_built_ins() {
    let dir = tempfile::tempdir().unwrap();
    let favorites = load(&dir.path().join("none"), "/h/").unwrap();
    assert_eq!(paths(&favorites), vec!["/h/", "/"]);
}

#[test]
fn lines_that_are_not_utf8_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("favorites");
    std::fs::write(&file, b"/tmp\n/tmp/caf\xe9\r\n\n/etc\n").unwrap();

    let favorites = load(&file, "/h/").unwrap();
    assert_eq!(
        paths(&favorites),
        vec!["/h/", "/", "/tmp", "/tmp/caf\u{FFFD}", "/etc"]
    );
}

#[test]
fn unreadable_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory in place of the file cannot be read.
    let err = load(dir.path(), "/h/").unwrap_err();
    assert!(matches!(err, FavoritesError::Read { .. }));
}

#[test]
fn save_then_load_keeps_order_and_skips_built_ins() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("nested").join("favorites");
    let mut favorites = built_in("/h/");
    favorites.push(Favorite::new("/var/log/"));
    favorites.push(Favorite::new("/opt"));

    save(&file, &favorites).unwrap();
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "/var/log/\n/opt\n");

    let loaded = load(&file, "/h/").unwrap();
    assert_eq!(paths(&loaded), paths(&favorites));
    assert_eq!(loaded[2].name, "log");
}

#[test]
fn trailing_slash_does_not_matter_for_lookup() {
    let mut favorites = built_in("/h/");
    favorites.push(Favorite::new("/tmp"));
    assert_eq!(find(&favorites, "/tmp/"), Some(2));
    assert_eq!(find(&favorites, "/h"), Some(0));
    assert_eq!(find(&favorites, "/"), Some(1));
    assert_eq!(find(&favorites, "/usr/"), None);
}
