use super::*;

#[test]
fn missing_command_does_not_panic() {
    let opener = CommandOpener::new("trellis-no-such-command-for-tests");
    opener.open("/tmp");
    assert_eq!(opener.command(), "trellis-no-such-command-for-tests");
}

#[cfg(unix)]
#[test]
fn command_receives_the_path_as_its_argument() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("with space.txt");

    CommandOpener::new("touch").open(&target.to_string_lossy());

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    while !target.exists() && std::time::Instant::now() < deadline {
        std::thread::sleep(std::time::Duration::from_millis(20));
    }
    assert!(target.exists());
}
