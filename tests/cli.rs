use std::io::Write;

use assert_cmd::Command;

#[test]
fn help_exits_successfully() {
    let out = Command::cargo_bin("tapr")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--number"));
    assert!(stdout.contains("--word-list"));
    assert!(stdout.contains("english"));
    assert!(stdout.contains("code"));
}

#[test]
fn missing_word_list_file_fails_with_message() {
    let out = Command::cargo_bin("tapr")
        .unwrap()
        .args(["-w", "/no/such/dir/words.txt"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("word list file not found"));
}

#[test]
fn empty_word_list_file_fails_with_message() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let out = Command::cargo_bin("tapr")
        .unwrap()
        .args(["-w"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("contains no words"));
}

#[test]
fn zero_word_count_is_rejected() {
    Command::cargo_bin("tapr")
        .unwrap()
        .args(["-n", "0"])
        .assert()
        .failure();
}

#[test]
fn valid_list_without_tty_reports_tty_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "one two three").unwrap();
    let out = Command::cargo_bin("tapr")
        .unwrap()
        .args(["-n", "5", "-w"])
        .arg(file.path())
        .write_stdin("")
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("stdin must be a tty"));
}
