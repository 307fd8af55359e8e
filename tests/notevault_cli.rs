use std::process::{Command, Output};
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn notevault(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_notevault"))
        .arg("--data-directory")
        .arg(dir.child("storage").path())
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn register_and_login() {
    let dir = TempDir::new().unwrap();

    let output = notevault(&dir, &["register", "-u", "alice", "-p", "pw1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "User registered successfully.\n");
    dir.child("storage/accounts.toml")
        .assert(predicate::str::contains("alice"));

    let output = notevault(&dir, &["register", "-u", "alice", "-p", "pw2"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Username already exists.\n");

    let output = notevault(&dir, &["login", "-u", "alice", "-p", "pw1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Logged in as alice (user).\n");

    let output = notevault(&dir, &["login", "-u", "alice", "-p", "nope"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn notes_lifecycle() {
    let dir = TempDir::new().unwrap();
    notevault(&dir, &["register", "-u", "bob", "-p", "pw"]);
    let notes = |args: &[&str]| {
        let mut full = vec!["notes", "-u", "bob", "-p", "pw"];
        full.extend_from_slice(args);
        notevault(&dir, &full)
    };

    let output = notes(&["edit", "0", "-t", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "User has no notes.\n");

    assert!(notes(&["add", "-t", "first", "-c", "body"]).status.success());
    assert!(notes(&["add", "-t", "second"]).status.success());

    let output = notes(&["delete", "-1"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Invalid note index.\n");

    assert_eq!(stdout(&notes(&["edit", "1", "-t", "2nd"])), "Note updated.\n");
    assert_eq!(stdout(&notes(&["list"])), "[0] first\n    body\n[1] 2nd\n");
    assert_eq!(stdout(&notes(&["delete", "0"])), "Note deleted.\n");
    assert_eq!(stdout(&notes(&["list"])), "[0] 2nd\n");
}

#[test]
fn notes_require_login() {
    let dir = TempDir::new().unwrap();
    notevault(&dir, &["register", "-u", "bob", "-p", "pw"]);

    let output = notevault(&dir, &["notes", "-u", "bob", "-p", "bad", "add", "-t", "x"]);
    assert_eq!(output.status.code(), Some(1));
    dir.child("storage/notes.toml")
        .assert(predicate::str::contains("bob").not());
}

#[test]
fn admin_views() {
    let dir = TempDir::new().unwrap();
    notevault(&dir, &["register", "-u", "alice", "-p", "pw1"]);
    notevault(&dir, &["notes", "-u", "alice", "-p", "pw1", "add", "-t", "hello"]);

    let output = notevault(&dir, &["admin", "-p", "wrong", "accounts"]);
    assert_eq!(output.status.code(), Some(1));

    let output = notevault(&dir, &["admin", "-p", "admin123", "accounts"]);
    assert!(output.status.success());
    let accounts = stdout(&output);
    assert!(
        predicate::str::is_match(r"^alice\tuser\t[0-9a-f]{64}\tpw1\n$")
            .unwrap()
            .eval(&accounts),
        "{accounts}",
    );

    let output = notevault(&dir, &["admin", "-p", "admin123", "notes", "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["alice"][0]["title"], "hello");

    let output = notevault(
        &dir,
        &["admin", "-p", "admin123", "reset-password", "-u", "alice", "-n", "pw9"],
    );
    assert_eq!(stdout(&output), "Password for 'alice' has been updated.\n");
    assert!(notevault(&dir, &["login", "-u", "alice", "-p", "pw9"]).status.success());

    let output = notevault(
        &dir,
        &["admin", "-p", "admin123", "reset-password", "-u", "admin", "-n", "x"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Admin password cannot be changed here.\n");
}

#[test]
fn missing_config_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let output = notevault(
        &dir,
        &["--config-file", "/nonexistent/notevault.toml", "login", "-u", "a", "-p", "b"],
    );
    assert_eq!(output.status.code(), Some(1));
    dir.child("storage").assert(predicate::path::missing());
}

#[test]
fn config_file_sets_admin() {
    let dir = TempDir::new().unwrap();
    let config = dir.child("notevault.toml");
    config.write_str("admin_username = \"root\"\nadmin_password = \"toor\"\n").unwrap();
    let config = config.path().to_str().unwrap();

    let output = notevault(&dir, &["--config-file", config, "login", "-u", "root", "-p", "toor"]);
    assert_eq!(stdout(&output), "Logged in as root (admin).\n");
    assert!(notevault(&dir, &["--config-file", config, "admin", "-p", "toor", "notes"])
        .status
        .success());
}
