use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the user's config, legacy files and environment
fn tsuru_admin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tsuru-admin").unwrap();
    cmd.env_clear()
        .env("HOME", home.path())
        .env("TSURU_ADMIN_CONFIG", home.path().join("missing.toml"));
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    tsuru_admin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pool-add"))
        .stdout(predicate::str::contains("template-update"))
        .stdout(predicate::str::contains("quota-update"));
}

#[test]
fn not_enough_arguments_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    tsuru_admin(&home)
        .arg("pool-teams-add")
        .arg("pool1")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "not enough arguments to call pool-teams-add.",
        ))
        .stderr(predicate::str::contains("Usage: tsuru-admin pool-teams-add <pool> <teams>..."));
}

#[test]
fn unknown_command_fails() {
    let home = TempDir::new().unwrap();
    tsuru_admin(&home)
        .arg("app-create")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("app-create"));
}

#[test]
fn invalid_tri_state_value_fails() {
    let home = TempDir::new().unwrap();
    tsuru_admin(&home)
        .args(["pool-update", "pool1", "--public=maybe"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid boolean value"));
}

#[test]
fn missing_target_fails() {
    let home = TempDir::new().unwrap();
    tsuru_admin(&home)
        .arg("machine-list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: no target defined"));
}

#[test]
fn legacy_target_file_is_used() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/plans/routers")
            .header("authorization", "bearer legacy-token");
        then.status(200).body(r#"[{"name":"hipache","type":"hipache"}]"#);
    });
    std::fs::write(home.path().join(".tsuru_target"), server.base_url()).unwrap();
    std::fs::write(home.path().join(".tsuru_token"), "legacy-token\n").unwrap();

    tsuru_admin(&home)
        .arg("router-list")
        .assert()
        .success()
        .stdout("+---------+---------+\n| Name    | Type    |\n+---------+---------+\n| hipache | hipache |\n+---------+---------+\n");
    mock.assert();
}

#[test]
fn pool_add_confirms_default_override() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    let conflict = server.mock(|when, then| {
        when.method(POST)
            .path("/pools")
            .body("name=pool1&public=false&default=true&force=false");
        then.status(412).body("default pool already exists");
    });
    let forced = server.mock(|when, then| {
        when.method(POST)
            .path("/pools")
            .body("name=pool1&public=false&default=true&force=true");
        then.status(200);
    });

    tsuru_admin(&home)
        .env("TSURU_TARGET", server.base_url())
        .args(["pool-add", "pool1", "-d"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(
            "WARNING: Default pool already exist. Do you want change to pool1 pool? (y/n) \
             Pool successfully registered.\n",
        );
    conflict.assert();
    forced.assert();
}

#[test]
fn server_error_is_reported_on_stderr() {
    let home = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/iaas/templates/tpl1");
        then.status(500).body("template is in use");
    });

    tsuru_admin(&home)
        .args(["--target", &server.base_url(), "template-remove", "tpl1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("template is in use"));
}
