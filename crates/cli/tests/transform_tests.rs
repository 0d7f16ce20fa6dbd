//! Integration tests for `dotenv-import transform`.
//!
//! Responsibilities:
//! - Prove that imports are inlined and removed in printed output.
//! - Prove that policy and undefined-reference failures exit with their codes.
//! - Prove that `--out-dir` writes files instead of printing.

mod common;

use common::{dotenv_import_cmd, write};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_transform_prints_inlined_source() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".env", "FOO=bar\n");
    write(
        temp_dir.path(),
        "app.js",
        "import { FOO } from '@env';\nconsole.log(FOO);\n",
    );

    dotenv_import_cmd(temp_dir.path())
        .args(["transform", "app.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"console.log("bar");"#))
        .stdout(predicate::str::contains("@env").not());
}

#[test]
fn test_transform_uses_mode_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".env", "FOO=bar\n");
    write(temp_dir.path(), ".env.production", "FOO=prod\n");
    write(
        temp_dir.path(),
        "app.js",
        "import { FOO } from '@env';\nconsole.log(FOO);\n",
    );

    dotenv_import_cmd(temp_dir.path())
        .env("APP_ENV", "production")
        .args(["transform", "app.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"console.log("prod");"#));
}

#[test]
fn test_transform_policy_violation_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".env", "FOO=1\nBAR=2\n");
    write(
        temp_dir.path(),
        "app.js",
        "import { BAR } from '@env';\nconsole.log(BAR);\n",
    );

    dotenv_import_cmd(temp_dir.path())
        .args(["--allow", "FOO", "transform", "app.js"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "app.js:1:10: \"BAR\" is not allowed or is blocked.",
        ));
}

#[test]
fn test_transform_strict_undefined_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".env", "FOO=1\n");
    write(
        temp_dir.path(),
        "app.js",
        "import { _DOTENV_IMPORT_NEVER_SET } from '@env';\n",
    );

    dotenv_import_cmd(temp_dir.path())
        .args(["--strict", "transform", "app.js"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "\"_DOTENV_IMPORT_NEVER_SET\" is not defined in .env",
        ));
}

#[test]
fn test_transform_undefined_is_inlined_by_default() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "app.js",
        "import { _DOTENV_IMPORT_NEVER_SET } from '@env';\nuse(_DOTENV_IMPORT_NEVER_SET);\n",
    );

    dotenv_import_cmd(temp_dir.path())
        .args(["transform", "app.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("use(void 0);"));
}

#[test]
fn test_transform_syntax_error_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "broken.js", "import { FOO from '@env';\n");

    dotenv_import_cmd(temp_dir.path())
        .args(["transform", "broken.js"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("syntax error"));
}

#[test]
fn test_transform_missing_file_is_general_error() {
    let temp_dir = TempDir::new().unwrap();

    dotenv_import_cmd(temp_dir.path())
        .args(["transform", "nope.js"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read nope.js"));
}

#[test]
fn test_transform_out_dir_writes_files() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".env", "A=1\nB=2\n");
    write(temp_dir.path(), "a.js", "import { A } from '@env';\nuse(A);\n");
    write(temp_dir.path(), "b.js", "import { B } from '@env';\nuse(B);\n");

    dotenv_import_cmd(temp_dir.path())
        .args(["transform", "a.js", "b.js", "--out-dir", "build"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let a = fs::read_to_string(temp_dir.path().join("build/a.js")).unwrap();
    let b = fs::read_to_string(temp_dir.path().join("build/b.js")).unwrap();
    assert_eq!(a.trim(), r#"use("1");"#);
    assert_eq!(b.trim(), r#"use("2");"#);
}

#[test]
fn test_transform_reads_options_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "settings.env", "FOO=from-settings\n");
    write(
        temp_dir.path(),
        "options.json",
        r#"{"moduleName": "react-native-dotenv", "path": "settings.env"}"#,
    );
    write(
        temp_dir.path(),
        "app.js",
        "import { FOO } from 'react-native-dotenv';\nuse(FOO);\n",
    );

    dotenv_import_cmd(temp_dir.path())
        .args(["--config", "options.json", "transform", "app.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"use("from-settings");"#));
}

#[test]
fn test_invalid_options_file_is_general_error() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "options.json", r#"{"whitelist": []}"#);

    dotenv_import_cmd(temp_dir.path())
        .args(["--config", "options.json", "deps"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load options from options.json"));
}

#[test]
fn test_transform_out_dir_keeps_same_named_files_apart() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("src/a")).unwrap();
    fs::create_dir_all(temp_dir.path().join("src/b")).unwrap();
    write(temp_dir.path(), ".env", "A=1\nB=2\n");
    write(temp_dir.path(), "src/a/index.js", "import { A } from '@env';\nuse(A);\n");
    write(temp_dir.path(), "src/b/index.js", "import { B } from '@env';\nuse(B);\n");

    dotenv_import_cmd(temp_dir.path())
        .args([
            "transform",
            "src/a/index.js",
            "src/b/index.js",
            "--out-dir",
            "build",
        ])
        .assert()
        .success();

    let a = fs::read_to_string(temp_dir.path().join("build/src/a/index.js")).unwrap();
    let b = fs::read_to_string(temp_dir.path().join("build/src/b/index.js")).unwrap();
    assert_eq!(a.trim(), r#"use("1");"#);
    assert_eq!(b.trim(), r#"use("2");"#);
}

#[test]
fn test_transform_out_dir_rejects_clashing_outputs() {
    let temp_dir = TempDir::new().unwrap();
    let work = temp_dir.path().join("work");
    fs::create_dir_all(temp_dir.path().join("one")).unwrap();
    fs::create_dir_all(temp_dir.path().join("two")).unwrap();
    fs::create_dir_all(&work).unwrap();
    write(temp_dir.path(), "one/index.js", "use(1);\n");
    write(temp_dir.path(), "two/index.js", "use(2);\n");

    dotenv_import_cmd(&work)
        .args([
            "transform",
            "../one/index.js",
            "../two/index.js",
            "--out-dir",
            "build",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("would both be written to"));

    assert!(!work.join("build").exists());
}

#[test]
fn test_transform_namespace_import_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".env", "FOO=1\n");
    write(
        temp_dir.path(),
        "app.js",
        "import * as env from '@env';\nconsole.log(env.FOO);\n",
    );

    dotenv_import_cmd(temp_dir.path())
        .args(["transform", "app.js"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "app.js:1:8: only named imports can be read from \"@env\"",
        ));
}
