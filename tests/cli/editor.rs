//! Tests for editor selection.

use crate::support::*;

#[test]
fn test_kube_editor_wins_over_editor() {
    let t = Test::with_secret(&[("a", "1")]);
    let good = t.editor("good", "echo 'a: \"2\"' > \"$1\"");
    let bad = t.editor("bad", "exit 7");

    let output = t
        .cmd()
        .args(["db", "-n", "prod"])
        .env("KUBE_EDITOR", &good)
        .env("EDITOR", &bad)
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(t.replaced_value("a").as_deref(), Some("2"));
}

#[test]
fn test_editor_flag_wins_over_environment() {
    let t = Test::with_secret(&[("a", "1")]);
    let good = t.editor("good", "echo 'a: \"2\"' > \"$1\"");
    let bad = t.editor("bad", "exit 7");

    let output = t
        .cmd()
        .args(["db", "-n", "prod", "--editor", good.as_str()])
        .env("KUBE_EDITOR", &bad)
        .output()
        .unwrap();

    assert_success(&output);
}

#[test]
fn test_editor_arguments_come_before_path() {
    let t = Test::with_secret(&[("a", "1")]);
    let editor = t.editor(
        "waiting",
        "[ \"$1\" = \"--wait\" ] || exit 9; echo 'a: \"2\"' > \"$2\"",
    );

    let output = t.edit(&["db", "-n", "prod"], &format!("{editor} --wait"));

    assert_success(&output);
    assert_eq!(t.replaced_value("a").as_deref(), Some("2"));
}

#[test]
fn test_configured_candidates_are_probed() {
    let t = Test::with_secret(&[("a", "1")]);
    t.write_config(&["definitely-not-an-editor", "fallback-editor"]);
    t.editor("fallback-editor", "echo 'a: \"2\"' > \"$1\"");

    let path = format!("{}:/usr/bin:/bin", t.bin().display());
    let output = t
        .cmd()
        .args(["db", "-n", "prod"])
        .env("PATH", path)
        .output()
        .unwrap();

    assert_success(&output);
    assert_eq!(t.replaced_value("a").as_deref(), Some("2"));
}

#[test]
fn test_no_editor_found() {
    let t = Test::with_secret(&[("a", "1")]);
    t.write_config(&["definitely-not-an-editor"]);

    let output = t.cmd().args(["db", "-n", "prod"]).output().unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "no editor found");
    assert_stderr_contains(&output, "--editor");
    assert!(t.replaced().is_none());
}

#[test]
fn test_failing_editor_aborts() {
    let t = Test::with_secret(&[("a", "1")]);
    let editor = t.editor("crash", "echo 'a: \"2\"' > \"$1\"; exit 3");

    let output = t.edit(&["db", "-n", "prod"], &editor);

    assert_failure(&output);
    assert_stderr_contains(&output, "editor failed");
    assert!(t.replaced().is_none());
}
