//! Tests for whole-secret and single-key edits.

use crate::support::*;
use kubectl_edit_secret::core::secret::SecretExt;

/// Rewrites the document through sed; replaces the file like many editors do.
fn sed_editor(t: &Test, expr: &str) -> String {
    t.editor(
        "sed-editor",
        &format!("sed '{expr}' \"$1\" > \"$1.new\" && mv \"$1.new\" \"$1\""),
    )
}

#[test]
fn test_edit_whole_secret() {
    let t = Test::with_secret(&[("a", "1"), ("b", "2")]);
    let editor = t.editor("rewrite", "printf 'a: \"1\"\\nc: \"3\"\\n' > \"$1\"");

    let output = t.edit(&["db", "-n", "prod"], &editor);

    assert_success(&output);
    assert_stdout_contains(&output, "secret/db edited");

    let replaced = t.replaced().expect("secret was not replaced");
    assert_eq!(replaced.keys(), vec!["a", "c"]);
    assert_eq!(t.replaced_value("a").as_deref(), Some("1"));
    assert_eq!(t.replaced_value("c").as_deref(), Some("3"));
    assert!(replaced.string_data.is_none());
}

#[test]
fn test_replaced_object_is_base64_encoded() {
    let t = Test::with_secret(&[("password", "hunter2")]);
    let editor = sed_editor(&t, "s/hunter2/s3cret/");

    let output = t.edit(&["db", "-n", "prod"], &editor);
    assert_success(&output);

    let raw = std::fs::read_to_string(t.state().join("replaced.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["data"]["password"], "czNjcmV0");
    assert_eq!(json["metadata"]["resourceVersion"], "100");
    assert!(json.get("stringData").is_none());
}

#[test]
fn test_edit_single_key() {
    let t = Test::with_secret(&[("password", "hunter2"), ("token", "t0k")]);
    let editor = sed_editor(&t, "s/hunter2/correct-horse/");

    let output = t.edit(&["db", "password", "-n", "prod"], &editor);

    assert_success(&output);
    assert_stdout_contains(&output, "secret/db edited");
    assert_eq!(t.replaced_value("password").as_deref(), Some("correct-horse"));
    assert_eq!(t.replaced_value("token").as_deref(), Some("t0k"));
}

#[test]
fn test_single_key_document_hides_other_keys() {
    let t = Test::with_secret(&[("password", "hunter2"), ("token", "t0k")]);
    let seen = t.state().join("seen.yaml");
    let editor = t.editor("peek", &format!("cp \"$1\" {}", seen.display()));

    let output = t.edit(&["db", "password", "-n", "prod"], &editor);
    assert_success(&output);

    let document = std::fs::read_to_string(seen).unwrap();
    assert!(document.contains("# Key: password"));
    assert!(document.contains("password: hunter2"));
    assert!(!document.contains("t0k"));
}

#[test]
fn test_saving_unchanged_cancels() {
    let t = Test::with_secret(&[("a", "1")]);
    let editor = t.editor("noop", "true");

    let output = t.edit(&["db", "-n", "prod"], &editor);

    assert_success(&output);
    assert_stdout_contains(&output, "Edit cancelled, no changes made.");
    assert!(t.replaced().is_none());
}

#[test]
fn test_comment_only_change_is_not_applied() {
    let t = Test::with_secret(&[("a", "1")]);
    let editor = t.editor("annotate", "echo '# looked at this' >> \"$1\"");

    let output = t.edit(&["db", "-n", "prod"], &editor);

    assert_success(&output);
    assert_stdout_contains(&output, "No changes detected.");
    assert!(t.replaced().is_none());
}

#[test]
fn test_string_data_is_folded_into_data() {
    let t = Test::new();
    t.store(
        r#"{"apiVersion":"v1","kind":"Secret","metadata":{"name":"db","namespace":"prod","resourceVersion":"7"},
           "data":{"user":"YWRtaW4="},"stringData":{"host":"localhost"}}"#,
    );
    let editor = sed_editor(&t, "s/admin/root/");

    let output = t.edit(&["db", "-n", "prod"], &editor);
    assert_success(&output);

    let replaced = t.replaced().unwrap();
    assert!(replaced.string_data.is_none());
    assert_eq!(t.replaced_value("user").as_deref(), Some("root"));
    assert_eq!(t.replaced_value("host").as_deref(), Some("localhost"));
}

#[test]
fn test_namespace_from_context() {
    let t = Test::new();
    t.store(&secret_json("team-a", "db", &[("a", "1")]));
    t.set_context_namespace("team-a");
    let editor = t.editor("noop", "true");

    let output = t.edit(&["db"], &editor);

    assert_success(&output);
    assert!(t.kubectl_calls().contains("config view"));
    assert!(t.kubectl_calls().contains("get secret db --namespace team-a"));
}

#[test]
fn test_namespace_falls_back_to_default() {
    let t = Test::with_secret(&[("a", "1")]);
    let editor = t.editor("noop", "true");

    let output = t.edit(&["db"], &editor);

    assert_success(&output);
    assert!(t.kubectl_calls().contains("--namespace default"));
}

#[test]
fn test_cluster_flags_are_forwarded() {
    let t = Test::with_secret(&[("a", "1")]);
    let editor = t.editor("noop", "true");

    let output = t.edit(
        &["db", "-n", "prod", "--context", "staging", "--as", "admin"],
        &editor,
    );

    assert_success(&output);
    assert!(t
        .kubectl_calls()
        .contains("--context staging --as admin get secret db"));
}

#[test]
fn test_temp_file_is_removed() {
    let t = Test::with_secret(&[("a", "1")]);
    let record = t.state().join("path");
    let editor = t.editor(
        "record",
        &format!("printf '%s' \"$1\" > {}; echo 'a: \"2\"' > \"$1\"", record.display()),
    );

    let output = t.edit(&["db", "-n", "prod"], &editor);
    assert_success(&output);

    let path = std::fs::read_to_string(record).unwrap();
    assert!(path.contains("kubectl-edit-secret-db-"));
    assert!(path.ends_with(".yaml"));
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::with_secret(&[("a", "1")]);
    let editor = t.editor("noop", "true");

    let quiet = t.edit(&["db", "-n", "prod"], &editor);
    assert_success(&quiet);
    assert!(!stderr(&quiet).contains("DEBUG"));

    let verbose = t.edit(&["db", "-n", "prod", "--verbose"], &editor);
    assert_success(&verbose);
    assert_stderr_contains(&verbose, "DEBUG");
    assert_stdout_contains(&verbose, "Edit cancelled");
}
