// End-to-end runs of the binary against a registry served from the local
// filesystem. stdin is closed, so no interactive answer is ever available.

mod common;

use common::Project;
use pretty_assertions::assert_eq;

const REGISTRY_JSON: &str = r#"[
    {"name": "useX", "source": "hooks/useX.ts"},
    {"name": "useDebounce", "source": "hooks/useDebounce.ts"},
    {"name": "useBroken", "source": "hooks/missing.ts"}
]"#;

fn project() -> Project {
    let p = Project::new();
    p.registry_json(REGISTRY_JSON)
        .registry_hook("useX.ts", "export function useX() {}\n")
        .registry_hook("useDebounce.ts", "export function useDebounce() {}\n");
    p
}

#[test]
fn init_writes_config_once() {
    let p = project();
    let (stdout, _, code) = p.run(&["init", "--destination", "lib/hooks"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Configuration saved to"), "{stdout}");
    assert_eq!(p.read("hooks.json"), "{\n  \"destination\": \"lib/hooks\"\n}\n");

    let (stdout, _, code) = p.run(&["init", "--destination", "elsewhere"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("already exists. No changes made."), "{stdout}");
    assert_eq!(p.read("hooks.json"), "{\n  \"destination\": \"lib/hooks\"\n}\n");
}

#[test]
fn init_without_terminal_uses_default_destination() {
    let p = project();
    let (_, _, code) = p.run(&["init"]);
    assert_eq!(code, 0);
    assert_eq!(p.read("hooks.json"), "{\n  \"destination\": \"src/hook/\"\n}\n");
}

#[test]
fn add_creates_default_config_and_installs() {
    let p = project();
    let (stdout, stderr, code) = p.run(&["add", "useX"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(p.read("hooks.json"), "{\n  \"destination\": \"src/hook/\"\n}\n");
    assert_eq!(p.read("src/hook/useX.ts"), "export function useX() {}\n");
    assert!(stdout.contains("Installed useX"), "{stdout}");
    assert!(stdout.contains("/src/hooks/useX.ts"), "{stdout}");
}

#[test]
fn add_unknown_name_fails_and_writes_nothing() {
    let p = project();
    let (_, stderr, code) = p.run(&["add", "useX", "useY"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not found in the registry: useY"), "{stderr}");
    assert!(!p.root().join("src/hook").exists());
}

#[test]
fn add_keeps_existing_file_without_terminal() {
    let p = project();
    p.write("src/hook/useX.ts", "// mine\n");
    let (stdout, _, code) = p.run(&["add", "useX"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Skipped useX"), "{stdout}");
    assert_eq!(p.read("src/hook/useX.ts"), "// mine\n");
}

#[test]
fn add_yes_overwrites() {
    let p = project();
    p.write("src/hook/useX.ts", "// mine\n");
    let (stdout, _, code) = p.run(&["add", "useX", "--yes"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Overwrote useX"), "{stdout}");
    assert_eq!(p.read("src/hook/useX.ts"), "export function useX() {}\n");
}

#[test]
fn add_reports_failures_but_installs_the_rest() {
    let p = project();
    let (stdout, stderr, code) = p.run(&["add", "useX", "useBroken", "useDebounce"]);
    assert_ne!(code, 0);
    assert!(stdout.contains("Failed useBroken"), "{stdout}");
    assert!(stdout.contains("#readme"), "{stdout}");
    assert!(stderr.contains("1 hook(s) failed to install"), "{stderr}");
    assert!(p.root().join("src/hook/useX.ts").exists());
    assert!(p.root().join("src/hook/useDebounce.ts").exists());
    assert!(!p.root().join("src/hook/useBroken.ts").exists());
}

#[test]
fn list_marks_installed_hooks_in_name_order() {
    let p = project();
    p.write("hooks.json", r#"{"destination": "hooks"}"#);
    p.write("hooks/useX.ts", "x");
    let (stdout, _, code) = p.run(&["list"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["✘ useBroken", "✘ useDebounce", "✔ useX"]);

    let (stdout, _, _) = p.run(&["list", "--installed"]);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), ["✔ useX"]);
}

#[test]
fn corrupt_config_is_fatal() {
    let p = project();
    p.write("hooks.json", "not json");
    let (_, stderr, code) = p.run(&["list"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("is corrupt"), "{stderr}");
    assert_eq!(p.read("hooks.json"), "not json");
}

#[test]
fn config_flag_moves_the_project_root() {
    let p = project();
    std::fs::create_dir_all(p.root().join("app")).unwrap();
    let (_, stderr, code) = p.run(&["--config", "app/hooks.json", "add", "useDebounce"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(p.root().join("app/hooks.json").exists());
    assert!(p.root().join("app/src/hook/useDebounce.ts").exists());
}

#[test]
fn init_rejects_blank_destination_as_invalid_input() {
    let p = project();
    let (_, stderr, code) = p.run(&["init", "--destination", "  "]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid configuration: destination must not be empty"), "{stderr}");
    assert!(!stderr.contains("corrupt"), "{stderr}");
    assert!(!p.root().join("hooks.json").exists());
}

#[test]
fn tuple_shaped_config_is_rejected() {
    let p = project();
    p.write("hooks.json", r#"["/etc", "https://evil.test/r.json"]"#);
    let (_, stderr, code) = p.run(&["add", "useX"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("is corrupt: expected a JSON object"), "{stderr}");
}
