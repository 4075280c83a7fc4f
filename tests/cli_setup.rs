//! Integration tests for `ntr setup`

mod common;

use common::{TestEnv, Tool};

const ENV_KEYS: [&str; 8] = [
    "DATABASE_URL",
    "API_PORT",
    "API_HOST",
    "VITE_API_URL",
    "VITE_APP_TITLE",
    "NODE_ENV",
    "LOG_LEVEL",
    "CORS_ORIGINS",
];

#[test]
fn setup_provisions_fresh_workspace() {
    let env = TestEnv::workspace();

    let result = env.run(&["setup"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("Setup completed successfully!"));

    let dotenv = env.read(".env");
    for key in ENV_KEYS {
        assert!(
            dotenv.lines().any(|l| l.starts_with(&format!("{}=", key))),
            "missing {} in .env",
            key
        );
    }
    assert_eq!(env.read("apps/api/.env"), dotenv);
    assert_eq!(env.read("apps/web/.env"), dotenv);

    for path in [
        ".prettierrc",
        ".prettierignore",
        ".husky/pre-commit",
        ".vscode/settings.json",
        ".vscode/extensions.json",
    ] {
        assert!(env.exists(path), "missing {}", path);
    }
}

#[test]
fn setup_merges_lint_staged_and_keeps_existing_keys() {
    let env = TestEnv::workspace();

    let result = env.run(&["setup"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let manifest: serde_json::Value = serde_json::from_str(&env.read("package.json")).unwrap();
    let keys: Vec<&str> = manifest
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec!["name", "private", "workspaces", "scripts", "lint-staged"]
    );
    assert_eq!(manifest["scripts"]["dev"], "turbo dev");
    assert!(manifest["lint-staged"].is_object());
}

#[test]
fn setup_twice_is_idempotent() {
    let env = TestEnv::workspace();
    let files = [
        ".env",
        "apps/api/.env",
        "package.json",
        ".prettierrc",
        ".husky/pre-commit",
        ".vscode/settings.json",
    ];

    assert!(env.run(&["setup"]).is_success());
    let first: Vec<String> = files.iter().map(|f| env.read(f)).collect();

    let second = env.run(&["setup"]);
    assert!(second.is_success(), "{}", second.combined_output());
    let again: Vec<String> = files.iter().map(|f| env.read(f)).collect();

    assert_eq!(first, again);
}

#[test]
fn setup_keeps_existing_root_env() {
    let env = TestEnv::workspace();
    env.write(".env", "API_PORT=9999\n");

    let result = env.run(&["setup"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.read(".env"), "API_PORT=9999\n");
    assert_eq!(env.read("apps/web/.env"), "API_PORT=9999\n");
}

#[test]
fn setup_hook_failure_is_not_fatal() {
    let env = TestEnv::with_tools(Tool::Succeeds, Tool::Fails);

    let result = env.run(&["setup"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stderr.contains("Husky setup failed, continuing"));
    assert!(!env.exists(".husky/pre-commit"));
    assert!(env.exists(".vscode/extensions.json"));
}

#[test]
fn setup_install_failure_exits_nonzero() {
    let env = TestEnv::with_tools(Tool::Fails, Tool::Succeeds);

    let result = env.run(&["setup"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert!(result.stderr.contains("Dependency installation failed"));
    assert!(!env.exists(".env"));
    assert!(!env.exists(".prettierrc"));
}

#[test]
fn setup_rejects_malformed_package_json() {
    let env = TestEnv::workspace();
    env.write("package.json", "{ not json");

    let result = env.run(&["setup"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert_eq!(env.read("package.json"), "{ not json");
}

#[test]
fn setup_json_emits_ndjson_events() {
    let env = TestEnv::workspace();

    let result = env.run(&["--json", "setup"]);

    assert!(result.is_success(), "{}", result.combined_output());
    let events = result.json_lines();
    assert!(events.iter().any(|e| e["event"] == "log"));
    let last = events.last().expect("at least one event");
    assert_eq!(last["event"], "complete");
    assert_eq!(last["command"], "setup");
    assert_eq!(last["success"], true);
}

#[test]
fn setup_respects_root_flag() {
    let env = TestEnv::workspace();
    let elsewhere = tempfile::tempdir().unwrap();
    let root = env.root.path().to_string_lossy().to_string();

    let result = env.run_from_with_env(elsewhere.path(), &["--root", &root, "setup"], &[]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(env.exists(".env"));
    assert!(!elsewhere.path().join(".env").exists());
}

#[test]
fn setup_reports_unknown_config_keys() {
    let env = TestEnv::workspace();
    env.write_config(Tool::Succeeds, Tool::Succeeds, "[package]\nprefx = \"snap\"\n");

    let result = env.run(&["setup"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key 'prefx'"));
    assert!(result.stderr.contains("Did you mean 'prefix'?"));
}

#[test]
fn setup_rejects_invalid_config() {
    let env = TestEnv::workspace();
    env.write("ntr.toml", "[tools]\ninstall = \"\"\n");

    let result = env.run(&["setup"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("Error:"));
}
