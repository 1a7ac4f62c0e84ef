//! Integration tests for the `bmd` binary.
//!
//! Every test runs the real binary against its own temp config and data
//! directories, then reads the result back through `bmd show --json`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const BMD_BIN: &str = env!("CARGO_BIN_EXE_bmd");

/// Isolated config and data directories for one test.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(BMD_BIN);
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env_remove("BMD_LOG");
        cmd
    }

    /// Runs a command that must succeed and returns its stdout.
    fn run(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().expect("failed to run bmd");
        assert!(
            output.status.success(),
            "bmd {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is utf-8")
    }

    fn view(&self) -> Value {
        serde_json::from_str(&self.run(&["show", "--json"])).expect("show --json is JSON")
    }

    fn storage_path(&self) -> std::path::PathBuf {
        self.dir
            .path()
            .join("data")
            .join("bookmark-dashboard")
            .join("storage.json")
    }
}

/// Id from the first line of `Added <kind> <id>` output.
fn added_id(stdout: &str) -> String {
    stdout
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(2))
        .expect("id in output")
        .to_string()
}

fn widget_ids(view: &Value) -> Vec<String> {
    view["page"]["widgets"]
        .as_array()
        .expect("widgets array")
        .iter()
        .map(|w| w["id"].as_str().expect("widget id").to_string())
        .collect()
}

#[test]
fn test_first_run_shows_home_dashboard() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Home Dashboard]"))
        .stdout(predicate::str::contains("Legal Research"))
        .stdout(predicate::str::contains("Litigation Tools"));
}

#[test]
fn test_first_run_seed_is_persisted() {
    let sandbox = Sandbox::new();
    let first = widget_ids(&sandbox.view());
    let second = widget_ids(&sandbox.view());
    assert_eq!(first.len(), 4);
    assert_eq!(first, second, "seed ids must survive between runs");
    assert!(sandbox.storage_path().exists());
}

#[test]
fn test_show_width_selects_tier() {
    let sandbox = Sandbox::new();
    let wide = sandbox.view();
    assert_eq!(wide["widthTier"], "wide");

    let narrow: Value =
        serde_json::from_str(&sandbox.run(&["show", "--json", "--width", "500"])).expect("json");
    assert_eq!(narrow["widthTier"], "narrow");
    for widget in narrow["page"]["widgets"].as_array().expect("widgets") {
        assert_eq!(widget["containerSpan"], 12);
    }
}

#[test]
fn test_show_reports_measured_row_spans() {
    let sandbox = Sandbox::new();
    let view = sandbox.view();
    for widget in view["page"]["widgets"].as_array().expect("widgets") {
        assert!(widget["rowSpan"].as_u64().expect("row span") > 1);
    }
}

#[test]
fn test_add_page_becomes_active_and_empty() {
    let sandbox = Sandbox::new();
    let id = added_id(&sandbox.run(&["page", "add", "Research"]));

    let view = sandbox.view();
    assert_eq!(view["tabs"].as_array().expect("tabs").len(), 3);
    assert_eq!(view["page"]["id"], id.as_str());
    assert_eq!(view["page"]["title"], "Research");
    assert_eq!(view["page"]["description"], "New page description");
    assert!(view["page"]["widgets"].as_array().expect("widgets").is_empty());

    sandbox
        .cmd()
        .args(["page", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("* {id}\tResearch")));
}

#[test]
fn test_select_and_remove_pages() {
    let sandbox = Sandbox::new();
    sandbox.run(&["page", "select", "litigation"]);
    assert_eq!(sandbox.view()["page"]["id"], "litigation");

    sandbox.run(&["page", "remove", "litigation"]);
    let view = sandbox.view();
    assert_eq!(view["page"]["id"], "home");
    assert_eq!(view["tabs"].as_array().expect("tabs").len(), 1);

    sandbox
        .cmd()
        .args(["page", "remove", "home"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot remove the last page"));
}

#[test]
fn test_unknown_page_is_an_error() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["page", "select", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown page: nope"));
}

#[test]
fn test_rename_page_and_empty_description_fallback() {
    let sandbox = Sandbox::new();
    sandbox.run(&["page", "rename", "home", "--title", "Start", "--description", ""]);
    let view = sandbox.view();
    assert_eq!(view["page"]["title"], "Start");
    assert_eq!(
        view["page"]["description"],
        "Manage your essential legal links and tools."
    );
}

#[test]
fn test_widget_and_bookmark_lifecycle() {
    let sandbox = Sandbox::new();
    let widget = added_id(&sandbox.run(&["widget", "add", "Tools"]));

    let first = added_id(&sandbox.run(&["bookmark", "add", &widget, "Docs", "docs.rs"]));
    let second = added_id(&sandbox.run(&[
        "bookmark",
        "add",
        &widget,
        "Crates",
        "https://crates.io",
        "--description",
        "Registry",
    ]));

    let find = |view: &Value| -> Value {
        view["page"]["widgets"]
            .as_array()
            .expect("widgets")
            .iter()
            .find(|w| w["id"] == widget.as_str())
            .cloned()
            .expect("new widget")
    };

    let tools = find(&sandbox.view());
    assert_eq!(tools["size"], "medium");
    assert_eq!(tools["viewStyle"], "list");
    assert_eq!(tools["bookmarks"][0]["url"], "https://docs.rs");
    assert_eq!(tools["bookmarkCount"], 2);

    sandbox.run(&["bookmark", "move", &widget, "1", "up"]);
    let tools = find(&sandbox.view());
    assert_eq!(tools["bookmarks"][0]["id"], second.as_str());
    assert_eq!(tools["bookmarks"][1]["id"], first.as_str());

    sandbox
        .cmd()
        .args(["bookmark", "move", widget.as_str(), "0", "up"])
        .assert()
        .failure();

    sandbox.run(&["bookmark", "edit", &widget, &first, "--title", "docs.rs"]);
    sandbox.run(&["bookmark", "remove", &widget, &second]);
    let tools = find(&sandbox.view());
    assert_eq!(tools["bookmarkCount"], 1);
    assert_eq!(tools["bookmarks"][0]["title"], "docs.rs");

    sandbox.run(&["widget", "remove", &widget]);
    assert!(!widget_ids(&sandbox.view()).contains(&widget));
}

#[test]
fn test_delete_widget_keeps_sibling_order() {
    let sandbox = Sandbox::new();
    let before = widget_ids(&sandbox.view());
    sandbox.run(&["widget", "remove", &before[1]]);
    let after = widget_ids(&sandbox.view());
    let expected: Vec<String> = before
        .iter()
        .filter(|id| **id != before[1])
        .cloned()
        .collect();
    assert_eq!(after, expected);
}

#[test]
fn test_widget_set_full_list_columns() {
    let sandbox = Sandbox::new();
    let ids = widget_ids(&sandbox.view());
    sandbox.run(&["widget", "set", &ids[3], "--size", "full", "--view", "list"]);

    let wide = sandbox.view();
    assert_eq!(wide["page"]["widgets"][3]["columns"], 4);
    let narrow: Value =
        serde_json::from_str(&sandbox.run(&["show", "--json", "--width", "320"])).expect("json");
    assert_eq!(narrow["page"]["widgets"][3]["columns"], 1);
}

#[test]
fn test_widget_color_tints_panel() {
    let sandbox = Sandbox::new();
    let ids = widget_ids(&sandbox.view());
    sandbox.run(&["widget", "set", &ids[0], "--color", "#FF0000"]);
    let view = sandbox.view();
    assert_eq!(
        view["page"]["widgets"][0]["panelStyle"],
        "background-color: rgba(255, 0, 0, 0.4)"
    );
    assert_eq!(view["page"]["widgets"][1]["panelClass"], "bg-slate-900/40");
}

#[test]
fn test_unknown_widget_is_an_error() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["widget", "remove", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown widget on active page: missing"));
}

#[test]
fn test_background_color_and_inherit() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["settings", "background", "--color", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("#RRGGBB"));

    sandbox.run(&["settings", "background", "--color", "#102030"]);
    let view = sandbox.view();
    assert_eq!(view["background"]["kind"], "color");
    assert_eq!(view["background"]["value"], "#102030");

    sandbox.run(&["page", "background", "home", "--preset", "Deep Forest"]);
    assert_eq!(sandbox.view()["background"]["value"], "#102030");

    sandbox.run(&["settings", "background", "--inherit"]);
    let view = sandbox.view();
    assert_eq!(view["background"]["kind"], "preset");
    assert!(view["background"]["value"]
        .as_str()
        .expect("token")
        .contains("from-emerald-950"));
}

#[test]
fn test_page_image_upload_wins_and_darkens() {
    let sandbox = Sandbox::new();
    let image = sandbox.dir.path().join("wall.png");
    std::fs::write(&image, [0x89, b'P', b'N', b'G']).expect("write image");

    sandbox.run(&["page", "background", "home", "--color", "#000000"]);
    sandbox.run(&[
        "page",
        "background",
        "home",
        "--image",
        image.to_str().expect("utf-8 path"),
    ]);

    let view = sandbox.view();
    assert_eq!(view["background"]["kind"], "image");
    assert!(view["background"]["value"]
        .as_str()
        .expect("data url")
        .starts_with("data:image/png;base64,"));
    assert_eq!(view["overlay"], "darken");
}

#[test]
fn test_upload_rejects_unsupported_type() {
    let sandbox = Sandbox::new();
    let svg = sandbox.dir.path().join("logo.svg");
    std::fs::write(&svg, "<svg/>").expect("write svg");
    sandbox
        .cmd()
        .args(["settings", "icon", "--image", svg.to_str().expect("utf-8 path")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported image type"));
}

#[test]
fn test_header_color_and_preset() {
    let sandbox = Sandbox::new();
    sandbox.run(&["settings", "header", "--color", "#abcdef"]);
    let view = sandbox.view();
    assert_eq!(view["header"]["kind"], "custom");
    assert_eq!(view["header"]["value"], "#abcdef");

    sandbox.run(&["settings", "header", "--preset", "Solid Blue"]);
    let view = sandbox.view();
    assert_eq!(view["header"]["kind"], "preset");
    assert_eq!(view["header"]["value"], "bg-blue-900/80");
}

#[test]
fn test_settings_name_and_icon() {
    let sandbox = Sandbox::new();
    sandbox.run(&["settings", "name", "My Links"]);
    sandbox.run(&["settings", "icon", "shield"]);
    let view = sandbox.view();
    assert_eq!(view["appName"], "My Links");
    assert_eq!(view["appIcon"]["kind"], "builtin");
    assert_eq!(view["appIcon"]["value"], "shield");
}

#[test]
fn test_reset_restores_first_run_dashboard() {
    let sandbox = Sandbox::new();
    sandbox.run(&["page", "add", "Research"]);
    sandbox.run(&["settings", "name", "Changed"]);
    sandbox.run(&["reset"]);
    let view = sandbox.view();
    assert_eq!(view["appName"], "The Woodlands Law Firm Portal");
    assert_eq!(view["page"]["id"], "home");
    assert_eq!(view["tabs"].as_array().expect("tabs").len(), 2);
}

#[test]
fn test_corrupt_storage_falls_back_to_default() {
    let sandbox = Sandbox::new();
    let path = sandbox.storage_path();
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(&path, r#"{"twlf_portal_data_v1":"{broken"}"#).expect("write");
    assert_eq!(sandbox.view()["page"]["id"], "home");
}

#[test]
fn test_config_init_path_validate() {
    let sandbox = Sandbox::new();
    let expected = sandbox
        .dir
        .path()
        .join("config")
        .join("bookmark-dashboard")
        .join("config.toml");

    sandbox
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_str().expect("utf-8 path")));

    sandbox
        .cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration"));
    assert!(expected.exists());

    sandbox
        .cmd()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    sandbox
        .cmd()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_explicit_config_controls_storage_and_width() {
    let sandbox = Sandbox::new();
    let storage = sandbox.dir.path().join("custom.json");
    let config = sandbox.dir.path().join("bmd.toml");
    std::fs::write(
        &config,
        format!(
            "[storage]\npath = \"{}\"\nkey = \"alt\"\n\n[display]\nviewport_width = 700\n",
            storage.display()
        ),
    )
    .expect("write config");
    let config = config.to_str().expect("utf-8 path");

    sandbox.run(&["--config", config, "settings", "name", "Alt"]);
    let view: Value =
        serde_json::from_str(&sandbox.run(&["--config", config, "show", "--json"])).expect("json");
    assert_eq!(view["widthTier"], "small");
    assert_eq!(view["appName"], "Alt");

    let raw = std::fs::read_to_string(&storage).expect("custom storage written");
    assert!(raw.contains("\"alt\""));
    assert!(!sandbox.storage_path().exists());
}

#[test]
fn test_invalid_config_reports_position() {
    let sandbox = Sandbox::new();
    let config = sandbox.dir.path().join("bad.toml");
    std::fs::write(&config, "[display]\nviewport_width = \n").expect("write config");
    sandbox
        .cmd()
        .args(["--config", config.to_str().expect("utf-8 path"), "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.toml:2:"));
}

#[test]
fn test_config_init_writes_to_explicit_path() {
    let sandbox = Sandbox::new();
    let custom = sandbox.dir.path().join("elsewhere").join("bmd.toml");
    let custom_arg = custom.to_str().expect("utf-8 path");

    sandbox
        .cmd()
        .args(["config", "init", "--config", custom_arg])
        .assert()
        .success();
    assert!(custom.exists());

    sandbox
        .cmd()
        .args(["--config", custom_arg, "config", "init", "--force"])
        .assert()
        .success();
    assert!(custom.with_extension("toml.backup").exists());
}

#[test]
fn test_config_validate_reports_storage_usage() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 keys"))
        .stdout(predicate::str::contains("dashboard not stored yet"));

    sandbox.view();
    sandbox
        .cmd()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 keys"))
        .stdout(predicate::str::contains("of 5242880 bytes, dashboard stored"));
}

#[test]
fn test_reset_replaces_corrupt_record() {
    let sandbox = Sandbox::new();
    let path = sandbox.storage_path();
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(&path, r#"{"twlf_portal_data_v1":"{broken"}"#).expect("write");

    sandbox
        .cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard reset to defaults"));

    let raw = std::fs::read_to_string(&path).expect("read storage");
    let outer: Value = serde_json::from_str(&raw).expect("storage json");
    let record = outer["twlf_portal_data_v1"].as_str().expect("record");
    let state: Value = serde_json::from_str(record).expect("record json");
    assert_eq!(state["activePageId"], "home");
}
