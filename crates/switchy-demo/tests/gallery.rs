//! Integration tests for the gallery commands, using the bundled configs.

use std::path::{Path, PathBuf};
use switchy_demo::{
    check_config, run_gallery, ConfigError, DemoError, GalleryArgs, GalleryConfig, Session,
};

fn bundled(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("configs").join(name)
}

fn args(config: Option<PathBuf>, clicks: &[&str], json: bool) -> GalleryArgs {
    GalleryArgs {
        config,
        frames: 120,
        clicks: clicks.iter().map(ToString::to_string).collect(),
        json,
    }
}

fn run(args: &GalleryArgs) -> Result<String, DemoError> {
    let mut out = Vec::new();
    run_gallery(args, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

// ===== Bundled Configs =====

#[test]
fn test_showcase_file_matches_builtin() {
    let loaded = GalleryConfig::load(&bundled("showcase.yaml")).expect("showcase loads");
    assert_eq!(loaded, GalleryConfig::default());
}

#[test]
fn test_check_settings_toml() {
    let mut out = Vec::new();
    let config = check_config(&bundled("settings.toml"), &mut out).expect("valid");
    assert_eq!(config.frame_rate, 120);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Config valid!"));
    assert!(text.contains("Columns: 3"));
    assert!(text.contains("Items: 4"));
}

#[test]
fn test_check_missing_file() {
    let mut out = Vec::new();
    let err = check_config(&bundled("missing.yaml"), &mut out).unwrap_err();
    assert!(matches!(err, DemoError::Config(ConfigError::Io { .. })));
}

#[test]
fn test_check_rejects_unknown_extension() {
    let mut out = Vec::new();
    let err = check_config(Path::new("gallery.ini"), &mut out).unwrap_err();
    assert!(matches!(err, DemoError::Config(ConfigError::UnknownFormat(_))));
}

// ===== Gallery Command =====

#[test]
fn test_default_gallery_summary() {
    let text = run(&args(None, &["text-switch", "custom-iswitch-2"], false)).unwrap();
    let on: Vec<_> = text.lines().filter(|l| l.contains(" on ")).collect();
    assert_eq!(on.len(), 2);
    assert!(on[0].trim_start().starts_with("text-switch"));
    assert!(on[1].trim_start().starts_with("custom-iswitch-2"));
}

#[test]
fn test_settings_clicks() {
    let path = bundled("settings.toml");
    let text = run(&args(Some(path), &["wifi", "hotspot", "airplane"], false)).unwrap();
    let line = |id: &str| {
        text.lines()
            .find(|l| l.trim_start().starts_with(id))
            .unwrap_or_else(|| panic!("no line for {id}"))
            .to_string()
    };
    // wifi started on; hotspot is disabled.
    assert!(line("wifi").contains(" off "));
    assert!(line("hotspot").contains(" off "));
    assert!(line("airplane").contains(" on "));
    assert!(line("bluetooth").contains(" off "));
}

#[test]
fn test_gallery_json_output() {
    let text = run(&args(None, &["heart-switch"], true)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    let commands = value.as_array().expect("draw list array");
    assert!(!commands.is_empty());
    // Captions are part of the frame.
    assert!(text.contains("\"HeartSwitch\""));
}

#[test]
fn test_click_unknown_id_fails() {
    let err = run(&args(None, &["flux-capacitor"], false)).unwrap_err();
    assert!(err.to_string().contains("#flux-capacitor"));
}

// ===== Session =====

#[test]
fn test_session_frame_rate_from_config() {
    let config = GalleryConfig::load(&bundled("settings.toml")).unwrap();
    let mut fast = Session::new(&config).unwrap();
    let mut slow = Session::new(&GalleryConfig {
        frame_rate: 30,
        ..config.clone()
    })
    .unwrap();
    fast.run(600);
    slow.run(600);
    fast.click("airplane").unwrap();
    slow.click("airplane").unwrap();
    let fast_frames = fast.run(600);
    let slow_frames = slow.run(600);
    assert!(
        fast_frames > slow_frames,
        "{fast_frames} frames at 120 fps vs {slow_frames} at 30"
    );
}
