// Tests for configuration loading
//
// Defaults apply when no file exists; a file overrides them per key, and
// MEETING_NOTES_* environment variables override both.

use anyhow::Result;
use meeting_notes::Config;
use std::fs;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

// Environment variables are process-wide; every test that loads config holds this
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn test_defaults_without_config_file() -> Result<()> {
    let _env = env_lock();
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("does-not-exist");

    let cfg = Config::load(missing.to_str().unwrap())?;
    assert_eq!(cfg.service.name, "meeting-notes");
    assert_eq!(cfg.service.summarize_url(), "http://127.0.0.1:8000/summarize");
    assert_eq!(cfg.service.health_url(), "http://127.0.0.1:8000/");

    Ok(())
}

#[test]
fn test_file_overrides_defaults() -> Result<()> {
    let _env = env_lock();
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("notes.toml"),
        "[service]\nbase_url = \"http://summarizer.internal:9000/api/\"\n",
    )?;

    let path = temp_dir.path().join("notes");
    let cfg = Config::load(path.to_str().unwrap())?;
    assert_eq!(
        cfg.service.summarize_url(),
        "http://summarizer.internal:9000/api/summarize"
    );
    // Keys not in the file keep their defaults
    assert_eq!(cfg.service.summarize_path, "/summarize");
    assert_eq!(cfg.service.name, "meeting-notes");

    Ok(())
}

#[test]
fn test_malformed_file_is_an_error() -> Result<()> {
    let _env = env_lock();
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("broken.toml"), "[service\nbase_url = ")?;

    let path = temp_dir.path().join("broken");
    assert!(Config::load(path.to_str().unwrap()).is_err());

    Ok(())
}

#[test]
fn test_shipped_config_file_loads() -> Result<()> {
    let _env = env_lock();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/meeting-notes");

    let cfg = Config::load(path)?;
    assert_eq!(cfg.service.base_url, "http://127.0.0.1:8000");
    assert_eq!(cfg.service.summarize_path, "/summarize");

    Ok(())
}

#[test]
fn test_environment_overrides_file_and_defaults() -> Result<()> {
    let _env = env_lock();
    let temp_dir = TempDir::new()?;
    fs::write(
        temp_dir.path().join("notes.toml"),
        "[service]\nbase_url = \"http://from-file:9000\"\nsummarize_path = \"/v1/summarize\"\n",
    )?;
    let path = temp_dir.path().join("notes");
    let missing = temp_dir.path().join("does-not-exist");

    std::env::set_var("MEETING_NOTES_SERVICE__BASE_URL", "http://from-env:1");
    let with_file = Config::load(path.to_str().unwrap());
    let without_file = Config::load(missing.to_str().unwrap());
    std::env::remove_var("MEETING_NOTES_SERVICE__BASE_URL");

    let with_file = with_file?;
    assert_eq!(with_file.service.base_url, "http://from-env:1");
    // Keys the environment does not set still come from the file
    assert_eq!(with_file.service.summarize_url(), "http://from-env:1/v1/summarize");

    let without_file = without_file?;
    assert_eq!(without_file.service.summarize_url(), "http://from-env:1/summarize");

    Ok(())
}
