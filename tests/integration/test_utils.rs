//! Shared test utilities for integration tests
//!
//! Provides isolated HOME / XDG_CONFIG_HOME environments and fixture paths.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize XDG environment variable access across all tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        if let Some(orig) = self.home {
            std::env::set_var("HOME", orig);
        } else {
            std::env::remove_var("HOME");
        }

        if let Some(orig) = self.xdg_config_home {
            std::env::set_var("XDG_CONFIG_HOME", orig);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointing into `test_dir`.
///
/// The user configuration file lives at
/// `<test_dir>/config/eggwars-spawners/config.toml` while `f` runs.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_config_home = test_dir.path().join("config");
    let test_home = test_dir.path().join("home");
    std::fs::create_dir_all(&test_config_home).unwrap();
    std::fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_config_home.to_str().unwrap());

    let result = f();

    env_state.restore();

    result
}

/// Write the user-level configuration file under `test_dir`.
pub fn write_global_config(test_dir: &TempDir, contents: &str) -> PathBuf {
    let dir = test_dir.path().join("config").join("eggwars-spawners");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Path of a file under tests/fixtures.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write a map document into `dir` and return its path.
pub fn write_map(dir: &TempDir, name: &str, xml: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, xml).unwrap();
    path
}
