mod config;

use crate::CONFIG_DIR_ENV;

use std::env;

use tempfile::TempDir;

pub(crate) const VALID_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// Restores an environment variable on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Point TN_CONFIG_DIR at a fresh temp directory
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set(CONFIG_DIR_ENV, temp.path().to_str().unwrap());
    (temp, guard)
}

/// Config dir plus a valid signing secret, so validate() only trips on what the test sets
pub(crate) fn setup_with_secret() -> (TempDir, EnvGuard, EnvGuard) {
    let (temp, dir_guard) = setup_config_dir();
    let secret_guard = EnvGuard::set("TN_AUTH_JWT_SECRET", VALID_SECRET);
    (temp, dir_guard, secret_guard)
}
