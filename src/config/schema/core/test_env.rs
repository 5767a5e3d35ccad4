use std::sync::{LazyLock, Mutex};

pub(super) static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(super) struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVarGuard {
    pub(super) fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: Test-only helper. All tests using EnvVarGuard acquire
        // ENV_LOCK first, serializing concurrent env-var access.
        unsafe {
            std::env::set_var(key, value);
        }
        Self { key, previous }
    }

    pub(super) fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        // SAFETY: ENV_LOCK is held; the guard restores the value on drop.
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match &self.previous {
            // SAFETY: ENV_LOCK is still held by the enclosing test.
            Some(value) => unsafe { std::env::set_var(self.key, value) },
            // SAFETY: same as above.
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

/// Unset every variable `apply_env_overrides` reads.
pub(super) fn clear_overrides() -> Vec<EnvVarGuard> {
    [
        "BRANDTASTE_API_KEY",
        "GEMINI_API_KEY",
        "BRANDTASTE_MODEL",
        "BRANDTASTE_TEMPERATURE",
        "BRANDTASTE_USER_ID",
        "BRANDTASTE_OFFLINE",
    ]
    .into_iter()
    .map(EnvVarGuard::unset)
    .collect()
}
