use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) =
            std::env::var("BRANDTASTE_API_KEY").or_else(|_| std::env::var("GEMINI_API_KEY"))
            && !key.trim().is_empty()
        {
            self.api_key = Some(key.trim().to_string());
        }

        if let Ok(model) = std::env::var("BRANDTASTE_MODEL")
            && !model.is_empty()
        {
            self.provider.model = model;
        }

        if let Ok(temp_str) = std::env::var("BRANDTASTE_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.inference.temperature = temp;
        }

        if let Ok(user_id) = std::env::var("BRANDTASTE_USER_ID")
            && !user_id.is_empty()
        {
            self.user_id = user_id;
        }

        if let Ok(offline) = std::env::var("BRANDTASTE_OFFLINE")
            && matches!(offline.trim(), "1" | "true" | "yes")
        {
            self.inference.ai_enabled = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_env::{ENV_LOCK, EnvVarGuard, clear_overrides};
    use super::*;

    #[test]
    fn overrides_apply_when_set() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _env = clear_overrides();
        let _key = EnvVarGuard::set("BRANDTASTE_API_KEY", "  env-key ");
        let _model = EnvVarGuard::set("BRANDTASTE_MODEL", "gemini-2.5-pro");
        let _user = EnvVarGuard::set("BRANDTASTE_USER_ID", "carol");
        let _offline = EnvVarGuard::set("BRANDTASTE_OFFLINE", "1");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.provider.model, "gemini-2.5-pro");
        assert_eq!(config.user_id, "carol");
        assert!(!config.inference.ai_enabled);
    }

    #[test]
    fn gemini_key_is_used_when_brandtaste_key_is_absent() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _env = clear_overrides();
        let _key = EnvVarGuard::set("GEMINI_API_KEY", "gem");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.api_key.as_deref(), Some("gem"));
    }

    #[test]
    fn temperature_outside_range_is_ignored() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _env = clear_overrides();
        let _temp = EnvVarGuard::set("BRANDTASTE_TEMPERATURE", "3.5");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert!((config.inference.temperature - 0.2).abs() < f64::EPSILON);

        let _temp = EnvVarGuard::set("BRANDTASTE_TEMPERATURE", "1.25");
        config.apply_env_overrides();
        assert!((config.inference.temperature - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn unset_environment_changes_nothing() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _env = clear_overrides();
        let _offline = EnvVarGuard::set("BRANDTASTE_OFFLINE", "0");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert!(config.api_key.is_none());
        assert!(config.inference.ai_enabled);
        assert_eq!(config.user_id, "USER_PREFERENCES_001");
    }
}
