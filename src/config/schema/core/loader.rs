use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.brandtaste/config.toml`, writing defaults on first run.
    /// Environment overrides are applied after loading and never persisted.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let brandtaste_dir = home.join(".brandtaste");
        let config_path = brandtaste_dir.join("config.toml");

        if !brandtaste_dir.exists() {
            fs::create_dir_all(&brandtaste_dir)
                .context("Failed to create .brandtaste directory")?;
        }

        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        let mut config = Self {
            config_path: config_path.clone(),
            ..Self::default()
        };
        config.save()?;
        tracing::info!(path = %config_path.display(), "wrote default config");
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.config_path = path.to_path_buf();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(parent) = self.config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
