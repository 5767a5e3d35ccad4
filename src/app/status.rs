use brandtaste::Config;

pub fn render_status(config: &Config) -> String {
    let key_state = if config.api_key.is_some() {
        "configured"
    } else {
        "from environment (GEMINI_API_KEY / GOOGLE_API_KEY) or unset"
    };
    let ai_state = if config.inference.ai_enabled {
        "enabled"
    } else {
        "disabled (statistical estimator only)"
    };

    [
        "◆ brandtaste status".to_string(),
        String::new(),
        format!("Version     {}", env!("CARGO_PKG_VERSION")),
        format!("Config      {}", config.config_path.display()),
        format!("User ID     {}", config.user_id),
        String::new(),
        format!("Provider    {}", config.provider.name),
        format!("Model       {}", config.provider.model),
        format!("Endpoint    {}", config.provider.base_url),
        format!("Timeout     {}s", config.provider.request_timeout_secs),
        format!("API key     {key_state}"),
        String::new(),
        format!("AI path     {ai_state}"),
        format!("Temperature {}", config.inference.temperature),
        format!("Max tokens  {}", config.inference.max_output_tokens),
        format!("Top-p/k     {} / {}", config.inference.top_p, config.inference.top_k),
        format!("Log level   {}", config.observability.log_level),
    ]
    .join("\n")
}
