use crate::app::status::render_status;
use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result};
use brandtaste::llm::create_provider;
use brandtaste::parser::parse_with_preview;
use brandtaste::{Catalog, Config, HybridInference, SwipeLog, SwipeSession, compile_inference_prompt};
use std::fs;
use std::path::Path;
use tracing::info;

fn load_session(path: &Path, catalog: &Catalog, config: &Config) -> Result<SwipeSession> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read swipe file {}", path.display()))?;
    let log: SwipeLog = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse swipe file {}", path.display()))?;
    let session = log.into_session(catalog, &config.user_id, chrono::Utc::now())?;
    info!(
        path = %path.display(),
        total = session.total(),
        liked = session.liked_count(),
        "swipe file loaded"
    );
    Ok(session)
}

fn render_catalog(catalog: &Catalog) -> String {
    catalog
        .iter()
        .enumerate()
        .map(|(i, design)| {
            let layout = &design.layout_and_structure;
            let palette = &design.color_palette;
            format!(
                "{:>2}. {:<18} {:<16} {:<10} {:<14} {}",
                i + 1,
                design.name,
                palette.scheme_type.to_string(),
                layout.density.to_string(),
                layout.content_flow.to_string(),
                palette.accent_color
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn write_output(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "profile written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

async fn run_infer(
    config: &Config,
    session: &SwipeSession,
    offline: bool,
    output: Option<&Path>,
    show_raw: bool,
) -> Result<()> {
    let engine = if offline {
        HybridInference::offline()
    } else {
        HybridInference::new(
            create_provider(config)?,
            config.inference.generation_options(),
        )
    };
    let engine = engine.with_raw_preview_chars(config.inference.raw_preview_chars);

    let result = engine.infer(session).await?;
    if show_raw {
        match &result.raw_response {
            Some(raw) => eprintln!("{raw}"),
            None => eprintln!("(no AI response)"),
        }
    }
    match &result.fallback_reason {
        Some(reason) => eprintln!("Used statistical estimator: {reason}"),
        None if result.used_ai => eprintln!("Used AI inference"),
        None => eprintln!("Used statistical estimator"),
    }

    let json = result
        .preferences
        .to_prompt_json()
        .context("Failed to serialize profile")?;
    write_output(&json, output)
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Catalog => {
            let catalog = Catalog::builtin()?;
            println!("{}", render_catalog(&catalog));
            Ok(())
        }
        Commands::Status => {
            println!("{}", render_status(&config));
            Ok(())
        }
        Commands::Prompt { swipes } => {
            let catalog = Catalog::builtin()?;
            let session = load_session(&swipes, &catalog, &config)?;
            println!("{}", compile_inference_prompt(&session)?);
            Ok(())
        }
        Commands::Infer {
            swipes,
            offline,
            output,
            show_raw,
        } => {
            let catalog = Catalog::builtin()?;
            let session = load_session(&swipes, &catalog, &config)?;
            run_infer(&config, &session, offline, output.as_deref(), show_raw).await
        }
        Commands::Validate { file } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let profile = parse_with_preview(&raw, config.inference.raw_preview_chars)?;
            println!("{}", profile.to_prompt_json()?);
            Ok(())
        }
    }
}
