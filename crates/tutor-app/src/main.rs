mod app_state;
mod cli;
mod commands;
mod gateway;
mod shell;

#[cfg(test)]
mod test_support;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use tutor_config::TutorConfig;
use tutor_lessons::ResolvingPromptSource;

const DEFAULT_LOG_DIRECTIVE: &str = "tutor=info";

/// Load environment variables from a .env file (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/tutor-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for (key, value) in parse_dotenv(&contents) {
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
            return;
        }
    }
}

fn parse_dotenv(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            (
                key.trim(),
                value.trim().trim_matches('"').trim_matches('\''),
            )
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// `--log-level` wins, then `[logging] level`, then `tutor=info`.
fn log_directive(cli_level: Option<&str>, config_level: Option<&str>) -> Directive {
    let candidate = match (cli_level, config_level) {
        (Some(level), _) => level.to_string(),
        (None, Some(level)) => format!("tutor={}", level.trim().to_ascii_lowercase()),
        (None, None) => DEFAULT_LOG_DIRECTIVE.to_string(),
    };
    candidate
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse())
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging so its level can seed the filter
    let loaded = tutor_config::load_config(args.config.as_deref().map(Path::new));

    let directive = log_directive(
        args.log_level.as_deref(),
        loaded.as_ref().ok().map(|c| c.logging.level.as_str()),
    );
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Tutor v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        TutorConfig::default()
    });
    tracing::info!("Config loaded (model: {})", config.model.model);

    let prompts = match ResolvingPromptSource::from_config(&config.prompts) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            tracing::error!("Prompt source setup failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    let gateway = gateway::from_config(&config.model);

    let mut app = match app_state::TutorApp::new(config, prompts, gateway) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(ref unit) = args.unit {
        app.select_unit(unit);
    }
    if let Some(ref lesson) = args.lesson {
        app.select_lesson(lesson);
    }

    let result = shell::run(&mut app).await;
    app.shutdown();

    match result {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Terminal I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
