//! CLI command implementations

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::args::ConfigCommand;
use crate::config::{Settings, API_KEY_ENV_VARS};
use crate::notes::{fetch_transcript, NotesPipeline};
use crate::transcript::YoutubeTranscriptClient;
use crate::video::resolve;
use crate::web::{self, AppState};

/// Serve the web form
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    // Fail on missing credentials before binding.
    let pipeline = NotesPipeline::from_settings(&settings)?;
    tracing::info!(
        languages = %pipeline.languages().join(","),
        model = %settings.llm.model,
        "Notes pipeline ready"
    );

    web::serve(AppState::new(pipeline), &settings.bind_address()).await
}

/// Generate notes for a video link and print them
pub async fn summarize(settings: &Settings, url: &str, languages: Vec<String>) -> Result<()> {
    let pipeline =
        NotesPipeline::from_settings(settings)?.with_languages(effective_languages(settings, languages));

    let notes = pipeline.notes(url).await?;

    println!("Video: {}", notes.video_id.watch_url());
    println!("Thumbnail: {}", notes.thumbnail_url());
    println!("Transcript language: {}", notes.language);
    println!();
    println!("Detailed Notes:");
    println!("{}", notes.summary);

    Ok(())
}

/// Print the joined transcript of a video link
pub async fn print_transcript(settings: &Settings, url: &str, languages: Vec<String>) -> Result<()> {
    let languages = effective_languages(settings, languages);
    let client = YoutubeTranscriptClient::from_settings(settings)?;

    let (video_id, transcript) = fetch_transcript(&client, url, &languages).await?;

    eprintln!("Transcript for {} ({})", video_id, transcript.language);
    println!("{}", transcript);

    Ok(())
}

/// Print the identifier and thumbnail for a link without any network call
pub fn resolve_link(url: &str) -> Result<()> {
    let video_id = resolve(url)
        .with_context(|| format!("Invalid YouTube URL: no video identifier found in '{}'", url.trim()))?;

    println!("{}", video_id);
    println!("{}", video_id.thumbnail_url());

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut redacted = settings.clone();
            if redacted.has_api_key() {
                redacted.llm.api_key = "<redacted>".to_string();
            }
            let toml = toml::to_string_pretty(&redacted)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: &'static str,
    detail: String,
}

#[derive(Serialize)]
struct DoctorReport {
    config_path: String,
    config_exists: bool,
    provider: String,
    model: String,
    languages: Vec<String>,
    transcript_timeout_secs: u64,
    checks: Vec<DoctorCheck>,
}

/// Run diagnostic checks to help troubleshoot local setup issues.
pub fn run_doctor(settings: &Settings, json: bool) -> Result<()> {
    let report = collect_doctor_report(settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} doctor (v{})", crate::APP_NAME, crate::VERSION);
    println!(
        "config: {} ({})",
        report.config_path,
        if report.config_exists { "found" } else { "defaults" }
    );
    println!("llm: {} / {}", report.provider, report.model);
    println!("languages: {}", report.languages.join(", "));
    println!("transcript timeout: {}s", report.transcript_timeout_secs);
    println!();

    for check in &report.checks {
        println!("{:<10} {:<8} {}", check.name, check.status, check.detail);
    }

    Ok(())
}

fn collect_doctor_report(settings: &Settings) -> Result<DoctorReport> {
    let config_path = Settings::config_path()?;

    let api_key = if settings.has_api_key() {
        DoctorCheck {
            name: "api_key",
            status: "ok",
            detail: "Gemini API key configured".to_string(),
        }
    } else {
        DoctorCheck {
            name: "api_key",
            status: "missing",
            detail: format!("set {} or llm.api_key", API_KEY_ENV_VARS.join(" or ")),
        }
    };

    let provider = match crate::llm::build_provider(settings) {
        Ok(summarizer) => DoctorCheck {
            name: "provider",
            status: "ok",
            detail: summarizer.name().to_string(),
        },
        Err(e) => DoctorCheck {
            name: "provider",
            status: "error",
            detail: e.to_string(),
        },
    };

    let transcripts = match settings.validate() {
        Ok(()) => DoctorCheck {
            name: "languages",
            status: "ok",
            detail: format!("{} configured", settings.transcript.languages.len()),
        },
        Err(e) => DoctorCheck {
            name: "languages",
            status: "error",
            detail: e.to_string(),
        },
    };

    Ok(DoctorReport {
        config_exists: config_path.exists(),
        config_path: config_path.display().to_string(),
        provider: settings.llm.provider.clone(),
        model: settings.llm.model.clone(),
        languages: settings.transcript.languages.clone(),
        transcript_timeout_secs: settings.transcript.timeout_secs,
        checks: vec![api_key, provider, transcripts],
    })
}

// Helper functions

/// Languages given on the command line win over configured ones.
fn effective_languages(settings: &Settings, cli_languages: Vec<String>) -> Vec<String> {
    let cli_languages: Vec<String> = cli_languages
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    if cli_languages.is_empty() {
        settings.transcript.languages.clone()
    } else {
        cli_languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_languages_override_settings() {
        let settings = Settings::default();

        assert_eq!(
            effective_languages(&settings, vec!["de".into(), " ".into()]),
            ["de"]
        );
        assert_eq!(
            effective_languages(&settings, Vec::new()),
            settings.transcript.languages
        );
    }

    #[test]
    fn doctor_reports_missing_key() {
        let report = collect_doctor_report(&Settings::default()).unwrap();

        let api_key = report.checks.iter().find(|c| c.name == "api_key").unwrap();
        assert_eq!(api_key.status, "missing");
        assert!(api_key.detail.contains("GOOGLE_API_KEY"));
    }
}
