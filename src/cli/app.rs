//! Main app runner for one-shot consultations

use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{ConsultError, ConsultationStage, ConsultationUseCase};
use crate::domain::config::AppConfig;
use crate::domain::consultation::UserSubmission;
use crate::infrastructure::{
    Base64FileEncoder, GroqInferenceClient, GroqSpeechSynthesizer, GroqWhisperTranscriber,
    XdgConfigStore,
};

use super::args::ConsultOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a one-shot consultation with an already-resolved API key
pub async fn run_consultation(options: ConsultOptions, api_key: String) -> ExitCode {
    let mut presenter = Presenter::new();

    // Ensure the artifact directory exists before synthesis tries to write
    if let Err(e) = tokio::fs::create_dir_all(&options.output_dir).await {
        presenter.error(&format!(
            "Failed to create output directory {}: {}",
            options.output_dir.display(),
            e
        ));
        return ExitCode::from(EXIT_ERROR);
    }

    // Create adapters; one client handle each, shared for the process lifetime
    let image_encoder = Base64FileEncoder::new();
    let transcriber = GroqWhisperTranscriber::new(api_key.as_str());
    let inference = GroqInferenceClient::with_model(api_key.as_str(), options.model.as_str());
    let synthesizer = GroqSpeechSynthesizer::with_voice(api_key.as_str(), options.voice.as_str());

    let use_case = ConsultationUseCase::new(
        image_encoder,
        transcriber,
        inference,
        synthesizer,
        &options.output_dir,
    );

    let submission = UserSubmission::new(options.text, options.image, options.audio);

    presenter.start_spinner("Starting consultation...");

    let result = use_case
        .handle_submission_with_progress(submission, |stage| {
            presenter.update_spinner(stage_message(stage));
        })
        .await;

    match result {
        Ok(output) => {
            presenter.spinner_success("Consultation complete");

            if output.diagnosis.is_degraded() {
                presenter.warn("The model could not be reached; voicing the error message");
            }

            // Diagnosis text goes to stdout
            presenter.output(output.diagnosis.text());

            match output.audio {
                Some(artifact) => {
                    presenter.info(&format!("Spoken response: {}", artifact.path().display()));
                }
                None => {
                    presenter.warn("Speech synthesis failed; no audio produced");
                }
            }

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e @ ConsultError::MissingInput) => {
            presenter.spinner_fail("Nothing to analyze");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.spinner_fail("Consultation failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Map a pipeline stage to the spinner message shown for it
fn stage_message(stage: ConsultationStage) -> &'static str {
    match stage {
        ConsultationStage::Transcribing => "Transcribing...",
        ConsultationStage::Consulting => "Consulting model...",
        ConsultationStage::Synthesizing => "Synthesizing speech...",
    }
}

/// Extract the API key from an already-merged configuration
pub fn require_api_key(config: &AppConfig) -> Result<String, String> {
    config
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            "Missing API key. Set GROQ_API_KEY environment variable or run 'medivox config set api_key <key>'".to_string()
        })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("GROQ_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
