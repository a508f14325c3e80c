//! Consultation use case
//!
//! Drives one submission through the pipeline:
//! transcribe (if audio) -> compose -> infer -> synthesize.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::consultation::{AudioArtifact, Diagnosis, Prompt, RequestId, UserSubmission};

use super::ports::{
    ImageEncoder, InferenceClient, SpeechSynthesizer, SpeechTranscriber, TranscriptionError,
};

/// Errors that terminate a consultation before a diagnosis exists.
///
/// Inference and synthesis failures are deliberately absent: an inference
/// failure becomes a degraded (still speakable) diagnosis, and a synthesis
/// failure degrades to a text-only result.
#[derive(Debug, Error)]
pub enum ConsultError {
    #[error("Please provide a description or audio.")]
    MissingInput,

    #[error("Error transcribing audio: {0}")]
    Transcription(#[from] TranscriptionError),
}

/// Pipeline stages reported while a submission is being processed.
///
/// Emitted just before the corresponding remote call starts, so a
/// presenter can keep its progress display in step with the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsultationStage {
    Transcribing,
    Consulting,
    Synthesizing,
}

/// Output of a completed consultation
#[derive(Debug, Clone)]
pub struct ConsultationOutput {
    /// The diagnosis text shown to the user
    pub diagnosis: Diagnosis,
    /// Synthesized speech, absent when synthesis failed
    pub audio: Option<AudioArtifact>,
}

/// One-shot consultation use case.
///
/// All collaborators are injected so tests can substitute stubs. The use
/// case holds no mutable state; a shared instance may serve overlapping
/// submissions concurrently, with per-request artifact names preventing
/// output collisions.
pub struct ConsultationUseCase<E, T, I, S>
where
    E: ImageEncoder,
    T: SpeechTranscriber,
    I: InferenceClient,
    S: SpeechSynthesizer,
{
    image_encoder: E,
    transcriber: T,
    inference: I,
    synthesizer: S,
    artifact_dir: PathBuf,
}

impl<E, T, I, S> ConsultationUseCase<E, T, I, S>
where
    E: ImageEncoder,
    T: SpeechTranscriber,
    I: InferenceClient,
    S: SpeechSynthesizer,
{
    /// Create a new use case instance
    pub fn new(
        image_encoder: E,
        transcriber: T,
        inference: I,
        synthesizer: S,
        artifact_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            image_encoder,
            transcriber,
            inference,
            synthesizer,
            artifact_dir: artifact_dir.into(),
        }
    }

    /// Process one submission end to end.
    ///
    /// Transcription failure and missing input are the only hard errors.
    /// Image encoding failure degrades to "no image attached", inference
    /// failure to a voiced error message, synthesis failure to no audio.
    pub async fn handle_submission(
        &self,
        submission: UserSubmission,
    ) -> Result<ConsultationOutput, ConsultError> {
        self.handle_submission_with_progress(submission, |_| {})
            .await
    }

    /// Like [`Self::handle_submission`], additionally reporting each
    /// pipeline stage through `on_stage` as it is entered.
    pub async fn handle_submission_with_progress(
        &self,
        submission: UserSubmission,
        on_stage: impl Fn(ConsultationStage),
    ) -> Result<ConsultationOutput, ConsultError> {
        if submission.is_empty() {
            return Err(ConsultError::MissingInput);
        }

        let request_id = RequestId::new();

        // Resolve the authoritative text: a transcript overrides typed text
        let text = match submission.audio_reference.as_deref() {
            Some(audio) => {
                on_stage(ConsultationStage::Transcribing);
                self.transcriber.transcribe(audio).await?
            }
            None => submission.text.clone().unwrap_or_default(),
        };

        if text.trim().is_empty() {
            return Err(ConsultError::MissingInput);
        }

        let image = match submission.image_reference.as_deref() {
            Some(path) => match self.image_encoder.encode(path).await {
                Ok(encoded) => Some(encoded),
                Err(e) => {
                    tracing::warn!(request_id = %request_id, error = %e, "Image unreadable, continuing without it");
                    None
                }
            },
            None => None,
        };

        let prompt = Prompt::build(&text, image.as_ref());

        on_stage(ConsultationStage::Consulting);
        let diagnosis = match self.inference.generate(&prompt).await {
            Ok(answer) => Diagnosis::generated(answer),
            Err(e) => {
                tracing::warn!(request_id = %request_id, error = %e, "Inference failed, voicing the error");
                Diagnosis::unavailable(format!("Error: {}", e))
            }
        };

        on_stage(ConsultationStage::Synthesizing);
        let target = self.artifact_dir.join(request_id.artifact_file_name());
        let audio = match self.synthesizer.synthesize(diagnosis.text(), &target).await {
            Ok(artifact) => Some(artifact),
            Err(e) => {
                tracing::warn!(request_id = %request_id, error = %e, "Synthesis failed, returning text only");
                None
            }
        };

        Ok(ConsultationOutput { diagnosis, audio })
    }
}
