//! Voice capture collaborator
//!
//! Speech recognition lives outside the core. A [`VoiceCapture`]
//! implementation hands back a plain transcript, which the caller then
//! submits like typed input. The core never sees audio.

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Trait for speech-to-text providers
#[async_trait]
pub trait VoiceCapture: Send + Sync {
    /// Human-readable name for this provider
    fn name(&self) -> &str;

    /// Whether the provider can be used in this environment
    fn is_available(&self) -> bool;

    /// Listen once and return the transcript
    async fn capture(&self) -> Result<String>;
}

/// Provider for environments with no speech recognition
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedVoice;

#[async_trait]
impl VoiceCapture for UnsupportedVoice {
    fn name(&self) -> &str {
        "unsupported"
    }

    fn is_available(&self) -> bool {
        false
    }

    async fn capture(&self) -> Result<String> {
        Err(Error::VoiceUnavailable(
            "no speech recognizer is configured".to_string(),
        ))
    }
}

/// Provider that replays a fixed result
///
/// Useful for tests and demos without a microphone.
#[derive(Debug, Clone)]
pub struct ScriptedVoice {
    transcript: Option<String>,
}

impl ScriptedVoice {
    /// Always return this transcript
    pub fn transcript(text: impl Into<String>) -> Self {
        Self {
            transcript: Some(text.into()),
        }
    }

    /// Always fail recognition
    pub fn failing() -> Self {
        Self { transcript: None }
    }
}

#[async_trait]
impl VoiceCapture for ScriptedVoice {
    fn name(&self) -> &str {
        "scripted"
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn capture(&self) -> Result<String> {
        match self.transcript.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            Some(_) => Err(Error::VoiceCapture("empty transcript".to_string())),
            None => Err(Error::VoiceCapture("no speech recognized".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unsupported_voice() {
        let voice = UnsupportedVoice;
        assert!(!voice.is_available());
        assert!(matches!(
            voice.capture().await,
            Err(Error::VoiceUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_scripted_transcript() {
        let voice = ScriptedVoice::transcript("  twelve dollars for pizza ");
        assert!(voice.is_available());
        assert_eq!(voice.capture().await.unwrap(), "twelve dollars for pizza");
    }

    #[tokio::test]
    async fn test_scripted_failures() {
        assert!(matches!(
            ScriptedVoice::failing().capture().await,
            Err(Error::VoiceCapture(_))
        ));
        assert!(matches!(
            ScriptedVoice::transcript("   ").capture().await,
            Err(Error::VoiceCapture(_))
        ));
    }
}
