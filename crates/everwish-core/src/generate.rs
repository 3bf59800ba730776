//! Remote generation collaborators
//!
//! Opaque HTTP services that produce greeting content on demand: a title
//! and poem for a letter, a background image, and a spoken rendition of
//! the letter text. Failures are always retryable and must never corrupt
//! caller state - the admin form keeps its prior field values and surfaces
//! the error.
//!
//! The audio endpoint returns raw PCM (mono, 24 kHz, 16-bit) which is
//! wrapped in a WAV container here and handed back as a data URI the
//! audio element can play directly.

use std::time::Duration;

use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerateError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Audio format delivered by the audio endpoint
const AUDIO_CHANNELS: u16 = 1;
const AUDIO_SAMPLE_RATE: u32 = 24_000;
const AUDIO_BITS_PER_SAMPLE: u16 = 16;

/// Request for a generated title and poem
#[derive(Debug, Clone, Serialize)]
pub struct TextRequest {
    /// Name of the person the greeting is for
    pub name: String,
    /// Short description of the desired style, e.g. "magical and elegant"
    pub style_prompt: String,
}

/// Generated greeting text
#[derive(Debug, Clone, Deserialize)]
pub struct TextResponse {
    pub title: String,
    pub poem: String,
}

/// Request for a generated background image
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
}

/// Generated image as a displayable reference (typically a data URI)
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    pub image_url: String,
}

/// Request for a spoken rendition of letter text
#[derive(Debug, Clone, Serialize)]
pub struct AudioRequest {
    pub text: String,
}

/// Generated audio as a `data:audio/wav;base64,...` URI
#[derive(Debug, Clone)]
pub struct AudioResponse {
    pub audio_url: String,
}

/// Client for the generation services
#[derive(Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    base_url: String,
}

impl GenerationClient {
    /// Create a client against the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Generate a greeting title and poem.
    pub async fn generate_text(&self, request: &TextRequest) -> Result<TextResponse, GenerateError> {
        debug!(name = %request.name, "Requesting generated greeting text");
        let response = self
            .http
            .post(format!("{}/generate/text", self.base_url))
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Generate a background image.
    pub async fn generate_image(
        &self,
        request: &ImageRequest,
    ) -> Result<ImageResponse, GenerateError> {
        debug!("Requesting generated background image");
        let response = self
            .http
            .post(format!("{}/generate/image", self.base_url))
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        let decoded: ImageResponse = response.json().await?;
        if decoded.image_url.is_empty() {
            return Err(GenerateError::Empty("image"));
        }
        Ok(decoded)
    }

    /// Generate spoken audio for the given text.
    ///
    /// The upstream payload is base64 PCM; the result is a playable
    /// `data:audio/wav` URI.
    pub async fn generate_audio(
        &self,
        request: &AudioRequest,
    ) -> Result<AudioResponse, GenerateError> {
        #[derive(Deserialize)]
        struct RawAudio {
            audio: Option<String>,
        }

        debug!("Requesting generated audio");
        let response = self
            .http
            .post(format!("{}/generate/audio", self.base_url))
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let raw: RawAudio = response.json().await?;
        let pcm_b64 = raw.audio.ok_or(GenerateError::Empty("audio"))?;
        let pcm = base64::engine::general_purpose::STANDARD
            .decode(pcm_b64)
            .map_err(|e| GenerateError::Decode(e.to_string()))?;

        let wav = wrap_pcm_in_wav(&pcm, AUDIO_CHANNELS, AUDIO_SAMPLE_RATE, AUDIO_BITS_PER_SAMPLE);
        let encoded = base64::engine::general_purpose::STANDARD.encode(wav);
        Ok(AudioResponse {
            audio_url: format!("data:audio/wav;base64,{}", encoded),
        })
    }
}

/// Prefix raw PCM samples with a canonical 44-byte RIFF/WAVE header.
fn wrap_pcm_in_wav(pcm: &[u8], channels: u16, sample_rate: u32, bits_per_sample: u16) -> Vec<u8> {
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = sample_rate * block_align as u32;
    let data_len = pcm.len() as u32;

    let mut wav = Vec::with_capacity(44 + pcm.len());
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes()); // PCM fmt chunk size
    wav.extend_from_slice(&1u16.to_le_bytes()); // uncompressed PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&bits_per_sample.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.extend_from_slice(pcm);
    wav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_header_layout() {
        let pcm = [0u8; 480]; // 10ms of silence at 24kHz/16-bit mono
        let wav = wrap_pcm_in_wav(&pcm, 1, 24_000, 16);

        assert_eq!(wav.len(), 44 + 480);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes(wav[4..8].try_into().unwrap()), 36 + 480);
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        // channels
        assert_eq!(u16::from_le_bytes(wav[22..24].try_into().unwrap()), 1);
        // sample rate
        assert_eq!(
            u32::from_le_bytes(wav[24..28].try_into().unwrap()),
            24_000
        );
        // byte rate = 24000 * 1 * 16/8
        assert_eq!(
            u32::from_le_bytes(wav[28..32].try_into().unwrap()),
            48_000
        );
        // block align and bit depth
        assert_eq!(u16::from_le_bytes(wav[32..34].try_into().unwrap()), 2);
        assert_eq!(u16::from_le_bytes(wav[34..36].try_into().unwrap()), 16);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32::from_le_bytes(wav[40..44].try_into().unwrap()), 480);
    }

    #[test]
    fn test_wav_wraps_payload_unchanged() {
        let pcm: Vec<u8> = (0..=255).collect();
        let wav = wrap_pcm_in_wav(&pcm, 1, 24_000, 16);
        assert_eq!(&wav[44..], pcm.as_slice());
    }
}
