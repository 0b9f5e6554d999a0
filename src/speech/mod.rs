//! Korean text-to-speech playback
//!
//! Utterances are spoken by a system TTS binary (`say` on macOS,
//! `espeak-ng` elsewhere). Playback is single-flight: starting a new
//! utterance kills any in-flight one, then waits a short grace delay before
//! the replacement starts. A missing TTS binary degrades to silence with a
//! logged warning; it never surfaces to the user.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::process::{Child, Command};
use tokio::sync::Mutex;

/// Pause between cutting an utterance and starting the next one
const GRACE_DELAY: Duration = Duration::from_millis(200);

/// Base speaking rate in words per minute, scaled by the config multiplier
const BASE_WPM: f32 = 170.0;

/// Handle to the single-flight speech pipeline
#[derive(Debug, Clone)]
pub struct Speech {
    rate: f32,
    current: Arc<Mutex<Option<Child>>>,
}

impl Speech {
    /// Create a pipeline speaking at `rate` times normal speed
    pub fn new(rate: f32) -> Self {
        Self { rate, current: Arc::new(Mutex::new(None)) }
    }

    /// Speak Korean text, replacing any in-flight utterance
    ///
    /// Returns immediately; playback happens on a background task.
    pub fn speak(&self, text: &str) {
        let text = text.to_string();
        let rate = self.rate;
        let current = Arc::clone(&self.current);

        tokio::spawn(async move {
            let mut slot = current.lock().await;

            if let Some(mut child) = slot.take() {
                let _ = child.kill().await;
                tokio::time::sleep(GRACE_DELAY).await;
            }

            match spawn_utterance(&text, rate) {
                Ok(child) => *slot = Some(child),
                Err(err) => tracing::warn!("speech unavailable: {err}"),
            }
        });
    }

    /// Cut any in-flight utterance
    pub fn stop(&self) {
        let current = Arc::clone(&self.current);

        tokio::spawn(async move {
            if let Some(mut child) = current.lock().await.take() {
                let _ = child.kill().await;
            }
        });
    }
}

fn words_per_minute(rate: f32) -> u32 {
    // Keep the synthesizer within an intelligible band
    (BASE_WPM * rate).clamp(60.0, 400.0) as u32
}

#[cfg(target_os = "macos")]
fn spawn_utterance(text: &str, rate: f32) -> io::Result<Child> {
    Command::new("say")
        .args(["-v", "Yuna", "-r", &words_per_minute(rate).to_string()])
        .arg(text)
        .spawn()
}

#[cfg(not(target_os = "macos"))]
fn spawn_utterance(text: &str, rate: f32) -> io::Result<Child> {
    Command::new("espeak-ng")
        .args(["-v", "ko", "-s", &words_per_minute(rate).to_string()])
        .arg(text)
        .spawn()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_per_minute_scales_with_rate() {
        assert_eq!(words_per_minute(1.0), 170);
        assert_eq!(words_per_minute(0.5), 85);
    }

    #[test]
    fn words_per_minute_clamps_extremes() {
        assert_eq!(words_per_minute(0.0), 60);
        assert_eq!(words_per_minute(10.0), 400);
    }
}
