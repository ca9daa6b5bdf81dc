//! Browser speech synthesis bridge.
//!
//! The capability is feature-detected once at startup. When the browser
//! has no `speechSynthesis` global the bridge swallows every request and
//! the scene stays a visual-only experience; nothing is surfaced to the
//! player.

use glade_scene::SpeechRequest;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance, Window};

pub struct SpeechBridge {
    synth: Option<SpeechSynthesis>,
}

impl SpeechBridge {
    pub fn new(window: &Window) -> Self {
        let synth = window.speech_synthesis().ok();
        if synth.is_none() {
            log::debug!("speech synthesis unavailable; running silent");
        }
        Self { synth }
    }

    /// A bridge with no synthesis capability.
    pub fn silent() -> Self {
        Self { synth: None }
    }

    /// Speak a sanitized request. Any in-flight utterance is cancelled
    /// first so the newest message always wins.
    pub fn speak(&self, request: &SpeechRequest) {
        let Some(synth) = &self.synth else {
            return;
        };
        if request.text.is_empty() {
            return;
        }

        synth.cancel();
        match SpeechSynthesisUtterance::new_with_text(&request.text) {
            Ok(utterance) => {
                utterance.set_rate(request.rate);
                utterance.set_pitch(request.pitch);
                synth.speak(&utterance);
            }
            Err(err) => log::debug!("utterance construction failed: {err:?}"),
        }
    }
}
