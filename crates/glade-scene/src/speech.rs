//! Speech requests handed to the host's synthesis bridge.
//!
//! The scene never talks to the browser itself; it queues a sanitized
//! [`SpeechRequest`] on the context and the web bridge decides whether a
//! synthesis capability exists at all. Utterance text is stripped of
//! emoji and pictographic characters before it ever leaves this module,
//! since synthesizers read them out loud by name.

/// Default speaking rate, slightly slower than the voice's native pace.
pub const DEFAULT_RATE: f32 = 0.95;
/// Default pitch, slightly above neutral.
pub const DEFAULT_PITCH: f32 = 1.05;

/// A fire-and-forget utterance for the host to synthesize.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// Sanitized text: pictographs removed, whitespace trimmed.
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
}

impl SpeechRequest {
    /// Build a request from raw display text, sanitizing it on the way in.
    pub fn say(text: &str) -> Self {
        Self {
            text: sanitize(text),
            rate: DEFAULT_RATE,
            pitch: DEFAULT_PITCH,
        }
    }
}

/// Strip emoji and pictographic characters and trim the result.
/// Non-pictographic text passes through unchanged apart from the trim.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !is_pictographic(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Whether a character belongs to the emoji/pictographic blocks.
/// Covers the planes the Unicode `Extended_Pictographic` property lives in,
/// plus the joiners and variation selectors that glue emoji sequences
/// together.
fn is_pictographic(c: char) -> bool {
    matches!(u32::from(c),
        // Misc symbols, dingbats (☀..➿ includes ❤)
        0x2600..=0x27BF
        // Misc symbols and arrows (⬀..⯿ includes ⭐)
        | 0x2B00..=0x2BFF
        // The emoji plane: pictographs, emoticons, transport, flags,
        // supplemental symbols, extended-A (includes 💙)
        | 0x1F000..=0x1FAFF
        // Zero-width joiner and variation selectors
        | 0x200D
        | 0xFE00..=0xFE0F
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emoji_and_trims() {
        assert_eq!(sanitize("You're doing amazing 💙"), "You're doing amazing");
    }

    #[test]
    fn strips_emoji_sequences() {
        // Heavy black heart + variation selector-16
        assert_eq!(sanitize("❤\u{fe0f}"), "");
        assert_eq!(sanitize("well ❤\u{fe0f} done"), "well  done");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(sanitize("  keep going!  "), "keep going!");
    }

    #[test]
    fn non_emoji_unicode_is_preserved() {
        assert_eq!(sanitize("très bien ✨"), "très bien");
    }

    #[test]
    fn say_applies_defaults() {
        let req = SpeechRequest::say("You're doing amazing 💙");
        assert_eq!(req.text, "You're doing amazing");
        assert_eq!(req.rate, DEFAULT_RATE);
        assert_eq!(req.pitch, DEFAULT_PITCH);
    }
}
