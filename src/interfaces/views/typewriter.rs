use serde::Serialize;

const HERO_PHRASES: [&str; 2] = ["Web Development", "Game Programmer"];
const TYPING_MS: u64 = 150;
const DELETING_MS: u64 = 100;
const PAUSE_MS: u64 = 2000;

/// The hero's type-then-erase animation, precomputed as a frame schedule
/// that the page replays in a loop.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    typing_ms: u64,
    deleting_ms: u64,
    pause_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub text: String,
    /// How long this frame stays before the next one.
    pub delay_ms: u64,
}

impl Typewriter {
    pub fn new(phrases: &[&str], typing_ms: u64, deleting_ms: u64, pause_ms: u64) -> Self {
        Typewriter {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            typing_ms,
            deleting_ms,
            pause_ms,
        }
    }

    pub fn hero() -> Self {
        Self::new(&HERO_PHRASES, TYPING_MS, DELETING_MS, PAUSE_MS)
    }

    /// First phrase, shown before the animation starts.
    pub fn initial_text(&self) -> &str {
        self.phrases.first().map(String::as_str).unwrap_or("")
    }

    /// One full cycle over every phrase. Each phrase of `n` characters
    /// contributes `2n` frames: empty, typed prefixes, full text (held for
    /// the pause), then the shrinking prefixes.
    pub fn frames(&self) -> Vec<Frame> {
        let mut frames = Vec::new();

        for phrase in self.phrases.iter().filter(|p| !p.is_empty()) {
            let chars: Vec<char> = phrase.chars().collect();
            let prefix = |len: usize| chars[..len].iter().collect::<String>();
            let n = chars.len();

            for len in 0..n {
                frames.push(Frame { text: prefix(len), delay_ms: self.typing_ms });
            }
            frames.push(Frame { text: phrase.clone(), delay_ms: self.pause_ms });
            for len in (1..n).rev() {
                frames.push(Frame { text: prefix(len), delay_ms: self.deleting_ms });
            }
        }

        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_phrase_schedule() {
        let frames = Typewriter::new(&["Hi"], 150, 100, 2000).frames();
        let expected = vec![
            Frame { text: "".into(), delay_ms: 150 },
            Frame { text: "H".into(), delay_ms: 150 },
            Frame { text: "Hi".into(), delay_ms: 2000 },
            Frame { text: "H".into(), delay_ms: 100 },
        ];
        assert_eq!(frames, expected);
    }

    #[test]
    fn each_phrase_contributes_twice_its_length() {
        let writer = Typewriter::hero();
        let expected: usize = HERO_PHRASES.iter().map(|p| 2 * p.chars().count()).sum();
        assert_eq!(writer.frames().len(), expected);
        assert_eq!(writer.initial_text(), "Web Development");
    }

    #[test]
    fn multibyte_characters_are_typed_whole() {
        let frames = Typewriter::new(&["é!"], 1, 1, 1).frames();
        assert_eq!(frames[1].text, "é");
    }
}
