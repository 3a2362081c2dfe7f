//! Narrative text with an optional typewriter reveal.

use escape_rules::PresentationConfig;
use std::str::CharIndices;
use std::time::Duration;

/// A block of story text with its location and mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeView {
    pub text: String,
    pub location: Option<String>,
    pub mood: Option<String>,
    pub typewriter: bool,
    /// Delay before each revealed character.
    pub speed: Duration,
}

impl NarrativeView {
    /// Create a view with the typewriter enabled at the default speed.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: None,
            mood: None,
            typewriter: true,
            speed: PresentationConfig::default().typewriter_speed(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn with_typewriter(mut self, enabled: bool) -> Self {
        self.typewriter = enabled;
        self
    }

    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    /// Take the typewriter speed from the presentation config.
    pub fn with_config(self, config: &PresentationConfig) -> Self {
        self.with_speed(config.typewriter_speed())
    }

    /// "📍 location · mood", or whichever part is present.
    pub fn header(&self) -> Option<String> {
        match (&self.location, &self.mood) {
            (Some(location), Some(mood)) => Some(format!("📍 {} · {}", location, mood)),
            (Some(location), None) => Some(format!("📍 {}", location)),
            (None, Some(mood)) => Some(mood.clone()),
            (None, None) => None,
        }
    }

    /// The fully revealed view.
    pub fn render(&self) -> String {
        match self.header() {
            Some(header) => format!("{}\n\n{}", header, self.text),
            None => self.text.clone(),
        }
    }

    /// Frames of the reveal animation.
    pub fn frames(&self) -> Typewriter<'_> {
        Typewriter::new(&self.text, self.typewriter, self.speed)
    }

    /// Time the full reveal takes.
    pub fn reveal_duration(&self) -> Duration {
        if self.typewriter {
            self.speed * self.text.chars().count() as u32
        } else {
            Duration::ZERO
        }
    }
}

/// One step of the reveal: the visible prefix and how long to wait before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterFrame<'a> {
    pub visible: &'a str,
    pub delay: Duration,
}

/// Iterator revealing text one character per frame.
///
/// With the effect disabled, or for empty text, yields a single frame with the
/// whole text and no delay.
#[derive(Debug, Clone)]
pub struct Typewriter<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    speed: Duration,
    instant: bool,
    finished: bool,
}

impl<'a> Typewriter<'a> {
    pub fn new(text: &'a str, enabled: bool, speed: Duration) -> Self {
        Self {
            text,
            chars: text.char_indices(),
            speed,
            instant: !enabled || text.is_empty(),
            finished: false,
        }
    }
}

impl<'a> Iterator for Typewriter<'a> {
    type Item = TypewriterFrame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.instant {
            self.finished = true;
            return Some(TypewriterFrame {
                visible: self.text,
                delay: Duration::ZERO,
            });
        }

        match self.chars.next() {
            Some((start, c)) => Some(TypewriterFrame {
                visible: &self.text[..start + c.len_utf8()],
                delay: self.speed,
            }),
            None => {
                self.finished = true;
                None
            }
        }
    }
}
