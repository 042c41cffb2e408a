//! Prefill payload for the scheduling widget

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::classify::{ClassifierConfig, SubjectClassifier};
use super::summary::{clip, compose_with_limit, DEFAULT_CLIP_LIMIT};
use crate::answers::{present, SessionAnswers};
use crate::{PrefillError, Result};

/// Number of generic answer slots the widget exposes
pub const SLOT_COUNT: usize = 10;

/// Slot carrying the course selection rather than free text
pub const SUBJECT_SLOT: &str = "a5";

const SUMMARY_DIVIDER: &str = "\n\n— Summary —\n";

/// The ten custom-answer slots, kept in `a1`..`a10` order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAnswers {
    values: [String; SLOT_COUNT],
}

impl CustomAnswers {
    /// All slots empty
    pub fn new() -> Self {
        Self {
            values: Default::default(),
        }
    }

    /// Put the same value in every slot
    pub fn broadcast(value: &str) -> Self {
        Self {
            values: std::array::from_fn(|_| value.to_string()),
        }
    }

    /// Overwrite one slot. Unknown keys are ignored and reported as `false`.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match slot_index(key) {
            Some(i) => {
                self.values[i] = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        slot_index(key).map(|i| self.values[i].as_str())
    }

    /// `(key, value)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (slot_key(i), v.as_str()))
    }
}

impl Default for CustomAnswers {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for CustomAnswers {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SLOT_COUNT))?;
        for (key, value) in self.iter() {
            map.serialize_entry(&key, value)?;
        }
        map.end()
    }
}

fn slot_key(index: usize) -> String {
    format!("a{}", index + 1)
}

fn slot_index(key: &str) -> Option<usize> {
    let n: usize = key.strip_prefix('a')?.parse().ok()?;
    (1..=SLOT_COUNT).contains(&n).then(|| n - 1)
}

/// Values handed to the widget before the client opens it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub custom_answers: CustomAnswers,
}

/// Prefill construction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefillConfig {
    /// Character cap for free-text values, at most `DEFAULT_CLIP_LIMIT`
    #[serde(default = "default_clip_limit")]
    pub clip_limit: usize,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

fn default_clip_limit() -> usize {
    DEFAULT_CLIP_LIMIT
}

impl Default for PrefillConfig {
    fn default() -> Self {
        Self {
            clip_limit: default_clip_limit(),
            classifier: ClassifierConfig::default(),
        }
    }
}

/// Builds `Prefill` values from answers
#[derive(Debug, Clone)]
pub struct PrefillBuilder {
    clip_limit: usize,
    classifier: SubjectClassifier,
}

impl PrefillBuilder {
    /// The clip limit can only lower the shared cap, never raise it.
    pub fn new(config: &PrefillConfig) -> Result<Self> {
        if !(1..=DEFAULT_CLIP_LIMIT).contains(&config.clip_limit) {
            return Err(PrefillError::ClipLimit {
                limit: config.clip_limit,
                max: DEFAULT_CLIP_LIMIT,
            });
        }

        Ok(Self {
            clip_limit: config.clip_limit,
            classifier: SubjectClassifier::new(&config.classifier)?,
        })
    }

    pub fn classifier(&self) -> &SubjectClassifier {
        &self.classifier
    }

    /// Summary block with notes clipped to the configured cap
    pub fn summary(&self, answers: &SessionAnswers) -> String {
        compose_with_limit(answers, self.clip_limit)
    }

    /// Summary text that goes into the free-text slots.
    ///
    /// Notes lead when present, followed by the full summary; the whole is
    /// clipped to the shared cap.
    pub fn combined_summary(&self, answers: &SessionAnswers) -> String {
        let full = self.summary(answers);
        let combined = match present(&answers.notes) {
            Some(notes) => format!("{}{}{}", clip(notes, self.clip_limit), SUMMARY_DIVIDER, full),
            None => full,
        };
        clip(&combined, self.clip_limit)
    }

    /// Build the prefill payload.
    ///
    /// The widget does not tell us which slot renders as free text, so the
    /// summary goes into every slot and the course slot is then overridden
    /// with its classified label.
    pub fn build(&self, answers: &SessionAnswers) -> Prefill {
        let summary = self.combined_summary(answers);

        let mut custom_answers = CustomAnswers::broadcast(&summary);
        custom_answers.set(SUBJECT_SLOT, self.classifier.classify(&answers.subject));

        tracing::debug!(
            summary_chars = summary.chars().count(),
            "built prefill payload"
        );

        Prefill {
            name: non_blank(&answers.name),
            email: non_blank(&answers.email),
            custom_answers,
        }
    }
}

impl Default for PrefillBuilder {
    fn default() -> Self {
        Self {
            clip_limit: DEFAULT_CLIP_LIMIT,
            classifier: SubjectClassifier::default(),
        }
    }
}

/// Build a prefill payload with the default settings
pub fn build(answers: &SessionAnswers) -> Prefill {
    PrefillBuilder::default().build(answers)
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
