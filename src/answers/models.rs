//! Intake form answers

use serde::{Deserialize, Serialize};

use super::choices::{Confidence, MainGoal, PreferredStyle, Urgency};
use crate::{PrefillError, Result};

/// Answers collected from a prospective client.
///
/// Fields serialize under the widget slot keys (`a1`..`a10`) and also accept
/// their descriptive names when read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAnswers {
    /// Contact name
    #[serde(default)]
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Main goal (closed set, see `MainGoal`)
    #[serde(rename = "a1", alias = "goal", default)]
    pub goal: String,

    /// Urgency (closed set, see `Urgency`)
    #[serde(rename = "a2", alias = "urgency", default)]
    pub urgency: String,

    /// Confidence (closed set, see `Confidence`)
    #[serde(rename = "a3", alias = "confidence", default)]
    pub confidence: String,

    /// Preferred style (closed set, see `PreferredStyle`)
    #[serde(rename = "a4", alias = "style", default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Subject or course
    #[serde(rename = "a5", alias = "subject", default)]
    pub subject: String,

    /// Specific topic
    #[serde(rename = "a6", alias = "topic", default)]
    pub topic: String,

    /// Anything coming up, with a date
    #[serde(rename = "a7", alias = "upcoming", default, skip_serializing_if = "Option::is_none")]
    pub upcoming: Option<String>,

    /// Materials, comma-separated (usually links)
    #[serde(rename = "a8", alias = "materials", default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<String>,

    /// Anything else, free text
    #[serde(rename = "a9", alias = "notes", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Grade or level
    #[serde(rename = "a10", alias = "level", default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl SessionAnswers {
    /// Parse answers from a JSON document
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| PrefillError::Parse(e.to_string()))
    }

    /// Parse answers from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| PrefillError::Parse(e.to_string()))
    }

    /// Enumerated answers whose value is outside the allowed set.
    ///
    /// Returns `(slot, value)` pairs. Empty values are not reported.
    pub fn unrecognized_choices(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();

        if !self.goal.is_empty() && MainGoal::parse(&self.goal).is_none() {
            out.push(("a1", self.goal.as_str()));
        }
        if !self.urgency.is_empty() && Urgency::parse(&self.urgency).is_none() {
            out.push(("a2", self.urgency.as_str()));
        }
        if !self.confidence.is_empty() && Confidence::parse(&self.confidence).is_none() {
            out.push(("a3", self.confidence.as_str()));
        }
        if let Some(style) = present(&self.style) {
            if PreferredStyle::parse(style).is_none() {
                out.push(("a4", style));
            }
        }

        out
    }
}

/// An optional answer counts as present when it is set and non-empty.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_slot_keys_and_aliases() {
        let by_slot = SessionAnswers::from_json_str(
            r#"{"name":"Jane","a1":"Homework help","a5":"AP Biology","a9":"hi"}"#,
        )
        .unwrap();
        let by_name = SessionAnswers::from_json_str(
            r#"{"name":"Jane","goal":"Homework help","subject":"AP Biology","notes":"hi"}"#,
        )
        .unwrap();

        assert_eq!(by_slot, by_name);
        assert_eq!(by_slot.goal, "Homework help");
        assert_eq!(by_slot.notes.as_deref(), Some("hi"));
        assert!(by_slot.style.is_none());
    }

    #[test]
    fn reads_toml() {
        let answers = SessionAnswers::from_toml_str(
            "name = \"Sam\"\na2 = \"This week\"\na10 = \"11th grade\"\n",
        )
        .unwrap();
        assert_eq!(answers.urgency, "This week");
        assert_eq!(answers.level.as_deref(), Some("11th grade"));
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        let err = SessionAnswers::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, PrefillError::Parse(_)));
    }

    #[test]
    fn reports_out_of_set_choices() {
        let answers = SessionAnswers {
            goal: "Homework help".to_string(),
            urgency: "Next year".to_string(),
            confidence: String::new(),
            style: Some("Vibes".to_string()),
            ..Default::default()
        };

        assert_eq!(
            answers.unrecognized_choices(),
            vec![("a2", "Next year"), ("a4", "Vibes")]
        );
    }

    #[test]
    fn empty_optional_is_absent() {
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&Some(" ".to_string())), Some(" "));
        assert_eq!(present(&None), None);
    }
}
