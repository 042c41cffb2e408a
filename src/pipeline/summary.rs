//! Tutor-facing summary of the intake answers

use crate::answers::{present, SessionAnswers};

/// Shared cap for any text sent to a widget free-text field
pub const DEFAULT_CLIP_LIMIT: usize = 500;

/// Trim `s` and keep at most `max` characters of it.
///
/// A cut that lands on whitespace drops that trailing whitespace too, so
/// clipping an already clipped string is a no-op.
pub fn clip(s: &str, max: usize) -> String {
    let trimmed = s.trim();
    match trimmed.char_indices().nth(max) {
        Some((end, _)) => trimmed[..end].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}

/// Whether `s` parses as an absolute http(s) URL.
///
/// Not applied when rendering materials; non-link text passes through.
pub fn is_url_like(s: &str) -> bool {
    url::Url::parse(s.trim())
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Split a comma-separated materials list, drop blank items and rejoin.
pub fn normalize_materials(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compose the summary block, one labelled line per answered question.
pub fn compose(answers: &SessionAnswers) -> String {
    compose_with_limit(answers, DEFAULT_CLIP_LIMIT)
}

pub(crate) fn compose_with_limit(answers: &SessionAnswers, clip_limit: usize) -> String {
    let mut lines = Vec::with_capacity(10);

    lines.push(format!("Goal: {}", answers.goal));
    lines.push(format!("Urgency: {}", answers.urgency));
    lines.push(format!("Confidence: {}", answers.confidence));
    if let Some(style) = present(&answers.style) {
        lines.push(format!("Style: {}", style));
    }
    lines.push(format!("Course: {}", answers.subject));
    lines.push(format!("Topic: {}", answers.topic));
    if let Some(upcoming) = present(&answers.upcoming) {
        lines.push(format!("Upcoming: {}", upcoming));
    }
    if let Some(materials) = present(&answers.materials) {
        lines.push(format!("Materials: {}", normalize_materials(materials)));
    }
    if let Some(notes) = present(&answers.notes) {
        lines.push(format!("Notes: {}", clip(notes, clip_limit)));
    }
    if let Some(level) = present(&answers.level) {
        lines.push(format!("Level: {}", level));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_only() -> SessionAnswers {
        SessionAnswers {
            goal: "Concept review".to_string(),
            urgency: "Planning ahead".to_string(),
            confidence: "Very confused—start from basics".to_string(),
            subject: "Algebra II".to_string(),
            topic: "Logarithms".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn required_only_yields_five_lines_in_order() {
        let summary = compose(&required_only());
        let labels: Vec<_> = summary
            .lines()
            .map(|l| l.split(':').next().unwrap())
            .collect();
        assert_eq!(labels, ["Goal", "Urgency", "Confidence", "Course", "Topic"]);
    }

    #[test]
    fn optional_lines_follow_fixed_order() {
        let answers = SessionAnswers {
            style: Some("Brainstorming".to_string()),
            upcoming: Some("Quiz on 3/14".to_string()),
            materials: Some("notes.pdf".to_string()),
            notes: Some("  please bring examples  ".to_string()),
            level: Some("10th grade".to_string()),
            ..required_only()
        };

        let summary = compose(&answers);
        assert_eq!(
            summary,
            "Goal: Concept review\n\
             Urgency: Planning ahead\n\
             Confidence: Very confused—start from basics\n\
             Style: Brainstorming\n\
             Course: Algebra II\n\
             Topic: Logarithms\n\
             Upcoming: Quiz on 3/14\n\
             Materials: notes.pdf\n\
             Notes: please bring examples\n\
             Level: 10th grade"
        );
    }

    #[test]
    fn empty_optional_answers_are_omitted() {
        let answers = SessionAnswers {
            style: Some(String::new()),
            notes: Some(String::new()),
            ..required_only()
        };
        assert_eq!(compose(&answers).lines().count(), 5);
    }

    #[test]
    fn materials_drop_blank_items_and_trim() {
        let answers = SessionAnswers {
            materials: Some("http://a.com/x.pdf,  , http://b.com/y.pdf".to_string()),
            ..required_only()
        };
        let summary = compose(&answers);
        assert!(summary
            .lines()
            .any(|l| l == "Materials: http://a.com/x.pdf, http://b.com/y.pdf"));
    }

    #[test]
    fn materials_keep_non_links() {
        assert_eq!(
            normalize_materials("chapter 4 worksheet, https://x.org/a"),
            "chapter 4 worksheet, https://x.org/a"
        );
    }

    #[test]
    fn url_predicate_accepts_only_http_schemes() {
        assert!(is_url_like(" https://example.com/a.pdf "));
        assert!(is_url_like("http://example.com"));
        assert!(!is_url_like("ftp://example.com/file"));
        assert!(!is_url_like("chapter 4 worksheet"));
    }

    #[test]
    fn clip_short_input_is_trimmed_only() {
        assert_eq!(clip("  hello  ", 500), "hello");
        assert_eq!(clip("", 500), "");
    }

    #[test]
    fn clip_truncates_hard_at_limit() {
        let long = "x".repeat(600);
        assert_eq!(clip(&long, 500).chars().count(), 500);

        let exact = "y".repeat(500);
        assert_eq!(clip(&exact, 500), exact);
    }

    #[test]
    fn clip_never_ends_on_whitespace() {
        let s = "z ".repeat(400);
        let clipped = clip(&s, 500);
        assert_eq!(clipped.chars().count(), 499);
        assert!(clipped.ends_with('z'));
    }

    #[test]
    fn clip_counts_characters_not_bytes() {
        let s = "é".repeat(10);
        assert_eq!(clip(&s, 4), "éééé");
    }

    #[test]
    fn clip_is_idempotent() {
        let cases = [
            String::new(),
            "   a  ".to_string(),
            "z ".repeat(400),
            "—".repeat(700),
        ];
        for s in &cases {
            let once = clip(s, 500);
            assert_eq!(clip(&once, 500), once);
        }
    }

    #[test]
    fn notes_are_clipped_in_summary() {
        let answers = SessionAnswers {
            notes: Some("n".repeat(800)),
            ..required_only()
        };
        let summary = compose(&answers);
        let notes = summary.lines().find(|l| l.starts_with("Notes: ")).unwrap();
        assert_eq!(notes.len(), "Notes: ".len() + 500);
    }
}
