//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::answers::{present, SessionAnswers, QUESTIONS};
use crate::cli::args::ConfigCommand;
use crate::config::{Settings, BASE_URL_ENV};
use crate::pipeline::{is_url_like, normalize_materials, Prefill, SubjectClassifier};

/// Print the tutor-facing summary
pub fn show_summary(settings: &Settings, answers_path: &Path) -> Result<()> {
    let answers = load_answers(answers_path)?;
    let builder = settings.prefill_builder()?;

    println!("{}", builder.summary(&answers));
    Ok(())
}

/// Print the prefill payload
pub fn show_prefill(settings: &Settings, answers_path: &Path, json: bool) -> Result<()> {
    let answers = load_answers(answers_path)?;
    let prefill = settings.prefill_builder()?.build(&answers);

    if json {
        println!("{}", serde_json::to_string_pretty(&prefill)?);
    } else {
        print!("{}", format_prefill(&prefill));
    }
    Ok(())
}

/// Print the prefilled widget URL
pub fn show_url(settings: &Settings, answers_path: &Path, base_url: Option<String>) -> Result<()> {
    let base_url = match base_url {
        Some(url) => url,
        None if !settings.widget.base_url.trim().is_empty() => settings.widget.base_url.clone(),
        None => anyhow::bail!(
            "No widget URL given. Pass --base-url, set widget.base_url in config or {}.",
            BASE_URL_ENV
        ),
    };

    let answers = load_answers(answers_path)?;
    let prefill = settings.prefill_builder()?.build(&answers);
    let url = settings.url_encoder().encode(&base_url, &prefill)?;

    println!("{}", url);
    Ok(())
}

/// Print the course option a subject maps to
pub fn classify_subject(settings: &Settings, subject: &str) -> Result<()> {
    let classifier = SubjectClassifier::new(&settings.classifier)
        .context("Invalid [classifier] settings")?;

    match classifier.matching_label(subject) {
        Some(label) => println!("{}", label),
        None => println!("{} (fallback)", classifier.classify(subject)),
    }
    Ok(())
}

/// Print the intake question catalogue
pub fn list_questions() -> Result<()> {
    for question in &QUESTIONS {
        let marker = if question.required { "" } else { " (optional)" };
        println!("{:<4} {}{}", question.slot, question.label, marker);
        for choice in question.choices {
            println!("       - {}", choice);
        }
    }
    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

/// Read answers from a JSON or TOML file, or stdin for `-`.
pub fn load_answers(path: &Path) -> Result<SessionAnswers> {
    let (content, is_toml) = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read answers from stdin")?;
        (buf, false)
    } else {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file: {}", path.display()))?;
        let is_toml = path.extension().is_some_and(|ext| ext == "toml");
        (content, is_toml)
    };

    let answers = if is_toml {
        SessionAnswers::from_toml_str(&content)
    } else {
        SessionAnswers::from_json_str(&content)
    }
    .with_context(|| format!("Failed to parse answers: {}", path.display()))?;

    for (slot, value) in answers.unrecognized_choices() {
        tracing::warn!(slot, value, "answer is not one of the expected choices");
    }
    if let Some(materials) = present(&answers.materials) {
        for item in normalize_materials(materials).split(", ").filter(|i| !i.is_empty()) {
            if !is_url_like(item) {
                tracing::debug!(item, "material is not a link, keeping it as text");
            }
        }
    }

    Ok(answers)
}

fn format_prefill(prefill: &Prefill) -> String {
    let mut output = String::new();
    output.push_str(&format!("name: {}\n", prefill.name.as_deref().unwrap_or("(none)")));
    output.push_str(&format!("email: {}\n", prefill.email.as_deref().unwrap_or("(none)")));

    for (key, value) in prefill.custom_answers.iter() {
        output.push_str(&format!("\n[{}]\n{}\n", key, value));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_json_and_toml_answers() {
        let dir = tempfile::tempdir().unwrap();

        let json = dir.path().join("answers.json");
        std::fs::write(&json, r#"{"a5":"AP Calculus AB","a6":"Limits"}"#).unwrap();
        assert_eq!(load_answers(&json).unwrap().subject, "AP Calculus AB");

        let toml = dir.path().join("answers.toml");
        let mut file = std::fs::File::create(&toml).unwrap();
        writeln!(file, "subject = \"SAT\"\ntopic = \"Reading\"").unwrap();
        assert_eq!(load_answers(&toml).unwrap().topic, "Reading");
    }

    #[test]
    fn missing_answers_file_has_context() {
        let err = load_answers(Path::new("/nonexistent/answers.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read answers file"));
    }

    #[test]
    fn url_without_base_is_rejected() {
        let settings = Settings::default();
        let err = show_url(&settings, Path::new("unused.json"), None).unwrap_err();
        assert!(err.to_string().contains("No widget URL given"));
    }

    #[test]
    fn text_prefill_lists_every_slot() {
        let prefill = crate::pipeline::build(&SessionAnswers::default());
        let text = format_prefill(&prefill);
        assert!(text.starts_with("name: (none)\nemail: (none)\n"));
        assert!(text.contains("[a1]"));
        assert!(text.contains("[a10]"));
    }
}
