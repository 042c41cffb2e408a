//! Intake answers module for prefill
//!
//! Holds the answer record and the closed choice sets behind it.

mod choices;
mod models;

pub use choices::{Confidence, MainGoal, PreferredStyle, Question, Urgency, QUESTIONS};
pub use models::{present, SessionAnswers};
