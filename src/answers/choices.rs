//! Closed choice sets for the enumerated intake questions
//!
//! Each `*_CHOICES` list holds the display strings in variant order; the
//! enums index into it.

const GOAL_CHOICES: &[&str] = &[
    "Homework help",
    "Concept review",
    "Test/quiz prep",
    "Project/paper guidance",
    "Skill development",
];
const URGENCY_CHOICES: &[&str] = &["Today/24h", "This week", "Planning ahead"];
const CONFIDENCE_CHOICES: &[&str] = &[
    "Very confused—start from basics",
    "Somewhat confused—need clarification + practice",
    "Mostly confident—need refinement/test strategies",
];
const STYLE_CHOICES: &[&str] = &[
    "Step-by-step explanations",
    "Practice problems/drills",
    "Brainstorming",
    "Review my work + feedback",
];

/// What the client wants out of the session (a1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainGoal {
    HomeworkHelp,
    ConceptReview,
    TestPrep,
    ProjectGuidance,
    SkillDevelopment,
}

impl MainGoal {
    pub const ALL: [Self; 5] = [
        Self::HomeworkHelp,
        Self::ConceptReview,
        Self::TestPrep,
        Self::ProjectGuidance,
        Self::SkillDevelopment,
    ];

    pub fn as_str(&self) -> &'static str {
        GOAL_CHOICES[*self as usize]
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// How soon the session is needed (a2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Today,
    ThisWeek,
    PlanningAhead,
}

impl Urgency {
    pub const ALL: [Self; 3] = [Self::Today, Self::ThisWeek, Self::PlanningAhead];

    pub fn as_str(&self) -> &'static str {
        URGENCY_CHOICES[*self as usize]
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Self-reported confidence with the material (a3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    VeryConfused,
    SomewhatConfused,
    MostlyConfident,
}

impl Confidence {
    pub const ALL: [Self; 3] = [
        Self::VeryConfused,
        Self::SomewhatConfused,
        Self::MostlyConfident,
    ];

    pub fn as_str(&self) -> &'static str {
        CONFIDENCE_CHOICES[*self as usize]
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Preferred teaching style (a4, optional)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredStyle {
    StepByStep,
    PracticeDrills,
    Brainstorming,
    ReviewAndFeedback,
}

impl PreferredStyle {
    pub const ALL: [Self; 4] = [
        Self::StepByStep,
        Self::PracticeDrills,
        Self::Brainstorming,
        Self::ReviewAndFeedback,
    ];

    pub fn as_str(&self) -> &'static str {
        STYLE_CHOICES[*self as usize]
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// One intake question as configured in the scheduling widget
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// Widget slot key (a1..a10)
    pub slot: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Allowed values; empty for free text
    pub choices: &'static [&'static str],
}

/// The ten intake questions in slot order
pub const QUESTIONS: [Question; 10] = [
    Question {
        slot: "a1",
        label: "Main Goal",
        required: true,
        choices: GOAL_CHOICES,
    },
    Question {
        slot: "a2",
        label: "Urgency",
        required: true,
        choices: URGENCY_CHOICES,
    },
    Question {
        slot: "a3",
        label: "Confidence",
        required: true,
        choices: CONFIDENCE_CHOICES,
    },
    Question {
        slot: "a4",
        label: "Preferred Style",
        required: false,
        choices: STYLE_CHOICES,
    },
    Question {
        slot: "a5",
        label: "Subject/Course",
        required: true,
        choices: &[],
    },
    Question {
        slot: "a6",
        label: "Specific Topic",
        required: true,
        choices: &[],
    },
    Question {
        slot: "a7",
        label: "Upcoming (with date)",
        required: false,
        choices: &[],
    },
    Question {
        slot: "a8",
        label: "Materials (comma-separated links)",
        required: false,
        choices: &[],
    },
    Question {
        slot: "a9",
        label: "Anything else",
        required: false,
        choices: &[],
    },
    Question {
        slot: "a10",
        label: "Grade/Level",
        required: false,
        choices: &[],
    },
];
