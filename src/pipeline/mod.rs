//! Prefill pipeline
//!
//! answers -> summary -> prefill payload -> widget URL.

mod builder;
mod classify;
mod encoder;
mod summary;

pub use builder::{
    build, CustomAnswers, Prefill, PrefillBuilder, PrefillConfig, SLOT_COUNT, SUBJECT_SLOT,
};
pub use classify::{
    ClassifierConfig, SubjectClassifier, SubjectRule, LABEL_BIO, LABEL_CALCULUS, LABEL_SAT,
};
pub use encoder::{encode, encode_component, UrlEncoder};
pub use summary::{clip, compose, is_url_like, normalize_materials, DEFAULT_CLIP_LIMIT};
