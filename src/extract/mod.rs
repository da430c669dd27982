//! Field extractors.
//!
//! Each extractor is a pure function over the parsed document (or the
//! normalized text) and returns `None` when nothing is found. None of them
//! fail: a miss is an expected outcome, not an error.

mod contact;
pub(crate) mod education;
mod experience;
mod name;
mod skills;

pub use contact::{
    extract_email, extract_github, extract_linkedin, extract_mobile_number,
    DEFAULT_PHONE_PATTERN,
};
pub use education::{extract_degree, extract_education, DEGREE_PATTERN};
pub use experience::{extract_experience, extract_experience_as_of};
pub use name::{extract_name, DEFAULT_NAME_WINDOW};
pub use skills::{extract_skills, SkillsTaxonomy};
