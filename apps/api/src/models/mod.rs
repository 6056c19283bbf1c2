pub mod document;

pub use document::{
    DocumentError, EducationEntry, ExperienceEntry, NamedTag, ResumeDocument,
};
