#![allow(dead_code)]

//! The resume document aggregate edited by the tool.
//!
//! Documents are plain values: handlers take one in, return a new one. The
//! camelCase wire shape matches what the editing UI stores and submits.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub portfolio_url: String,
    /// Free text, paragraph-formatted.
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<NamedTag>,
    pub competencies: Vec<NamedTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub period: String,
    /// The field subject to format conversion. May contain embedded line
    /// breaks and/or a leading bullet glyph per line.
    pub description: String,
}

impl ExperienceEntry {
    /// Placeholder entry created when the user adds a role.
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4(),
            role: "Role Title".to_string(),
            company: "Company".to_string(),
            period: "Start – End".to_string(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub period: String,
}

/// A named label used for both skills and competencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedTag {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("duplicate {section} entry id {id}")]
    DuplicateId { section: &'static str, id: Uuid },
}

impl ResumeDocument {
    /// Checks the id-uniqueness invariant on every sequence.
    ///
    /// Sequence order carries display meaning and is not checked here; only
    /// identity can be violated by a malformed submission.
    pub fn validate(&self) -> Result<(), DocumentError> {
        unique_ids("experience", self.experience.iter().map(|e| e.id))?;
        unique_ids("education", self.education.iter().map(|e| e.id))?;
        unique_ids("skills", self.skills.iter().map(|t| t.id))?;
        unique_ids("competencies", self.competencies.iter().map(|t| t.id))?;
        Ok(())
    }
}

fn unique_ids(
    section: &'static str,
    ids: impl Iterator<Item = Uuid>,
) -> Result<(), DocumentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DocumentError::DuplicateId { section, id });
        }
    }
    Ok(())
}
