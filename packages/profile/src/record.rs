//! # Profile record — the document behind the portfolio page
//!
//! Defines the one record the whole site renders from. A [`ProfileRecord`] is
//! owned by a single authenticated user and travels as a flat map of scalar
//! string fields plus four array-valued collection fields. These types are
//! `Serialize + Deserialize` so they can cross the server/client boundary via
//! Dioxus server functions.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`ProfileRecord`] | The full profile: personal scalars (name, title, contact, bio, social links) and the four ordered collections (`skills`, `education`, `experience`, `projects`). |
//! | [`SkillEntry`] | One card in the About section: `{title, description}`. |
//! | [`ResumeEntry`] | One timeline item in the Resume section, shared by education and experience: `{title, institution, period, description}`. |
//! | [`ProjectEntry`] | One card in the Portfolio section: `{title, description, tags, link, github}`. |
//!
//! ## Wire behaviour
//!
//! Every field carries `#[serde(default)]`, so a field absent in storage
//! deserializes to an empty string / empty vec rather than an error. Unknown
//! fields are rejected (`deny_unknown_fields`) instead of being passed through
//! silently — the record shape is closed, not an open bag of fields.
//!
//! Collection entries have positional identity only: removing entry `i`
//! shifts all later entries down by one. Order is display order.

use serde::{Deserialize, Serialize};

/// The complete profile document, one per owner identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileRecord {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub birthday: String,
    pub location: String,
    pub bio: String,
    pub avatar_url: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub about_text: String,
    pub skills: Vec<SkillEntry>,
    pub education: Vec<ResumeEntry>,
    pub experience: Vec<ResumeEntry>,
    pub projects: Vec<ProjectEntry>,
}

/// A skill card: short title plus a one-line description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillEntry {
    pub title: String,
    pub description: String,
}

/// A resume timeline item. Education and experience share this shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResumeEntry {
    pub title: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

/// A portfolio project card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: String,
    pub github: String,
}

/// Names one of the four collection fields of a [`ProfileRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Skills,
    Education,
    Experience,
    Projects,
}

/// Names one of the scalar string fields of a [`ProfileRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarField {
    FullName,
    JobTitle,
    Email,
    Phone,
    Birthday,
    Location,
    Bio,
    AvatarUrl,
    GithubUrl,
    LinkedinUrl,
    TwitterUrl,
    AboutText,
}

impl ProfileRecord {
    /// The record an editing session starts from when nothing is stored yet:
    /// every scalar empty except the job title, every collection empty.
    /// Sample display content is never seeded here — what the user edits is
    /// exactly what will be saved.
    pub fn seed() -> Self {
        Self {
            job_title: "Web Developer".to_string(),
            ..Self::default()
        }
    }

    /// Replace one scalar field. Accepts any string; no validation beyond that.
    pub fn set_scalar(&mut self, field: ScalarField, value: String) {
        match field {
            ScalarField::FullName => self.full_name = value,
            ScalarField::JobTitle => self.job_title = value,
            ScalarField::Email => self.email = value,
            ScalarField::Phone => self.phone = value,
            ScalarField::Birthday => self.birthday = value,
            ScalarField::Location => self.location = value,
            ScalarField::Bio => self.bio = value,
            ScalarField::AvatarUrl => self.avatar_url = value,
            ScalarField::GithubUrl => self.github_url = value,
            ScalarField::LinkedinUrl => self.linkedin_url = value,
            ScalarField::TwitterUrl => self.twitter_url = value,
            ScalarField::AboutText => self.about_text = value,
        }
    }

    /// Read one scalar field.
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::FullName => &self.full_name,
            ScalarField::JobTitle => &self.job_title,
            ScalarField::Email => &self.email,
            ScalarField::Phone => &self.phone,
            ScalarField::Birthday => &self.birthday,
            ScalarField::Location => &self.location,
            ScalarField::Bio => &self.bio,
            ScalarField::AvatarUrl => &self.avatar_url,
            ScalarField::GithubUrl => &self.github_url,
            ScalarField::LinkedinUrl => &self.linkedin_url,
            ScalarField::TwitterUrl => &self.twitter_url,
            ScalarField::AboutText => &self.about_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_defaults() {
        let record = ProfileRecord::seed();
        assert_eq!(record.job_title, "Web Developer");
        assert_eq!(record.full_name, "");
        assert!(record.skills.is_empty());
        assert!(record.education.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.projects.is_empty());
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let record: ProfileRecord =
            serde_json::from_str(r#"{"full_name": "Ada Lovelace"}"#).unwrap();
        assert_eq!(record.full_name, "Ada Lovelace");
        assert_eq!(record.job_title, "");
        assert!(record.projects.is_empty());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<ProfileRecord, _> =
            serde_json::from_str(r#"{"full_name": "Ada", "favourite_colour": "mauve"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_entry_fields_default_to_empty() {
        let entry: ProjectEntry = serde_json::from_str(r#"{"title": "Engine"}"#).unwrap();
        assert_eq!(entry.title, "Engine");
        assert_eq!(entry.description, "");
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = ProfileRecord {
            full_name: "Ada Lovelace".to_string(),
            skills: vec![SkillEntry {
                title: "Analysis".to_string(),
                description: "Notes on the Analytical Engine".to_string(),
            }],
            projects: vec![ProjectEntry {
                title: "Engine".to_string(),
                tags: vec!["math".to_string(), "".to_string()],
                ..ProjectEntry::default()
            }],
            ..ProfileRecord::seed()
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ProfileRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_set_scalar_replaces_one_field() {
        let mut record = ProfileRecord::seed();
        record.set_scalar(ScalarField::Location, "California, USA".to_string());
        assert_eq!(record.location, "California, USA");
        assert_eq!(record.scalar(ScalarField::Location), "California, USA");
        // Everything else untouched
        assert_eq!(record.job_title, "Web Developer");
        assert_eq!(record.full_name, "");
    }
}
