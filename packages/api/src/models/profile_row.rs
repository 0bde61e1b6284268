//! # Profile row — the stored shape of a [`ProfileRecord`]
//!
//! One row per owner in the `profiles` table: the twelve scalar fields as
//! `TEXT NOT NULL DEFAULT ''` columns, the four collections as `JSONB`
//! columns (via [`sqlx::types::Json`]), plus audit timestamps. The row is
//! created implicitly by the first upsert in `save_profile` and never deleted
//! by this crate.

use chrono::{DateTime, Utc};
use profile::{ProfileRecord, ProjectEntry, ResumeEntry, SkillEntry};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Full profile record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
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
    pub skills: Json<Vec<SkillEntry>>,
    pub education: Json<Vec<ResumeEntry>>,
    pub experience: Json<Vec<ResumeEntry>>,
    pub projects: Json<Vec<ProjectEntry>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRow {
    /// Convert to the wire record for client consumption.
    pub fn into_record(self) -> ProfileRecord {
        ProfileRecord {
            full_name: self.full_name,
            job_title: self.job_title,
            email: self.email,
            phone: self.phone,
            birthday: self.birthday,
            location: self.location,
            bio: self.bio,
            avatar_url: self.avatar_url,
            github_url: self.github_url,
            linkedin_url: self.linkedin_url,
            twitter_url: self.twitter_url,
            about_text: self.about_text,
            skills: self.skills.0,
            education: self.education.0,
            experience: self.experience.0,
            projects: self.projects.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_row() -> ProfileRow {
        ProfileRow {
            user_id: Uuid::nil(),
            full_name: String::new(),
            job_title: String::new(),
            email: String::new(),
            phone: String::new(),
            birthday: String::new(),
            location: String::new(),
            bio: String::new(),
            avatar_url: String::new(),
            github_url: String::new(),
            linkedin_url: String::new(),
            twitter_url: String::new(),
            about_text: String::new(),
            skills: Json(Vec::new()),
            education: Json(Vec::new()),
            experience: Json(Vec::new()),
            projects: Json(Vec::new()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_to_record_preserves_fields_and_order() {
        let mut row = blank_row();
        row.full_name = "Ada Lovelace".to_string();
        row.job_title = "Analyst".to_string();
        row.skills = Json(vec![
            SkillEntry {
                title: "first".to_string(),
                description: String::new(),
            },
            SkillEntry {
                title: "second".to_string(),
                description: String::new(),
            },
        ]);

        let record = row.into_record();
        assert_eq!(record.full_name, "Ada Lovelace");
        assert_eq!(record.skills[0].title, "first");
        assert_eq!(record.skills[1].title, "second");
        assert!(record.projects.is_empty());
    }

    #[test]
    fn test_collection_columns_decode_from_stored_json() {
        // Shape of a JSONB column in storage: entry fields absent from the
        // stored array come back empty rather than failing the decode.
        let stored = r#"[{"title": "Engine", "tags": ["math", "sim"]}]"#;
        let mut row = blank_row();
        row.projects = Json(serde_json::from_str(stored).unwrap());

        let record = row.into_record();
        assert_eq!(record.projects[0].title, "Engine");
        assert_eq!(record.projects[0].tags, vec!["math", "sim"]);
        assert_eq!(record.projects[0].description, "");
        assert_eq!(record.projects[0].link, "");
    }
}
