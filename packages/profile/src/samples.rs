//! Built-in placeholder content for display contexts.
//!
//! The rendered page must never look blank before the first save, so display
//! components substitute sample content for any collection that is empty (or
//! when no record exists at all). Editing contexts never see these values:
//! the settings dialog seeds from [`ProfileRecord::seed`] and shows the true
//! empty collections, so the user edits reality, not placeholders. The
//! asymmetry is deliberate.

use crate::record::{ProfileRecord, ProjectEntry, ResumeEntry, SkillEntry};

/// Placeholder paragraphs for the About section.
pub const SAMPLE_ABOUT: [&str; 2] = [
    "Hello! I'm a passionate web developer with a love for creating beautiful, \
     functional, and user-centered digital experiences. With expertise in modern \
     web technologies, I bring ideas to life through clean code and creative solutions.",
    "My journey in web development started several years ago, and I've had the \
     privilege of working on diverse projects that have shaped my skills and approach \
     to problem-solving. I believe in continuous learning and staying updated with \
     the latest industry trends.",
];

/// Scalar placeholders for the sidebar.
pub const SAMPLE_NAME: &str = "Dasari Manoj";
pub const SAMPLE_JOB_TITLE: &str = "Web Developer";
pub const SAMPLE_EMAIL: &str = "hello@example.com";
pub const SAMPLE_PHONE: &str = "+1 (555) 123-4567";
pub const SAMPLE_BIRTHDAY: &str = "January 1, 1990";
pub const SAMPLE_LOCATION: &str = "California, USA";

/// `value` if non-empty, otherwise the placeholder. Display-only.
pub fn text_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

pub fn sample_skills() -> Vec<SkillEntry> {
    vec![
        SkillEntry {
            title: "Development".to_string(),
            description: "Building scalable applications with modern frameworks and best practices"
                .to_string(),
        },
        SkillEntry {
            title: "Design".to_string(),
            description: "Creating intuitive and visually appealing user interfaces".to_string(),
        },
        SkillEntry {
            title: "Innovation".to_string(),
            description: "Staying ahead with cutting-edge technologies and approaches".to_string(),
        },
    ]
}

pub fn sample_education() -> Vec<ResumeEntry> {
    vec![
        ResumeEntry {
            title: "Bachelor of Computer Science".to_string(),
            institution: "University of Technology".to_string(),
            period: "2015 - 2019".to_string(),
            description: "Focused on software engineering, web technologies, and computer \
                          systems. Graduated with honors."
                .to_string(),
        },
        ResumeEntry {
            title: "Full Stack Web Development".to_string(),
            institution: "Tech Bootcamp".to_string(),
            period: "2019".to_string(),
            description: "Intensive program covering modern web development frameworks, \
                          databases, and deployment strategies."
                .to_string(),
        },
    ]
}

pub fn sample_experience() -> Vec<ResumeEntry> {
    vec![
        ResumeEntry {
            title: "Senior Frontend Developer".to_string(),
            institution: "Tech Solutions Inc.".to_string(),
            period: "2021 - Present".to_string(),
            description: "Leading development of modern web applications using React, \
                          TypeScript, and cutting-edge technologies. Mentoring junior \
                          developers and establishing best practices."
                .to_string(),
        },
        ResumeEntry {
            title: "Full Stack Developer".to_string(),
            institution: "Digital Agency".to_string(),
            period: "2019 - 2021".to_string(),
            description: "Developed and maintained multiple client websites and web \
                          applications. Collaborated with designers and project managers \
                          to deliver high-quality solutions."
                .to_string(),
        },
    ]
}

pub fn sample_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            title: "E-Commerce Platform".to_string(),
            description: "A full-featured online shopping platform with payment integration, \
                          inventory management, and user authentication."
                .to_string(),
            tags: vec!["React".to_string(), "Node.js".to_string(), "MongoDB".to_string()],
            link: "#".to_string(),
            github: "#".to_string(),
        },
        ProjectEntry {
            title: "Project Management Tool".to_string(),
            description: "Collaborative project management application with real-time updates, \
                          task tracking, and team communication."
                .to_string(),
            tags: vec!["TypeScript".to_string(), "React".to_string(), "Firebase".to_string()],
            link: "#".to_string(),
            github: "#".to_string(),
        },
        ProjectEntry {
            title: "Portfolio Website".to_string(),
            description: "Modern, responsive portfolio website with smooth animations and \
                          optimized performance."
                .to_string(),
            tags: vec![
                "React".to_string(),
                "Tailwind CSS".to_string(),
                "Vite".to_string(),
            ],
            link: "#".to_string(),
            github: "#".to_string(),
        },
        ProjectEntry {
            title: "Weather Dashboard".to_string(),
            description: "Real-time weather application with forecasts, location search, and \
                          interactive maps."
                .to_string(),
            tags: vec![
                "React".to_string(),
                "API Integration".to_string(),
                "Charts".to_string(),
            ],
            link: "#".to_string(),
            github: "#".to_string(),
        },
    ]
}

/// Skills to render: the stored collection, or the samples when it is empty
/// or no record exists. The stored record itself is never modified.
pub fn display_skills(record: Option<&ProfileRecord>) -> Vec<SkillEntry> {
    match record {
        Some(r) if !r.skills.is_empty() => r.skills.clone(),
        _ => sample_skills(),
    }
}

pub fn display_education(record: Option<&ProfileRecord>) -> Vec<ResumeEntry> {
    match record {
        Some(r) if !r.education.is_empty() => r.education.clone(),
        _ => sample_education(),
    }
}

pub fn display_experience(record: Option<&ProfileRecord>) -> Vec<ResumeEntry> {
    match record {
        Some(r) if !r.experience.is_empty() => r.experience.clone(),
        _ => sample_experience(),
    }
}

pub fn display_projects(record: Option<&ProfileRecord>) -> Vec<ProjectEntry> {
    match record {
        Some(r) if !r.projects.is_empty() => r.projects.clone(),
        _ => sample_projects(),
    }
}

/// About paragraphs to render: the stored text split on blank lines, or the
/// sample paragraphs when nothing is stored.
pub fn display_about(record: Option<&ProfileRecord>) -> Vec<String> {
    match record {
        Some(r) if !r.about_text.trim().is_empty() => r
            .about_text
            .split("\n\n")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        _ => SAMPLE_ABOUT.iter().map(|p| p.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_record_falls_back_to_samples() {
        assert_eq!(display_skills(None), sample_skills());
        assert_eq!(display_projects(None), sample_projects());
    }

    #[test]
    fn test_empty_collection_falls_back_per_collection() {
        let mut record = ProfileRecord::seed();
        record.skills = vec![SkillEntry {
            title: "Rust".to_string(),
            description: String::new(),
        }];
        // skills stored, projects empty: only projects substitute samples
        assert_eq!(display_skills(Some(&record)), record.skills);
        assert_eq!(display_projects(Some(&record)), sample_projects());
    }

    #[test]
    fn test_editing_seed_never_contains_samples() {
        // The display fallback and the edit seed are asymmetric on purpose.
        let seed = ProfileRecord::seed();
        assert!(seed.skills.is_empty());
        assert!(seed.projects.is_empty());
    }

    #[test]
    fn test_text_or() {
        assert_eq!(text_or("", SAMPLE_NAME), SAMPLE_NAME);
        assert_eq!(text_or("Ada", SAMPLE_NAME), "Ada");
    }

    #[test]
    fn test_display_about_splits_paragraphs() {
        let mut record = ProfileRecord::seed();
        record.about_text = "First paragraph.\n\nSecond paragraph.".to_string();
        assert_eq!(
            display_about(Some(&record)),
            vec!["First paragraph.", "Second paragraph."]
        );
        assert_eq!(display_about(None).len(), SAMPLE_ABOUT.len());
    }
}
