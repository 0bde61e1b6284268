//! # Collection editor — immutable operations over ordered entry lists
//!
//! Every edit to a profile collection goes through the pure functions in this
//! module. They take a borrowed slice and return a fresh `Vec`, so the caller
//! can swap the result into the draft while earlier snapshots stay valid —
//! there is no shared mutable list aliased between callbacks.
//!
//! Field addressing uses the wire field names (`"title"`, `"period"`, ...)
//! through the [`EntryFields`] trait, which lets the settings dialog drive all
//! four collections with one [`CollectionOp`] value instead of a setter per
//! field per shape.
//!
//! Out-of-range indices cannot occur from correct UI wiring; they surface as
//! [`CollectionError::IndexOutOfBounds`] so a bug shows up as an error value
//! rather than a panic.

use thiserror::Error;

use crate::record::{ProjectEntry, ResumeEntry, SkillEntry};

/// Programming-error signals from collection operations. Never user-facing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("index {index} out of bounds for collection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("unknown field `{0}` for this entry shape")]
    UnknownField(String),
}

/// An entry shape that can be created blank and edited by wire field name.
pub trait EntryFields: Clone + Default {
    /// A fresh entry with every field empty.
    fn blank() -> Self {
        Self::default()
    }

    /// Replace the named field with `value`.
    fn set_field(&mut self, field: &str, value: String) -> Result<(), CollectionError>;

    /// Replace the tag list from a raw comma-separated string. Only projects
    /// carry tags; the default rejects the operation.
    fn set_tags(&mut self, _raw: &str) -> Result<(), CollectionError> {
        Err(CollectionError::UnknownField("tags".to_string()))
    }
}

impl EntryFields for SkillEntry {
    fn set_field(&mut self, field: &str, value: String) -> Result<(), CollectionError> {
        match field {
            "title" => self.title = value,
            "description" => self.description = value,
            other => return Err(CollectionError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

impl EntryFields for ResumeEntry {
    fn set_field(&mut self, field: &str, value: String) -> Result<(), CollectionError> {
        match field {
            "title" => self.title = value,
            "institution" => self.institution = value,
            "period" => self.period = value,
            "description" => self.description = value,
            other => return Err(CollectionError::UnknownField(other.to_string())),
        }
        Ok(())
    }
}

impl EntryFields for ProjectEntry {
    fn set_field(&mut self, field: &str, value: String) -> Result<(), CollectionError> {
        match field {
            "title" => self.title = value,
            "description" => self.description = value,
            "link" => self.link = value,
            "github" => self.github = value,
            other => return Err(CollectionError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    fn set_tags(&mut self, raw: &str) -> Result<(), CollectionError> {
        self.tags = parse_tags(raw);
        Ok(())
    }
}

/// One edit against a single collection, applied by
/// [`ProfileDraft::apply`](crate::draft::ProfileDraft::apply).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionOp {
    /// Add a blank entry at the end.
    Append,
    /// Replace one field of the entry at `index`.
    UpdateField {
        index: usize,
        field: String,
        value: String,
    },
    /// Replace the tag list of the project at `index` from raw input text.
    SetTags { index: usize, raw: String },
    /// Remove the entry at `index`; later entries shift down by one.
    RemoveAt { index: usize },
}

/// Returns a new list with a blank entry appended. The input is untouched.
pub fn append<T: EntryFields>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.push(T::blank());
    out
}

/// Returns a new list identical except that entry `index`'s `field` is
/// replaced by `value`. Unaffected entries keep their positions.
pub fn update_field<T: EntryFields>(
    items: &[T],
    index: usize,
    field: &str,
    value: String,
) -> Result<Vec<T>, CollectionError> {
    check_bounds(items, index)?;
    let mut out = items.to_vec();
    out[index].set_field(field, value)?;
    Ok(out)
}

/// Returns a new list with the entry at `index` excluded.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Result<Vec<T>, CollectionError> {
    check_bounds(items, index)?;
    let mut out = items.to_vec();
    out.remove(index);
    Ok(out)
}

/// Split a comma-separated string into trimmed tags. Empty segments are kept
/// as empty strings, matching literal split-then-trim semantics.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Apply one [`CollectionOp`] to a list, returning the new list.
pub fn apply<T: EntryFields>(items: &[T], op: CollectionOp) -> Result<Vec<T>, CollectionError> {
    match op {
        CollectionOp::Append => Ok(append(items)),
        CollectionOp::UpdateField {
            index,
            field,
            value,
        } => update_field(items, index, &field, value),
        CollectionOp::SetTags { index, raw } => {
            check_bounds(items, index)?;
            let mut out = items.to_vec();
            out[index].set_tags(&raw)?;
            Ok(out)
        }
        CollectionOp::RemoveAt { index } => remove_at(items, index),
    }
}

fn check_bounds<T>(items: &[T], index: usize) -> Result<(), CollectionError> {
    if index >= items.len() {
        return Err(CollectionError::IndexOutOfBounds {
            index,
            len: items.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(titles: &[&str]) -> Vec<SkillEntry> {
        titles
            .iter()
            .map(|t| SkillEntry {
                title: t.to_string(),
                description: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_append_adds_blank_at_end() {
        let items = skills(&["a", "b"]);
        let out = append(&items);
        assert_eq!(out.len(), items.len() + 1);
        assert_eq!(out[2], SkillEntry::blank());
        // Input untouched
        assert_eq!(items.len(), 2);
        assert_eq!(&out[..2], &items[..]);
    }

    #[test]
    fn test_update_field_changes_exactly_one_field() {
        let items = skills(&["a", "b", "c"]);
        let out = update_field(&items, 1, "title", "Rust".to_string()).unwrap();
        assert_eq!(out[1].title, "Rust");
        assert_eq!(out[1].description, "");
        assert_eq!(out[0], items[0]);
        assert_eq!(out[2], items[2]);
    }

    #[test]
    fn test_update_field_is_idempotent() {
        let items = skills(&["a"]);
        let once = update_field(&items, 0, "title", "Rust".to_string()).unwrap();
        let twice = update_field(&once, 0, "title", "Rust".to_string()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_field_out_of_bounds() {
        let items = skills(&["a"]);
        let err = update_field(&items, 1, "title", "x".to_string()).unwrap_err();
        assert_eq!(err, CollectionError::IndexOutOfBounds { index: 1, len: 1 });
    }

    #[test]
    fn test_update_field_unknown_field() {
        let items = skills(&["a"]);
        let err = update_field(&items, 0, "period", "2020".to_string()).unwrap_err();
        assert_eq!(err, CollectionError::UnknownField("period".to_string()));
    }

    #[test]
    fn test_remove_at_shifts_later_entries_down() {
        let items = skills(&["a", "b", "c", "d"]);
        let out = remove_at(&items, 1).unwrap();
        assert_eq!(out.len(), items.len() - 1);
        let titles: Vec<&str> = out.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_at_out_of_bounds() {
        let items: Vec<SkillEntry> = Vec::new();
        let err = remove_at(&items, 0).unwrap_err();
        assert_eq!(err, CollectionError::IndexOutOfBounds { index: 0, len: 0 });
    }

    #[test]
    fn test_parse_tags_trims_and_keeps_empty_segments() {
        assert_eq!(parse_tags("a, b ,,c"), vec!["a", "b", "", "c"]);
        assert_eq!(parse_tags(""), vec![""]);
        assert_eq!(parse_tags("solo"), vec!["solo"]);
    }

    #[test]
    fn test_set_tags_on_project() {
        let items = vec![ProjectEntry::blank()];
        let out = apply(
            &items,
            CollectionOp::SetTags {
                index: 0,
                raw: "React, Node.js, MongoDB".to_string(),
            },
        )
        .unwrap();
        assert_eq!(out[0].tags, vec!["React", "Node.js", "MongoDB"]);
    }

    #[test]
    fn test_set_tags_rejected_for_tagless_shapes() {
        let items = vec![SkillEntry::blank()];
        let err = apply(
            &items,
            CollectionOp::SetTags {
                index: 0,
                raw: "x".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, CollectionError::UnknownField("tags".to_string()));
    }

    #[test]
    fn test_resume_entry_fields() {
        let items = vec![ResumeEntry::blank()];
        let out = update_field(&items, 0, "institution", "MIT".to_string()).unwrap();
        assert_eq!(out[0].institution, "MIT");
    }

    #[test]
    fn test_project_entry_fields() {
        let items = vec![ProjectEntry::blank()];
        let out = update_field(&items, 0, "github", "https://g".to_string()).unwrap();
        assert_eq!(out[0].github, "https://g");
        assert!(update_field(&items, 0, "tags", "x".to_string()).is_err());
    }
}
