//! # Draft state controller — the single mutation surface of an edit session
//!
//! A [`ProfileDraft`] holds the one in-progress copy of a [`ProfileRecord`]
//! for the duration of a settings-dialog session (open → close/save). The UI
//! never mutates a record directly; it calls [`set_scalar`], [`apply`] and
//! [`snapshot`] on the draft, and the draft runs every collection edit through
//! the pure operations in [`crate::collection`].
//!
//! ## Session state machine
//!
//! ```text
//! Unloaded → Loaded → Saving → Loaded      (save succeeded)
//!                            → SaveFailed  (save rejected; draft preserved, retryable)
//! ```
//!
//! [`begin_save`] hands out a [`SaveToken`] stamped with the current session
//! epoch; [`resolve_save`] accepts a result only if that epoch still matches.
//! Each [`load`] bumps the epoch, so a network write that resolves after the
//! dialog was closed and reopened is discarded instead of being applied to the
//! new session's draft. Closing the dialog therefore never cancels or corrupts
//! an in-flight save — the visible dialog and the outstanding write are
//! decoupled.
//!
//! [`set_scalar`]: ProfileDraft::set_scalar
//! [`apply`]: ProfileDraft::apply
//! [`snapshot`]: ProfileDraft::snapshot
//! [`begin_save`]: ProfileDraft::begin_save
//! [`resolve_save`]: ProfileDraft::resolve_save
//! [`load`]: ProfileDraft::load

use crate::collection::{self, CollectionError, CollectionOp};
use crate::record::{Collection, ProfileRecord, ScalarField};

/// Where an editing session currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftState {
    #[default]
    Unloaded,
    Loaded,
    Saving,
    SaveFailed,
}

/// Proof that a save was started against a particular session. Opaque to the
/// UI; pass it back to [`ProfileDraft::resolve_save`] when the write resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveToken {
    epoch: u64,
}

/// Holds the draft record for one editing session.
#[derive(Clone, Debug, Default)]
pub struct ProfileDraft {
    record: ProfileRecord,
    state: DraftState,
    epoch: u64,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a fresh session: from the fetched record verbatim, or from
    /// [`ProfileRecord::seed`] when nothing is stored yet. Invalidates any
    /// save token handed out by a previous session.
    pub fn load(&mut self, record: Option<ProfileRecord>) {
        self.record = record.unwrap_or_else(ProfileRecord::seed);
        self.state = DraftState::Loaded;
        self.epoch += 1;
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    /// The current draft, for rendering form fields.
    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// Replace one scalar field of the draft.
    pub fn set_scalar(&mut self, field: ScalarField, value: String) {
        self.record.set_scalar(field, value);
    }

    /// Run one collection operation and swap the result into the draft.
    /// All other fields are untouched; on error the draft is unchanged.
    pub fn apply(&mut self, collection: Collection, op: CollectionOp) -> Result<(), CollectionError> {
        match collection {
            Collection::Skills => self.record.skills = collection::apply(&self.record.skills, op)?,
            Collection::Education => {
                self.record.education = collection::apply(&self.record.education, op)?
            }
            Collection::Experience => {
                self.record.experience = collection::apply(&self.record.experience, op)?
            }
            Collection::Projects => {
                self.record.projects = collection::apply(&self.record.projects, op)?
            }
        }
        Ok(())
    }

    /// A complete copy of the draft for persistence. All scalar fields are
    /// present as strings and all four collections as sequences, possibly
    /// empty — partial drafts never exist.
    pub fn snapshot(&self) -> ProfileRecord {
        self.record.clone()
    }

    /// Enter `Saving` and hand out a token for the in-flight write. Returns
    /// `None` if a save is already outstanding (at most one per session) or
    /// no session is loaded; callers disable the save action on `None`.
    pub fn begin_save(&mut self) -> Option<SaveToken> {
        match self.state {
            DraftState::Loaded | DraftState::SaveFailed => {
                self.state = DraftState::Saving;
                Some(SaveToken { epoch: self.epoch })
            }
            DraftState::Unloaded | DraftState::Saving => None,
        }
    }

    /// Record the outcome of the write identified by `token`. A token from an
    /// earlier session (the draft was re-loaded since) is stale and ignored.
    /// Failure leaves the draft exactly as it was so the save is retryable.
    pub fn resolve_save(&mut self, token: SaveToken, success: bool) {
        if token.epoch != self.epoch {
            return;
        }
        if self.state == DraftState::Saving {
            self.state = if success {
                DraftState::Loaded
            } else {
                DraftState::SaveFailed
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SkillEntry;

    #[test]
    fn test_load_absent_seeds_defaults() {
        let mut draft = ProfileDraft::new();
        draft.load(None);
        assert_eq!(draft.state(), DraftState::Loaded);
        let record = draft.snapshot();
        assert_eq!(record.job_title, "Web Developer");
        assert!(record.skills.is_empty());
        assert!(record.education.is_empty());
        assert!(record.experience.is_empty());
        assert!(record.projects.is_empty());
    }

    #[test]
    fn test_snapshot_round_trips_loaded_record() {
        let mut stored = ProfileRecord::seed();
        stored.full_name = "Ada Lovelace".to_string();
        stored.skills = vec![SkillEntry {
            title: "Analysis".to_string(),
            description: String::new(),
        }];

        let mut draft = ProfileDraft::new();
        draft.load(Some(stored.clone()));
        assert_eq!(draft.snapshot(), stored);
    }

    #[test]
    fn test_append_then_update_then_snapshot() {
        let mut draft = ProfileDraft::new();
        draft.load(None);

        draft.apply(Collection::Skills, CollectionOp::Append).unwrap();
        draft
            .apply(
                Collection::Skills,
                CollectionOp::UpdateField {
                    index: 0,
                    field: "title".to_string(),
                    value: "Rust".to_string(),
                },
            )
            .unwrap();

        let record = draft.snapshot();
        assert_eq!(
            record.skills,
            vec![SkillEntry {
                title: "Rust".to_string(),
                description: String::new(),
            }]
        );
    }

    #[test]
    fn test_apply_touches_only_the_named_collection() {
        let mut draft = ProfileDraft::new();
        draft.load(None);
        draft.set_scalar(ScalarField::FullName, "Ada".to_string());
        draft
            .apply(Collection::Projects, CollectionOp::Append)
            .unwrap();

        let record = draft.snapshot();
        assert_eq!(record.full_name, "Ada");
        assert_eq!(record.projects.len(), 1);
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_failed_apply_leaves_draft_unchanged() {
        let mut draft = ProfileDraft::new();
        draft.load(None);
        let before = draft.snapshot();
        let err = draft.apply(
            Collection::Skills,
            CollectionOp::RemoveAt { index: 3 },
        );
        assert!(err.is_err());
        assert_eq!(draft.snapshot(), before);
    }

    #[test]
    fn test_save_failure_preserves_draft() {
        let mut draft = ProfileDraft::new();
        draft.load(None);
        draft.set_scalar(ScalarField::Bio, "hello".to_string());
        let before = draft.snapshot();

        let token = draft.begin_save().unwrap();
        assert_eq!(draft.state(), DraftState::Saving);
        draft.resolve_save(token, false);

        assert_eq!(draft.state(), DraftState::SaveFailed);
        assert_eq!(draft.snapshot(), before);

        // Retryable: a second save can start
        assert!(draft.begin_save().is_some());
    }

    #[test]
    fn test_at_most_one_in_flight_save() {
        let mut draft = ProfileDraft::new();
        draft.load(None);
        let token = draft.begin_save().unwrap();
        assert!(draft.begin_save().is_none());
        draft.resolve_save(token, true);
        assert_eq!(draft.state(), DraftState::Loaded);
    }

    #[test]
    fn test_save_before_load_is_rejected() {
        let mut draft = ProfileDraft::new();
        assert!(draft.begin_save().is_none());
    }

    #[test]
    fn test_save_result_lands_after_dialog_close() {
        // The write keeps running when the editor closes. With no new
        // session started, its late result resolves normally against the
        // same token instead of leaving the draft stuck in Saving.
        let mut draft = ProfileDraft::new();
        draft.load(None);
        draft.set_scalar(ScalarField::Bio, "hello".to_string());
        let before = draft.snapshot();
        let token = draft.begin_save().unwrap();

        // Editor closed here; the draft and outstanding token are untouched.
        draft.resolve_save(token, true);
        assert_eq!(draft.state(), DraftState::Loaded);
        assert_eq!(draft.snapshot(), before);
    }

    #[test]
    fn test_stale_save_result_is_discarded() {
        let mut draft = ProfileDraft::new();
        draft.load(None);
        let token = draft.begin_save().unwrap();

        // Dialog closed and reopened: a new session starts while the old
        // write is still in flight.
        let mut reopened = ProfileRecord::seed();
        reopened.full_name = "Ada".to_string();
        draft.load(Some(reopened.clone()));

        draft.resolve_save(token, false);
        assert_eq!(draft.state(), DraftState::Loaded);
        assert_eq!(draft.snapshot(), reopened);
    }
}
