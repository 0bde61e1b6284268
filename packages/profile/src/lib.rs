pub mod collection;
pub mod draft;
pub mod record;
pub mod samples;

pub use collection::{CollectionError, CollectionOp, EntryFields};
pub use draft::{DraftState, ProfileDraft, SaveToken};
pub use record::{
    Collection, ProfileRecord, ProjectEntry, ResumeEntry, ScalarField, SkillEntry,
};
