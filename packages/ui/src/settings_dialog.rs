//! Profile settings dialog.
//!
//! The dialog is the only editing surface of the site. It fetches the stored
//! record when it opens, seeds the [`ProfileDraft`] (owned by the parent page
//! so it outlives the dialog), and binds every input to a draft operation.
//! The dialog never runs the save itself: it raises `on_save` and the parent
//! page spawns the write in its own scope, because the dialog is conditionally
//! rendered and a task spawned here would be dropped on unmount. The save
//! button is disabled while a write is outstanding; a write still in flight
//! when the dialog closes keeps running in the parent and is resolved against
//! the draft's session epoch, so a stale result is discarded rather than
//! applied to a newer session.

use dioxus::prelude::*;
use profile::{Collection, CollectionOp, DraftState, ProfileDraft, ScalarField};

use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::icons::{FaPlus, FaTrash};
use crate::Icon;

#[component]
pub fn SettingsDialog(
    mut draft: Signal<ProfileDraft>,
    mut notice: Signal<Option<String>>,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let mut active_tab = use_signal(|| "personal");

    // Fetch the stored record and seed a fresh editing session on open.
    let _loader = use_resource(move || async move {
        match api::get_profile().await {
            Ok(record) => draft.write().load(record),
            Err(e) => {
                // Non-fatal: open the editor on defaults, keep the notice up.
                notice.set(Some(format!("Could not load profile: {e}")));
                draft.write().load(None);
            }
        }
    });

    let saving = draft.read().state() == DraftState::Saving;

    rsx! {
        div {
            class: "dialog-overlay",
            div {
                class: "dialog",
                h2 { class: "dialog-title", "Edit Profile Settings" }

                if let Some(msg) = notice() {
                    div { class: "dialog-notice", "{msg}" }
                }

                div {
                    class: "dialog-tabs",
                    for (id, label) in [
                        ("personal", "Personal"),
                        ("about", "About"),
                        ("resume", "Resume"),
                        ("portfolio", "Portfolio"),
                    ] {
                        button {
                            class: if active_tab() == id { "dialog-tab dialog-tab-active" } else { "dialog-tab" },
                            onclick: move |_| active_tab.set(id),
                            "{label}"
                        }
                    }
                }

                div {
                    class: "dialog-body",
                    match active_tab() {
                        "personal" => rsx! { PersonalTab { draft } },
                        "about" => rsx! { AboutTab { draft } },
                        "resume" => rsx! { ResumeTab { draft } },
                        _ => rsx! { PortfolioTab { draft } },
                    }
                }

                div {
                    class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving,
                        onclick: move |_| on_save.call(()),
                        if saving { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}

/// Run one collection operation against the draft. An error here means a
/// wiring bug (stale index, wrong field name), not a user mistake.
fn apply_op(mut draft: Signal<ProfileDraft>, collection: Collection, op: CollectionOp) {
    if let Err(e) = draft.write().apply(collection, op) {
        tracing::error!("collection edit rejected: {e}");
    }
}

#[component]
fn ScalarInput(mut draft: Signal<ProfileDraft>, field: ScalarField, label: String) -> Element {
    let value = draft.read().record().scalar(field).to_string();
    rsx! {
        div {
            class: "field",
            Label { "{label}" }
            Input {
                value,
                oninput: move |evt: FormEvent| draft.write().set_scalar(field, evt.value()),
            }
        }
    }
}

#[component]
fn PersonalTab(mut draft: Signal<ProfileDraft>) -> Element {
    let bio = draft.read().record().bio.clone();
    rsx! {
        div {
            class: "field-grid",
            ScalarInput { draft, field: ScalarField::FullName, label: "Full Name" }
            ScalarInput { draft, field: ScalarField::JobTitle, label: "Job Title" }
            ScalarInput { draft, field: ScalarField::Email, label: "Email" }
            ScalarInput { draft, field: ScalarField::Phone, label: "Phone" }
            ScalarInput { draft, field: ScalarField::Birthday, label: "Birthday" }
            ScalarInput { draft, field: ScalarField::Location, label: "Location" }
            ScalarInput { draft, field: ScalarField::AvatarUrl, label: "Avatar URL" }
            div {
                class: "field",
                Label { "Bio" }
                Textarea {
                    value: bio,
                    oninput: move |evt: FormEvent| {
                        draft.write().set_scalar(ScalarField::Bio, evt.value())
                    },
                }
            }
        }
        div {
            class: "field-grid field-grid-3",
            ScalarInput { draft, field: ScalarField::GithubUrl, label: "GitHub URL" }
            ScalarInput { draft, field: ScalarField::LinkedinUrl, label: "LinkedIn URL" }
            ScalarInput { draft, field: ScalarField::TwitterUrl, label: "Twitter URL" }
        }
    }
}

#[component]
fn AboutTab(mut draft: Signal<ProfileDraft>) -> Element {
    let about_text = draft.read().record().about_text.clone();
    let skills = draft.read().record().skills.clone();

    rsx! {
        div {
            class: "field",
            Label { "About Text" }
            Textarea {
                rows: 6,
                placeholder: "Write about yourself...",
                value: about_text,
                oninput: move |evt: FormEvent| {
                    draft.write().set_scalar(ScalarField::AboutText, evt.value())
                },
            }
        }

        div {
            class: "field",
            Label { "Skills" }
            for (idx, skill) in skills.iter().enumerate() {
                div {
                    class: "entry-row",
                    Input {
                        placeholder: "Title",
                        value: skill.title.clone(),
                        oninput: move |evt: FormEvent| apply_op(draft, Collection::Skills,
                            CollectionOp::UpdateField { index: idx, field: "title".to_string(), value: evt.value() }),
                    }
                    Input {
                        placeholder: "Description",
                        value: skill.description.clone(),
                        oninput: move |evt: FormEvent| apply_op(draft, Collection::Skills,
                            CollectionOp::UpdateField { index: idx, field: "description".to_string(), value: evt.value() }),
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| apply_op(draft, Collection::Skills,
                            CollectionOp::RemoveAt { index: idx }),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| apply_op(draft, Collection::Skills, CollectionOp::Append),
                Icon { icon: FaPlus, width: 14, height: 14 }
                "Add Skill"
            }
        }
    }
}

#[component]
fn ResumeTab(draft: Signal<ProfileDraft>) -> Element {
    rsx! {
        ResumeEntryList { draft, collection: Collection::Education, label: "Education", add_label: "Add Education" }
        ResumeEntryList { draft, collection: Collection::Experience, label: "Experience", add_label: "Add Experience" }
    }
}

#[component]
fn ResumeEntryList(
    draft: Signal<ProfileDraft>,
    collection: Collection,
    label: String,
    add_label: String,
) -> Element {
    let entries = match collection {
        Collection::Education => draft.read().record().education.clone(),
        _ => draft.read().record().experience.clone(),
    };

    rsx! {
        div {
            class: "field",
            Label { "{label}" }
            for (idx, entry) in entries.iter().enumerate() {
                div {
                    class: "entry-card",
                    Input {
                        placeholder: "Title",
                        value: entry.title.clone(),
                        oninput: move |evt: FormEvent| apply_op(draft, collection,
                            CollectionOp::UpdateField { index: idx, field: "title".to_string(), value: evt.value() }),
                    }
                    Input {
                        placeholder: "Institution",
                        value: entry.institution.clone(),
                        oninput: move |evt: FormEvent| apply_op(draft, collection,
                            CollectionOp::UpdateField { index: idx, field: "institution".to_string(), value: evt.value() }),
                    }
                    Input {
                        placeholder: "Period",
                        value: entry.period.clone(),
                        oninput: move |evt: FormEvent| apply_op(draft, collection,
                            CollectionOp::UpdateField { index: idx, field: "period".to_string(), value: evt.value() }),
                    }
                    Textarea {
                        placeholder: "Description",
                        value: entry.description.clone(),
                        oninput: move |evt: FormEvent| apply_op(draft, collection,
                            CollectionOp::UpdateField { index: idx, field: "description".to_string(), value: evt.value() }),
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| apply_op(draft, collection,
                            CollectionOp::RemoveAt { index: idx }),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                        "Remove"
                    }
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| apply_op(draft, collection, CollectionOp::Append),
                Icon { icon: FaPlus, width: 14, height: 14 }
                "{add_label}"
            }
        }
    }
}

#[component]
fn PortfolioTab(draft: Signal<ProfileDraft>) -> Element {
    let projects = draft.read().record().projects.clone();

    rsx! {
        div {
            class: "field",
            Label { "Projects" }
            for (idx, project) in projects.iter().enumerate() {
                div {
                    class: "entry-card",
                    Input {
                        placeholder: "Title",
                        value: project.title.clone(),
                        oninput: move |evt: FormEvent| apply_op(draft, Collection::Projects,
                            CollectionOp::UpdateField { index: idx, field: "title".to_string(), value: evt.value() }),
                    }
                    Textarea {
                        placeholder: "Description",
                        value: project.description.clone(),
                        oninput: move |evt: FormEvent| apply_op(draft, Collection::Projects,
                            CollectionOp::UpdateField { index: idx, field: "description".to_string(), value: evt.value() }),
                    }
                    Input {
                        placeholder: "Tags (comma-separated)",
                        value: project.tags.join(", "),
                        oninput: move |evt: FormEvent| apply_op(draft, Collection::Projects,
                            CollectionOp::SetTags { index: idx, raw: evt.value() }),
                    }
                    Input {
                        placeholder: "Project Link",
                        value: project.link.clone(),
                        oninput: move |evt: FormEvent| apply_op(draft, Collection::Projects,
                            CollectionOp::UpdateField { index: idx, field: "link".to_string(), value: evt.value() }),
                    }
                    Input {
                        placeholder: "GitHub Link",
                        value: project.github.clone(),
                        oninput: move |evt: FormEvent| apply_op(draft, Collection::Projects,
                            CollectionOp::UpdateField { index: idx, field: "github".to_string(), value: evt.value() }),
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| apply_op(draft, Collection::Projects,
                            CollectionOp::RemoveAt { index: idx }),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                        "Remove"
                    }
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| apply_op(draft, Collection::Projects, CollectionOp::Append),
                Icon { icon: FaPlus, width: 14, height: 14 }
                "Add Project"
            }
        }
    }
}
