//! Resume section: education and work-experience timelines.

use dioxus::prelude::*;
use profile::samples;
use profile::ResumeEntry;

use crate::icons::{FaBriefcase, FaGraduationCap};
use crate::use_profile_record;
use crate::Icon;

#[component]
pub fn ResumeSection() -> Element {
    let record = use_profile_record();
    let record = record();
    let education = samples::display_education(record.as_ref());
    let experience = samples::display_experience(record.as_ref());

    rsx! {
        section {
            id: "resume",
            class: "page-section page-section-alt",
            div {
                class: "section-inner",
                h2 { class: "section-heading",
                    "My "
                    span { class: "accent", "Resume" }
                }

                div {
                    class: "resume-group",
                    div {
                        class: "resume-group-header",
                        div { class: "resume-group-icon",
                            Icon { icon: FaGraduationCap, width: 24, height: 24 }
                        }
                        h3 { "Education" }
                    }
                    div {
                        class: "resume-timeline",
                        for entry in &education {
                            ResumeItem { entry: entry.clone() }
                        }
                    }
                }

                div {
                    class: "resume-group",
                    div {
                        class: "resume-group-header",
                        div { class: "resume-group-icon",
                            Icon { icon: FaBriefcase, width: 24, height: 24 }
                        }
                        h3 { "Experience" }
                    }
                    div {
                        class: "resume-timeline",
                        for entry in &experience {
                            ResumeItem { entry: entry.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResumeItem(entry: ResumeEntry) -> Element {
    rsx! {
        div {
            class: "resume-item",
            div { class: "resume-item-dot" }
            div {
                class: "resume-item-body",
                div {
                    class: "resume-item-head",
                    h4 { "{entry.title}" }
                    span { class: "resume-item-period", "{entry.period}" }
                }
                p { class: "resume-item-institution", "{entry.institution}" }
                p { class: "resume-item-description", "{entry.description}" }
            }
        }
    }
}
