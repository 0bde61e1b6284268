//! Portfolio section: project cards with tags and links.

use dioxus::prelude::*;
use profile::samples;
use profile::ProjectEntry;

use crate::icons::{FaArrowUpRightFromSquare, FaGithub};
use crate::use_profile_record;
use crate::Icon;

#[component]
pub fn PortfolioSection() -> Element {
    let record = use_profile_record();
    let record = record();
    let projects = samples::display_projects(record.as_ref());

    rsx! {
        section {
            id: "portfolio",
            class: "page-section",
            div {
                class: "section-inner section-inner-wide",
                h2 { class: "section-heading",
                    "My "
                    span { class: "accent", "Portfolio" }
                }

                div {
                    class: "project-grid",
                    for project in &projects {
                        ProjectCard { project: project.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> Element {
    rsx! {
        div {
            class: "project-card",
            h3 { class: "project-card-title", "{project.title}" }
            p { class: "project-card-description", "{project.description}" }

            div {
                class: "project-tags",
                for tag in project.tags.iter().filter(|t| !t.is_empty()) {
                    span { class: "project-tag", "{tag}" }
                }
            }

            div {
                class: "project-links",
                if !project.link.is_empty() {
                    a {
                        class: "project-link",
                        href: "{project.link}",
                        Icon { icon: FaArrowUpRightFromSquare, width: 16, height: 16 }
                        "View Project"
                    }
                }
                if !project.github.is_empty() {
                    a {
                        class: "project-link",
                        href: "{project.github}",
                        Icon { icon: FaGithub, width: 16, height: 16 }
                        "Code"
                    }
                }
            }
        }
    }
}
