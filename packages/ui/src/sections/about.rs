//! About section: intro paragraphs plus the skill cards.

use dioxus::prelude::*;
use profile::samples;

use crate::icons::{FaCode, FaPalette, FaRocket};
use crate::use_profile_record;
use crate::Icon;

#[component]
pub fn AboutSection() -> Element {
    let record = use_profile_record();
    let record = record();
    let paragraphs = samples::display_about(record.as_ref());
    let skills = samples::display_skills(record.as_ref());

    rsx! {
        section {
            id: "about",
            class: "page-section",
            div {
                class: "section-inner",
                h2 { class: "section-heading",
                    "About "
                    span { class: "accent", "Me" }
                }

                div {
                    class: "about-text",
                    for paragraph in paragraphs {
                        p { "{paragraph}" }
                    }
                }

                div {
                    class: "skill-grid",
                    for (idx, skill) in skills.iter().enumerate() {
                        div {
                            class: "skill-card",
                            div {
                                class: "skill-card-icon",
                                // Cycle through the three section icons
                                match idx % 3 {
                                    0 => rsx! { Icon { icon: FaCode, width: 32, height: 32 } },
                                    1 => rsx! { Icon { icon: FaPalette, width: 32, height: 32 } },
                                    _ => rsx! { Icon { icon: FaRocket, width: 32, height: 32 } },
                                }
                            }
                            h3 { class: "skill-card-title", "{skill.title}" }
                            p { class: "skill-card-description", "{skill.description}" }
                        }
                    }
                }
            }
        }
    }
}
