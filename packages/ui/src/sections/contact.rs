//! Contact section: contact details plus a message form.
//!
//! The form is presentational; there is no message backend.

use dioxus::prelude::*;
use profile::samples;

use crate::components::{Button, ButtonVariant, Input, Textarea};
use crate::icons::{FaEnvelope, FaMessage, FaPaperPlane};
use crate::use_profile_record;
use crate::Icon;

#[component]
pub fn ContactSection() -> Element {
    let record = use_profile_record();
    let record = record();
    let email = record
        .as_ref()
        .map(|r| samples::text_or(&r.email, samples::SAMPLE_EMAIL).to_string())
        .unwrap_or_else(|| samples::SAMPLE_EMAIL.to_string());

    rsx! {
        section {
            id: "contact",
            class: "page-section page-section-alt",
            div {
                class: "section-inner",
                h2 { class: "section-heading",
                    "Get In "
                    span { class: "accent", "Touch" }
                }

                div {
                    class: "contact-grid",
                    div {
                        class: "contact-intro",
                        h3 { "Let's work together" }
                        p {
                            "I'm always interested in hearing about new projects and \
                             opportunities. Whether you have a question or just want to \
                             say hi, feel free to reach out!"
                        }

                        div {
                            class: "contact-details",
                            div {
                                class: "contact-item",
                                div { class: "contact-item-icon",
                                    Icon { icon: FaEnvelope, width: 20, height: 20 }
                                }
                                div {
                                    class: "contact-item-text",
                                    p { class: "contact-item-label", "Email" }
                                    p { class: "contact-item-value", "{email}" }
                                }
                            }
                            div {
                                class: "contact-item",
                                div { class: "contact-item-icon",
                                    Icon { icon: FaMessage, width: 20, height: 20 }
                                }
                                div {
                                    class: "contact-item-text",
                                    p { class: "contact-item-label", "Response Time" }
                                    p { class: "contact-item-value", "Within 24 hours" }
                                }
                            }
                        }
                    }

                    form {
                        class: "contact-form",
                        onsubmit: move |evt: FormEvent| evt.prevent_default(),
                        Input { placeholder: "Your Name" }
                        Input { r#type: "email", placeholder: "Your Email" }
                        Input { placeholder: "Subject" }
                        Textarea { placeholder: "Your Message", rows: 5 }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            Icon { icon: FaPaperPlane, width: 14, height: 14 }
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}
