//! Profile sidebar: avatar, name, contact details, social links.

use dioxus::prelude::*;
use profile::samples;

use crate::icons::{
    FaCalendar, FaEnvelope, FaGithub, FaLinkedin, FaLocationDot, FaPhone, FaTwitter,
};
use crate::use_profile_record;
use crate::Icon;

#[component]
pub fn Sidebar() -> Element {
    let record = use_profile_record();
    let record = record();
    let record = record.as_ref();

    let name = record
        .map(|r| samples::text_or(&r.full_name, samples::SAMPLE_NAME).to_string())
        .unwrap_or_else(|| samples::SAMPLE_NAME.to_string());
    let job_title = record
        .map(|r| samples::text_or(&r.job_title, samples::SAMPLE_JOB_TITLE).to_string())
        .unwrap_or_else(|| samples::SAMPLE_JOB_TITLE.to_string());
    let email = record
        .map(|r| samples::text_or(&r.email, samples::SAMPLE_EMAIL).to_string())
        .unwrap_or_else(|| samples::SAMPLE_EMAIL.to_string());
    let phone = record
        .map(|r| samples::text_or(&r.phone, samples::SAMPLE_PHONE).to_string())
        .unwrap_or_else(|| samples::SAMPLE_PHONE.to_string());
    let birthday = record
        .map(|r| samples::text_or(&r.birthday, samples::SAMPLE_BIRTHDAY).to_string())
        .unwrap_or_else(|| samples::SAMPLE_BIRTHDAY.to_string());
    let location = record
        .map(|r| samples::text_or(&r.location, samples::SAMPLE_LOCATION).to_string())
        .unwrap_or_else(|| samples::SAMPLE_LOCATION.to_string());
    let avatar_url = record
        .map(|r| r.avatar_url.clone())
        .unwrap_or_default();
    let github_url = record
        .map(|r| samples::text_or(&r.github_url, "#").to_string())
        .unwrap_or_else(|| "#".to_string());
    let linkedin_url = record
        .map(|r| samples::text_or(&r.linkedin_url, "#").to_string())
        .unwrap_or_else(|| "#".to_string());
    let twitter_url = record
        .map(|r| samples::text_or(&r.twitter_url, "#").to_string())
        .unwrap_or_else(|| "#".to_string());

    rsx! {
        aside {
            class: "sidebar",

            div {
                class: "sidebar-header",
                div {
                    class: "sidebar-avatar",
                    if !avatar_url.is_empty() {
                        img { src: "{avatar_url}", alt: "Profile" }
                    }
                }
                h1 { class: "sidebar-name", "{name}" }
                p { class: "sidebar-title", "{job_title}" }
            }

            div {
                class: "sidebar-body",
                ContactItem { icon_kind: ContactIcon::Email, label: "Email", value: email }
                ContactItem { icon_kind: ContactIcon::Phone, label: "Phone", value: phone }
                ContactItem { icon_kind: ContactIcon::Birthday, label: "Birthday", value: birthday }
                ContactItem { icon_kind: ContactIcon::Location, label: "Location", value: location }

                div {
                    class: "sidebar-socials",
                    a { class: "social-icon", href: "{github_url}",
                        Icon { icon: FaGithub, width: 20, height: 20 }
                    }
                    a { class: "social-icon", href: "{linkedin_url}",
                        Icon { icon: FaLinkedin, width: 20, height: 20 }
                    }
                    a { class: "social-icon", href: "{twitter_url}",
                        Icon { icon: FaTwitter, width: 20, height: 20 }
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum ContactIcon {
    Email,
    Phone,
    Birthday,
    Location,
}

#[component]
fn ContactItem(icon_kind: ContactIcon, label: String, value: String) -> Element {
    rsx! {
        div {
            class: "contact-item",
            div {
                class: "contact-item-icon",
                match icon_kind {
                    ContactIcon::Email => rsx! { Icon { icon: FaEnvelope, width: 16, height: 16 } },
                    ContactIcon::Phone => rsx! { Icon { icon: FaPhone, width: 16, height: 16 } },
                    ContactIcon::Birthday => rsx! { Icon { icon: FaCalendar, width: 16, height: 16 } },
                    ContactIcon::Location => rsx! { Icon { icon: FaLocationDot, width: 16, height: 16 } },
                }
            }
            div {
                class: "contact-item-text",
                p { class: "contact-item-label", "{label}" }
                p { class: "contact-item-value", "{value}" }
            }
        }
    }
}
