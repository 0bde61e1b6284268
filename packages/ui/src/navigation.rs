//! Top navigation bar with section highlighting and smooth scroll.

use dioxus::prelude::*;

use crate::auth::LogoutButton;

const SECTIONS: [(&str, &str); 4] = [
    ("about", "About"),
    ("resume", "Resume"),
    ("portfolio", "Portfolio"),
    ("contact", "Contact"),
];

#[component]
pub fn Navigation(
    /// Show the settings trigger (owner is signed in).
    #[props(default)]
    show_settings: bool,
    on_open_settings: EventHandler<()>,
) -> Element {
    let mut active_section = use_signal(|| "about");

    rsx! {
        nav {
            class: "navigation",
            div {
                class: "navigation-tabs",
                for (id, label) in SECTIONS {
                    button {
                        class: if active_section() == id { "nav-tab nav-tab-active" } else { "nav-tab" },
                        onclick: move |_| {
                            active_section.set(id);
                            scroll_to_section(id);
                        },
                        "{label}"
                    }
                }
            }
            if show_settings {
                div {
                    class: "nav-settings",
                    button {
                        class: "nav-tab",
                        onclick: move |_| on_open_settings.call(()),
                        "Edit Profile"
                    }
                    LogoutButton { class: "nav-tab" }
                }
            }
        }
    }
}

fn scroll_to_section(id: &str) {
    let js = format!(
        "document.getElementById('{id}')?.scrollIntoView({{ behavior: 'smooth' }});"
    );
    document::eval(&js);
}
