//! The portfolio page: sidebar, navigation and the four sections.

use dioxus::prelude::*;
use profile::ProfileDraft;
use ui::{
    use_auth, AboutSection, ContactSection, Navigation, PortfolioSection, ResumeSection,
    SettingsDialog, Sidebar,
};

/// Single-page portfolio. The profile draft, the dialog notice, and the save
/// task all live in this scope rather than inside the dialog: the dialog is
/// conditionally rendered, and a task spawned inside it would be dropped when
/// the dialog unmounts. Closing the dialog must not cancel an in-flight save;
/// its late result is resolved against the draft's save token here.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let mut draft = use_signal(ProfileDraft::new);
    let mut show_settings = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    let handle_save = move |_| {
        let Some(token) = draft.write().begin_save() else {
            return;
        };
        let record = draft.read().snapshot();
        notice.set(None);
        spawn(async move {
            match api::save_profile(record).await {
                Ok(()) => {
                    draft.write().resolve_save(token, true);
                    show_settings.set(false);
                }
                Err(e) => {
                    draft.write().resolve_save(token, false);
                    notice.set(Some(format!("Error saving profile: {e}")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            Sidebar {}
            main {
                class: "page-main",
                Navigation {
                    show_settings: auth().user.is_some(),
                    on_open_settings: move |_| {
                        notice.set(None);
                        show_settings.set(true);
                    },
                }
                AboutSection {}
                ResumeSection {}
                PortfolioSection {}
                ContactSection {}
            }
        }

        if show_settings() {
            SettingsDialog {
                draft,
                notice,
                on_save: handle_save,
                on_close: move |_| show_settings.set(false),
            }
        }
    }
}
