//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod components;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod profile_data;
pub use profile_data::use_profile_record;

mod sidebar;
pub use sidebar::Sidebar;

mod navigation;
pub use navigation::Navigation;

pub mod sections;
pub use sections::{AboutSection, ContactSection, PortfolioSection, ResumeSection};

mod settings_dialog;
pub use settings_dialog::SettingsDialog;
