//! Data models for the application.

#[cfg(feature = "server")]
mod profile_row;
mod user;

#[cfg(feature = "server")]
pub use profile_row::ProfileRow;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
