//! The four display sections of the portfolio page.
//!
//! Each section fetches the profile record independently on mount and
//! substitutes built-in sample content for any collection that is empty, so
//! the page is never visually blank before the first save.

mod about;
pub use about::AboutSection;

mod resume;
pub use resume::ResumeSection;

mod portfolio;
pub use portfolio::PortfolioSection;

mod contact;
pub use contact::ContactSection;
