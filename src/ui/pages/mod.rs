//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Landing page (home)
//! - Login page
//! - Dashboard home and section placeholders (behind the route guard)
//! - Not found page

mod dashboard;
mod landing;
mod login;
mod not_found;

pub use dashboard::{DASHBOARD_SECTIONS, DashboardPage, DashboardSectionPage, section_label};
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
