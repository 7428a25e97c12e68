pub mod admin_dashboard;
pub mod auth_failed;
pub mod landing;
pub mod login;
pub mod news;
pub mod not_found;
pub mod register;
pub mod report_sample;

pub use admin_dashboard::AdminDashboardPage;
pub use auth_failed::AuthFailedPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use news::NewsPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use report_sample::ReportSamplePage;
