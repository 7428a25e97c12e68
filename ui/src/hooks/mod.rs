pub mod use_admin_gate;
pub mod use_admin_metrics;
pub mod use_image_preloader;
pub mod use_news_report;
pub mod use_recent_activity;
pub mod use_resource;
pub mod use_sign_out;
pub mod use_title;

pub use use_admin_gate::use_admin_gate;
pub use use_admin_metrics::use_admin_metrics;
pub use use_image_preloader::use_image_preloader;
pub use use_news_report::use_news_report;
pub use use_recent_activity::use_recent_activity;
pub use use_resource::{ResourceHookReturn, RetryButton, use_resource};
pub use use_sign_out::use_sign_out;
pub use use_title::use_title;
