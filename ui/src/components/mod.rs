pub mod admin_actions;
pub mod email_form;
pub mod google_sign_in;
pub mod layout;
pub mod news_card;
pub mod news_list;
pub mod news_report;
pub mod recent_activity;
pub mod stat_card;

pub use admin_actions::AdminActions;
pub use email_form::{EmailForm, EmailFormKind};
pub use google_sign_in::GoogleSignIn;
pub use news_card::NewsCard;
pub use news_list::NewsList;
pub use news_report::NewsReport;
pub use recent_activity::RecentActivity;
pub use stat_card::StatCard;
