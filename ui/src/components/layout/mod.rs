pub mod footer;
pub mod main_layout;
pub mod nav_bar;
pub mod title_bar;

pub use footer::Footer;
pub use main_layout::MainLayout;
pub use nav_bar::{NavBar, RegisterButton};
pub use title_bar::TitleBar;
