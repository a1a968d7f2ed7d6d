pub mod app;
pub mod login;
pub mod session_banner;

pub use app::render_app;
pub use login::render_login;
pub use session_banner::render_session_banner;
