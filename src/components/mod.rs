pub mod app;
pub mod drag_element;
pub mod reset_button;

pub use app::App;
