pub mod app;
mod input;
mod render;
pub mod theme;

pub use app::run;
