mod app;
pub mod sections;
pub mod theme;

pub use app::{FestivalApp, PageAction};
