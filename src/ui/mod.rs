pub mod ansi;
mod card;
mod metrics;
mod placer;
mod screen;
mod status;
pub mod theme;
mod wrap;

pub use screen::{ComposedScreen, ScreenComposer};
pub use status::status_screen;
pub use theme::ColorTheme;
