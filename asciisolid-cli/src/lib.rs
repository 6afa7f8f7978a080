//! asciisolid-cli: animation driver and terminal front end
//!
//! Loads a scene description, generates the solid's surface cloud once, and
//! renders one frame per tick with a fixed delay between ticks.

pub mod config;
pub mod animation;
pub mod terminal;

pub use animation::{play, Animation, FrameSink, Scene};
pub use config::{load_config, ConfigError, SceneConfig};
pub use terminal::{PlainDisplay, TerminalDisplay};
