//! Behavior behind the rootprowler landing page: which nav item is active
//! for a scroll position, and what the rotating hero subtitle shows.

pub mod config;
pub mod driver;
pub mod error;
pub mod hooks;
pub mod lifecycle;
pub mod scroll_spy;
pub mod typing;

pub use config::SiteConfig;
pub use driver::TypingDriver;
pub use error::ConfigError;
pub use scroll_spy::{resolve, ScrollSpy, ScrollSpyConfig, Section, SectionRegistry};
pub use typing::{frames, Phase, TypingConfig, TypingSequencer, TypingState};
