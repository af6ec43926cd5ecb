//! Page content and animation settings.
//!
//! Everything has a built-in default taken from the published page, so a
//! missing config file still renders the full portfolio.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    AnimationConfig, Config, Experience, FeedConfig, Principle, Profile, Skill, Slide, SocialLink,
    StatSpec, TechSkill, TypewriterConfig,
};
