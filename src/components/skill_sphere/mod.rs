mod component;
pub mod config;
pub mod data;
pub mod interaction;
pub mod layout;
mod panel;
pub mod presentation;
mod render;
mod state;
pub mod types;
pub mod viewport;

pub use component::SkillSphere;
