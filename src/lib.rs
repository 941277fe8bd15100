//! Art Space: a single-screen viewer cycling through three artworks.

pub mod artwork;
pub mod config;
pub mod constants;
pub mod engine;
pub mod gallery;
pub mod layout;
pub mod slide;
pub mod state;
pub mod texture_loader;
pub mod view;
