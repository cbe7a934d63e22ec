//! Siege engine crate.
//!
//! Presentation core for the castle siege game. Owns frame sequencing and the
//! placement adapters built on it; rendering, audio mixing and texture loading
//! are reached only through the seams exposed here (`scene`, `audio`, `content`).

pub mod anim;
pub mod audio;
pub mod billboard;
pub mod camera;
pub mod config;
pub mod content;
pub mod input;
pub mod logging;
pub mod scene;
pub mod sprite;
pub mod time;
