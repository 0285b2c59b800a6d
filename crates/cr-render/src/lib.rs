//! Headless-browser PDF export.
//!
//! The adapter walks a fixed sequence for every artifact:
//! locate engine, load markup, settle, prune blank pages, export, teardown.
//! Discovery is an injected [`EngineLocator`] so every failure path is
//! testable without a real browser or filesystem layout. The browser
//! instance is owned per render call and released on every exit path;
//! nothing is pooled.

pub mod adapter;
pub mod config;
pub mod error;
pub mod locator;

pub use adapter::Renderer;
pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use locator::{
    ConfiguredPath, Discovery, EngineLocator, EnvProbe, LocateStrategy, WellKnownPaths,
};
