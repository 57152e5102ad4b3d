//! Flat-file persistence for the wallpaper configuration.
//!
//! Stores a single TOML record at a well-known location. Missing and
//! corrupt records both load as absent so callers fall through to
//! acquisition.

mod store;

#[cfg(test)]
mod tests;

pub use store::ConfigStore;
