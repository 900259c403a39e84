pub mod app;
pub mod assets;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod desktop;
pub mod error;
pub mod launch;
pub mod permission;
pub mod process;
pub mod surface;
pub mod ui;
pub mod wallpaper;

#[cfg(test)]
pub mod test_utils;
