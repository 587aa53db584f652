// lib.rs - Library root for the vimi editor

pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod dialog;
pub mod editor;
pub mod keymap;
pub mod logging;
pub mod menu;
pub mod quotes;
pub mod ui;
pub mod viewport;
