//! Circulation desk CLI library.
//!
//! This crate provides the command-line interface and the interactive
//! numbered menu in front of the circulation core.

pub mod cli;
pub mod commands;
pub mod input;
pub mod menu;
pub mod output;
