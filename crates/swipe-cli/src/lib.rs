//! Diagnostics for the swipe decoder: replay synthetic gestures, inspect the
//! keyboard layout and query word lists from the command line.

pub mod commands;
