// src/core.rs
pub mod renamer;
pub mod replace;
pub mod scanner;
