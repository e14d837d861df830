// src/core.rs
pub mod replacer;
pub mod toolchain;
pub mod verify;
pub mod walker;
