//! Animoji - turn a still image into a looping animated GIF.
//!
//! The frame pipeline lives in the `animoji-fx` crate. This crate adds the
//! outer collaborators around it (configuration, decode, GIF encode) and
//! exposes them for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use animoji_fx as fx;
