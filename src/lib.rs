//! Core library exports for the dining log.
//!
//! The crate turns flat check-in and collection data into the grouped,
//! ordered and filtered views the app displays: the day-bucketed timeline,
//! city-grouped collections, filtered place lists and collaborator avatar
//! rows. Presentation is left to the caller.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod engine;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;
