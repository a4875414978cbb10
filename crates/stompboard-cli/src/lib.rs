//! Stompboard CLI library.
//!
//! This crate provides the core functionality for the Stompboard CLI,
//! including directory configuration, record loading and storage, and the
//! command implementations.

pub mod commands;
pub mod config;
pub mod input;
