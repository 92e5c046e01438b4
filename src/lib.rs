//! Mock Transport - In-memory backend for client networking tests
//!
//! Intercepts requests a client would send to the backend, answers them
//! against simulated conversations, and returns the exact status codes and
//! payloads the real backend produces.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
