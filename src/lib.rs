//! Choice Compass - Multi-criteria decision support
//!
//! This crate ranks options against weighted criteria with TOPSIS, measures
//! how robust the winner is under Monte Carlo perturbation of volatile
//! criteria, and explains each option's standing in plain terms.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
