//! Danish salary engine
//!
//! This crate computes monthly salary and tax breakdowns from an hourly rate
//! (pension, ATP, AM-contribution, A-skat and net pay), handles months split
//! between two rates, aggregates a year of months, and serves all of it over
//! an HTTP JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
