//! Shift Attendance Engine
//!
//! This crate compares planned shifts with actual shifts per employee and
//! location, flags late arrivals, early departures and absences, and selects
//! the shifts that fall inside a calendar-day window.

#![warn(missing_docs)]

pub mod api;
pub mod attendance;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
