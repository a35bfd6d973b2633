//! # UTN Rust Backend
//!
//! University timetable notification engine.
//!
//! This crate turns an irregularly-formatted published timetable workbook
//! into normalized schedule records, detects what changed between two
//! published versions, and computes the minimal set of registered
//! recipients (teachers, student groups) each change concerns. The chat
//! bot, webhook endpoint, and durable storage backend live outside this
//! crate and consume it through narrow trait boundaries.
//!
//! ## Features
//!
//! - **Extraction**: Walk the configured sheet layout, resolve merged-cell
//!   teaching blocks, and emit normalized records
//! - **Group unions**: Canonical display names for groups taught together
//! - **Change detection**: Multiset comparison of two schedule snapshots
//! - **Targeting**: Subscription- and role-filtered recipient selection
//!   with at-most-once delivery per user per event
//! - **Formatting**: Ready-to-send schedule and change-notice text
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Core domain types shared across the boundaries
//! - [`models`]: Static configuration (layout, roster, unions, settings)
//! - [`sheet`]: Sheet-source boundary and merged-region geometry
//! - [`services`]: Extraction, diffing, targeting, formatting, pipeline
//! - [`db`]: Repository pattern for the persistence boundary

pub mod api;
pub mod db;
pub mod models;
pub mod services;
pub mod sheet;
