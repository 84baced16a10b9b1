//! # Availability Core
//!
//! Domain types and the editing engine for professor availability:
//! hour-granularity [`TimeSlot`](models::time_slot::TimeSlot)s, the
//! [`WorkingHours`](working_hours::WorkingHours) window, the
//! [`SlotEngine`](engine::SlotEngine) that reconciles session edits against
//! the stored baseline, and the [`AvailabilityStore`](store::AvailabilityStore)
//! seam implemented by the database and HTTP crates.

pub mod engine;
pub mod errors;
pub mod models;
pub mod session;
pub mod store;
pub mod working_hours;
