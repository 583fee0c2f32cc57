//! # huddle-engine
//!
//! Attendance-maximizing slot recommendation for group scheduling.
//!
//! Given an event with a fixed menu of candidate time slots and the
//! availability submissions collected for it, the engine finds the slot(s)
//! the most participants can attend and reports, for each winning slot,
//! which known participants cannot make it.
//!
//! The engine is a pure computation over caller-supplied snapshots: no I/O,
//! no shared state, total over its input domain. Fetching the event and its
//! availability records, and validating that they belong together, is the
//! caller's job.
//!
//! ## Modules
//!
//! - [`types`] — events, candidate time slots, availability records
//! - [`index`] — group availability records by candidate slot
//! - [`recommend`] — select the slot(s) with maximal attendance

pub mod index;
pub mod recommend;
pub mod types;

pub use index::build_slot_index;
pub use recommend::{recommend, RecommendOptions, Recommendation};
pub use types::{Availability, Event, EventId, SlotId, TimeSlot, UserId};
