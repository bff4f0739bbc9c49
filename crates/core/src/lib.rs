//! Core domain model for patchbook: reconstruction of a mixing console's
//! audio-routing topology from its session records.

pub mod domain;
