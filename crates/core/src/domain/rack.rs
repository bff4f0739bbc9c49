//! Device rack slot resolution
//!
//! The rack maps numeric slot positions to device names. Slots are 0-based
//! internally; only the placeholder for unpopulated slots displays 1-based.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::trace;

use crate::domain::records::DeviceRecord;

/// Device positions per I/O bank in the rack addressing scheme.
const BANK_WIDTH: i64 = 8;

/// Compute a device's rack slot from its bank and in-bank assignment.
pub fn rack_slot(io_bank: i64, assign: i64) -> i64 {
    io_bank * BANK_WIDTH + assign
}

/// Rack slot → device name lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceRack {
    names: HashMap<i64, String>,
}

impl DeviceRack {
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    /// Build a rack from device records, one slot per record.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a DeviceRecord>,
    {
        let mut rack = Self::new();
        for record in records {
            rack.populate(rack_slot(record.io_bank, record.assign), record.name.clone());
        }
        rack
    }

    /// Register a device name for a slot. Last write wins on duplicates.
    pub fn populate(&mut self, slot: i64, name: String) {
        trace!("Rack slot {} populated with {}", slot, name);
        self.names.insert(slot, name);
    }

    /// Resolve a slot to its device name, or a generated placeholder when the
    /// slot is unpopulated. Never fails.
    pub fn resolve(&self, slot: i64) -> String {
        match self.names.get(&slot) {
            Some(name) => name.clone(),
            None => format!("EmptySlot{}", slot + 1),
        }
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
