//! Channel label lookup tables
//!
//! User-assigned labels come from the baseline configuration only (snapshot
//! id −1); user-saved scene snapshots are ignored for labeling.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::records::{ClusterCategory, LabelRecord};

/// Snapshot id of the baseline configuration.
pub const BASELINE_SNAPSHOT: i64 = -1;

/// Input and output channel label maps.
///
/// Empty label strings are preserved here; suppression of empty labels is the
/// patch entity's concern (see [`RoutingPatch::set_destination_label`]).
///
/// [`RoutingPatch::set_destination_label`]: crate::domain::patch::RoutingPatch::set_destination_label
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelIndex {
    inputs: HashMap<i64, String>,
    outputs: HashMap<ClusterCategory, HashMap<i64, String>>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build both label maps from chainer records in a single pass.
    ///
    /// Records outside the baseline snapshot are skipped; so are categories
    /// that are neither `Input` nor an output bus.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a LabelRecord>,
    {
        let mut index = Self::new();
        for record in records {
            if record.snapshot_id != BASELINE_SNAPSHOT {
                continue;
            }
            if record.category == ClusterCategory::Input {
                index
                    .inputs
                    .insert(record.channel_index, record.label.clone());
            } else if record.category.is_output_bus() {
                index
                    .outputs
                    .entry(record.category.clone())
                    .or_default()
                    .insert(record.channel_index, record.label.clone());
            }
        }
        index
    }

    /// Label for an input channel, if one was recorded.
    pub fn input_label(&self, channel: i64) -> Option<&str> {
        self.inputs.get(&channel).map(String::as_str)
    }

    /// Label for an output bus channel, if one was recorded.
    pub fn output_label(&self, category: &ClusterCategory, index: i64) -> Option<&str> {
        self.outputs
            .get(category)
            .and_then(|labels| labels.get(&index))
            .map(String::as_str)
    }
}
