//! Resolved patch entities and the patch bay
//!
//! Patches use 1-based display numbering; the device rack is 0-based. The
//! right half of a stereo pair is marked with a `-R` display suffix.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// 1-based display index for a patch endpoint.
///
/// Input-channel destinations render zero-padded to two digits; bus sources
/// render unpadded. The asymmetry is deliberate and both forms are pinned
/// down in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DisplayIndex {
    /// Plain channel number: `7`.
    Channel(u32),
    /// Stereo-capable bus index, unpadded: `7` or `7-R`.
    Bus { number: u32, right: bool },
    /// Stereo-capable input channel, zero-padded: `07` or `07-R`.
    InputChannel { number: u32, right: bool },
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DisplayIndex::Channel(number) => write!(f, "{}", number),
            DisplayIndex::Bus { number, right: false } => write!(f, "{}", number),
            DisplayIndex::Bus { number, right: true } => write!(f, "{}-R", number),
            DisplayIndex::InputChannel { number, right: false } => write!(f, "{:02}", number),
            DisplayIndex::InputChannel { number, right: true } => write!(f, "{:02}-R", number),
        }
    }
}

/// One endpoint feeding a patch: a device or bus name plus display index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatchSource {
    pub name: String,
    pub index: DisplayIndex,
}

/// A resolved routing connection.
///
/// Every patch carries at least one source: construction requires an initial
/// source, and the setters never clear a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingPatch {
    dst_name: String,
    dst_index: DisplayIndex,
    dst_label: Option<String>,
    primary: Option<PatchSource>,
    alternate: Option<PatchSource>,
    src_label: Option<String>,
}

impl RoutingPatch {
    /// Create a patch with its initial source, assigned to the primary slot
    /// unless `is_alternate` is set.
    pub fn new(
        src_name: impl Into<String>,
        src_index: DisplayIndex,
        dst_name: impl Into<String>,
        dst_index: DisplayIndex,
        is_alternate: bool,
    ) -> Self {
        let mut patch = Self {
            dst_name: dst_name.into(),
            dst_index,
            dst_label: None,
            primary: None,
            alternate: None,
            src_label: None,
        };
        patch.set_source(src_name, src_index, is_alternate);
        patch
    }

    /// Assign the primary or alternate source slot. A duplicate write to the
    /// same slot overwrites silently; the other slot is never cleared.
    pub fn set_source(
        &mut self,
        name: impl Into<String>,
        index: DisplayIndex,
        is_alternate: bool,
    ) {
        let source = PatchSource {
            name: name.into(),
            index,
        };
        if is_alternate {
            self.alternate = Some(source);
        } else {
            self.primary = Some(source);
        }
    }

    /// Record a source label. An empty string leaves the label unset, so
    /// "no label recorded" and "empty label" read the same downstream.
    pub fn set_source_label(&mut self, label: &str) {
        if !label.is_empty() {
            self.src_label = Some(label.to_string());
        }
    }

    /// Record a destination label. Empty strings are ignored like
    /// [`set_source_label`](Self::set_source_label).
    pub fn set_destination_label(&mut self, label: &str) {
        if !label.is_empty() {
            self.dst_label = Some(label.to_string());
        }
    }

    pub fn dst_name(&self) -> &str {
        &self.dst_name
    }

    pub fn dst_index(&self) -> DisplayIndex {
        self.dst_index
    }

    pub fn dst_label(&self) -> Option<&str> {
        self.dst_label.as_deref()
    }

    pub fn primary(&self) -> Option<&PatchSource> {
        self.primary.as_ref()
    }

    pub fn alternate(&self) -> Option<&PatchSource> {
        self.alternate.as_ref()
    }

    pub fn src_label(&self) -> Option<&str> {
        self.src_label.as_deref()
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub fn has_alternate(&self) -> bool {
        self.alternate.is_some()
    }
}

/// Store of resolved patches, one collection per patch category.
///
/// Collections are unordered internally; the accessors sort on every call and
/// are idempotent between writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchBay {
    inputs: Vec<RoutingPatch>,
    outputs: Vec<RoutingPatch>,
    device_links: Vec<RoutingPatch>,
}

impl PatchBay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_input(&mut self, patch: RoutingPatch) {
        debug!("Input patch added for channel {}", patch.dst_index);
        self.inputs.push(patch);
    }

    pub fn add_output(&mut self, patch: RoutingPatch) {
        self.outputs.push(patch);
    }

    pub fn add_device_link(&mut self, patch: RoutingPatch) {
        self.device_links.push(patch);
    }

    /// Input patches sorted by destination display index in plain string
    /// order; the zero padding keeps that numeric up to two digits, with the
    /// `-R` half directly after its left half.
    pub fn inputs(&mut self) -> &[RoutingPatch] {
        self.inputs.sort_by_key(|patch| patch.dst_index.to_string());
        &self.inputs
    }

    /// Output patches sorted by destination, then source.
    pub fn outputs(&mut self) -> &[RoutingPatch] {
        self.outputs.sort_by_key(|patch| {
            (
                patch.dst_name.clone(),
                patch.dst_index,
                patch.primary.clone(),
            )
        });
        &self.outputs
    }

    /// Device-to-device patches sorted by source, then destination.
    pub fn device_links(&mut self) -> &[RoutingPatch] {
        self.device_links.sort_by_key(|patch| {
            (
                patch.primary.clone(),
                patch.dst_name.clone(),
                patch.dst_index,
            )
        });
        &self.device_links
    }

    /// Find an input patch by its destination display index. Linear scan;
    /// this is the classifier's stereo/alternate merge lookup.
    pub fn find_input_mut(&mut self, dst_index: DisplayIndex) -> Option<&mut RoutingPatch> {
        self.inputs
            .iter_mut()
            .find(|patch| patch.dst_index == dst_index)
    }
}
