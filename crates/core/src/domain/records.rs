//! Raw session records as delivered by the store
//!
//! These are flat row types: the relational joins (device → device name,
//! chainer → object → cluster type) are resolved by the store before the
//! domain model sees them.

use serde::{Deserialize, Serialize};

/// Channel cluster category, as named in a session's `cluster_type` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterCategory {
    /// Console input channel.
    Input,
    /// The input side of a physical rack device (device-to-device source).
    Inputs,
    /// The output side of a physical rack device.
    Outputs,
    Group,
    Aux,
    Matrix,
    Main,
    Center,
    Mono,
    Cue,
    Talkback,
    /// A category name this tool does not classify.
    Custom(String),
}

impl ClusterCategory {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Input" => ClusterCategory::Input,
            "Inputs" => ClusterCategory::Inputs,
            "Outputs" => ClusterCategory::Outputs,
            "Group" => ClusterCategory::Group,
            "Aux" => ClusterCategory::Aux,
            "Matrix" => ClusterCategory::Matrix,
            "Main" => ClusterCategory::Main,
            "Center" => ClusterCategory::Center,
            "Mono" => ClusterCategory::Mono,
            "Cue" => ClusterCategory::Cue,
            "Talkback" => ClusterCategory::Talkback,
            name => ClusterCategory::Custom(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ClusterCategory::Input => "Input",
            ClusterCategory::Inputs => "Inputs",
            ClusterCategory::Outputs => "Outputs",
            ClusterCategory::Group => "Group",
            ClusterCategory::Aux => "Aux",
            ClusterCategory::Matrix => "Matrix",
            ClusterCategory::Main => "Main",
            ClusterCategory::Center => "Center",
            ClusterCategory::Mono => "Mono",
            ClusterCategory::Cue => "Cue",
            ClusterCategory::Talkback => "Talkback",
            ClusterCategory::Custom(name) => name,
        }
    }

    /// Whether this category is an internal output bus that can carry a
    /// user-assigned label.
    pub fn is_output_bus(&self) -> bool {
        matches!(
            self,
            ClusterCategory::Group
                | ClusterCategory::Aux
                | ClusterCategory::Matrix
                | ClusterCategory::Main
                | ClusterCategory::Center
                | ClusterCategory::Mono
                | ClusterCategory::Cue
                | ClusterCategory::Talkback
        )
    }
}

/// A rack device row: I/O bank, in-bank assignment, and the device's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub io_bank: i64,
    pub assign: i64,
    pub name: String,
}

/// A channel label row from a snapshot chainer, already joined to its object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRecord {
    pub snapshot_id: i64,
    pub category: ClusterCategory,
    /// Type-local index of the labeled object (channel number for inputs).
    pub channel_index: i64,
    pub label: String,
}

/// A point-to-point route row, with both cluster categories resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub src_category: ClusterCategory,
    /// Rack slot for device sources, bus index for bus sources.
    pub src_type_index: i64,
    /// Output's stereo half, or a device-to-device source channel.
    pub src_channel_index: i64,
    pub dst_category: ClusterCategory,
    pub dst_type_index: i64,
    /// Input's stereo half (0 = left, 1 = right), or a device channel.
    pub dst_channel_index: i64,
    /// 0 = primary "A" wiring, 1 = redundant alternate "B".
    pub dst_section_index: i64,
}
