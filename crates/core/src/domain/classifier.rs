//! Route classification
//!
//! A single forward pass over ordered route records, each classified into one
//! of three patch categories: console input, device-to-device, or output bus.
//! Classification never fails on well-formed input; routes matching no
//! category are dropped with a debug log.

use tracing::debug;

use crate::domain::labels::LabelIndex;
use crate::domain::patch::{DisplayIndex, PatchBay, RoutingPatch};
use crate::domain::rack::DeviceRack;
use crate::domain::records::{ClusterCategory, RouteRecord};

/// Classifies raw route records into resolved patches.
///
/// The rack and label index must be fully built before classification starts:
/// the merge and label lookups need complete maps.
pub struct PatchClassifier<'a> {
    rack: &'a DeviceRack,
    labels: &'a LabelIndex,
}

impl<'a> PatchClassifier<'a> {
    pub fn new(rack: &'a DeviceRack, labels: &'a LabelIndex) -> Self {
        Self { rack, labels }
    }

    /// Run the classification pass over records in store delivery order
    /// (destination category, then destination channel index).
    pub fn classify<I>(&self, routes: I) -> PatchBay
    where
        I: IntoIterator<Item = RouteRecord>,
    {
        let mut patches = PatchBay::new();
        for route in routes {
            if route.dst_category == ClusterCategory::Input {
                self.classify_input(&route, &mut patches);
            } else if route.src_category == ClusterCategory::Inputs
                && route.dst_category == ClusterCategory::Outputs
            {
                self.classify_device_link(&route, &mut patches);
            } else if route.dst_category == ClusterCategory::Outputs {
                self.classify_output(&route, &mut patches);
            } else {
                debug!(
                    "Dropping route {:?} -> {:?}: no patch category",
                    route.src_category, route.dst_category
                );
            }
        }
        patches
    }

    /// Channel input patch: a physical device feeding a console input.
    ///
    /// Stereo pairing and the primary/alternate "A"/"B" merge both key on the
    /// destination display index: a second route for the same channel and
    /// stereo half fills the other source slot of the existing patch.
    fn classify_input(&self, route: &RouteRecord, patches: &mut PatchBay) {
        let device_name = self.rack.resolve(route.src_type_index);
        let device_channel = DisplayIndex::Channel((route.src_channel_index + 1) as u32);
        let channel_num = route.dst_type_index;
        let is_alternate = route.dst_section_index == 1;

        // dst_channel_index 1 marks the right half of a stereo pair
        let input_channel = DisplayIndex::InputChannel {
            number: (channel_num + 1) as u32,
            right: route.dst_channel_index == 1,
        };

        match patches.find_input_mut(input_channel) {
            Some(existing) => {
                debug!("Merging source into input channel {}", input_channel);
                existing.set_source(device_name, device_channel, is_alternate);
            }
            None => {
                let mut patch = RoutingPatch::new(
                    device_name,
                    device_channel,
                    "Input",
                    input_channel,
                    is_alternate,
                );
                if let Some(label) = self.labels.input_label(channel_num) {
                    patch.set_destination_label(label);
                }
                patches.add_input(patch);
            }
        }
    }

    /// Device-to-device patch: two rack devices chained directly, bypassing
    /// the console's bus matrix. One record, one entry.
    fn classify_device_link(&self, route: &RouteRecord, patches: &mut PatchBay) {
        let patch = RoutingPatch::new(
            self.rack.resolve(route.src_type_index),
            DisplayIndex::Channel((route.src_channel_index + 1) as u32),
            self.rack.resolve(route.dst_type_index),
            DisplayIndex::Channel((route.dst_channel_index + 1) as u32),
            false,
        );
        patches.add_device_link(patch);
    }

    /// Output patch: an internal bus feeding a physical device channel.
    /// One record, one entry.
    fn classify_output(&self, route: &RouteRecord, patches: &mut PatchBay) {
        let bus_index = DisplayIndex::Bus {
            number: (route.src_type_index + 1) as u32,
            right: route.src_channel_index == 1,
        };
        let mut patch = RoutingPatch::new(
            route.src_category.name(),
            bus_index,
            self.rack.resolve(route.dst_type_index),
            DisplayIndex::Channel((route.dst_channel_index + 1) as u32),
            false,
        );
        if let Some(label) = self
            .labels
            .output_label(&route.src_category, route.src_type_index)
        {
            patch.set_source_label(label);
        }
        patches.add_output(patch);
    }
}
