//! Domain entities and business rules

pub mod classifier;
pub mod config;
pub mod labels;
pub mod patch;
pub mod rack;
pub mod records;

// Re-export specific items to avoid ambiguous glob imports
pub use classifier::PatchClassifier;
pub use config::{ConfigError, ReportConfig, SheetNames};
pub use labels::{LabelIndex, BASELINE_SNAPSHOT};
pub use patch::{DisplayIndex, PatchBay, PatchSource, RoutingPatch};
pub use rack::{rack_slot, DeviceRack};
pub use records::{ClusterCategory, DeviceRecord, LabelRecord, RouteRecord};
