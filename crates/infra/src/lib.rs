//! I/O collaborators for patchbook: the session store and the report writer.

pub mod report;
pub mod store;
