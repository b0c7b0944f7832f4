//! Publication of snapshots.
//!
//! [`samples`] selects the fields of a snapshot that hold a value and tags
//! them with their catalog metadata. [`prometheus`] renders those samples in
//! the Prometheus text format and [`http`] serves them.

use crate::catalog::{FieldDescriptor, MetricKind};
use crate::snapshot::Snapshot;

pub mod http;
pub mod prometheus;

/// A field value ready for emission.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: MetricKind,
    pub value: f64,
}

/// Returns one sample per field in `fields` that holds a value in
/// `snapshot`, in catalog order.
pub fn samples(fields: &'static [FieldDescriptor], snapshot: &Snapshot) -> Vec<Sample> {
    fields
        .iter()
        .filter_map(|descriptor| {
            snapshot.get(descriptor.field).map(|value| Sample {
                name: descriptor.name,
                description: descriptor.description,
                kind: descriptor.kind,
                value,
            })
        })
        .collect()
}
