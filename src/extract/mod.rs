//! Turns the text of the two `ovs-appctl` reports into a [`Snapshot`].
//!
//! Extraction never fails. A report that is empty, a label that is missing
//! and a token that does not parse all leave the affected field absent, and
//! only that field.

use crate::catalog::{FieldDescriptor, Report};
use crate::snapshot::Snapshot;
use crate::source::Reports;

use tracing::{debug, trace};

mod anchor;

/// Extracts every field in `fields` from the PMD stats and coverage reports.
pub fn extract(fields: &[FieldDescriptor], reports: &Reports) -> Snapshot {
    let mut snapshot = Snapshot::new();

    for report in [Report::PmdStats, Report::Coverage] {
        extract_report(fields, report, reports.get(report), &mut snapshot);
    }

    debug!(
        "extracted {} of {} fields",
        snapshot.valid_count(),
        fields.len()
    );

    snapshot
}

/// Extracts the fields sourced from `report` into `snapshot`.
pub fn extract_report(
    fields: &[FieldDescriptor],
    report: Report,
    text: &str,
    snapshot: &mut Snapshot,
) {
    if text.trim().is_empty() {
        debug!("{} report is empty", report.as_str());
        return;
    }

    for descriptor in fields.iter().filter(|d| d.report == report) {
        if let Some(value) = extract_field(descriptor, text) {
            snapshot.record(descriptor.field, value);
        }
    }
}

/// Returns the value on the first line that starts with the field's label
/// and carries a well-formed token at the field's anchor. Label lines
/// without a usable token are skipped.
pub fn extract_field(descriptor: &FieldDescriptor, text: &str) -> Option<f64> {
    let mut seen = false;

    let value = text.lines().find_map(|line| {
        let end = descriptor.match_label(line)?;
        seen = true;

        let Some(token) = anchor::token(descriptor.anchor, &line[end..]) else {
            debug!("{}: no value on line: {line}", descriptor.name);
            return None;
        };

        let value = anchor::parse(token);

        if value.is_none() {
            debug!("{}: malformed value: {token}", descriptor.name);
        }

        value
    });

    if !seen {
        trace!("{}: label not found", descriptor.name);
    }

    value
}
