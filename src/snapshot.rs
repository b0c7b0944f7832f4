use crate::catalog::{Field, FIELDS};

use tracing::trace;

/// One sampling cycle worth of field values.
///
/// Every field starts out absent. A field can be filled once with a finite,
/// non-negative value and is never cleared afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    values: [Option<f64>; Field::COUNT],
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshot {
    pub fn new() -> Self {
        Self {
            values: [None; Field::COUNT],
        }
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        self.values[field.index()]
    }

    /// Stores `value` for `field` if the field is still absent and the value
    /// is in range. Returns `true` if the value was stored.
    pub fn record(&mut self, field: Field, value: f64) -> bool {
        if !is_valid(value) {
            return false;
        }

        let slot = &mut self.values[field.index()];

        if slot.is_some() {
            return false;
        }

        *slot = Some(value);
        trace!("{} = {value}", field.descriptor().name);
        true
    }

    /// Fields and their values, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<f64>)> + '_ {
        FIELDS
            .iter()
            .map(|descriptor| (descriptor.field, self.values[descriptor.field.index()]))
    }

    pub fn valid_count(&self) -> usize {
        self.iter().filter(|(_, value)| value.is_some()).count()
    }
}

pub fn is_valid(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let snapshot = Snapshot::new();

        assert_eq!(snapshot.valid_count(), 0);
        assert!(FIELDS.iter().all(|d| snapshot.get(d.field).is_none()));
    }

    #[test]
    fn zero_is_a_value() {
        let mut snapshot = Snapshot::new();

        assert!(snapshot.record(Field::DocaQueueEmpty, 0.0));
        assert_eq!(snapshot.get(Field::DocaQueueEmpty), Some(0.0));
    }

    #[test]
    fn rejects_out_of_range() {
        let mut snapshot = Snapshot::new();

        assert!(!snapshot.record(Field::IdleCycles, -1.0));
        assert!(!snapshot.record(Field::IdleCycles, f64::NAN));
        assert!(!snapshot.record(Field::IdleCycles, f64::INFINITY));
        assert_eq!(snapshot.get(Field::IdleCycles), None);
    }

    #[test]
    fn first_value_sticks() {
        let mut snapshot = Snapshot::new();

        assert!(snapshot.record(Field::UpcallDrops, 5.0));
        assert!(!snapshot.record(Field::UpcallDrops, 7.0));
        assert_eq!(snapshot.get(Field::UpcallDrops), Some(5.0));
    }

    #[test]
    fn iter_in_catalog_order() {
        let mut snapshot = Snapshot::new();
        snapshot.record(Field::MissWithSuccessUpcall, 3.0);
        snapshot.record(Field::DocaPipeResizeOver10Ms, 30.0);

        let pairs: Vec<(Field, Option<f64>)> = snapshot.iter().collect();

        assert_eq!(pairs.len(), Field::COUNT);
        assert_eq!(pairs[0], (Field::MissWithSuccessUpcall, Some(3.0)));
        assert_eq!(pairs[1], (Field::MissWithFailedUpcall, None));
        assert_eq!(pairs[Field::COUNT - 1], (Field::DocaPipeResizeOver10Ms, Some(30.0)));

        for ((field, _), descriptor) in pairs.iter().zip(FIELDS.iter()) {
            assert_eq!(*field, descriptor.field);
        }

        assert_eq!(snapshot.valid_count(), 2);
    }

    #[test]
    fn record_touches_one_field() {
        let mut snapshot = Snapshot::new();
        snapshot.record(Field::DatapathDropMeter, 8.0);

        for descriptor in FIELDS.iter() {
            let (field, value) = (descriptor.field, snapshot.get(descriptor.field));
            if field == Field::DatapathDropMeter {
                assert_eq!(value, Some(8.0));
            } else {
                assert_eq!(value, None, "{field:?}");
            }
        }
    }
}
