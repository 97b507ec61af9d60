use crate::element::{RawElement, RawValue};
use crate::tag::{self, TagKey};
use std::cmp::Ordering;

/// Slider-style navigation over the instance numbers of a series
///
/// Derived from the Instance Number tag `(0020,0013)` of the raw element
/// map. The ordered sequence defaults to `[1]` when the tag is absent or
/// unparseable, so a selector always has at least one position. Duplicate
/// instance numbers are kept as separate positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesIndexSelector {
    ordered: Vec<i64>,
    position: usize,
}

impl SeriesIndexSelector {
    /// Derives the instance-number order from a raw element map
    pub fn from_elements<'a, I>(elements: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a RawElement)>,
    {
        let numbers = elements
            .into_iter()
            .find(|(key, _)| TagKey::from_composed_key(key) == tag::INSTANCE_NUMBER)
            .and_then(|(_, element)| element.value.as_ref())
            .map(instance_numbers)
            .unwrap_or_default();

        Self::from_instance_numbers(numbers)
    }

    /// Builds a selector from already-collected instance numbers
    pub fn from_instance_numbers(numbers: Vec<f64>) -> Self {
        let mut finite: Vec<f64> = numbers.into_iter().filter(|n| n.is_finite()).collect();
        finite.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let ordered: Vec<i64> = finite.into_iter().map(|n| n as i64).collect();
        Self {
            ordered: if ordered.is_empty() { vec![1] } else { ordered },
            position: 0,
        }
    }

    /// Instance numbers in ascending order, duplicates preserved
    pub fn ordered_instance_numbers(&self) -> &[i64] {
        &self.ordered
    }

    /// Inclusive slider domain `(0, count - 1)`
    pub fn slider_domain(&self) -> (usize, usize) {
        (0, self.ordered.len() - 1)
    }

    /// Position of an instance number, or 0 when not present
    pub fn position_of(&self, instance_number: i64) -> usize {
        self.ordered
            .iter()
            .position(|&n| n == instance_number)
            .unwrap_or(0)
    }

    /// Instance number at a slider position, `None` when out of range
    pub fn instance_number_at(&self, position: usize) -> Option<i64> {
        self.ordered.get(position).copied()
    }

    /// Current slider position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the selection; out-of-range positions are ignored
    pub fn set_position(&mut self, position: usize) {
        if position < self.ordered.len() {
            self.position = position;
        }
    }

    /// Instance number at the current position
    pub fn selected_instance_number(&self) -> i64 {
        self.ordered[self.position]
    }
}

/// Coerces an Instance Number value to its candidate numbers; textual
/// values may be backslash-joined per the DICOM multi-value convention
fn instance_numbers(value: &RawValue) -> Vec<f64> {
    match value {
        RawValue::Number(n) => vec![*n],
        RawValue::NumberList(ns) => ns.clone(),
        RawValue::Text(s) => s
            .split('\\')
            .filter_map(|part| part.trim().parse::<f64>().ok())
            .collect(),
        RawValue::Bytes(_) => Vec::new(),
    }
}
