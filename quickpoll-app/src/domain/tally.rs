use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregated counts per choice label, as returned by the tally service.
///
/// A read-only snapshot: the widget never mutates counts locally. The map is
/// ordered so that segment order (and colors) is stable across fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<String, u64>);

/// One chart segment derived from a [`Tally`]. The percentage is computed
/// from the live counts each time segments are produced, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub count: u64,
    pub percent: f64,
}

impl Segment {
    /// Tooltip text in the `label: count votes (percentage%)` format.
    pub fn tooltip(&self) -> String {
        format!("{}: {} votes ({:.1}%)", self.label, self.count, self.percent)
    }
}

impl Tally {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Share of the total for `count`, rounded to one decimal place.
    pub fn percent_of(&self, count: u64) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (count as f64 / total as f64 * 1000.0).round() / 10.0
    }

    pub fn segments(&self) -> Vec<Segment> {
        self.0
            .iter()
            .map(|(label, &count)| Segment {
                label: label.clone(),
                count,
                percent: self.percent_of(count),
            })
            .collect()
    }
}

impl FromIterator<(String, u64)> for Tally {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Tally(iter.into_iter().collect())
    }
}
