//! Inventory analysis against a fixed part requirements table.
//!
//! [`RequirementsTable::missing`] tallies the parts on a record per category
//! and reports every category whose count falls short of the requirement.

use crate::domain::{Part, PartCategory};
use serde::Serialize;
use std::collections::BTreeMap;

/// Required count per part category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementsTable {
    entries: &'static [(PartCategory, u32)],
}

impl RequirementsTable {
    /// One each of engine, electrical, fuel filter and oil filter, four tires.
    pub const STANDARD: RequirementsTable = RequirementsTable {
        entries: &[
            (PartCategory::Engine, 1),
            (PartCategory::Electrical, 1),
            (PartCategory::FuelFilter, 1),
            (PartCategory::OilFilter, 1),
            (PartCategory::Tire, 4),
        ],
    };

    pub const fn new(entries: &'static [(PartCategory, u32)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(PartCategory, u32)] {
        self.entries
    }

    /// Required count for a category; zero when the table does not list it.
    pub fn required(&self, category: PartCategory) -> u32 {
        self.entries
            .iter()
            .filter(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .sum()
    }

    /// Compute the shortfall of `parts` against this table.
    ///
    /// Input order does not matter and surplus parts are ignored.
    pub fn missing(&self, parts: &[Part]) -> MissingReport {
        let mut observed: BTreeMap<PartCategory, u32> = BTreeMap::new();
        for part in parts {
            *observed.entry(part.category).or_insert(0) += 1;
        }

        let mut report = MissingReport::default();
        for (category, required) in self.entries {
            let have = observed.get(category).copied().unwrap_or(0);
            report.add(*category, required.saturating_sub(have));
        }
        report
    }
}

impl Default for RequirementsTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Missing parts per category against [`RequirementsTable::STANDARD`].
pub fn compute_missing(parts: &[Part]) -> MissingReport {
    RequirementsTable::STANDARD.missing(parts)
}

/// Shortfall per category. Only strictly positive counts are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissingReport {
    missing: BTreeMap<PartCategory, u32>,
}

impl MissingReport {
    fn add(&mut self, category: PartCategory, count: u32) {
        if count > 0 {
            *self.missing.entry(category).or_insert(0) += count;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of deficient categories.
    pub fn len(&self) -> usize {
        self.missing.len()
    }

    pub fn get(&self, category: PartCategory) -> Option<u32> {
        self.missing.get(&category).copied()
    }

    /// Deficient categories in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PartCategory, u32)> + '_ {
        self.missing.iter().map(|(c, n)| (*c, *n))
    }

    /// Sum of all missing counts.
    pub fn total_missing(&self) -> u32 {
        self.missing.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Condition;

    fn parts(categories: &[PartCategory]) -> Vec<Part> {
        categories
            .iter()
            .map(|c| Part::new(*c, Condition::Good))
            .collect()
    }

    #[test]
    fn test_empty_inventory_misses_everything() {
        let report = compute_missing(&[]);
        assert_eq!(report.len(), 5);
        assert_eq!(report.get(PartCategory::Engine), Some(1));
        assert_eq!(report.get(PartCategory::Electrical), Some(1));
        assert_eq!(report.get(PartCategory::FuelFilter), Some(1));
        assert_eq!(report.get(PartCategory::OilFilter), Some(1));
        assert_eq!(report.get(PartCategory::Tire), Some(4));
        assert_eq!(report.total_missing(), 8);
    }

    #[test]
    fn test_complete_inventory_is_empty() {
        use PartCategory::*;
        let report = compute_missing(&parts(&[
            Tire, Engine, Tire, Electrical, Tire, FuelFilter, OilFilter, Tire,
        ]));
        assert!(report.is_empty());
    }

    #[test]
    fn test_two_tires_short() {
        use PartCategory::*;
        let report = compute_missing(&parts(&[
            Engine, Electrical, FuelFilter, OilFilter, Tire, Tire,
        ]));
        assert_eq!(report.len(), 1);
        assert_eq!(report.get(Tire), Some(2));
    }

    #[test]
    fn test_surplus_parts_ignored() {
        use PartCategory::*;
        let report = compute_missing(&parts(&[
            Engine, Engine, Electrical, FuelFilter, OilFilter, Tire, Tire, Tire, Tire, Tire,
        ]));
        assert!(report.is_empty());
    }

    #[test]
    fn test_iteration_follows_category_order() {
        use PartCategory::*;
        let report = compute_missing(&parts(&[Electrical, Tire]));
        let order: Vec<_> = report.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![Engine, FuelFilter, OilFilter, Tire]);
    }

    #[test]
    fn test_custom_table() {
        use PartCategory::*;
        static SPARES: [(PartCategory, u32); 2] = [(Tire, 5), (OilFilter, 2)];
        let table = RequirementsTable::new(&SPARES);

        let report = table.missing(&parts(&[Tire, Tire, Tire, Tire, OilFilter]));
        assert_eq!(report.get(Tire), Some(1));
        assert_eq!(report.get(OilFilter), Some(1));
        assert_eq!(report.get(Engine), None);
        assert_eq!(table.required(Engine), 0);
        assert_eq!(table.required(Tire), 5);
    }

    #[test]
    fn test_standard_is_default() {
        assert_eq!(RequirementsTable::default(), RequirementsTable::STANDARD);
        assert_eq!(RequirementsTable::STANDARD.required(PartCategory::Tire), 4);
    }
}
