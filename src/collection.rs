//! The load result and the bookkeeping used while building it.
//!
//! Every candidate folder is recorded as a failure before it is parsed; the
//! entry is cleared only by `AssetCollector::admit`, the single place where a
//! record enters a collection.

use crate::descriptor::{AssetRecord, Config2d, Config3dField, Config3dRobot, ConfigJoystick};
use crate::ordering::{descending_order, field2d_order, natural_cmp};
use serde::Serialize;
use std::collections::HashSet;

/// Merged, de-duplicated, and sorted assets from every source root.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCollection {
    pub field2ds: Vec<Config2d>,
    pub field3ds: Vec<Config3dField>,
    pub robots: Vec<Config3dRobot>,
    pub joysticks: Vec<ConfigJoystick>,
    /// Folder names that never became a record, possibly repeated across roots.
    pub load_failures: Vec<String>,
}

impl AssetCollection {
    pub fn field2d(&self, name: &str) -> Option<&Config2d> {
        self.field2ds.iter().find(|config| config.name == name)
    }

    pub fn field3d(&self, name: &str) -> Option<&Config3dField> {
        self.field3ds.iter().find(|config| config.name == name)
    }

    pub fn robot(&self, name: &str) -> Option<&Config3dRobot> {
        self.robots.iter().find(|config| config.name == name)
    }

    pub fn joystick(&self, name: &str) -> Option<&ConfigJoystick> {
        self.joysticks.iter().find(|config| config.name == name)
    }

    /// Number of admitted records across all kinds.
    pub fn len(&self) -> usize {
        self.field2ds.len() + self.field3ds.len() + self.robots.len() + self.joysticks.len()
    }

    /// True when no record of any kind was admitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for one pending failure entry; consumed when the record is admitted.
#[derive(Debug)]
#[must_use]
pub struct FailureTicket(usize);

#[derive(Debug, Default)]
struct PendingFailures {
    entries: Vec<Option<String>>,
}

impl PendingFailures {
    fn assume_failed(&mut self, folder: &str) -> FailureTicket {
        self.entries.push(Some(folder.to_string()));
        FailureTicket(self.entries.len() - 1)
    }

    fn clear(&mut self, ticket: FailureTicket) {
        if let Some(entry) = self.entries.get_mut(ticket.0) {
            *entry = None;
        }
    }

    fn into_names(self) -> Vec<String> {
        self.entries.into_iter().flatten().collect()
    }
}

/// Accumulates records in scan order until `finish` merges and sorts them.
#[derive(Debug, Default)]
pub struct AssetCollector {
    field2ds: Vec<Config2d>,
    field3ds: Vec<Config3dField>,
    robots: Vec<Config3dRobot>,
    joysticks: Vec<ConfigJoystick>,
    failures: PendingFailures,
}

impl AssetCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `folder` as failed until its ticket is passed to [`admit`](Self::admit).
    pub fn assume_failed(&mut self, folder: &str) -> FailureTicket {
        self.failures.assume_failed(folder)
    }

    /// Push an admitted record and clear its pending failure.
    pub fn admit(&mut self, ticket: FailureTicket, record: AssetRecord) {
        match record {
            AssetRecord::Field2d(config) => self.field2ds.push(config),
            AssetRecord::Field3d(config) => self.field3ds.push(config),
            AssetRecord::Robot(config) => self.robots.push(config),
            AssetRecord::Joystick(config) => self.joysticks.push(config),
        }
        self.failures.clear(ticket);
    }

    /// De-duplicate by name (first seen wins) and apply each kind's ordering.
    pub fn finish(self) -> AssetCollection {
        let mut field2ds = first_seen_by_name(self.field2ds, |c| &c.name);
        let mut field3ds = first_seen_by_name(self.field3ds, |c| &c.name);
        let mut robots = first_seen_by_name(self.robots, |c| &c.name);
        let mut joysticks = first_seen_by_name(self.joysticks, |c| &c.name);
        let mut load_failures = self.failures.into_names();

        field2ds.sort_by(|a, b| field2d_order(&a.name, &b.name));
        field3ds.sort_by(|a, b| descending_order(&a.name, &b.name));
        robots.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        joysticks.sort_by(|a, b| descending_order(&a.name, &b.name));
        load_failures.sort_by(|a, b| natural_cmp(a, b));

        AssetCollection {
            field2ds,
            field3ds,
            robots,
            joysticks,
            load_failures,
        }
    }
}

fn first_seen_by_name<T>(records: Vec<T>, name: impl Fn(&T) -> &String) -> Vec<T> {
    let mut seen: HashSet<String> = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(name(record).clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn robot(name: &str, path: &str) -> AssetRecord {
        AssetRecord::Robot(Config3dRobot {
            name: name.to_string(),
            path: path.to_string(),
            ..Config3dRobot::default()
        })
    }

    #[test]
    fn admitted_tickets_leave_only_real_failures() {
        let mut collector = AssetCollector::new();
        let first = collector.assume_failed("Robot_A");
        let _second = collector.assume_failed("Robot_Broken");
        let third = collector.assume_failed("Robot_B");
        collector.admit(third, robot("B", "b"));
        collector.admit(first, robot("A", "a"));

        let assets = collector.finish();
        assert_eq!(assets.load_failures, vec!["Robot_Broken".to_string()]);
        assert_eq!(assets.robots.len(), 2);
        assert_eq!(assets.len(), 2);
    }

    #[test]
    fn first_record_with_a_name_wins() {
        let mut collector = AssetCollector::new();
        let high = collector.assume_failed("Robot_KitBot");
        collector.admit(high, robot("KitBot", "user"));
        let low = collector.assume_failed("Robot_KitBot");
        collector.admit(low, robot("KitBot", "bundled"));

        let assets = collector.finish();
        assert_eq!(assets.robots.len(), 1);
        assert_eq!(assets.robot("KitBot").map(|r| r.path.as_str()), Some("user"));
        assert!(assets.load_failures.is_empty());
    }

    #[test]
    fn duplicate_failures_are_kept_and_sorted_naturally() {
        let mut collector = AssetCollector::new();
        let _ = collector.assume_failed("Robot_10");
        let _ = collector.assume_failed("Robot_2");
        let _ = collector.assume_failed("Robot_2");

        let assets = collector.finish();
        assert_eq!(assets.load_failures, vec!["Robot_2", "Robot_2", "Robot_10"]);
        assert!(assets.is_empty());
    }

    #[test]
    fn collection_serializes_with_camel_case_keys() {
        let assets = AssetCollection {
            load_failures: vec!["Field2d_Bad".to_string()],
            ..AssetCollection::default()
        };
        let value = serde_json::to_value(&assets).expect("serialize");
        assert_eq!(value["loadFailures"][0], "Field2d_Bad");
        assert!(value["field2ds"].as_array().is_some_and(|a| a.is_empty()));
    }
}
