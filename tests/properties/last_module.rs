//! Property tests for last-module detection.

use proptest::prelude::*;

use stagedeploy::domain::entities::{ModuleEntry, ModuleSequence};
use stagedeploy::domain::services::LastModuleDetector;

/// Unique module ids with a random staging flag each
fn modules() -> impl Strategy<Value = Vec<ModuleEntry>> {
    proptest::collection::vec(any::<bool>(), 1..=12).prop_map(|flags| {
        flags
            .into_iter()
            .enumerate()
            .map(|(i, staging)| ModuleEntry::new(format!("module-{i}"), staging))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: at most one module is last, and it is a staging module.
    #[test]
    fn property_at_most_one_last_module(entries in modules()) {
        let sequence = ModuleSequence::new(entries.clone());
        let detector = LastModuleDetector::new(&sequence);

        let last: Vec<&ModuleEntry> = entries
            .iter()
            .filter(|m| detector.is_last(&m.id).unwrap())
            .collect();

        prop_assert!(last.len() <= 1);
        if let Some(module) = last.first() {
            prop_assert!(module.runs_staging);
        }
        prop_assert_eq!(last.len() == 1, entries.iter().any(|m| m.runs_staging));
    }

    /// PROPERTY: no staging module follows the last one.
    #[test]
    fn property_nothing_stages_after_last(entries in modules()) {
        let sequence = ModuleSequence::new(entries.clone());
        let detector = LastModuleDetector::new(&sequence);

        if let Some(position) = entries.iter().position(|m| detector.is_last(&m.id).unwrap()) {
            prop_assert!(entries[position + 1..].iter().all(|m| !m.runs_staging));
        }
    }

    /// PROPERTY: ids outside the build are rejected, never "last".
    #[test]
    fn property_unknown_module_is_rejected(entries in modules(), suffix in "[a-z]{1,8}") {
        let sequence = ModuleSequence::new(entries);
        let detector = LastModuleDetector::new(&sequence);

        let unknown_id = format!("other-{}", suffix);
        prop_assert!(detector.is_last(&unknown_id).is_err());
    }
}
