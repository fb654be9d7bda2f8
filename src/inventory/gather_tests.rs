//! Tests for the cross-adapter fan-out.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use crate::features::{self, POWER_OFF_FEATURE};
use crate::inventory::{GatherOptions, Inspector, Selection, gather};
use crate::network::{
    AdapterEnumerator, AdapterInfo, AdapterKind, AdapterProperty, AdvancedPropertyProvider,
    PowerManagement, PowerManagementProvider, ProviderError,
};

struct FixedEnumerator {
    adapters: Vec<AdapterInfo>,
}

impl AdapterEnumerator for FixedEnumerator {
    fn list_all(&self) -> Result<Vec<AdapterInfo>, ProviderError> {
        Ok(self.adapters.clone())
    }
}

struct FailingEnumerator;

impl AdapterEnumerator for FailingEnumerator {
    fn list_all(&self) -> Result<Vec<AdapterInfo>, ProviderError> {
        Err(ProviderError::Platform {
            message: "enumeration unavailable".into(),
        })
    }
}

struct StaticPower;

impl PowerManagementProvider for StaticPower {
    fn get(&self, _adapter: &AdapterInfo) -> Result<PowerManagement, ProviderError> {
        Ok(PowerManagement {
            allow_power_off: true,
        })
    }
}

struct SlowProperties {
    delay: Duration,
}

impl AdvancedPropertyProvider for SlowProperties {
    fn list(&self, _adapter: &AdapterInfo) -> Result<Vec<AdapterProperty>, ProviderError> {
        std::thread::sleep(self.delay);
        Ok(Vec::new())
    }
}

fn adapter(name: &str) -> AdapterInfo {
    AdapterInfo::new(name, "Test NIC", format!("{{{name}}}"), AdapterKind::Ethernet)
}

fn inspector(adapters: Vec<AdapterInfo>) -> Arc<Inspector> {
    Arc::new(Inspector::new(
        Arc::new(FixedEnumerator { adapters }),
        Arc::new(StaticPower),
        Arc::new(SlowProperties {
            delay: Duration::ZERO,
        }),
        features::taxonomy::builtin(),
    ))
}

fn options(concurrency: usize) -> GatherOptions {
    GatherOptions {
        concurrency: NonZeroUsize::new(concurrency).unwrap(),
        deadline: None,
    }
}

#[tokio::test]
async fn all_selection_covers_every_enumerated_adapter() {
    let inspector = inspector(vec![adapter("Ethernet0"), adapter("Wi-Fi")]);

    let rows = gather(inspector.clone(), Selection::All, &options(2))
        .await
        .unwrap();

    let per_adapter = 1 + inspector.taxonomy().len();
    assert_eq!(rows.len(), 2 * per_adapter);
}

#[tokio::test]
async fn named_selection_inspects_only_named_adapters() {
    let inspector = inspector(vec![adapter("Ethernet0"), adapter("Wi-Fi")]);

    let rows = gather(
        inspector.clone(),
        Selection::Named(vec!["Wi-Fi".into()]),
        &options(1),
    )
    .await
    .unwrap();

    assert!(rows.iter().all(|r| r.adapter_name == "Wi-Fi"));
    assert_eq!(rows.len(), 1 + inspector.taxonomy().len());
}

#[tokio::test]
async fn unresolvable_name_contributes_nothing_without_failing_others() {
    let inspector = inspector(vec![adapter("Ethernet0")]);

    let rows = gather(
        inspector,
        Selection::Named(vec!["Bad0".into(), "Ethernet0".into()]),
        &options(2),
    )
    .await
    .unwrap();

    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r.adapter_name == "Ethernet0"));
}

#[tokio::test]
async fn parallel_and_sequential_runs_produce_identical_output() {
    let adapters = vec![adapter("Charlie"), adapter("Alpha"), adapter("Bravo")];

    let sequential = gather(inspector(adapters.clone()), Selection::All, &options(1))
        .await
        .unwrap();
    let parallel = gather(inspector(adapters), Selection::All, &options(3))
        .await
        .unwrap();

    assert_eq!(sequential, parallel);
}

#[tokio::test]
async fn output_is_sorted_by_adapter_then_feature() {
    let rows = gather(
        inspector(vec![adapter("Bravo"), adapter("Alpha")]),
        Selection::All,
        &options(2),
    )
    .await
    .unwrap();

    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|r| (r.adapter_name.as_str(), r.feature.as_str()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();

    assert_eq!(keys, sorted);
    assert_eq!(rows[0].adapter_name, "Alpha");
}

#[tokio::test]
async fn enumeration_failure_is_catastrophic_for_all_selection() {
    let inspector = Arc::new(Inspector::new(
        Arc::new(FailingEnumerator),
        Arc::new(StaticPower),
        Arc::new(SlowProperties {
            delay: Duration::ZERO,
        }),
        features::taxonomy::builtin(),
    ));

    let result = gather(inspector, Selection::All, &options(1)).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn deadline_returns_partial_results() {
    let slow = Arc::new(Inspector::new(
        Arc::new(FixedEnumerator {
            adapters: vec![adapter("Ethernet0")],
        }),
        Arc::new(StaticPower),
        Arc::new(SlowProperties {
            delay: Duration::from_secs(1),
        }),
        features::taxonomy::builtin(),
    ));
    let opts = GatherOptions {
        concurrency: NonZeroUsize::new(1).unwrap(),
        deadline: Some(Duration::from_millis(50)),
    };

    let rows = gather(slow, Selection::All, &opts).await.unwrap();

    // The single adapter cannot finish inside the budget; the run still
    // completes with whatever was collected.
    assert!(rows.is_empty());
}

#[tokio::test]
async fn generous_deadline_does_not_truncate_results() {
    let inspector = inspector(vec![adapter("Ethernet0")]);
    let opts = GatherOptions {
        concurrency: NonZeroUsize::new(2).unwrap(),
        deadline: Some(Duration::from_secs(60)),
    };

    let rows = gather(inspector.clone(), Selection::All, &opts).await.unwrap();

    assert_eq!(rows.len(), 1 + inspector.taxonomy().len());
    assert!(rows.iter().any(|r| r.feature == POWER_OFF_FEATURE));
}
