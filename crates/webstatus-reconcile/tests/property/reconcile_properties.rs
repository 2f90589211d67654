//! Property tests for the reconciliation fold.

use proptest::prelude::*;
use webstatus_core::{Observation, SourceId, StatusLevel};
use webstatus_reconcile::{reconcile, AuthorityTable};

const AGENTS: &[&str] = &["chrome", "edge", "firefox", "opera", "safari", "webkit"];

/// Sources with no authority in the default table.
const PLAIN_SOURCES: &[&str] = &["caniuse", "other"];

fn level() -> impl Strategy<Value = StatusLevel> {
    prop::sample::select(vec![
        StatusLevel::Unknown,
        StatusLevel::Consideration,
        StatusLevel::InDevelopment,
        StatusLevel::Experimental,
        StatusLevel::Shipped,
    ])
}

fn plain_observation() -> impl Strategy<Value = Observation> {
    (
        prop::sample::select(AGENTS),
        level(),
        prop::sample::select(PLAIN_SOURCES),
    )
        .prop_map(|(ua, status, source)| Observation::new(ua, status, SourceId::from(source)))
}

fn any_observation() -> impl Strategy<Value = Observation> {
    (
        prop::sample::select(AGENTS),
        level(),
        prop::sample::select(vec![
            "caniuse",
            "chromestatus",
            "edgestatus",
            "webkitstatus",
            "other",
            "feedback",
        ]),
    )
        .prop_map(|(ua, status, source)| Observation::new(ua, status, SourceId::from(source)))
}

proptest! {
    #[test]
    fn agents_land_in_at_most_one_set(observations in prop::collection::vec(any_observation(), 0..24)) {
        let result = reconcile(observations, &AuthorityTable::default()).data;
        for ua in AGENTS {
            let hits = StatusLevel::REPORTED
                .into_iter()
                .filter(|level| result.agents_at(*level).is_some_and(|set| set.iter().any(|a| a == ua)))
                .count();
            prop_assert!(hits <= 1, "{} appears in {} sets", ua, hits);
        }
    }

    #[test]
    fn optimistic_merge_is_the_max(levels in prop::collection::vec(level(), 1..8)) {
        let observations = levels
            .iter()
            .map(|status| Observation::new("firefox", *status, SourceId::Caniuse))
            .collect();
        let result = reconcile(observations, &AuthorityTable::default()).data;
        let expected = levels.iter().copied().max().unwrap_or_default();
        prop_assert_eq!(result.status_of("firefox"), expected);
    }

    #[test]
    fn core_source_decides_regardless_of_position(
        noise in prop::collection::vec(level(), 0..8),
        core in level(),
        position in 0usize..8,
    ) {
        let mut observations: Vec<Observation> = noise
            .iter()
            .map(|status| Observation::new("chrome", *status, SourceId::Caniuse))
            .collect();
        let at = position.min(observations.len());
        observations.insert(at, Observation::new("chrome", core, SourceId::ChromeStatus));

        let result = reconcile(observations, &AuthorityTable::default()).data;
        prop_assert_eq!(result.status_of("chrome"), core);
    }

    #[test]
    fn safari_never_exceeds_known_engine(
        observations in prop::collection::vec(plain_observation(), 0..16),
        engine in level(),
    ) {
        let mut observations = observations;
        observations.retain(|obs| !obs.ua.is_engine());
        observations.insert(0, Observation::new("webkit", engine, SourceId::WebkitStatus));

        let result = reconcile(observations, &AuthorityTable::default()).data;
        if engine.is_known() {
            prop_assert!(result.status_of("safari") <= engine);
        }
    }

    #[test]
    fn engine_entry_only_without_safari(
        observations in prop::collection::vec(plain_observation(), 0..16),
        engine in level(),
    ) {
        let mut observations = observations;
        observations.retain(|obs| !obs.ua.is_engine());
        let has_safari = observations.iter().any(|obs| obs.ua.is_engine_downstream());
        observations.push(Observation::new("webkit", engine, SourceId::WebkitStatus));

        let result = reconcile(observations, &AuthorityTable::default()).data;
        let webkit = result.status_of("webkit");
        if has_safari || !engine.is_known() {
            prop_assert_eq!(webkit, StatusLevel::Unknown);
        } else {
            prop_assert_eq!(webkit, engine);
        }
    }

    #[test]
    fn feedback_decides_regardless_of_engine(
        observations in prop::collection::vec(plain_observation(), 0..16),
        engine in level(),
        feedback in level(),
        position in 0usize..16,
    ) {
        let mut observations = observations;
        observations.retain(|obs| !obs.ua.is_engine());
        let at = position.min(observations.len());
        observations.insert(at, Observation::new("safari", feedback, SourceId::Feedback));
        observations.insert(0, Observation::new("webkit", engine, SourceId::WebkitStatus));

        let result = reconcile(observations, &AuthorityTable::default()).data;
        prop_assert_eq!(result.status_of("safari"), feedback);
    }

    #[test]
    fn reconciliation_is_deterministic(observations in prop::collection::vec(any_observation(), 0..24)) {
        let authority = AuthorityTable::default();
        let first = reconcile(observations.clone(), &authority);
        let second = reconcile(observations, &authority);
        prop_assert_eq!(first, second);
    }
}
