//! The reconciliation fold.
//!
//! Rules, applied per user agent over its observations in order:
//! - Rule 0: an override source sets the status, uncapped, and ends the fold.
//! - Rule 3: any other candidate status for safari is capped at the engine's
//!   status.
//! - Rule 1: the first core source for the agent sets the status. Only an
//!   override source can change it afterwards.
//! - Rule 2: otherwise the status only ever moves up.
//!
//! Then Rule 4: with a known engine status and no safari observation at all,
//! the engine itself is reported.

use std::ops::ControlFlow;

use webstatus_core::errors::ReconcileError;
use webstatus_core::{Observation, Outcome, StatusLevel, UserAgent};

use crate::authority::{Authority, AuthorityTable};
use crate::feature_status::FeatureStatus;

/// How far the fold for one agent has committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Settled {
    /// No authoritative observation yet.
    #[default]
    Open,
    /// A core source set the status.
    Core,
}

#[derive(Debug, Clone, Copy, Default)]
struct Running {
    status: StatusLevel,
    settled: Settled,
}

impl Running {
    fn step(
        self,
        obs: &Observation,
        authority: &AuthorityTable,
        ceiling: Option<StatusLevel>,
    ) -> ControlFlow<StatusLevel, Running> {
        let capped = match ceiling {
            Some(engine) if obs.ua.is_engine_downstream() => obs.status.capped_at(engine),
            _ => obs.status,
        };
        match (authority.authority(&obs.source, &obs.ua), self.settled) {
            (Authority::Override, _) => ControlFlow::Break(obs.status),
            (Authority::Core, Settled::Open) => ControlFlow::Continue(Running {
                status: capped,
                settled: Settled::Core,
            }),
            (_, Settled::Core) => ControlFlow::Continue(self),
            (Authority::None, Settled::Open) => ControlFlow::Continue(Running {
                status: self.status.max(capped),
                ..self
            }),
        }
    }
}

/// Compute the final status sets for one feature.
///
/// Never fails. Conflicting engine observations are reported as issues and
/// the first one wins.
pub fn reconcile(observations: Vec<Observation>, authority: &AuthorityTable) -> Outcome<FeatureStatus> {
    let _span = webstatus_core::reconcile_span!(observations.len()).entered();
    let mut outcome = Outcome::new(FeatureStatus::default());

    let engine = engine_status(&observations, &mut outcome);
    let ceiling = engine.filter(StatusLevel::is_known);

    let mut agents: Vec<&UserAgent> = Vec::new();
    for obs in &observations {
        if !obs.ua.is_engine() && !agents.contains(&&obs.ua) {
            agents.push(&obs.ua);
        }
    }

    let mut finals = Vec::with_capacity(agents.len());
    for ua in &agents {
        let folded = observations
            .iter()
            .filter(|obs| obs.ua == **ua)
            .try_fold(Running::default(), |running, obs| {
                running.step(obs, authority, ceiling)
            });
        let status = match folded {
            ControlFlow::Continue(running) => running.status,
            ControlFlow::Break(status) => status,
        };
        tracing::trace!(%ua, %status, "agent reconciled");
        finals.push(((*ua).clone(), status));
    }

    if let Some(engine) = ceiling {
        if !agents.iter().any(|ua| ua.is_engine_downstream()) {
            finals.push((UserAgent::engine(), engine));
        }
    }

    for (ua, status) in finals {
        outcome.data.assign(ua, status);
    }
    outcome.data.implementations = observations;
    outcome
}

/// Status of the first engine observation. Later ones that disagree are
/// recorded as conflicts.
fn engine_status(
    observations: &[Observation],
    outcome: &mut Outcome<FeatureStatus>,
) -> Option<StatusLevel> {
    let mut engine_obs = observations.iter().filter(|obs| obs.ua.is_engine());
    let first = engine_obs.next()?;
    for later in engine_obs.filter(|obs| obs.status != first.status) {
        tracing::warn!(
            kept = %first.status,
            ignored = %later.status,
            source = %later.source,
            "conflicting engine statuses"
        );
        outcome.add_issue(ReconcileError::EngineConflict {
            agent: first.ua.to_string(),
            kept: first.status,
            kept_from: first.source.clone(),
            ignored: later.status,
            ignored_from: later.source.clone(),
        });
    }
    Some(first.status)
}
