//! Campaign readiness evaluation.
//!
//! The registry fixes which checks run and in which order, the executor
//! resolves each check against the injected [`ReadinessSources`], the
//! aggregator folds the checks into a [`CampaignReadinessResult`], and the
//! fix router maps failing checks to remediation surfaces.

pub mod aggregate;
pub mod check;
pub mod classify;
pub mod executor;
pub mod fix_router;
pub mod panel;
pub mod policy;
pub mod registry;
pub mod sources;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::{aggregate, CampaignReadinessResult};
pub use check::{CheckStatus, ReadinessCheck};
pub use executor::{evaluate_campaign, run_checks};
pub use fix_router::{fix_target, route_for, FixSurface, FixTarget};
pub use panel::{PanelState, ReadinessPanel, RunTicket};
pub use policy::ReadinessPolicy;
pub use registry::{definition, registry, CheckDefinition, CheckId};
pub use sources::ReadinessSources;
