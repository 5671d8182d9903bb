//! Fix router: maps a check to the surface that remediates it.
//!
//! The mapping is an exhaustive match over [`CheckId`], so adding a check
//! without deciding where it is fixed does not compile.

use serde::Serialize;

use super::check::{CheckStatus, ReadinessCheck};
use super::registry::CheckId;

/// Remediation dialogs the dashboard knows how to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixSurface {
    A2p,
    PhoneNumbers,
    Leads,
    AiAgent,
    RetellPhone,
    WaitSteps,
    AiSms,
}

impl FixSurface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A2p => "a2p",
            Self::PhoneNumbers => "phone_numbers",
            Self::Leads => "leads",
            Self::AiAgent => "ai_agent",
            Self::RetellPhone => "retell_phone",
            Self::WaitSteps => "wait_steps",
            Self::AiSms => "ai_sms",
        }
    }
}

/// Where the operator is sent to fix a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FixTarget {
    Dialog { surface: FixSurface },
    ExternalRoute { path: &'static str },
}

/// Settings page holding the account's call webhook.
pub const WEBHOOK_SETTINGS_ROUTE: &str = "/settings/webhooks";

/// Remediation target for a check id, or `None` when nothing can be fixed.
pub fn route_for(id: CheckId) -> Option<FixTarget> {
    let surface = match id {
        CheckId::A2pRegistration => FixSurface::A2p,
        CheckId::SmsPhoneNumber | CheckId::PhoneNumbers | CheckId::CampaignSmsNumber => {
            FixSurface::PhoneNumbers
        }
        CheckId::LeadsAssigned => FixSurface::Leads,
        CheckId::AiAgent => FixSurface::AiAgent,
        CheckId::AgentPhone | CheckId::CallerIdRetell => FixSurface::RetellPhone,
        CheckId::WaitStepsConfig => FixSurface::WaitSteps,
        CheckId::AiSmsSettings => FixSurface::AiSms,
        CheckId::Webhook => {
            return Some(FixTarget::ExternalRoute {
                path: WEBHOOK_SETTINGS_ROUTE,
            })
        }
        // A missing campaign has no fix surface; the operator picks another one.
        CheckId::CampaignNotFound => return None,
    };
    Some(FixTarget::Dialog { surface })
}

/// Remediation target for a resolved check. Passing checks are not
/// actionable.
pub fn fix_target(check: &ReadinessCheck) -> Option<FixTarget> {
    match check.status {
        CheckStatus::Pass => None,
        CheckStatus::Warning | CheckStatus::Fail => route_for(check.id),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readiness::registry::{definition, registry};

    fn dialog(surface: FixSurface) -> Option<FixTarget> {
        Some(FixTarget::Dialog { surface })
    }

    #[test]
    fn every_registered_check_has_a_route() {
        for def in registry() {
            assert!(route_for(def.id).is_some(), "{} has no fix route", def.id);
        }
    }

    #[test]
    fn campaign_not_found_has_no_route() {
        assert_eq!(route_for(CheckId::CampaignNotFound), None);
    }

    #[test]
    fn sms_number_checks_share_phone_numbers_dialog() {
        assert_eq!(route_for(CheckId::SmsPhoneNumber), dialog(FixSurface::PhoneNumbers));
        assert_eq!(route_for(CheckId::CampaignSmsNumber), dialog(FixSurface::PhoneNumbers));
        assert_eq!(route_for(CheckId::PhoneNumbers), dialog(FixSurface::PhoneNumbers));
    }

    #[test]
    fn agent_phone_checks_share_retell_dialog() {
        assert_eq!(route_for(CheckId::AgentPhone), dialog(FixSurface::RetellPhone));
        assert_eq!(route_for(CheckId::CallerIdRetell), dialog(FixSurface::RetellPhone));
    }

    #[test]
    fn remaining_dialog_routes() {
        assert_eq!(route_for(CheckId::A2pRegistration), dialog(FixSurface::A2p));
        assert_eq!(route_for(CheckId::LeadsAssigned), dialog(FixSurface::Leads));
        assert_eq!(route_for(CheckId::AiAgent), dialog(FixSurface::AiAgent));
        assert_eq!(route_for(CheckId::WaitStepsConfig), dialog(FixSurface::WaitSteps));
        assert_eq!(route_for(CheckId::AiSmsSettings), dialog(FixSurface::AiSms));
    }

    #[test]
    fn webhook_routes_externally() {
        assert_eq!(
            route_for(CheckId::Webhook),
            Some(FixTarget::ExternalRoute {
                path: "/settings/webhooks"
            })
        );
    }

    #[test]
    fn passing_check_is_not_actionable() {
        let def = definition(CheckId::LeadsAssigned);
        let pass = ReadinessCheck::from_definition(&def, CheckStatus::Pass, "ok");
        let fail = ReadinessCheck::from_definition(&def, CheckStatus::Fail, "none");
        let warn = ReadinessCheck::from_definition(&def, CheckStatus::Warning, "few");
        assert_eq!(fix_target(&pass), None);
        assert_eq!(fix_target(&fail), dialog(FixSurface::Leads));
        assert_eq!(fix_target(&warn), dialog(FixSurface::Leads));
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_value(route_for(CheckId::AgentPhone).unwrap()).unwrap();
        assert_eq!(json["kind"], "dialog");
        assert_eq!(json["surface"], "retell_phone");

        let json = serde_json::to_value(route_for(CheckId::Webhook).unwrap()).unwrap();
        assert_eq!(json["kind"], "external_route");
        assert_eq!(json["path"], "/settings/webhooks");
    }

    #[test]
    fn surface_str_matches_serde() {
        for surface in [
            FixSurface::A2p,
            FixSurface::PhoneNumbers,
            FixSurface::Leads,
            FixSurface::AiAgent,
            FixSurface::RetellPhone,
            FixSurface::WaitSteps,
            FixSurface::AiSms,
        ] {
            assert_eq!(serde_json::to_value(surface).unwrap(), surface.as_str());
        }
    }
}
