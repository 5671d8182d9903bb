//! Readiness panel state machine.
//!
//! `idle -> checking -> ready | not_ready | run_failed -> checking ...`
//!
//! Every run is identified by a [`RunTicket`]. Starting a new run or
//! dismissing the panel invalidates all earlier tickets, so a late result from
//! a superseded run is dropped whole instead of being merged into the panel.
//! There is no terminal state.

use serde::Serialize;

use super::aggregate::CampaignReadinessResult;
use super::fix_router::{fix_target, FixTarget};
use super::registry::CheckId;

/// Handle for one readiness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunTicket(u64);

impl RunTicket {
    pub fn run_id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelState {
    Idle,
    Checking { run: RunTicket },
    Ready { result: CampaignReadinessResult },
    NotReady { result: CampaignReadinessResult },
    /// The run itself could not complete (distinct from a failing check).
    RunFailed { message: String },
}

#[derive(Debug)]
pub struct ReadinessPanel {
    state: PanelState,
    next_run: u64,
}

impl Default for ReadinessPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessPanel {
    pub fn new() -> Self {
        Self {
            state: PanelState::Idle,
            next_run: 1,
        }
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Whether the re-check control is enabled.
    pub fn can_recheck(&self) -> bool {
        !matches!(self.state, PanelState::Checking { .. })
    }

    /// Begin a new run, superseding any run still in flight.
    pub fn start_check(&mut self) -> RunTicket {
        let ticket = RunTicket(self.next_run);
        self.next_run += 1;
        self.state = PanelState::Checking { run: ticket };
        ticket
    }

    /// Apply a finished run. Returns `false` (and changes nothing) when the
    /// ticket has been superseded or the panel was dismissed.
    pub fn complete(&mut self, ticket: RunTicket, result: CampaignReadinessResult) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(run = ticket.0, "Discarding stale readiness result");
            return false;
        }
        self.state = if result.is_ready {
            PanelState::Ready { result }
        } else {
            PanelState::NotReady { result }
        };
        true
    }

    /// Record that the run could not complete. Same staleness rules as
    /// [`complete`](Self::complete).
    pub fn fail_run(&mut self, ticket: RunTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = PanelState::RunFailed {
            message: message.into(),
        };
        true
    }

    /// Close the panel; any in-flight run becomes stale.
    pub fn dismiss(&mut self) {
        self.state = PanelState::Idle;
    }

    /// A fix dialog closed. Starts a fresh run when the operator reports the
    /// problem fixed.
    pub fn fix_closed(&mut self, fixed: bool) -> Option<RunTicket> {
        fixed.then(|| self.start_check())
    }

    /// The latest result, when the panel is showing one.
    pub fn result(&self) -> Option<&CampaignReadinessResult> {
        match &self.state {
            PanelState::Ready { result } | PanelState::NotReady { result } => Some(result),
            _ => None,
        }
    }

    /// Fix target for a check in the displayed result. `None` for passing or
    /// absent checks, and while no result is shown.
    pub fn fix_target(&self, id: CheckId) -> Option<FixTarget> {
        self.result()?.check(id).and_then(fix_target)
    }

    fn is_current(&self, ticket: RunTicket) -> bool {
        matches!(self.state, PanelState::Checking { run } if run == ticket)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
