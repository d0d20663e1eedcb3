//! Per-settlement conversion timers.

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

/// Days-since-capture record for one settlement.
///
/// `settlement_name` is a denormalized display cache only — lookups always
/// go through `settlement_id`. Older state files lack the name field, so it
/// stays optional and is skipped on output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementChangeTimer {
    pub settlement_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_name: Option<String>,
    #[serde(default)]
    pub days_since_owner_changed: u32,
}

impl SettlementChangeTimer {
    pub fn new(settlement_id: u64, settlement_name: Option<String>) -> Self {
        Self {
            settlement_id,
            settlement_name,
            days_since_owner_changed: 0,
        }
    }

    pub fn is_matured(&self, threshold: u32) -> bool {
        self.days_since_owner_changed >= threshold
    }
}

/// Result of recording an ownership change, used to pick the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Settlement culture differs from the new owner's; counting from zero.
    Scheduled,
    /// Cultures already match; timer pre-set to the threshold.
    AlreadyMatching,
}

/// Ordered registry of conversion timers, at most one per settlement id
/// (enforced by lookup-before-insert). Replaced wholesale when persisted
/// state is re-read.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerRegistry {
    timers: Vec<SettlementChangeTimer>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, settlement_id: u64) -> Option<&SettlementChangeTimer> {
        self.timers.iter().find(|t| t.settlement_id == settlement_id)
    }

    fn get_mut(&mut self, settlement_id: u64) -> Option<&mut SettlementChangeTimer> {
        self.timers
            .iter_mut()
            .find(|t| t.settlement_id == settlement_id)
    }

    /// Record an ownership change: create the timer if missing, otherwise
    /// reset it. When the settlement's culture already equals the new
    /// owner's, the counter starts at `threshold` (immediately eligible)
    /// instead of zero.
    pub fn start_or_reset(
        &mut self,
        settlement_id: u64,
        settlement_name: Option<String>,
        already_matching: bool,
        threshold: u32,
    ) -> StartOutcome {
        let days = if already_matching { threshold } else { 0 };
        match self.get_mut(settlement_id) {
            Some(timer) => {
                timer.days_since_owner_changed = days;
                if settlement_name.is_some() {
                    timer.settlement_name = settlement_name;
                }
            }
            None => {
                let mut timer = SettlementChangeTimer::new(settlement_id, settlement_name);
                timer.days_since_owner_changed = days;
                self.timers.push(timer);
            }
        }
        if already_matching {
            StartOutcome::AlreadyMatching
        } else {
            StartOutcome::Scheduled
        }
    }

    /// Advance every unmatured timer by one day. Matured timers stay put,
    /// clamping the counter at the threshold's reach.
    pub fn tick(&mut self, threshold: u32) {
        for timer in &mut self.timers {
            if !timer.is_matured(threshold) {
                timer.days_since_owner_changed += 1;
            }
        }
    }

    pub fn matured_ids(&self, threshold: u32) -> Vec<u64> {
        self.timers
            .iter()
            .filter(|t| t.is_matured(threshold))
            .map(|t| t.settlement_id)
            .collect()
    }

    /// Wholesale replacement from persisted state.
    pub fn replace(&mut self, timers: Vec<SettlementChangeTimer>) {
        self.timers = timers;
    }

    pub fn timers(&self) -> &[SettlementChangeTimer] {
        &self.timers
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
