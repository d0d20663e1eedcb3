//! Lifecycle callbacks forwarded from the host campaign engine.
//!
//! The set is closed and known at design time: the host writes these as
//! buffered messages, then runs the [`CampaignTick`](crate::schedule::CampaignTick)
//! schedule once. Handler ordering within the schedule is fixed, so a batch
//! containing several callbacks is processed deterministically.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

/// A settlement changed hands.
#[derive(Message, Clone, Debug)]
pub struct SettlementOwnerChanged {
    pub settlement: Entity,
    pub new_owner: Entity,
    pub old_owner: Option<Entity>,
}

/// One in-game day elapsed.
#[derive(Message, Clone, Copy, Debug)]
pub struct DailyTick;

/// An existing campaign finished loading.
#[derive(Message, Clone, Debug)]
pub struct GameLoaded {
    pub save_id: String,
}

/// A fresh campaign was created.
#[derive(Message, Clone, Debug)]
pub struct NewGameCreated {
    pub save_id: String,
}

/// The host began writing a save; plugin state must be persisted now.
#[derive(Message, Clone, Copy, Debug)]
pub struct SaveStarted;

/// Fired just before the host serializes the campaign itself.
#[derive(Message, Clone, Copy, Debug)]
pub struct BeforeSave;

/// The host finished writing a save.
#[derive(Message, Clone, Debug)]
pub struct SaveCompleted {
    pub success: bool,
    pub save_name: String,
}
