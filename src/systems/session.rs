//! Handlers for the session-boundary callbacks: new game, game loaded, and
//! the three save-boundary events.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::{Message, Messages};
use bevy_ecs::world::World;

use crate::campaign::{CampaignSession, GameObject, SettlementState};
use crate::events::{BeforeSave, GameLoaded, NewGameCreated, SaveCompleted, SaveStarted};
use crate::notify::{NotificationKind, NotificationLog};
use crate::settings::ConversionSettings;
use crate::state::{self, StatePaths};
use crate::systems::conversion::{self, ConversionTrigger};
use crate::systems::notables;
use crate::timer::TimerRegistry;

fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    world
        .get_resource_mut::<Messages<M>>()
        .map(|mut messages| messages.drain().collect())
        .unwrap_or_default()
}

pub fn handle_new_game(world: &mut World) {
    for message in drain_messages::<NewGameCreated>(world) {
        begin_session(world, message.save_id);
        push_startup_notification(world);
    }
}

/// On load: reset notables, then either restore the timer registry from the
/// per-save state file (replaying matured conversions silently) or, when no
/// state file exists yet, seed timers for every town and castle.
pub fn handle_game_loaded(world: &mut World) {
    for message in drain_messages::<GameLoaded>(world) {
        begin_session(world, message.save_id.clone());
        notables::reset_notables(world);

        let path = world.resource::<StatePaths>().state_file(&message.save_id);
        let restored = if path.exists() {
            match state::read_state(&path) {
                Ok(timers) => {
                    world.resource_mut::<TimerRegistry>().replace(timers);
                    true
                }
                Err(err) => {
                    tracing::error!(
                        %err,
                        path = %path.display(),
                        "state file unreadable; reseeding timers"
                    );
                    false
                }
            }
        } else {
            false
        };

        if restored {
            let threshold = world
                .resource::<ConversionSettings>()
                .time_to_convert_in_days;
            for settlement_id in world.resource::<TimerRegistry>().matured_ids(threshold) {
                conversion::convert_settlement(world, settlement_id, ConversionTrigger::LoadReplay);
            }
        } else {
            seed_timers(world);
        }

        push_startup_notification(world);
    }
}

pub fn handle_before_save(world: &mut World) {
    if !drain_messages::<BeforeSave>(world).is_empty() {
        notables::reset_notables(world);
    }
}

/// Rewrite the state file wholesale when the host starts writing a save.
pub fn handle_save_started(world: &mut World) {
    if drain_messages::<SaveStarted>(world).is_empty() {
        return;
    }
    let Some(save_id) = world.resource::<CampaignSession>().save_id.clone() else {
        tracing::warn!("save started before any campaign session; nothing to persist");
        return;
    };
    let path = world.resource::<StatePaths>().state_file(&save_id);
    let registry = world.resource::<TimerRegistry>();
    if let Err(err) = state::write_state(&path, registry.timers()) {
        tracing::error!(%err, path = %path.display(), "failed to persist conversion timers");
    }
}

/// After a successful save, record the save-name → state-file pointer, then
/// restore the mod-converted notable cultures the before-save reset undid.
pub fn handle_save_completed(world: &mut World) {
    let messages = drain_messages::<SaveCompleted>(world);
    if messages.is_empty() {
        return;
    }
    let settings = world.resource::<ConversionSettings>().clone();
    for message in messages {
        if message.success
            && let Some(save_id) = world.resource::<CampaignSession>().save_id.clone()
        {
            let paths = world.resource::<StatePaths>();
            let pointer = paths.pointer_file(&message.save_name);
            let state_file = paths.state_file(&save_id);
            if let Err(err) = state::write_save_pointer(&pointer, &state_file) {
                tracing::error!(%err, "failed to write save pointer file");
            }
        }
        if settings.convert_recruitable_troops {
            notables::reconvert_matured(world, settings.time_to_convert_in_days);
        }
    }
}

fn begin_session(world: &mut World, save_id: String) {
    let mut session = world.resource_mut::<CampaignSession>();
    session.save_id = Some(save_id);
    session.game_started = true;
}

fn push_startup_notification(world: &mut World) {
    let settings = world.resource::<ConversionSettings>().clone();
    world.resource_mut::<NotificationLog>().push(
        NotificationKind::Info,
        format!(
            "Settlement culture conversion active: settlements convert after {} days, recruit conversion {}",
            settings.time_to_convert_in_days,
            if settings.convert_recruitable_troops {
                "on"
            } else {
                "off"
            }
        ),
    );
}

/// First load of a save with no plugin state yet: start a timer for every
/// town and castle from its current ownership. Settlements already matching
/// their owner's culture start matured and silent.
fn seed_timers(world: &mut World) {
    let threshold = world
        .resource::<ConversionSettings>()
        .time_to_convert_in_days;

    let rows: Vec<(Entity, u64, String, Option<Entity>)> = {
        let mut settlements = world.query::<(Entity, &GameObject, &SettlementState)>();
        settlements
            .iter(world)
            .filter(|(_, _, state)| state.kind.is_fortified())
            .map(|(entity, object, state)| {
                (entity, object.id, object.name.clone(), state.culture)
            })
            .collect()
    };

    for (entity, id, name, culture) in rows {
        let target = conversion::owner_culture(world, entity);
        let already_matching = target.is_some() && culture == target;
        world.resource_mut::<TimerRegistry>().start_or_reset(
            id,
            Some(name.clone()),
            already_matching,
            threshold,
        );
        if !already_matching && let Some(target) = target {
            let target_name = conversion::display_name(world, target);
            world.resource_mut::<NotificationLog>().push(
                NotificationKind::Scheduled,
                format!(
                    "{name} will be converted to {target_name} culture in {} days",
                    threshold + 1
                ),
            );
        }
    }
}
