//! Daily conversion pass and the culture conversion policy.
//!
//! The policy needs overlapping reads and writes across the whole settlement
//! set (the last-town guard counts every town), so it runs as an exclusive
//! system over `&mut World` and drains its messages directly.

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::campaign::{
    BoundVillages, CampaignClock, CampaignIndex, CampaignSession, ClanState, GameObject,
    HeroState, MemberOf, Notables, OwnedBy, SettlementKind, SettlementState,
};
use crate::events::DailyTick;
use crate::notify::{NotificationKind, NotificationLog};
use crate::settings::ConversionSettings;
use crate::timer::TimerRegistry;

/// What drove a conversion evaluation. Game-load replay converts silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConversionTrigger {
    DailyTick,
    LoadReplay,
}

/// Handler for `DailyTick`: advance the clock, tick unmatured timers, and
/// evaluate conversion for every timer that was already matured.
pub fn daily_conversion_pass(world: &mut World) {
    let ticks = {
        let Some(mut messages) = world.get_resource_mut::<Messages<DailyTick>>() else {
            return;
        };
        messages.drain().count()
    };
    if ticks == 0 || !world.resource::<CampaignSession>().game_started {
        return;
    }

    let threshold = world
        .resource::<ConversionSettings>()
        .time_to_convert_in_days;

    for _ in 0..ticks {
        world.resource_mut::<CampaignClock>().advance();

        // Maturity is sampled before ticking: a timer reaching the threshold
        // today converts on tomorrow's pass.
        let matured = world.resource::<TimerRegistry>().matured_ids(threshold);
        world.resource_mut::<TimerRegistry>().tick(threshold);

        for settlement_id in matured {
            convert_settlement(world, settlement_id, ConversionTrigger::DailyTick);
        }
    }
}

/// Apply the conversion policy to one matured settlement.
///
/// No-ops when the id is stale, the settlement is a village, no target
/// culture can be resolved, or the settlement already matches the target.
/// A town that is the last town of its current culture is left unchanged
/// and reported, since the host engine needs at least one town per culture.
pub(crate) fn convert_settlement(
    world: &mut World,
    settlement_id: u64,
    trigger: ConversionTrigger,
) {
    let Some(settlement) = world.resource::<CampaignIndex>().get_entity(settlement_id) else {
        tracing::warn!(settlement_id, "conversion skipped: unknown settlement id");
        return;
    };
    let Some(state) = world.get::<SettlementState>(settlement) else {
        return;
    };
    let kind = state.kind;
    let current = state.culture;
    if !kind.is_fortified() {
        return;
    }

    let Some(target) = owner_culture(world, settlement) else {
        return;
    };
    if current == Some(target) {
        return;
    }

    let name = display_name(world, settlement);
    let target_name = display_name(world, target);

    if kind == SettlementKind::Town
        && let Some(current) = current
        && towns_of_culture(world, current) == 1
    {
        let current_name = display_name(world, current);
        world.resource_mut::<NotificationLog>().push(
            NotificationKind::Blocked,
            format!(
                "{name} can't be converted to {target_name} because it is the last town of {current_name} culture"
            ),
        );
        return;
    }

    if let Some(mut state) = world.get_mut::<SettlementState>(settlement) {
        state.culture = Some(target);
    }
    tracing::debug!(settlement_id, %name, target = %target_name, ?trigger, "settlement culture converted");

    if world
        .resource::<ConversionSettings>()
        .convert_recruitable_troops
    {
        cascade_to_dependents(world, settlement);
    }

    if trigger == ConversionTrigger::DailyTick {
        world.resource_mut::<NotificationLog>().push(
            NotificationKind::Converted,
            format!("{name}'s culture is converted to {target_name}"),
        );
    }
}

/// Target culture for a settlement: the owner's personal culture, falling
/// back to the owning clan's.
pub(crate) fn owner_culture(world: &World, settlement: Entity) -> Option<Entity> {
    let owner = world.get::<OwnedBy>(settlement)?.0;
    let hero = world.get::<HeroState>(owner)?;
    if hero.culture.is_some() {
        return hero.culture;
    }
    let clan = world.get::<MemberOf>(owner)?.0;
    world.get::<ClanState>(clan)?.culture
}

fn towns_of_culture(world: &mut World, culture: Entity) -> usize {
    let mut settlements = world.query::<&SettlementState>();
    settlements
        .iter(world)
        .filter(|s| s.kind == SettlementKind::Town && s.culture == Some(culture))
        .count()
}

/// Cascade the settlement's current culture to its bound villages and to
/// every notable of the settlement and those villages. Skips entities that
/// already match, so repeat passes are free.
pub(crate) fn cascade_to_dependents(world: &mut World, settlement: Entity) {
    let Some(state) = world.get::<SettlementState>(settlement) else {
        return;
    };
    if !state.kind.is_fortified() {
        return;
    }
    let Some(target) = state.culture else {
        return;
    };

    let villages: Vec<Entity> = world
        .get::<BoundVillages>(settlement)
        .map(|v| v.to_vec())
        .unwrap_or_default();
    for village in villages {
        if let Some(mut village_state) = world.get_mut::<SettlementState>(village)
            && village_state.culture != Some(target)
        {
            village_state.culture = Some(target);
        }
        set_notables_culture(world, village, target);
    }

    set_notables_culture(world, settlement, target);
}

fn set_notables_culture(world: &mut World, settlement: Entity, target: Entity) {
    let notables: Vec<Entity> = world
        .get::<Notables>(settlement)
        .map(|n| n.to_vec())
        .unwrap_or_default();
    for notable in notables {
        if let Some(mut hero) = world.get_mut::<HeroState>(notable)
            && hero.culture != Some(target)
        {
            hero.culture = Some(target);
        }
    }
}

pub(crate) fn display_name(world: &World, entity: Entity) -> String {
    world
        .get::<GameObject>(entity)
        .map(|object| object.name.clone())
        .unwrap_or_else(|| format!("{entity:?}"))
}
