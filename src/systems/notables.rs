//! Notable culture maintenance around save boundaries.

use bevy_ecs::query::With;
use bevy_ecs::world::World;

use crate::campaign::{CampaignIndex, HeroState, Notable};
use crate::systems::conversion::cascade_to_dependents;
use crate::timer::TimerRegistry;

/// Force every notable's culture back to its template character's culture,
/// overriding any drift from the host's background simulation. Runs on every
/// load and immediately before every save, independent of the timers.
pub(crate) fn reset_notables(world: &mut World) {
    let mut notables = world.query_filtered::<&mut HeroState, With<Notable>>();
    for mut hero in notables.iter_mut(world) {
        if hero.culture != hero.template_culture {
            hero.culture = hero.template_culture;
        }
    }
}

/// Undo the pre-save reset for settlements that have already converted:
/// re-apply each matured settlement's culture to its notables and bound
/// villages, leaving the save file itself with the "natural" cultures.
pub(crate) fn reconvert_matured(world: &mut World, threshold: u32) {
    let matured = world.resource::<TimerRegistry>().matured_ids(threshold);
    for settlement_id in matured {
        let Some(settlement) = world.resource::<CampaignIndex>().get_entity(settlement_id)
        else {
            continue;
        };
        cascade_to_dependents(world, settlement);
    }
}
