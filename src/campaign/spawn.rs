use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use super::components::{
    Clan, ClanState, Culture, GameObject, Hero, HeroState, Notable, Settlement, SettlementKind,
    SettlementState,
};
use super::map::CampaignIndex;
use super::relationships::{BoundTo, MemberOf, OwnedBy, ResidentOf};

fn register(world: &mut World, id: u64, entity: Entity) {
    if let Some(mut index) = world.get_resource_mut::<CampaignIndex>() {
        index.insert(id, entity);
    }
}

pub fn spawn_culture(world: &mut World, id: u64, name: impl Into<String>) -> Entity {
    let entity = world
        .spawn((
            GameObject {
                id,
                name: name.into(),
            },
            Culture,
        ))
        .id();
    register(world, id, entity);
    entity
}

pub fn spawn_clan(
    world: &mut World,
    id: u64,
    name: impl Into<String>,
    culture: Option<Entity>,
) -> Entity {
    let entity = world
        .spawn((
            GameObject {
                id,
                name: name.into(),
            },
            Clan,
            ClanState { culture },
        ))
        .id();
    register(world, id, entity);
    entity
}

/// Spawn a landed hero. The hero's own culture may be absent, in which case
/// conversion falls back to the clan culture.
pub fn spawn_lord(
    world: &mut World,
    id: u64,
    name: impl Into<String>,
    culture: Option<Entity>,
    clan: Option<Entity>,
) -> Entity {
    let entity = world
        .spawn((
            GameObject {
                id,
                name: name.into(),
            },
            Hero,
            HeroState {
                culture,
                template_culture: culture,
            },
        ))
        .id();
    if let Some(clan) = clan {
        world.entity_mut(entity).insert(MemberOf(clan));
    }
    register(world, id, entity);
    entity
}

/// Spawn a notable resident of a settlement. The spawn-time culture doubles
/// as the template culture the reset pass restores.
pub fn spawn_notable(
    world: &mut World,
    id: u64,
    name: impl Into<String>,
    culture: Option<Entity>,
    settlement: Entity,
) -> Entity {
    let entity = world
        .spawn((
            GameObject {
                id,
                name: name.into(),
            },
            Hero,
            Notable,
            HeroState {
                culture,
                template_culture: culture,
            },
            ResidentOf(settlement),
        ))
        .id();
    register(world, id, entity);
    entity
}

pub fn spawn_settlement(
    world: &mut World,
    id: u64,
    name: impl Into<String>,
    kind: SettlementKind,
    culture: Option<Entity>,
    owner: Option<Entity>,
) -> Entity {
    let entity = world
        .spawn((
            GameObject {
                id,
                name: name.into(),
            },
            Settlement,
            SettlementState { kind, culture },
        ))
        .id();
    if let Some(owner) = owner {
        world.entity_mut(entity).insert(OwnedBy(owner));
    }
    register(world, id, entity);
    entity
}

/// Spawn a village bound to its town or castle.
pub fn spawn_village(
    world: &mut World,
    id: u64,
    name: impl Into<String>,
    culture: Option<Entity>,
    bound_to: Entity,
) -> Entity {
    let entity = spawn_settlement(world, id, name, SettlementKind::Village, culture, None);
    world.entity_mut(entity).insert(BoundTo(bound_to));
    entity
}
