use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

/// Bidirectional mapping between host object IDs (u64) and Bevy entities.
#[derive(Resource, Debug, Clone, Default)]
pub struct CampaignIndex {
    to_entity: BTreeMap<u64, Entity>,
    to_id: BTreeMap<Entity, u64>,
}

impl CampaignIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. Panics if the id is already registered.
    pub fn insert(&mut self, id: u64, entity: Entity) {
        let prev = self.to_entity.insert(id, entity);
        assert!(prev.is_none(), "duplicate object id {id} in CampaignIndex");
        self.to_id.insert(entity, id);
    }

    /// Look up a Bevy entity by host object ID.
    pub fn get_entity(&self, id: u64) -> Option<Entity> {
        self.to_entity.get(&id).copied()
    }

    /// Look up a host object ID by Bevy entity.
    pub fn get_id(&self, entity: Entity) -> Option<u64> {
        self.to_id.get(&entity).copied()
    }

    pub fn len(&self) -> usize {
        self.to_entity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_entity.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::world::World;

    use super::*;

    #[test]
    fn round_trips_id_and_entity() {
        let mut world = World::new();
        let entity = world.spawn_empty().id();
        let mut index = CampaignIndex::new();
        index.insert(42, entity);
        assert_eq!(index.get_entity(42), Some(entity));
        assert_eq!(index.get_id(entity), Some(42));
        assert_eq!(index.get_entity(99), None);
    }

    #[test]
    #[should_panic(expected = "duplicate object id")]
    fn duplicate_id_panics() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut index = CampaignIndex::new();
        index.insert(1, a);
        index.insert(1, b);
    }
}
