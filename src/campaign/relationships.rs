use std::ops::Deref;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

// ---------------------------------------------------------------------------
// OwnedBy — settlement → owner hero
// ---------------------------------------------------------------------------

#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = Holdings)]
pub struct OwnedBy(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = OwnedBy)]
pub struct Holdings(Vec<Entity>);

impl Deref for Holdings {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// MemberOf — hero → clan
// ---------------------------------------------------------------------------

#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = ClanMembers)]
pub struct MemberOf(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = MemberOf)]
pub struct ClanMembers(Vec<Entity>);

impl Deref for ClanMembers {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// BoundTo — village → town/castle
// ---------------------------------------------------------------------------

#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = BoundVillages)]
pub struct BoundTo(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = BoundTo)]
pub struct BoundVillages(Vec<Entity>);

impl Deref for BoundVillages {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// ResidentOf — notable hero → settlement
// ---------------------------------------------------------------------------

#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = Notables)]
pub struct ResidentOf(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = ResidentOf)]
pub struct Notables(Vec<Entity>);

impl Deref for Notables {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
