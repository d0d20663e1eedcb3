use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

/// Core identity component present on every campaign object the plugin can see.
///
/// The `id` is assigned by the host and stable across save/load; persistence
/// and cross-referencing use it instead of the (session-local) `Entity`.
#[derive(Component, Debug, Clone)]
pub struct GameObject {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlementKind {
    Town,
    Castle,
    Village,
}

impl SettlementKind {
    /// Towns and castles carry conversion timers; villages only inherit
    /// culture through their bound town or castle.
    pub fn is_fortified(self) -> bool {
        matches!(self, SettlementKind::Town | SettlementKind::Castle)
    }
}

// ---------------------------------------------------------------------------
// Marker components — one per campaign object kind
// ---------------------------------------------------------------------------

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Settlement;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Hero;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Clan;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Culture;

/// Marks a hero that is a recruitable notable of some settlement.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Notable;

// ---------------------------------------------------------------------------
// State components
// ---------------------------------------------------------------------------

/// Settlement kind and current culture.
#[derive(Component, Debug, Clone)]
pub struct SettlementState {
    pub kind: SettlementKind,
    pub culture: Option<Entity>,
}

/// Hero culture state.
///
/// `template_culture` is the culture of the immutable archetype the hero was
/// generated from; the notable reset pass restores it before every save.
#[derive(Component, Debug, Clone)]
pub struct HeroState {
    pub culture: Option<Entity>,
    pub template_culture: Option<Entity>,
}

#[derive(Component, Debug, Clone, Default)]
pub struct ClanState {
    pub culture: Option<Entity>,
}
