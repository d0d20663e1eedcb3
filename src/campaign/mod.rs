//! The host-owned campaign surface: entities, relationships, session state,
//! and spawn helpers. The plugin reads and writes this surface but never
//! creates or destroys campaign objects itself.

pub mod clock;
pub mod components;
pub mod map;
pub mod relationships;
pub mod spawn;

pub use clock::{CampaignClock, CampaignSession};
pub use components::{
    Clan, ClanState, Culture, GameObject, Hero, HeroState, Notable, Settlement, SettlementKind,
    SettlementState,
};
pub use map::CampaignIndex;
pub use relationships::{
    BoundTo, BoundVillages, ClanMembers, Holdings, MemberOf, Notables, OwnedBy, ResidentOf,
};
