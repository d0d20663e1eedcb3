#![allow(dead_code)]

use std::path::Path;

use bevy_app::App;
use bevy_ecs::entity::Entity;

use culture_convert::campaign::spawn::{
    spawn_clan, spawn_culture, spawn_lord, spawn_notable, spawn_settlement, spawn_village,
};
use culture_convert::campaign::{
    CampaignIndex, CampaignSession, HeroState, OwnedBy, SettlementKind, SettlementState,
};
use culture_convert::test_helpers::dispatch;
use culture_convert::{
    ConversionSettings, CultureConversionPlugin, SettlementOwnerChanged, TimerRegistry,
    build_campaign_app,
};

/// Two-culture campaign: the highland culture holds two towns, a castle, and
/// a bound village with notables; the riverfolk culture holds one town. The
/// castle is already in riverfolk hands.
pub struct TestCampaign {
    pub app: App,
    pub highland: Entity,
    pub riverfolk: Entity,
    pub harald: Entity,
    pub ragnar: Entity,
    pub bjorn: Entity,
    pub aldburg: Entity,
    pub dunmere: Entity,
    pub riverholt: Entity,
    pub crag_keep: Entity,
    pub oxfen: Entity,
    pub maeva: Entity,
    pub torv: Entity,
}

pub fn build_campaign(settings: ConversionSettings, saves_dir: &Path) -> TestCampaign {
    let mut app = build_campaign_app(settings, saves_dir);
    app.add_plugins(CultureConversionPlugin);

    let world = app.world_mut();

    let highland = spawn_culture(world, 1, "Highland");
    let riverfolk = spawn_culture(world, 2, "Riverfolk");

    let stags = spawn_clan(world, 10, "Stags", Some(highland));
    let otters = spawn_clan(world, 11, "Otters", Some(riverfolk));

    let harald = spawn_lord(world, 20, "Harald", Some(highland), Some(stags));
    let ragnar = spawn_lord(world, 21, "Ragnar", Some(riverfolk), Some(otters));
    let bjorn = spawn_lord(world, 22, "Bjorn", Some(riverfolk), Some(otters));

    let aldburg = spawn_settlement(
        world,
        30,
        "Aldburg",
        SettlementKind::Town,
        Some(highland),
        Some(harald),
    );
    let dunmere = spawn_settlement(
        world,
        31,
        "Dunmere",
        SettlementKind::Town,
        Some(highland),
        Some(harald),
    );
    let riverholt = spawn_settlement(
        world,
        32,
        "Riverholt",
        SettlementKind::Town,
        Some(riverfolk),
        Some(ragnar),
    );
    let crag_keep = spawn_settlement(
        world,
        33,
        "Crag Keep",
        SettlementKind::Castle,
        Some(highland),
        Some(ragnar),
    );

    let oxfen = spawn_village(world, 34, "Oxfen", Some(highland), aldburg);

    let maeva = spawn_notable(world, 40, "Maeva", Some(highland), aldburg);
    let torv = spawn_notable(world, 41, "Torv", Some(highland), oxfen);

    TestCampaign {
        app,
        highland,
        riverfolk,
        harald,
        ragnar,
        bjorn,
        aldburg,
        dunmere,
        riverholt,
        crag_keep,
        oxfen,
        maeva,
        torv,
    }
}

/// Mark the session as running without going through a load, for tests that
/// exercise capture and tick behavior in isolation.
pub fn start_session(app: &mut App) {
    let mut session = app.world_mut().resource_mut::<CampaignSession>();
    session.game_started = true;
    session.save_id = Some("test-session".into());
}

/// Hand a settlement to a new owner the way the host would: mutate ownership,
/// then fire the owner-changed callback.
pub fn capture(app: &mut App, settlement: Entity, new_owner: Entity) {
    app.world_mut()
        .entity_mut(settlement)
        .insert(OwnedBy(new_owner));
    dispatch(
        app,
        SettlementOwnerChanged {
            settlement,
            new_owner,
            old_owner: None,
        },
    );
}

pub fn culture_of(app: &App, settlement: Entity) -> Option<Entity> {
    app.world()
        .get::<SettlementState>(settlement)
        .expect("settlement state")
        .culture
}

pub fn hero_culture(app: &App, hero: Entity) -> Option<Entity> {
    app.world().get::<HeroState>(hero).expect("hero state").culture
}

pub fn object_id(app: &App, entity: Entity) -> u64 {
    app.world()
        .resource::<CampaignIndex>()
        .get_id(entity)
        .expect("registered entity")
}

pub fn timer_days(app: &App, settlement: Entity) -> u32 {
    let id = object_id(app, settlement);
    app.world()
        .resource::<TimerRegistry>()
        .get(id)
        .expect("timer for settlement")
        .days_since_owner_changed
}
