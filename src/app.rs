use std::path::PathBuf;

use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use crate::campaign::{CampaignClock, CampaignIndex, CampaignSession};
use crate::events::{
    BeforeSave, DailyTick, GameLoaded, NewGameCreated, SaveCompleted, SaveStarted,
    SettlementOwnerChanged,
};
use crate::notify::NotificationLog;
use crate::schedule::{CampaignPhase, configure_campaign_schedule};
use crate::settings::ConversionSettings;
use crate::state::StatePaths;
use crate::timer::TimerRegistry;

/// Build a headless campaign app standing in for the host engine: session
/// resources, registered lifecycle messages, and the `CampaignTick` schedule.
///
/// The conversion behavior itself is installed separately:
/// ```no_run
/// # use culture_convert::{build_campaign_app, ConversionSettings, CultureConversionPlugin};
/// let mut app = build_campaign_app(ConversionSettings::default(), "saves");
/// app.add_plugins(CultureConversionPlugin);
/// ```
pub fn build_campaign_app(settings: ConversionSettings, saves_dir: impl Into<PathBuf>) -> App {
    let mut app = App::empty();

    app.insert_resource(settings);
    app.insert_resource(StatePaths::new(saves_dir));
    app.insert_resource(CampaignClock::default());
    app.insert_resource(CampaignSession::default());
    app.insert_resource(CampaignIndex::new());
    app.insert_resource(TimerRegistry::default());
    app.insert_resource(NotificationLog::default());

    // The closed set of lifecycle callbacks the host dispatches.
    MessageRegistry::register_message::<SettlementOwnerChanged>(app.world_mut());
    MessageRegistry::register_message::<DailyTick>(app.world_mut());
    MessageRegistry::register_message::<GameLoaded>(app.world_mut());
    MessageRegistry::register_message::<NewGameCreated>(app.world_mut());
    MessageRegistry::register_message::<SaveStarted>(app.world_mut());
    MessageRegistry::register_message::<BeforeSave>(app.world_mut());
    MessageRegistry::register_message::<SaveCompleted>(app.world_mut());

    // The host loop dispatches callbacks strictly sequentially.
    let mut schedule = configure_campaign_schedule(ExecutorKind::SingleThreaded);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(CampaignPhase::PreUpdate));
    app.add_schedule(schedule);
    app
}
