pub mod app;
pub mod campaign;
pub mod events;
pub mod notify;
pub mod plugin;
pub mod schedule;
pub mod settings;
pub mod state;
pub mod systems;
pub mod test_helpers;
pub mod timer;

pub use app::build_campaign_app;
pub use campaign::{
    CampaignClock, CampaignIndex, CampaignSession, GameObject, HeroState, SettlementKind,
    SettlementState,
};
pub use events::{
    BeforeSave, DailyTick, GameLoaded, NewGameCreated, SaveCompleted, SaveStarted,
    SettlementOwnerChanged,
};
pub use notify::{Notification, NotificationColor, NotificationKind, NotificationLog};
pub use plugin::CultureConversionPlugin;
pub use schedule::{CampaignPhase, CampaignTick, configure_campaign_schedule};
pub use settings::{ConversionSettings, SettingsError};
pub use state::{StateError, StatePaths, read_state, write_state};
pub use timer::{SettlementChangeTimer, StartOutcome, TimerRegistry};
