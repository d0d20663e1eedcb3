use bevy_app::{App, Plugin};
use bevy_ecs::schedule::IntoScheduleConfigs;

use crate::schedule::{CampaignPhase, CampaignTick};
use crate::systems::{conversion, ownership, session};

/// Installs every lifecycle handler of the conversion mod on the
/// `CampaignTick` schedule.
///
/// Handlers are chained in a fixed order so a callback batch containing
/// several lifecycle events resolves deterministically: session setup first,
/// then ownership bookkeeping, the daily pass, and the save boundary.
pub struct CultureConversionPlugin;

impl Plugin for CultureConversionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            CampaignTick,
            (
                session::handle_new_game,
                session::handle_game_loaded,
                ownership::handle_owner_changed,
                conversion::daily_conversion_pass,
                session::handle_before_save,
                session::handle_save_started,
                session::handle_save_completed,
            )
                .chain()
                .in_set(CampaignPhase::Update),
        );
    }
}
