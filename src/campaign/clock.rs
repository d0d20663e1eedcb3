use bevy_ecs::resource::Resource;

/// In-game day counter, advanced once per daily-tick callback.
#[derive(Resource, Debug, Clone, Default)]
pub struct CampaignClock {
    pub day: u64,
}

impl CampaignClock {
    pub fn advance(&mut self) {
        self.day += 1;
    }
}

/// Session facts mirrored from the host at load / new-game time.
///
/// Handlers ignore callbacks that arrive before the host reports the game
/// as started (the engine fires some events during its own setup).
#[derive(Resource, Debug, Clone, Default)]
pub struct CampaignSession {
    pub game_started: bool,
    pub save_id: Option<String>,
}
