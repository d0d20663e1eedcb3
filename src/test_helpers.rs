//! Drivers for exercising the plugin the way the host engine would:
//! write a lifecycle message, run one `CampaignTick`.

use bevy_app::App;
use bevy_ecs::message::{Message, Messages};

use crate::campaign::CampaignClock;
use crate::events::DailyTick;
use crate::notify::{Notification, NotificationLog};
use crate::schedule::CampaignTick;

/// Deliver one host callback and run the campaign schedule once.
pub fn dispatch<M: Message>(app: &mut App, message: M) {
    app.world_mut().resource_mut::<Messages<M>>().write(message);
    app.world_mut().run_schedule(CampaignTick);
}

/// Advance the campaign by one in-game day.
pub fn run_day(app: &mut App) {
    dispatch(app, DailyTick);
}

pub fn run_days(app: &mut App, days: u32) {
    for _ in 0..days {
        run_day(app);
    }
}

pub fn current_day(app: &App) -> u64 {
    app.world().resource::<CampaignClock>().day
}

/// Take all pending notifications, as the host does after each tick.
pub fn drain_notifications(app: &mut App) -> Vec<Notification> {
    app.world_mut().resource_mut::<NotificationLog>().drain()
}
