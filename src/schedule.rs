use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

/// Schedule label for one host callback batch.
/// The host writes lifecycle messages, then runs this schedule via
/// `app.world_mut().run_schedule(CampaignTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CampaignTick;

/// Ordered phases within each campaign tick: message rotation runs in
/// `PreUpdate`, all lifecycle handlers in `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CampaignPhase {
    PreUpdate,
    Update,
}

/// Build a configured `CampaignTick` schedule with phase ordering.
pub fn configure_campaign_schedule(executor: ExecutorKind) -> Schedule {
    let mut schedule = Schedule::new(CampaignTick);
    schedule.set_executor_kind(executor);
    schedule.configure_sets((CampaignPhase::PreUpdate, CampaignPhase::Update).chain());
    schedule
}
