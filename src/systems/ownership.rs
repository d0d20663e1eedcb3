//! Handler for settlement ownership changes: start or reset the timer and
//! tell the player what will happen.

use bevy_ecs::message::MessageReader;
use bevy_ecs::system::{Query, Res, ResMut};

use crate::campaign::{
    CampaignSession, ClanState, GameObject, HeroState, MemberOf, SettlementState,
};
use crate::events::SettlementOwnerChanged;
use crate::notify::{NotificationKind, NotificationLog};
use crate::settings::ConversionSettings;
use crate::timer::{StartOutcome, TimerRegistry};

pub fn handle_owner_changed(
    mut messages: MessageReader<SettlementOwnerChanged>,
    session: Res<CampaignSession>,
    settings: Res<ConversionSettings>,
    mut registry: ResMut<TimerRegistry>,
    mut notifications: ResMut<NotificationLog>,
    settlements: Query<(&GameObject, &SettlementState)>,
    heroes: Query<(&HeroState, Option<&MemberOf>)>,
    clans: Query<&ClanState>,
    names: Query<&GameObject>,
) {
    for message in messages.read() {
        if !session.game_started {
            continue;
        }
        let Ok((object, state)) = settlements.get(message.settlement) else {
            continue;
        };

        let target = heroes.get(message.new_owner).ok().and_then(|(hero, clan)| {
            hero.culture.or_else(|| {
                clan.and_then(|member| clans.get(member.0).ok())
                    .and_then(|clan_state| clan_state.culture)
            })
        });
        let already_matching = target.is_some() && state.culture == target;

        let outcome = registry.start_or_reset(
            object.id,
            Some(object.name.clone()),
            already_matching,
            settings.time_to_convert_in_days,
        );

        // Timer bookkeeping happens regardless; only announce when the new
        // owner actually has a culture to convert toward.
        let Some(target) = target else {
            continue;
        };
        let Ok(culture) = names.get(target) else {
            continue;
        };
        match outcome {
            StartOutcome::AlreadyMatching => notifications.push(
                NotificationKind::AlreadyMatching,
                format!("{} is already of {} culture", object.name, culture.name),
            ),
            StartOutcome::Scheduled => notifications.push(
                NotificationKind::Scheduled,
                format!(
                    "{} will be converted to {} culture in {} days",
                    object.name,
                    culture.name,
                    settings.time_to_convert_in_days + 1
                ),
            ),
        }
    }
}
