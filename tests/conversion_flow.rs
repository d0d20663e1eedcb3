mod common;

use common::{build_campaign, capture, culture_of, hero_culture, start_session, timer_days};
use culture_convert::test_helpers::{current_day, drain_notifications, run_day, run_days};
use culture_convert::{ConversionSettings, NotificationKind, NotificationLog, TimerRegistry};

fn three_day_settings() -> ConversionSettings {
    ConversionSettings {
        time_to_convert_in_days: 3,
        ..ConversionSettings::default()
    }
}

#[test]
fn capture_creates_timer_and_schedules_notification() {
    let dir = tempfile::tempdir().unwrap();
    let mut campaign = build_campaign(three_day_settings(), dir.path());
    start_session(&mut campaign.app);

    capture(&mut campaign.app, campaign.aldburg, campaign.ragnar);

    let registry = campaign.app.world().resource::<TimerRegistry>();
    assert_eq!(registry.len(), 1);
    assert_eq!(timer_days(&campaign.app, campaign.aldburg), 0);

    let notifications = drain_notifications(&mut campaign.app);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Scheduled);
    assert!(notifications[0].text.contains("Aldburg"));
    assert!(notifications[0].text.contains("Riverfolk"));
    assert!(notifications[0].text.contains("4 days"));
}

#[test]
fn settlement_converts_on_the_evaluation_after_maturing() {
    let dir = tempfile::tempdir().unwrap();
    let mut campaign = build_campaign(three_day_settings(), dir.path());
    start_session(&mut campaign.app);

    capture(&mut campaign.app, campaign.aldburg, campaign.ragnar);

    // Three ticks mature the timer but conversion waits for the next pass.
    run_days(&mut campaign.app, 2);
    assert_eq!(timer_days(&campaign.app, campaign.aldburg), 2);
    run_day(&mut campaign.app);
    assert_eq!(timer_days(&campaign.app, campaign.aldburg), 3);
    assert_eq!(culture_of(&campaign.app, campaign.aldburg), Some(campaign.highland));

    run_day(&mut campaign.app);
    assert_eq!(current_day(&campaign.app), 4);
    assert_eq!(culture_of(&campaign.app, campaign.aldburg), Some(campaign.riverfolk));

    // Troop conversion is on by default: bound village and notables follow.
    assert_eq!(culture_of(&campaign.app, campaign.oxfen), Some(campaign.riverfolk));
    assert_eq!(hero_culture(&campaign.app, campaign.maeva), Some(campaign.riverfolk));
    assert_eq!(hero_culture(&campaign.app, campaign.torv), Some(campaign.riverfolk));

    // Untouched settlements keep their culture.
    assert_eq!(culture_of(&campaign.app, campaign.dunmere), Some(campaign.highland));

    let log = campaign.app.world().resource::<NotificationLog>();
    assert_eq!(log.count_of(NotificationKind::Converted), 1);
}

#[test]
fn conversion_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut campaign = build_campaign(three_day_settings(), dir.path());
    start_session(&mut campaign.app);

    capture(&mut campaign.app, campaign.aldburg, campaign.ragnar);
    run_days(&mut campaign.app, 4);
    assert_eq!(culture_of(&campaign.app, campaign.aldburg), Some(campaign.riverfolk));
    drain_notifications(&mut campaign.app);

    // The timer stays matured; further evaluations change nothing and stay quiet.
    run_days(&mut campaign.app, 5);
    assert_eq!(culture_of(&campaign.app, campaign.aldburg), Some(campaign.riverfolk));
    assert_eq!(timer_days(&campaign.app, campaign.aldburg), 3);
    let notifications = drain_notifications(&mut campaign.app);
    assert!(notifications.is_empty(), "got {notifications:?}");
}

#[test]
fn already_matching_capture_prematures_and_converts_quietly() {
    let dir = tempfile::tempdir().unwrap();
    let mut campaign = build_campaign(three_day_settings(), dir.path());
    start_session(&mut campaign.app);

    capture(&mut campaign.app, campaign.riverholt, campaign.bjorn);

    assert_eq!(timer_days(&campaign.app, campaign.riverholt), 3);
    let notifications = drain_notifications(&mut campaign.app);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::AlreadyMatching);

    // The very next evaluation is a no-op conversion: no mutation, no message.
    run_day(&mut campaign.app);
    assert_eq!(culture_of(&campaign.app, campaign.riverholt), Some(campaign.riverfolk));
    assert!(drain_notifications(&mut campaign.app).is_empty());
}

#[test]
fn recapture_resets_the_existing_timer() {
    let dir = tempfile::tempdir().unwrap();
    let mut campaign = build_campaign(three_day_settings(), dir.path());
    start_session(&mut campaign.app);

    capture(&mut campaign.app, campaign.aldburg, campaign.ragnar);
    run_days(&mut campaign.app, 2);
    assert_eq!(timer_days(&campaign.app, campaign.aldburg), 2);

    capture(&mut campaign.app, campaign.aldburg, campaign.bjorn);
    assert_eq!(campaign.app.world().resource::<TimerRegistry>().len(), 1);
    assert_eq!(timer_days(&campaign.app, campaign.aldburg), 0);

    run_days(&mut campaign.app, 2);
    assert_eq!(culture_of(&campaign.app, campaign.aldburg), Some(campaign.highland));
}

#[test]
fn callbacks_before_game_start_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let mut campaign = build_campaign(three_day_settings(), dir.path());

    capture(&mut campaign.app, campaign.aldburg, campaign.ragnar);
    run_days(&mut campaign.app, 5);

    assert!(campaign.app.world().resource::<TimerRegistry>().is_empty());
    assert_eq!(current_day(&campaign.app), 0);
    assert!(drain_notifications(&mut campaign.app).is_empty());
}

#[test]
fn disabled_troop_conversion_skips_the_cascade() {
    let dir = tempfile::tempdir().unwrap();
    let settings = ConversionSettings {
        time_to_convert_in_days: 3,
        convert_recruitable_troops: false,
        ..ConversionSettings::default()
    };
    let mut campaign = build_campaign(settings, dir.path());
    start_session(&mut campaign.app);

    capture(&mut campaign.app, campaign.aldburg, campaign.ragnar);
    run_days(&mut campaign.app, 4);

    assert_eq!(culture_of(&campaign.app, campaign.aldburg), Some(campaign.riverfolk));
    assert_eq!(culture_of(&campaign.app, campaign.oxfen), Some(campaign.highland));
    assert_eq!(hero_culture(&campaign.app, campaign.maeva), Some(campaign.highland));
    assert_eq!(hero_culture(&campaign.app, campaign.torv), Some(campaign.highland));
}

#[test]
fn village_timers_mature_but_never_convert() {
    let dir = tempfile::tempdir().unwrap();
    let mut campaign = build_campaign(three_day_settings(), dir.path());
    start_session(&mut campaign.app);

    capture(&mut campaign.app, campaign.oxfen, campaign.ragnar);
    assert_eq!(campaign.app.world().resource::<TimerRegistry>().len(), 1);

    run_days(&mut campaign.app, 6);
    assert_eq!(culture_of(&campaign.app, campaign.oxfen), Some(campaign.highland));
    let log = campaign.app.world().resource::<NotificationLog>();
    assert_eq!(log.count_of(NotificationKind::Converted), 0);
}
