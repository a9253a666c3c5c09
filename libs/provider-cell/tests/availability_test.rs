use chrono::NaiveTime;

use provider_cell::models::TimeSlot;
use provider_cell::services::AvailabilityService;
use shared_utils::test_utils::{date, time, TestConfig};

fn service() -> AvailabilityService {
    AvailabilityService::new(&TestConfig::default().to_app_config())
}

fn utc_service() -> AvailabilityService {
    let config = TestConfig {
        clinic_utc_offset_minutes: 0,
        ..TestConfig::default()
    };
    AvailabilityService::new(&config.to_app_config())
}

fn slot(start: NaiveTime, end: NaiveTime) -> TimeSlot {
    TimeSlot::new(start, end)
}

#[tokio::test]
async fn test_late_morning_set_early_in_month() {
    let slots = service().available_slots("1", date(2024, 8, 9)).await;

    assert_eq!(slots, vec![
        slot(time(11, 0), time(11, 30)),
        slot(time(11, 30), time(12, 0)),
    ]);
}

#[tokio::test]
async fn test_default_set_mid_month() {
    let slots = service().available_slots("1", date(2024, 8, 15)).await;

    assert_eq!(slots.len(), 6);
    assert_eq!(slots[0], slot(time(9, 0), time(9, 30)));
    assert_eq!(slots.iter().filter(|s| s.start < time(12, 0)).count(), 3);
    assert_eq!(slots.iter().filter(|s| s.start >= time(12, 0)).count(), 3);
}

#[tokio::test]
async fn test_first_provider_fully_booked() {
    // 2024-08-22 reads as the 21st on the clinic clock.
    assert!(service().available_slots("1", date(2024, 8, 22)).await.is_empty());
    assert!(utc_service().available_slots("1", date(2024, 8, 21)).await.is_empty());

    // Other providers are unaffected by that rule.
    assert_eq!(utc_service().available_slots("3", date(2024, 8, 21)).await.len(), 6);
}

#[tokio::test]
async fn test_second_provider_odd_days_are_afternoons() {
    let slots = utc_service().available_slots("2", date(2024, 8, 17)).await;

    assert_eq!(slots, vec![
        slot(time(13, 0), time(13, 30)),
        slot(time(13, 30), time(14, 0)),
        slot(time(15, 0), time(15, 30)),
    ]);

    assert_eq!(utc_service().available_slots("2", date(2024, 8, 18)).await.len(), 6);
}

#[tokio::test]
async fn test_second_provider_parity_follows_clinic_clock() {
    let afternoon = vec![
        slot(time(13, 0), time(13, 30)),
        slot(time(13, 30), time(14, 0)),
        slot(time(15, 0), time(15, 30)),
    ];

    // 2024-08-12 is the 11th on a clinic clock five hours behind UTC.
    assert_eq!(service().available_slots("2", date(2024, 8, 12)).await, afternoon);
    assert_eq!(utc_service().available_slots("2", date(2024, 8, 12)).await.len(), 6);

    // And the 17th reads as the 16th, an even day.
    assert_eq!(service().available_slots("2", date(2024, 8, 17)).await.len(), 6);
    assert_eq!(utc_service().available_slots("2", date(2024, 8, 17)).await, afternoon);
}

#[tokio::test]
async fn test_unknown_provider_uses_generic_rules() {
    assert_eq!(utc_service().available_slots("nobody", date(2024, 8, 3)).await.len(), 2);
    assert_eq!(utc_service().available_slots("nobody", date(2024, 8, 30)).await.len(), 6);
}

#[tokio::test]
async fn test_resolution_is_deterministic() {
    let svc = service();
    for d in 1..=28 {
        let first = svc.available_slots("2", date(2024, 2, d)).await;
        let second = svc.available_slots("2", date(2024, 2, d)).await;
        assert_eq!(first, second);
        assert!(first.iter().all(|s| s.start < s.end));
    }
}
