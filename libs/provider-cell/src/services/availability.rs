use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_utils::simulate_latency;

use crate::models::TimeSlot;

type SlotTable = &'static [(u32, u32, u32, u32)];

const AFTERNOON_SLOTS: SlotTable = &[
    (13, 0, 13, 30),
    (13, 30, 14, 0),
    (15, 0, 15, 30),
];

const LATE_MORNING_SLOTS: SlotTable = &[
    (11, 0, 11, 30),
    (11, 30, 12, 0),
];

const DEFAULT_SLOTS: SlotTable = &[
    (9, 0, 9, 30),
    (9, 30, 10, 0),
    (10, 30, 11, 0),
    (14, 0, 14, 30),
    (14, 30, 15, 0),
    (15, 30, 16, 0),
];

/// Computes open slots for a provider on a given day.
///
/// This is a placeholder rule table, not a calendar: the result depends only
/// on the provider id and the day of the month, and it does not look at
/// appointments already in the booking store. Two separate booking attempts
/// can therefore both be offered, and both book, the same slot.
pub struct AvailabilityService {
    latency_ms: u64,
    clinic_offset: FixedOffset,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        let clinic_offset = FixedOffset::east_opt(config.clinic_utc_offset_minutes * 60)
            .unwrap_or_else(|| {
                warn!(
                    "Clinic UTC offset of {} minutes is out of range, using UTC",
                    config.clinic_utc_offset_minutes
                );
                utc()
            });

        Self {
            latency_ms: config.mock_latency_ms,
            clinic_offset,
        }
    }

    /// Past dates and unknown providers are accepted; callers guard those.
    pub async fn available_slots(&self, provider_id: &str, date: NaiveDate) -> Vec<TimeSlot> {
        debug!("Calculating available slots for provider {} on {}", provider_id, date);
        simulate_latency(self.latency_ms).await;

        let slots = resolve_slots(provider_id, date, self.clinic_offset);
        debug!("Provider {} has {} open slots on {}", provider_id, slots.len(), date);

        slots
    }
}

/// Day-of-month the rule table is keyed on.
///
/// A requested date stands for midnight UTC at the start of that day; the
/// rules read its day-of-month on the clinic's clock. West of UTC that is the
/// previous calendar day.
pub fn rule_day(date: NaiveDate, clinic_offset: FixedOffset) -> u32 {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .with_timezone(&clinic_offset)
        .day()
}

pub fn resolve_slots(provider_id: &str, date: NaiveDate, clinic_offset: FixedOffset) -> Vec<TimeSlot> {
    let day = rule_day(date, clinic_offset);

    let table = match provider_id {
        // Fully booked every third day.
        "1" if day % 3 == 0 => return Vec::new(),
        "2" if day % 2 == 1 => AFTERNOON_SLOTS,
        _ if day < 10 => LATE_MORNING_SLOTS,
        _ => DEFAULT_SLOTS,
    };

    table.iter().filter_map(|&(sh, sm, eh, em)| to_slot(sh, sm, eh, em)).collect()
}

fn utc() -> FixedOffset {
    Utc.fix()
}

fn to_slot(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Option<TimeSlot> {
    Some(TimeSlot::new(
        NaiveTime::from_hms_opt(start_hour, start_minute, 0)?,
        NaiveTime::from_hms_opt(end_hour, end_minute, 0)?,
    ))
}
