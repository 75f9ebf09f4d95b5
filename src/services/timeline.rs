use chrono::{DateTime, NaiveDate, TimeZone};

use crate::dto::timeline::{CalendarDto, TimelineSectionDto};
use crate::engine::date_buckets::{count_on_day, days_with_check_ins, group_by_day};
use crate::engine::locale::Locale;
use crate::repository::CheckInReader;

use super::{ServiceError, ServiceResult};

/// Builds the check-in feed: one section per local day, `Today` and
/// `Yesterday` first, newest entries first within a day.
pub fn show_timeline<R, Tz, L>(
    repo: &R,
    now: &DateTime<Tz>,
    locale: &L,
) -> ServiceResult<Vec<TimelineSectionDto>>
where
    R: CheckInReader,
    Tz: TimeZone,
    L: Locale + ?Sized,
{
    let check_ins = match repo.list_check_ins() {
        Ok(check_ins) => check_ins,
        Err(e) => {
            log::error!("Failed to list check-ins: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let sections: Vec<TimelineSectionDto> = group_by_day(&check_ins, now, locale)
        .into_iter()
        .map(TimelineSectionDto::from)
        .collect();
    log::debug!(
        "Timeline built: {} check-ins in {} sections",
        check_ins.len(),
        sections.len()
    );
    Ok(sections)
}

/// Calendar view: highlighted days plus the count for the selected day.
pub fn show_calendar<R, Tz>(
    repo: &R,
    tz: &Tz,
    selected_day: Option<NaiveDate>,
) -> ServiceResult<CalendarDto>
where
    R: CheckInReader,
    Tz: TimeZone,
{
    let check_ins = match repo.list_check_ins() {
        Ok(check_ins) => check_ins,
        Err(e) => {
            log::error!("Failed to list check-ins: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(CalendarDto {
        marked_days: days_with_check_ins(&check_ins, tz).into_iter().collect(),
        selected_day,
        selected_count: selected_day
            .map(|day| count_on_day(&check_ins, day, tz))
            .unwrap_or(0),
    })
}
