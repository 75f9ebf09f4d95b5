//! Day bucketing for the check-in timeline and calendar.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

use crate::domain::check_in::CheckIn;
use crate::engine::locale::Locale;

/// How a bucket's day relates to the viewer's current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    Today,
    Yesterday,
    Other,
}

impl DayKind {
    fn classify(day: NaiveDate, today: NaiveDate) -> Self {
        if day == today {
            Self::Today
        } else if Some(day) == today.pred_opt() {
            Self::Yesterday
        } else {
            Self::Other
        }
    }

    /// `Today` and `Yesterday` are rendered with an accent.
    pub fn is_relative(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Check-ins sharing one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateBucket<'a> {
    pub day: NaiveDate,
    pub kind: DayKind,
    pub label: String,
    /// Newest first.
    pub check_ins: Vec<&'a CheckIn>,
}

/// Calendar day of `check_in` in the time zone `tz`.
pub fn local_day<Tz: TimeZone>(check_in: &CheckIn, tz: &Tz) -> NaiveDate {
    check_in.timestamp.with_timezone(tz).date_naive()
}

/// Groups check-ins into day buckets.
///
/// The time zone of `now` defines the midnight boundary. Buckets come out as
/// `Today`, then `Yesterday`, then every other day with the most recent day
/// first. Inside a bucket check-ins are ordered newest first, ties broken by
/// id so the result does not depend on input order.
pub fn group_by_day<'a, Tz, L>(
    check_ins: &'a [CheckIn],
    now: &DateTime<Tz>,
    locale: &L,
) -> Vec<DateBucket<'a>>
where
    Tz: TimeZone,
    L: Locale + ?Sized,
{
    let tz = now.timezone();
    let today = now.date_naive();

    let mut days: BTreeMap<NaiveDate, Vec<&'a CheckIn>> = BTreeMap::new();
    for check_in in check_ins {
        days.entry(local_day(check_in, &tz))
            .or_default()
            .push(check_in);
    }

    let mut buckets: Vec<DateBucket<'a>> = days
        .into_iter()
        .map(|(day, mut items)| {
            items.sort_by(|a, b| {
                b.timestamp
                    .cmp(&a.timestamp)
                    .then_with(|| a.id.cmp(&b.id))
            });
            let kind = DayKind::classify(day, today);
            let label = match kind {
                DayKind::Today => locale.today().to_string(),
                DayKind::Yesterday => locale.yesterday().to_string(),
                DayKind::Other => locale.format_day(day),
            };
            DateBucket {
                day,
                kind,
                label,
                check_ins: items,
            }
        })
        .collect();

    buckets.sort_by_key(|bucket| (bucket.kind, Reverse(bucket.day)));
    buckets
}

/// Days that have at least one check-in, used to highlight the calendar.
pub fn days_with_check_ins<Tz: TimeZone>(check_ins: &[CheckIn], tz: &Tz) -> BTreeSet<NaiveDate> {
    check_ins.iter().map(|c| local_day(c, tz)).collect()
}

/// Number of check-ins on `day`.
pub fn count_on_day<Tz: TimeZone>(check_ins: &[CheckIn], day: NaiveDate, tz: &Tz) -> usize {
    check_ins.iter().filter(|c| local_day(c, tz) == day).count()
}
