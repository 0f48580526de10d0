use time::macros::time;
use time::{Date, Duration, Month, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::model::listing::{DateRange, TimeRangePreset};

/// Inclusive created-date window, either side may be open
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeWindow {
    pub from: Option<OffsetDateTime>,
    pub to: Option<OffsetDateTime>,
}

impl TimeWindow {
    pub const UNBOUNDED: Self = Self {
        from: None,
        to: None,
    };
}

/// Effective window of a request: an explicit range always wins over the preset.
pub fn effective_window(
    date_range: Option<&DateRange>,
    preset: Option<TimeRangePreset>,
    now: OffsetDateTime,
) -> TimeWindow {
    match (date_range, preset) {
        (Some(range), _) => explicit_window(range),
        (None, Some(preset)) => TimeWindow {
            from: preset_lower_bound(preset, now),
            to: None,
        },
        (None, None) => TimeWindow::UNBOUNDED,
    }
}

fn explicit_window(range: &DateRange) -> TimeWindow {
    TimeWindow {
        from: range.from.map(|from| from.midnight().assume_utc()),
        to: range.to.map(end_of_day),
    }
}

pub(crate) fn end_of_day(date: Date) -> OffsetDateTime {
    PrimitiveDateTime::new(date, time!(23:59:59.999)).assume_utc()
}

/// Presets are aligned to UTC calendar days; `All` has no lower bound.
pub fn preset_lower_bound(preset: TimeRangePreset, now: OffsetDateTime) -> Option<OffsetDateTime> {
    let today = now.to_offset(UtcOffset::UTC).date();

    let start = match preset {
        TimeRangePreset::All => return None,
        TimeRangePreset::Today => today,
        TimeRangePreset::SevenDays => today.saturating_sub(Duration::days(7)),
        TimeRangePreset::OneMonth => months_before(today, 1),
        TimeRangePreset::ThreeMonths => months_before(today, 3),
        TimeRangePreset::ThisMonth => today.replace_day(1).unwrap_or(today),
        TimeRangePreset::ThisYear => {
            Date::from_calendar_date(today.year(), Month::January, 1).unwrap_or(today)
        }
    };

    Some(start.midnight().assume_utc())
}

/// Same day `months` earlier, clamped to the length of the target month
fn months_before(date: Date, months: u8) -> Date {
    let month = date.month().nth_prev(months);
    let year = if (date.month() as u8) <= months {
        date.year() - 1
    } else {
        date.year()
    };
    let day = date.day().min(month.length(year));

    Date::from_calendar_date(year, month, day).unwrap_or(date)
}
