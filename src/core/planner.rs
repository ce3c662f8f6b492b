use chrono::{Datelike, NaiveDate};

use crate::domain::model::{Period, RotationConfig, Service};
use crate::domain::ports::ServiceLookup;
use crate::utils::error::{Result, RotationError};
use crate::utils::validation::{validate_positive_number, validate_range};

/// Computes the rotation schedule: `config.period_count` periods, one
/// calendar month apart, round-robining through the selection list.
///
/// Pure function of its arguments. `today` is passed in explicitly so the
/// schedule is reproducible in tests; the first period starts on the
/// anchor day of the month after `today`'s month.
pub fn plan<C: ServiceLookup>(
    selection: &[String],
    catalog: &C,
    config: &RotationConfig,
    today: NaiveDate,
) -> Result<Vec<Period>> {
    let distinct = selection
        .iter()
        .collect::<std::collections::HashSet<_>>()
        .len();
    if distinct < 2 {
        return Err(RotationError::InvalidSelection { count: distinct });
    }
    validate_positive_number("services-per-month", config.services_per_period, 1)?;
    validate_positive_number("months", config.period_count, 1)?;
    validate_range("rotation-day", config.anchor_day, 1, 31)?;

    let resolved: Vec<Service> = selection
        .iter()
        .map(|id| {
            catalog
                .service(id)
                .ok_or_else(|| RotationError::UnknownService { id: id.clone() })
        })
        .collect::<Result<_>>()?;

    tracing::debug!(
        "Planning {} periods over {} services, {} per period, anchored on day {}",
        config.period_count,
        resolved.len(),
        config.services_per_period,
        config.anchor_day
    );

    // Months counted from year 0 so the first period is simply an offset
    // away. Keeps each period's date independent of the previous one: a
    // clamp in a short month never drifts later periods.
    let first_month = today.year() * 12 + today.month0() as i32 + 1;

    let mut periods = Vec::with_capacity(config.period_count);
    for m in 0..config.period_count {
        let services = (0..config.services_per_period)
            .map(|i| {
                let idx = (m * config.services_per_period + i) % resolved.len();
                resolved[idx].clone()
            })
            .collect();

        let total = first_month + m as i32;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u32 + 1;
        let start_date = anchored_date(year, month, config.anchor_day)?;

        periods.push(Period {
            index: m,
            start_date,
            services,
        });
    }

    Ok(periods)
}

/// The anchor day within the given month, clamped to the month's last day
/// when the month is shorter (day 31 in April becomes April 30).
fn anchored_date(year: i32, month: u32, anchor_day: u32) -> Result<NaiveDate> {
    let day = anchor_day.min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day).ok_or(RotationError::DateOutOfRange {
        year,
        month,
        day,
    })
}

fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or(RotationError::DateOutOfRange {
            year,
            month,
            day: 1,
        })
}
