use anyhow::Context;
use chrono::{
  Datelike,
  Duration,
  Months,
  NaiveDate
};
use daybook_shared::{
  DayRecord,
  Holiday
};

const DATE_KEY_FORMAT: &str =
  "%Y-%m-%d";

/// Join key between a native date and
/// `DayRecord::iso`.
///
/// Full year (at least four digits),
/// month and day zero-padded to two.
#[must_use]
pub fn format_date_key(
  date: NaiveDate
) -> String {
  format!(
    "{:04}-{:02}-{:02}",
    date.year(),
    date.month(),
    date.day()
  )
}

pub fn parse_date_key(
  raw: &str
) -> anyhow::Result<NaiveDate> {
  NaiveDate::parse_from_str(
    raw.trim(),
    DATE_KEY_FORMAT
  )
  .with_context(|| {
    format!(
      "invalid date `{raw}`, expected \
       YYYY-MM-DD"
    )
  })
}

/// Display labels for a day, with no
/// tasks attached.
#[must_use]
pub fn create_date(
  date: NaiveDate
) -> DayRecord {
  DayRecord {
    iso:         format_date_key(date),
    day_number:  date.day(),
    day:         date
      .format("%A")
      .to_string(),
    day_short:   date
      .format("%a")
      .to_string(),
    month_short: date
      .format("%b")
      .to_string(),
    tasks_list_for_the_day: vec![]
  }
}

/// Every day from `start` to `end`,
/// inclusive. Reversed endpoints are
/// swapped.
#[must_use]
pub fn date_get_range(
  start: NaiveDate,
  end: NaiveDate
) -> Vec<NaiveDate> {
  let (from, to) = if end < start {
    (end, start)
  } else {
    (start, end)
  };

  (0..=(to - from).num_days())
    .map(|offset| {
      from + Duration::days(offset)
    })
    .collect()
}

/// Date part of a holiday timestamp,
/// i.e. everything before the first `T`.
#[must_use]
pub fn holiday_date_portion(
  holiday: &Holiday
) -> &str {
  holiday
    .date
    .iso
    .split('T')
    .next()
    .unwrap_or_default()
}

pub fn holiday_for_day<'a>(
  holidays: &'a [Holiday],
  iso: &str
) -> Option<&'a Holiday> {
  holidays.iter().find(|holiday| {
    holiday_date_portion(holiday) == iso
  })
}

pub fn holidays_between(
  holidays: &[Holiday],
  start: NaiveDate,
  end: NaiveDate
) -> Vec<Holiday> {
  let (from, to) = if end < start {
    (end, start)
  } else {
    (start, end)
  };

  holidays
    .iter()
    .filter(|holiday| {
      let raw =
        holiday_date_portion(holiday);
      match NaiveDate::parse_from_str(
        raw,
        DATE_KEY_FORMAT
      ) {
        | Ok(date) => {
          date >= from && date <= to
        }
        | Err(error) => {
          tracing::debug!(
            date = raw,
            name = %holiday.name,
            %error,
            "skipping holiday with unparsable date"
          );
          false
        }
      }
    })
    .cloned()
    .collect()
}

/// Same day `delta` months away, clamped
/// to the end of shorter months.
#[must_use]
pub fn shift_months(
  date: NaiveDate,
  delta: i32
) -> NaiveDate {
  let months = Months::new(
    delta.unsigned_abs()
  );
  let shifted = if delta < 0 {
    date.checked_sub_months(months)
  } else {
    date.checked_add_months(months)
  };
  shifted.unwrap_or(date)
}

/// Every day of the month containing
/// `date`.
#[must_use]
pub fn month_dates(
  date: NaiveDate
) -> Vec<NaiveDate> {
  let first = date
    .with_day(1)
    .unwrap_or(date);
  let last = first
    .checked_add_months(Months::new(1))
    .and_then(|next| next.pred_opt())
    .unwrap_or(first);
  date_get_range(first, last)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ymd(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn date_key_is_zero_padded() {
    assert_eq!(
      format_date_key(ymd(2024, 3, 5)),
      "2024-03-05"
    );
    assert_eq!(
      format_date_key(ymd(987, 11, 30)),
      "0987-11-30"
    );
  }

  #[test]
  fn parse_rejects_other_layouts() {
    assert_eq!(
      parse_date_key(" 2024-03-05 ")
        .expect("parse"),
      ymd(2024, 3, 5)
    );
    assert!(
      parse_date_key("05/03/2024")
        .is_err()
    );
  }

  #[test]
  fn create_date_fills_english_labels() {
    let day = create_date(ymd(2024, 3, 5));
    assert_eq!(day.iso, "2024-03-05");
    assert_eq!(day.day_number, 5);
    assert_eq!(day.day, "Tuesday");
    assert_eq!(day.day_short, "Tue");
    assert_eq!(day.month_short, "Mar");
    assert!(!day.has_tasks());
  }

  #[test]
  fn range_is_inclusive_and_ordered() {
    let forward = date_get_range(
      ymd(2024, 2, 28),
      ymd(2024, 3, 1)
    );
    assert_eq!(forward, vec![
      ymd(2024, 2, 28),
      ymd(2024, 2, 29),
      ymd(2024, 3, 1),
    ]);

    let backward = date_get_range(
      ymd(2024, 3, 1),
      ymd(2024, 2, 28)
    );
    assert_eq!(backward, forward);

    assert_eq!(
      date_get_range(
        ymd(2024, 3, 1),
        ymd(2024, 3, 1)
      ),
      vec![ymd(2024, 3, 1)]
    );
  }

  #[test]
  fn holiday_lookup_ignores_time_part() {
    let holidays = vec![
      Holiday::new(
        "2024-12-25T00:00:00",
        "Christmas Day"
      ),
      Holiday::new(
        "2024-12-26",
        "Boxing Day"
      ),
    ];

    assert_eq!(
      holiday_for_day(
        &holidays,
        "2024-12-25"
      )
      .map(|holiday| holiday.name.as_str()),
      Some("Christmas Day")
    );
    assert!(
      holiday_for_day(
        &holidays,
        "2024-12-24"
      )
      .is_none()
    );
  }

  #[test]
  fn holidays_between_keeps_input_order_and_skips_garbage(
  ) {
    let holidays = vec![
      Holiday::new(
        "2024-12-26",
        "Boxing Day"
      ),
      Holiday::new("not a date", "??"),
      Holiday::new(
        "2024-12-25T00:00:00",
        "Christmas Day"
      ),
      Holiday::new(
        "2025-01-01",
        "New Year"
      ),
    ];

    let names = holidays_between(
      &holidays,
      ymd(2024, 12, 31),
      ymd(2024, 12, 20)
    )
    .into_iter()
    .map(|holiday| holiday.name)
    .collect::<Vec<_>>();

    assert_eq!(names, vec![
      "Boxing Day",
      "Christmas Day"
    ]);
  }

  #[test]
  fn month_shift_clamps_to_month_end() {
    assert_eq!(
      shift_months(ymd(2024, 1, 31), 1),
      ymd(2024, 2, 29)
    );
    assert_eq!(
      shift_months(ymd(2024, 1, 15), -2),
      ymd(2023, 11, 15)
    );
  }

  #[test]
  fn month_dates_cover_whole_month() {
    let february =
      month_dates(ymd(2024, 2, 17));
    assert_eq!(february.len(), 29);
    assert_eq!(
      february.first().copied(),
      Some(ymd(2024, 2, 1))
    );
    assert_eq!(
      february.last().copied(),
      Some(ymd(2024, 2, 29))
    );
  }
}
