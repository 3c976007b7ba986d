use std::rc::Rc;

use chrono::NaiveDate;
use daybook_shared::{
  DayRecord,
  Holiday,
  SelectedRange
};

use crate::date::{
  create_date,
  date_get_range,
  holiday_for_day,
  holidays_between
};
use crate::panel::PanelInputs;

/// Owned panel inputs for one selection,
/// derived from the chosen dates and the
/// known holidays.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Selection {
  pub selected_date:            DayRecord,
  pub holiday_information:
    Option<Holiday>,
  pub date_range_with_holidays:
    Option<Vec<Holiday>>,
  pub selected_date_range:
    SelectedRange,
  pub date_get_range:           Vec<NaiveDate>
}

impl Selection {
  pub fn day(
    date: NaiveDate,
    holidays: &[Holiday]
  ) -> Self {
    let selected_date = create_date(date);
    let holiday_information =
      holiday_for_day(
        holidays,
        &selected_date.iso
      )
      .cloned();

    Self {
      selected_date,
      holiday_information,
      date_range_with_holidays: None,
      selected_date_range:
        SelectedRange::single_day(),
      date_get_range: vec![]
    }
  }

  /// Range selection; the earlier
  /// endpoint doubles as the selected day.
  pub fn range(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &[Holiday]
  ) -> Self {
    let (start, end) = if end < start {
      (end, start)
    } else {
      (start, end)
    };
    let mut selection =
      Self::day(start, holidays);
    selection.selected_date_range =
      SelectedRange::between(
        create_date(start),
        create_date(end)
      );
    selection.date_get_range =
      date_get_range(start, end);
    selection.date_range_with_holidays =
      Some(holidays_between(
        holidays, start, end
      ));
    selection
  }

  pub fn resolve(
    start: NaiveDate,
    end: Option<NaiveDate>,
    holidays: &[Holiday]
  ) -> Self {
    match end {
      | Some(end) => {
        Self::range(start, end, holidays)
      }
      | None => Self::day(start, holidays)
    }
  }

  pub fn inputs<'a>(
    &'a self,
    day_with_task: &'a Rc<Vec<DayRecord>>
  ) -> PanelInputs<'a> {
    PanelInputs {
      selected_date: &self.selected_date,
      holiday_information: self
        .holiday_information
        .as_ref(),
      date_range_with_holidays: self
        .date_range_with_holidays
        .as_deref(),
      selected_date_range: &self
        .selected_date_range,
      date_get_range: &self
        .date_get_range,
      day_with_task
    }
  }
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
  fn day_selection_picks_matching_holiday(
  ) {
    let holidays = vec![
      Holiday::new("2024-05-01", "May Day"),
      Holiday::new(
        "2024-05-05T00:00:00",
        "Cinco de Mayo"
      ),
    ];

    let selection = Selection::day(
      ymd(2024, 5, 5),
      &holidays
    );
    assert!(
      selection
        .selected_date_range
        .is_empty()
    );
    assert_eq!(
      selection
        .holiday_information
        .map(|holiday| holiday.name),
      Some("Cinco de Mayo".to_string())
    );
  }

  #[test]
  fn range_selection_spans_both_endpoints(
  ) {
    let holidays = vec![
      Holiday::new("2024-05-01", "May Day"),
      Holiday::new(
        "2024-05-09",
        "Victory Day"
      ),
    ];

    let selection = Selection::resolve(
      ymd(2024, 5, 1),
      Some(ymd(2024, 5, 3)),
      &holidays
    );
    assert!(
      selection
        .selected_date_range
        .is_range()
    );
    assert_eq!(
      selection.date_get_range.len(),
      3
    );
    assert_eq!(
      selection
        .date_range_with_holidays
        .map(|list| list.len()),
      Some(1)
    );
  }

  #[test]
  fn reversed_endpoints_are_ordered() {
    let selection = Selection::range(
      ymd(2024, 5, 3),
      ymd(2024, 5, 1),
      &[]
    );

    assert_eq!(
      selection.selected_date.iso,
      "2024-05-01"
    );
    let range = &selection.selected_date_range;
    assert_eq!(
      range
        .date_start_range
        .as_ref()
        .map(|day| day.iso.as_str()),
      Some("2024-05-01")
    );
    assert_eq!(
      range
        .end_date
        .as_ref()
        .map(|day| day.iso.as_str()),
      Some("2024-05-03")
    );
    assert_eq!(
      selection.date_get_range.first(),
      Some(&ymd(2024, 5, 1))
    );
  }
}
