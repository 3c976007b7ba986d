//! View model for the day/range detail
//! panel.
//!
//! Everything here is a pure function of
//! the selection, the holiday data and
//! the day→tasks lookup. Missing data
//! never fails; the matching section is
//! simply absent.

use std::rc::Rc;

use chrono::NaiveDate;
use daybook_shared::{
  DayRecord,
  Holiday,
  SelectedRange
};

use crate::config::PanelLabels;
use crate::date::{
  format_date_key,
  holiday_date_portion
};
use crate::memo::{
  Memo,
  SameRc
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ViewMode {
  SingleDay,
  RangeSelected
}

impl ViewMode {
  /// Range mode needs both endpoints;
  /// anything else reads as a single
  /// day.
  pub fn of(range: &SelectedRange) -> Self {
    if range.is_range() {
      Self::RangeSelected
    } else {
      Self::SingleDay
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct PanelInputs<'a> {
  pub selected_date:            &'a DayRecord,
  pub holiday_information:
    Option<&'a Holiday>,
  pub date_range_with_holidays:
    Option<&'a [Holiday]>,
  pub selected_date_range:
    &'a SelectedRange,
  pub date_get_range:           &'a [NaiveDate],
  pub day_with_task:
    &'a Rc<Vec<DayRecord>>
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct DayBadge {
  pub day_number:  u32,
  pub day_short:   String,
  pub month_short: String
}

impl From<&DayRecord> for DayBadge {
  fn from(day: &DayRecord) -> Self {
    Self {
      day_number:  day.day_number,
      day_short:   day.day_short.clone(),
      month_short: day
        .month_short
        .clone()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum PanelHeader {
  RangeBadge {
    start: DayBadge,
    end:   DayBadge
  },
  SingleDay {
    day_number: u32,
    day:        String
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct HolidayEntry {
  pub date: String,
  pub name: String
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum HolidaySection {
  Range(Vec<HolidayEntry>),
  Single(String)
}

impl HolidaySection {
  pub fn heading<'a>(
    &self,
    labels: &'a PanelLabels
  ) -> &'a str {
    match self {
      | Self::Range(_) => {
        labels.holiday_range.as_str()
      }
      | Self::Single(_) => {
        labels.holiday_single.as_str()
      }
    }
  }
}

/// Scroll height of the single-day task
/// list. The list gets more room when a
/// range holiday list is on screen.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ListHeight {
  Compact,
  Tall
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum TaskSection {
  Range {
    events_count: usize,
    days:         Vec<DayRecord>
  },
  Day {
    day:         DayRecord,
    list_height: ListHeight
  }
}

impl TaskSection {
  pub fn event_count(&self) -> usize {
    match self {
      | Self::Range {
        events_count,
        ..
      } => *events_count,
      | Self::Day {
        day, ..
      } => day.task_count()
    }
  }

  pub fn heading(
    &self,
    labels: &PanelLabels
  ) -> String {
    let label = match self {
      | Self::Range {
        ..
      } => &labels.range_tasks,
      | Self::Day {
        ..
      } => &labels.day_tasks
    };
    format!(
      "{label} - {}",
      self.event_count()
    )
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct PanelModel {
  pub mode:             ViewMode,
  pub header:           PanelHeader,
  pub holidays:
    Option<HolidaySection>,
  pub tasks:            Option<TaskSection>,
  pub show_task_setter: bool
}

/// Days of `date_get_range` that have an
/// entry in the lookup, in range order.
pub fn tasks_in_date_range(
  day_with_task: &[DayRecord],
  range: &SelectedRange,
  date_get_range: &[NaiveDate]
) -> Vec<DayRecord> {
  if day_with_task.is_empty()
    || !range.is_range()
    || date_get_range.is_empty()
  {
    return vec![];
  }

  date_get_range
    .iter()
    .filter_map(|date| {
      let key = format_date_key(*date);
      day_with_task
        .iter()
        .find(|day| day.iso == key)
        .cloned()
    })
    .collect()
}

pub fn holidays_in_date_range(
  date_range_with_holidays: Option<
    &[Holiday]
  >
) -> Option<Vec<HolidayEntry>> {
  let holidays =
    date_range_with_holidays
      .filter(|list| !list.is_empty())?;

  Some(
    holidays
      .iter()
      .map(|holiday| HolidayEntry {
        date: holiday_date_portion(
          holiday
        )
        .to_string(),
        name: holiday.name.clone()
      })
      .collect()
  )
}

pub fn find_day_tasks<'a>(
  day_with_task: &'a [DayRecord],
  iso: &str
) -> Option<&'a DayRecord> {
  day_with_task
    .iter()
    .find(|day| day.iso == iso)
}

pub fn events_count(
  days: &[DayRecord]
) -> usize {
  days
    .iter()
    .map(DayRecord::task_count)
    .sum()
}

pub fn day_tasks_section(
  day_with_task: &[DayRecord],
  selected_iso: &str,
  has_range_holidays: bool
) -> Option<TaskSection> {
  let day = find_day_tasks(
    day_with_task,
    selected_iso
  )
  .filter(|day| day.has_tasks())?;

  Some(TaskSection::Day {
    day:         day.clone(),
    list_height: if has_range_holidays {
      ListHeight::Tall
    } else {
      ListHeight::Compact
    }
  })
}

pub fn range_tasks_section(
  matched_days: &[DayRecord]
) -> Option<TaskSection> {
  if matched_days.is_empty() {
    return None;
  }

  Some(TaskSection::Range {
    events_count: events_count(
      matched_days
    ),
    days:         matched_days.to_vec()
  })
}

pub fn panel_header(
  selected_date: &DayRecord,
  range: &SelectedRange
) -> PanelHeader {
  match (
    range.date_start_range.as_ref(),
    range.end_date.as_ref()
  ) {
    | (Some(start), Some(end)) => {
      PanelHeader::RangeBadge {
        start: start.into(),
        end:   end.into()
      }
    }
    | _ => PanelHeader::SingleDay {
      day_number: selected_date
        .day_number,
      day:        selected_date
        .day
        .clone()
    }
  }
}

/// A non-empty range list always wins;
/// the single holiday shows only when it
/// carries a name.
pub fn holiday_section(
  range_holidays: Option<
    Vec<HolidayEntry>
  >,
  holiday_information: Option<&Holiday>
) -> Option<HolidaySection> {
  if let Some(entries) = range_holidays
    && !entries.is_empty()
  {
    return Some(HolidaySection::Range(
      entries
    ));
  }

  holiday_information
    .map(|holiday| holiday.name.trim())
    .filter(|name| !name.is_empty())
    .map(|name| {
      HolidaySection::Single(
        name.to_string()
      )
    })
}

impl PanelModel {
  #[tracing::instrument(
    skip_all,
    fields(selected = %inputs.selected_date.iso)
  )]
  pub fn build(
    inputs: PanelInputs<'_>
  ) -> Self {
    let matched = tasks_in_date_range(
      inputs.day_with_task,
      inputs.selected_date_range,
      inputs.date_get_range
    );
    let range_holidays =
      holidays_in_date_range(
        inputs.date_range_with_holidays
      );
    let has_range_holidays =
      range_holidays.is_some();

    let tasks =
      range_tasks_section(&matched)
        .or_else(|| {
          day_tasks_section(
            inputs.day_with_task,
            &inputs.selected_date.iso,
            has_range_holidays
          )
        });

    Self::assemble(
      inputs,
      holiday_section(
        range_holidays,
        inputs.holiday_information
      ),
      tasks
    )
  }

  fn assemble(
    inputs: PanelInputs<'_>,
    holidays: Option<HolidaySection>,
    tasks: Option<TaskSection>
  ) -> Self {
    let range =
      inputs.selected_date_range;
    let model = Self {
      mode: ViewMode::of(range),
      header: panel_header(
        inputs.selected_date,
        range
      ),
      holidays,
      tasks,
      show_task_setter: range.is_empty()
    };

    tracing::debug!(
      mode = ?model.mode,
      holidays = model.holidays.is_some(),
      events = model
        .tasks
        .as_ref()
        .map(TaskSection::event_count),
      setter = model.show_task_setter,
      "built panel model"
    );
    model
  }
}

type Lookup = SameRc<Vec<DayRecord>>;
type RangeKey =
  (Lookup, SelectedRange, Vec<NaiveDate>);
type DayKey = (Lookup, String, bool);

/// Per-section memoization for repeated
/// renders. The lookup and the matched
/// days are keyed by `Rc` identity, so a
/// hit never walks or clones them.
#[derive(Debug, Default)]
pub struct PanelCache {
  matched:     Memo<RangeKey, Rc<Vec<DayRecord>>>,
  holidays: Memo<
    Option<Vec<Holiday>>,
    Option<Vec<HolidayEntry>>
  >,
  day_tasks:   Memo<DayKey, Option<TaskSection>>,
  range_tasks: Memo<
    SameRc<Vec<DayRecord>>,
    Option<TaskSection>
  >
}

impl PanelCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn build(
    &mut self,
    inputs: PanelInputs<'_>
  ) -> PanelModel {
    let lookup = SameRc(Rc::clone(
      inputs.day_with_task
    ));

    let matched = Rc::clone(
      self.matched.get_or_compute(
        (
          lookup.clone(),
          inputs
            .selected_date_range
            .clone(),
          inputs.date_get_range.to_vec()
        ),
        |(lookup, range, dates)| {
          Rc::new(tasks_in_date_range(
            &lookup.0, range, dates
          ))
        }
      )
    );

    let range_holidays = self
      .holidays
      .get_or_compute(
        inputs
          .date_range_with_holidays
          .map(<[Holiday]>::to_vec),
        |holidays| {
          holidays_in_date_range(
            holidays.as_deref()
          )
        }
      )
      .clone();
    let has_range_holidays =
      range_holidays.is_some();

    let range_tasks = self
      .range_tasks
      .get_or_compute(
        SameRc(matched),
        |days| range_tasks_section(&days.0)
      )
      .clone();

    let tasks = match range_tasks {
      | Some(section) => Some(section),
      | None => self
        .day_tasks
        .get_or_compute(
          (
            lookup,
            inputs
              .selected_date
              .iso
              .clone(),
            has_range_holidays
          ),
          |(lookup, iso, tall)| {
            day_tasks_section(
              &lookup.0, iso, *tall
            )
          }
        )
        .clone()
    };

    PanelModel::assemble(
      inputs,
      holiday_section(
        range_holidays,
        inputs.holiday_information
      ),
      tasks
    )
  }
}

#[cfg(test)]
mod tests {
  use daybook_shared::TaskRecord;

  use super::*;
  use crate::date::create_date;

  fn ymd(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  fn day_with(
    date: NaiveDate,
    titles: &[&str]
  ) -> DayRecord {
    let mut day = create_date(date);
    day.tasks_list_for_the_day = titles
      .iter()
      .map(|title| TaskRecord::new(*title))
      .collect();
    day
  }

  fn march_range() -> SelectedRange {
    SelectedRange::between(
      create_date(ymd(2024, 3, 1)),
      create_date(ymd(2024, 3, 3))
    )
  }

  #[test]
  fn matched_days_follow_range_order() {
    let lookup = Rc::new(vec![
      day_with(ymd(2024, 3, 3), &[
        "review", "deploy"
      ]),
      day_with(ymd(2024, 3, 1), &[
        "plan"
      ]),
    ]);
    let dates = vec![
      ymd(2024, 3, 1),
      ymd(2024, 3, 2),
      ymd(2024, 3, 3),
    ];

    let matched = tasks_in_date_range(
      &lookup,
      &march_range(),
      &dates
    );
    let keys = matched
      .iter()
      .map(|day| day.iso.as_str())
      .collect::<Vec<_>>();
    assert_eq!(keys, vec![
      "2024-03-01",
      "2024-03-03"
    ]);
    assert_eq!(events_count(&matched), 3);
  }

  #[test]
  fn matching_needs_both_endpoints() {
    let lookup = vec![day_with(
      ymd(2024, 3, 1),
      &["plan"]
    )];
    let dates = vec![ymd(2024, 3, 1)];
    let half_open = SelectedRange {
      date_start_range: Some(create_date(
        ymd(2024, 3, 1)
      )),
      end_date:         None
    };

    assert!(
      tasks_in_date_range(
        &lookup, &half_open, &dates
      )
      .is_empty()
    );
    assert!(
      tasks_in_date_range(
        &[],
        &march_range(),
        &dates
      )
      .is_empty()
    );
    assert!(
      tasks_in_date_range(
        &lookup,
        &march_range(),
        &[]
      )
      .is_empty()
    );
  }

  #[test]
  fn empty_holiday_list_is_absent() {
    assert_eq!(
      holidays_in_date_range(None),
      None
    );
    assert_eq!(
      holidays_in_date_range(Some(&[])),
      None
    );

    let holidays = vec![Holiday::new(
      "2024-12-25T00:00:00",
      "Christmas Day"
    )];
    assert_eq!(
      holidays_in_date_range(Some(
        &holidays
      )),
      Some(vec![HolidayEntry {
        date: "2024-12-25".to_string(),
        name: "Christmas Day".to_string()
      }])
    );
  }

  #[test]
  fn single_holiday_needs_a_name() {
    let unnamed =
      Holiday::new("2024-03-05", " ");
    assert_eq!(
      holiday_section(None, Some(&unnamed)),
      None
    );

    let named =
      Holiday::new("2024-03-05", "Fiesta");
    assert_eq!(
      holiday_section(
        Some(vec![]),
        Some(&named)
      ),
      Some(HolidaySection::Single(
        "Fiesta".to_string()
      ))
    );
  }

  #[test]
  fn day_header_for_single_selection() {
    let selected =
      create_date(ymd(2024, 3, 5));
    let lookup = Rc::new(vec![day_with(
      ymd(2024, 3, 5),
      &["standup", "lunch"]
    )]);
    let range = SelectedRange::single_day();

    let model =
      PanelModel::build(PanelInputs {
        selected_date:            &selected,
        holiday_information:      None,
        date_range_with_holidays: None,
        selected_date_range:      &range,
        date_get_range:           &[],
        day_with_task:            &lookup
      });

    assert_eq!(
      model.mode,
      ViewMode::SingleDay
    );
    assert_eq!(
      model.header,
      PanelHeader::SingleDay {
        day_number: 5,
        day:        "Tuesday".to_string()
      }
    );
    let tasks =
      model.tasks.expect("day tasks");
    assert_eq!(
      tasks.heading(
        &PanelLabels::default()
      ),
      "Event's for Today - 2"
    );
    assert!(model.show_task_setter);
  }

  #[test]
  fn selected_day_without_tasks_has_no_task_section(
  ) {
    let selected =
      create_date(ymd(2024, 3, 5));
    let lookup = Rc::new(vec![
      create_date(ymd(2024, 3, 5)),
    ]);
    let range = SelectedRange::single_day();

    let model =
      PanelModel::build(PanelInputs {
        selected_date:            &selected,
        holiday_information:      None,
        date_range_with_holidays: None,
        selected_date_range:      &range,
        date_get_range:           &[],
        day_with_task:            &lookup
      });
    assert_eq!(model.tasks, None);
  }

  #[test]
  fn cache_matches_fresh_build() {
    let selected =
      create_date(ymd(2024, 3, 1));
    let lookup = Rc::new(vec![
      day_with(ymd(2024, 3, 1), &["plan"]),
      day_with(ymd(2024, 3, 3), &[
        "review", "deploy"
      ]),
    ]);
    let dates = vec![
      ymd(2024, 3, 1),
      ymd(2024, 3, 2),
      ymd(2024, 3, 3),
    ];
    let holidays = vec![Holiday::new(
      "2024-03-02",
      "Founders Day"
    )];
    let range = march_range();
    let single = SelectedRange::single_day();

    let mut cache = PanelCache::new();
    for (range, dates, holidays) in [
      (&range, &dates[..], Some(&holidays[..])),
      (&range, &dates[..], Some(&holidays[..])),
      (&single, &[][..], None),
      (&range, &dates[..], None),
    ] {
      let inputs = PanelInputs {
        selected_date:            &selected,
        holiday_information:      None,
        date_range_with_holidays: holidays,
        selected_date_range:      range,
        date_get_range:           dates,
        day_with_task:            &lookup
      };
      assert_eq!(
        cache.build(inputs),
        PanelModel::build(inputs)
      );
    }
  }

  #[test]
  fn cache_reuses_matches_for_same_lookup() {
    let selected =
      create_date(ymd(2024, 3, 1));
    let lookup = Rc::new(vec![
      day_with(ymd(2024, 3, 1), &["plan"]),
      day_with(ymd(2024, 3, 3), &["review"]),
    ]);
    let dates = vec![
      ymd(2024, 3, 1),
      ymd(2024, 3, 2),
      ymd(2024, 3, 3),
    ];
    let range = march_range();
    let inputs = PanelInputs {
      selected_date: &selected,
      holiday_information: None,
      date_range_with_holidays: None,
      selected_date_range: &range,
      date_get_range: &dates,
      day_with_task: &lookup
    };

    let mut cache = PanelCache::new();
    let first = cache.build(inputs);
    let second = cache.build(inputs);
    assert_eq!(first, second);
    assert_eq!(cache.matched.computations(), 1);
    assert_eq!(
      cache.range_tasks.computations(),
      1
    );

    let copy = Rc::new((*lookup).clone());
    let third = cache.build(PanelInputs {
      day_with_task: &copy,
      ..inputs
    });
    assert_eq!(third, first);
    assert_eq!(cache.matched.computations(), 2);
  }
}
