use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskRecord {
  pub id:          Uuid,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: String,
  pub time:        Option<String>,
  #[serde(default)]
  pub completed:   bool
}

impl TaskRecord {
  pub fn new(
    title: impl Into<String>
  ) -> Self {
    Self {
      id:          Uuid::new_v4(),
      title:       title.into(),
      description: String::new(),
      time:        None,
      completed:   false
    }
  }
}

/// One calendar day with its display
/// labels and the tasks scheduled on it.
///
/// `iso` is the `YYYY-MM-DD` join key.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
  pub iso:         String,
  pub day_number:  u32,
  #[serde(default)]
  pub day:         String,
  #[serde(default)]
  pub day_short:   String,
  #[serde(default)]
  pub month_short: String,
  #[serde(default)]
  pub tasks_list_for_the_day:
    Vec<TaskRecord>
}

impl DayRecord {
  pub fn task_count(&self) -> usize {
    self.tasks_list_for_the_day.len()
  }

  pub fn has_tasks(&self) -> bool {
    !self
      .tasks_list_for_the_day
      .is_empty()
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct HolidayDate {
  pub iso: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Holiday {
  pub date: HolidayDate,
  #[serde(default)]
  pub name: String
}

impl Holiday {
  pub fn new(
    iso: impl Into<String>,
    name: impl Into<String>
  ) -> Self {
    Self {
      date: HolidayDate {
        iso: iso.into()
      },
      name: name.into()
    }
  }
}

/// Start and end of a selected range.
/// Both empty means a single day is
/// selected.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct SelectedRange {
  pub date_start_range:
    Option<DayRecord>,
  pub end_date: Option<DayRecord>
}

impl SelectedRange {
  pub fn single_day() -> Self {
    Self::default()
  }

  pub fn between(
    start: DayRecord,
    end: DayRecord
  ) -> Self {
    Self {
      date_start_range: Some(start),
      end_date:         Some(end)
    }
  }

  pub fn is_range(&self) -> bool {
    self.date_start_range.is_some()
      && self.end_date.is_some()
  }

  pub fn is_empty(&self) -> bool {
    self.date_start_range.is_none()
      && self.end_date.is_none()
  }
}

/// Days and holidays as loaded from a
/// JSON snapshot.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct Snapshot {
  #[serde(default)]
  pub days:     Vec<DayRecord>,
  #[serde(default)]
  pub holidays: Vec<Holiday>
}
