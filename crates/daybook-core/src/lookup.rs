//! Edits on the day→tasks lookup owned by
//! the host application. The panel itself
//! only reads the lookup.

use chrono::NaiveDate;
use daybook_shared::{
  DayRecord,
  TaskRecord
};
use uuid::Uuid;

use crate::date::{
  create_date,
  format_date_key
};

/// Appends `task` to the record for
/// `date`, creating the record when the
/// day has none yet.
pub fn add_task(
  lookup: &mut Vec<DayRecord>,
  date: NaiveDate,
  task: TaskRecord
) {
  let key = format_date_key(date);
  match lookup
    .iter_mut()
    .find(|day| day.iso == key)
  {
    | Some(day) => {
      day.tasks_list_for_the_day.push(task)
    }
    | None => {
      let mut day = create_date(date);
      day.tasks_list_for_the_day.push(task);
      lookup.push(day);
    }
  }
}

/// Flips `completed` on the task. Returns
/// false when no such task exists.
pub fn toggle_task(
  lookup: &mut [DayRecord],
  iso: &str,
  id: Uuid
) -> bool {
  let task = lookup
    .iter_mut()
    .filter(|day| day.iso == iso)
    .flat_map(|day| {
      day.tasks_list_for_the_day.iter_mut()
    })
    .find(|task| task.id == id);

  match task {
    | Some(task) => {
      task.completed = !task.completed;
      true
    }
    | None => false
  }
}

/// Removes the task, then drops every
/// day left without tasks.
pub fn remove_task(
  lookup: &mut Vec<DayRecord>,
  iso: &str,
  id: Uuid
) -> bool {
  let Some(day) = lookup
    .iter_mut()
    .find(|day| day.iso == iso)
  else {
    return false;
  };

  let before = day.task_count();
  day
    .tasks_list_for_the_day
    .retain(|task| task.id != id);
  let removed = day.task_count() < before;

  lookup.retain(DayRecord::has_tasks);
  removed
}
