use daybook_shared::DayRecord;
use gloo::storage::errors::StorageError;
use gloo::storage::{
  LocalStorage,
  Storage
};

const DAY_TASKS_STORAGE_KEY: &str =
  "daybook.day_tasks";

pub fn load_day_tasks() -> Vec<DayRecord>
{
  match LocalStorage::get::<Vec<DayRecord>>(
    DAY_TASKS_STORAGE_KEY
  ) {
    | Ok(days) => {
      tracing::debug!(
        days = days.len(),
        "restored day tasks"
      );
      days
    }
    | Err(StorageError::KeyNotFound(_)) => {
      vec![]
    }
    | Err(error) => {
      tracing::warn!(
        %error,
        "failed reading stored day tasks; starting empty"
      );
      vec![]
    }
  }
}

pub fn save_day_tasks(
  days: &[DayRecord]
) {
  if let Err(error) = LocalStorage::set(
    DAY_TASKS_STORAGE_KEY,
    days
  ) {
    tracing::error!(
      %error,
      "failed saving day tasks"
    );
  }
}
