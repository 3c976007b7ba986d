mod calendar_day_task_setter;
mod day_picker;
mod range_or_day_panel;
mod task_item;

pub use calendar_day_task_setter::CalendarDayTaskSetter;
pub use day_picker::{
  DayPick,
  DayPicker
};
pub use range_or_day_panel::RangeOrDayPanel;
pub use task_item::{
  TaskItem,
  TaskRef
};
