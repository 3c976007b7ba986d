mod holidays;
mod storage;

use std::rc::Rc;

use chrono::NaiveDate;
use daybook_core::config::PanelConfig;
use daybook_core::date::shift_months;
use daybook_core::lookup;
use daybook_core::selection::Selection;
use daybook_shared::{
  DayRecord,
  TaskRecord
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_state
};

use self::holidays::load_holidays;
use self::storage::{
  load_day_tasks,
  save_day_tasks
};
use crate::components::{
  DayPick,
  DayPicker,
  RangeOrDayPanel,
  TaskRef
};

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(PanelConfig::embedded);
  let holidays =
    use_state(|| Rc::new(load_holidays()));
  let today = config.today();
  let selected = use_state(|| today);
  let range_end =
    use_state(|| None::<NaiveDate>);
  let month = use_state(|| today);
  let day_with_task = use_state(|| {
    Rc::new(load_day_tasks())
  });

  let on_pick = {
    let selected = selected.clone();
    let range_end = range_end.clone();
    Callback::from(move |pick: DayPick| {
      if pick.extend
        && pick.date != *selected
      {
        let anchor = *selected;
        let (start, end) = if pick.date
          < anchor
        {
          (pick.date, anchor)
        } else {
          (anchor, pick.date)
        };
        tracing::debug!(%start, %end, "selected range");
        selected.set(start);
        range_end.set(Some(end));
      } else {
        tracing::debug!(date = %pick.date, "selected day");
        selected.set(pick.date);
        range_end.set(None);
      }
    })
  };

  let on_shift_month = {
    let month = month.clone();
    Callback::from(move |delta: i32| {
      month.set(shift_months(*month, delta));
    })
  };

  let on_clear_range = {
    let range_end = range_end.clone();
    Callback::from(
      move |_: yew::MouseEvent| {
        range_end.set(None)
      }
    )
  };

  let on_add_task = {
    let day_with_task =
      day_with_task.clone();
    let selected = selected.clone();
    Callback::from(move |title: String| {
      let mut next: Vec<DayRecord> =
        (**day_with_task).clone();
      let date = *selected;
      lookup::add_task(
        &mut next,
        date,
        TaskRecord::new(title)
      );
      tracing::info!(%date, "added task");
      save_day_tasks(&next);
      day_with_task.set(Rc::new(next));
    })
  };

  let on_toggle_task = {
    let day_with_task =
      day_with_task.clone();
    Callback::from(move |task: TaskRef| {
      let mut next: Vec<DayRecord> =
        (**day_with_task).clone();
      if lookup::toggle_task(
        &mut next, &task.iso, task.id
      ) {
        save_day_tasks(&next);
        day_with_task.set(Rc::new(next));
      } else {
        tracing::warn!(iso = %task.iso, id = %task.id, "toggled unknown task");
      }
    })
  };

  let on_delete_task = {
    let day_with_task =
      day_with_task.clone();
    Callback::from(move |task: TaskRef| {
      let mut next: Vec<DayRecord> =
        (**day_with_task).clone();
      if lookup::remove_task(
        &mut next, &task.iso, task.id
      ) {
        tracing::info!(iso = %task.iso, "removed task");
        save_day_tasks(&next);
        day_with_task.set(Rc::new(next));
      }
    })
  };

  let selection = Selection::resolve(
    *selected,
    *range_end,
    &holidays
  );

  html! {
      <div class="layout">
          <div class="calendar-column">
              <DayPicker
                  month={*month}
                  selected={*selected}
                  range_end={*range_end}
                  day_with_task={(*day_with_task).clone()}
                  holidays={(*holidays).clone()}
                  on_pick={on_pick}
                  on_shift_month={on_shift_month}
              />
              {
                  if range_end.is_some() {
                      html! { <button class="btn" onclick={on_clear_range}>{ "Clear range" }</button> }
                  } else {
                      html! { <p class="hint">{ "Shift-click a day to select a range." }</p> }
                  }
              }
          </div>
          <RangeOrDayPanel
              selected_date={selection.selected_date}
              holiday_information={selection.holiday_information}
              date_range_with_holidays={selection.date_range_with_holidays}
              selected_date_range={selection.selected_date_range}
              date_get_range={selection.date_get_range}
              day_with_task={(*day_with_task).clone()}
              labels={Rc::new(config.labels.clone())}
              on_add_task={on_add_task}
              on_toggle_task={on_toggle_task}
              on_delete_task={on_delete_task}
          />
      </div>
  }
}
