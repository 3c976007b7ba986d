use std::rc::Rc;

use chrono::{
  Datelike,
  NaiveDate
};
use daybook_core::date::{
  format_date_key,
  holiday_for_day,
  month_dates
};
use daybook_shared::{
  DayRecord,
  Holiday
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

const WEEKDAY_LABELS: [&str; 7] = [
  "Mon", "Tue", "Wed", "Thu", "Fri", "Sat",
  "Sun"
];

/// A click on a day. `extend` is set when
/// shift is held, which picks a range end.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct DayPick {
  pub date:   NaiveDate,
  pub extend: bool
}

#[derive(Properties, PartialEq)]
pub struct DayPickerProps {
  pub month:          NaiveDate,
  pub selected:       NaiveDate,
  pub range_end:      Option<NaiveDate>,
  pub day_with_task:  Rc<Vec<DayRecord>>,
  pub holidays:       Rc<Vec<Holiday>>,
  pub on_pick:        Callback<DayPick>,
  pub on_shift_month: Callback<i32>
}

#[function_component(DayPicker)]
pub fn day_picker(
  props: &DayPickerProps
) -> Html {
  let days = month_dates(props.month);
  let blanks = days
    .first()
    .map(|first| leading_blanks(*first))
    .unwrap_or_default();

  let on_prev = {
    let on_shift =
      props.on_shift_month.clone();
    Callback::from(
      move |_: yew::MouseEvent| {
        on_shift.emit(-1)
      }
    )
  };
  let on_next = {
    let on_shift =
      props.on_shift_month.clone();
    Callback::from(
      move |_: yew::MouseEvent| {
        on_shift.emit(1)
      }
    )
  };

  html! {
      <div class="panel day-picker">
          <div class="header day-picker-nav">
              <button class="btn" onclick={on_prev}>{ "Prev" }</button>
              <span>{ props.month.format("%B %Y").to_string() }</span>
              <button class="btn" onclick={on_next}>{ "Next" }</button>
          </div>
          <div class="day-picker-grid">
              { for WEEKDAY_LABELS.iter().map(|label| html! { <span class="weekday">{ *label }</span> }) }
              { for (0..blanks).map(|_| html! { <span class="day-blank"></span> }) }
              {
                  for days.into_iter().map(|date| {
                      let key = format_date_key(date);
                      let has_tasks = props
                          .day_with_task
                          .iter()
                          .any(|day| day.iso == key && day.has_tasks());
                      let is_holiday = holiday_for_day(&props.holidays, &key).is_some();
                      let class = classes!(
                          "day-cell",
                          (date == props.selected).then_some("selected"),
                          in_range(date, props.selected, props.range_end).then_some("in-range"),
                          has_tasks.then_some("has-tasks"),
                          is_holiday.then_some("holiday")
                      );
                      let on_pick = props.on_pick.clone();
                      html! {
                          <button
                              class={class}
                              onclick={move |e: yew::MouseEvent| {
                                  on_pick.emit(DayPick { date, extend: e.shift_key() });
                              }}
                          >
                              { date.day() }
                          </button>
                      }
                  })
              }
          </div>
      </div>
  }
}

fn leading_blanks(
  first: NaiveDate
) -> usize {
  first
    .weekday()
    .num_days_from_monday() as usize
}

fn in_range(
  date: NaiveDate,
  start: NaiveDate,
  end: Option<NaiveDate>
) -> bool {
  end.is_some_and(|end| {
    date >= start.min(end)
      && date <= start.max(end)
  })
}
