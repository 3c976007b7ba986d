use std::rc::Rc;

use chrono::NaiveDate;
use daybook_core::config::PanelLabels;
use daybook_core::panel::{
  HolidayEntry,
  HolidaySection,
  ListHeight,
  PanelCache,
  PanelHeader,
  PanelInputs,
  PanelModel,
  TaskSection
};
use daybook_shared::{
  DayRecord,
  Holiday,
  SelectedRange
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_mut_ref
};

use super::{
  CalendarDayTaskSetter,
  TaskItem,
  TaskRef
};

#[derive(Properties, PartialEq)]
pub struct RangeOrDayPanelProps {
  pub selected_date:            DayRecord,
  #[prop_or_default]
  pub holiday_information:
    Option<Holiday>,
  #[prop_or_default]
  pub date_range_with_holidays:
    Option<Vec<Holiday>>,
  pub selected_date_range:
    SelectedRange,
  pub date_get_range:           Vec<NaiveDate>,
  pub day_with_task:
    Rc<Vec<DayRecord>>,
  pub labels:                   Rc<PanelLabels>,
  pub on_add_task:              Callback<String>,
  pub on_toggle_task:
    Callback<TaskRef>,
  pub on_delete_task:
    Callback<TaskRef>
}

/// Holidays and tasks for the selected day
/// or range.
#[function_component(RangeOrDayPanel)]
pub fn range_or_day_panel(
  props: &RangeOrDayPanelProps
) -> Html {
  let cache = use_mut_ref(PanelCache::new);
  let model: PanelModel =
    cache.borrow_mut().build(PanelInputs {
      selected_date:            &props
        .selected_date,
      holiday_information:      props
        .holiday_information
        .as_ref(),
      date_range_with_holidays: props
        .date_range_with_holidays
        .as_deref(),
      selected_date_range:      &props
        .selected_date_range,
      date_get_range:           &props
        .date_get_range,
      day_with_task:            &props
        .day_with_task
    });

  let render_tasks = |day: &DayRecord| {
    html! {
        <>
            {
                for day.tasks_list_for_the_day.iter().map(|task| html! {
                    <li class="task-row" key={task.id.to_string()}>
                        <TaskItem
                            task={task.clone()}
                            day={day.clone()}
                            on_toggle={props.on_toggle_task.clone()}
                            on_delete={props.on_delete_task.clone()}
                        />
                    </li>
                })
            }
        </>
    }
  };

  html! {
      <div class="panel day-panel">
          <div class="day-panel-header">
              {
                  match &model.header {
                      PanelHeader::RangeBadge { start, end } => html! {
                          <div class="range-badge">
                              <h1>
                                  { format!("{} {}", start.day_number, start.day_short) }
                                  <p class="month-label">{ &start.month_short }</p>
                              </h1>
                              <span class="range-dash">{ "-" }</span>
                              <h1>
                                  { format!("{} {}", end.day_number, end.day_short) }
                                  <p class="month-label">{ &end.month_short }</p>
                              </h1>
                          </div>
                      },
                      PanelHeader::SingleDay { day_number, day } => html! {
                          <>
                              <h1 class="day-number">{ *day_number }</h1>
                              <h2 class="day-name">{ day }</h2>
                          </>
                      },
                  }
              }
          </div>

          {
              match &model.holidays {
                  Some(section @ HolidaySection::Range(entries)) => html! {
                      <div class="holiday-block">
                          <h3 class="holiday-heading">{ section.heading(&props.labels) }</h3>
                          <ul class="list-wrapper">
                              {
                                  for entries.iter().enumerate().map(|(index, entry)| html! {
                                      <li class="holiday-item" key={holiday_item_key(index, entry)}>
                                          { format!("{}: {}", entry.date, entry.name) }
                                      </li>
                                  })
                              }
                          </ul>
                      </div>
                  },
                  Some(section @ HolidaySection::Single(name)) => html! {
                      <div class="holiday-block">
                          <h3 class="holiday-heading">{ section.heading(&props.labels) }</h3>
                          <p class="holiday-item">{ name }</p>
                      </div>
                  },
                  None => html! {},
              }
          }

          {
              match &model.tasks {
                  Some(section @ TaskSection::Range { days, .. }) => html! {
                      <div class="task-wrapper">
                          <h3 class="tasks-heading">{ section.heading(&props.labels) }</h3>
                          {
                              for days.iter().map(|day| html! {
                                  <ul class="range-day" key={day.iso.clone()}>
                                      <p class="range-day-label">{ &day.iso }</p>
                                      { render_tasks(day) }
                                  </ul>
                              })
                          }
                      </div>
                  },
                  Some(section @ TaskSection::Day { day, list_height }) => html! {
                      <div class="task-wrapper">
                          <h3 class="tasks-heading">{ section.heading(&props.labels) }</h3>
                          <ul class={classes!("list-wrapper", list_height_class(*list_height))}>
                              { render_tasks(day) }
                          </ul>
                      </div>
                  },
                  None => html! {},
              }
          }

          {
              if model.show_task_setter {
                  html! {
                      <CalendarDayTaskSetter
                          label={props.labels.set_task.clone()}
                          on_add={props.on_add_task.clone()}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}

fn list_height_class(
  height: ListHeight
) -> &'static str {
  match height {
    | ListHeight::Compact => "compact",
    | ListHeight::Tall => "tall"
  }
}

fn holiday_item_key(
  index: usize,
  entry: &HolidayEntry
) -> String {
  format!("{index}-{}", entry.date)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn holidays_sharing_a_date_get_distinct_keys(
  ) {
    let entries = [
      HolidayEntry {
        date: "2024-12-25".to_string(),
        name: "Christmas Day".to_string()
      },
      HolidayEntry {
        date: "2024-12-25".to_string(),
        name: "Quarter Day".to_string()
      },
    ];

    let keys = entries
      .iter()
      .enumerate()
      .map(|(index, entry)| {
        holiday_item_key(index, entry)
      })
      .collect::<Vec<_>>();
    assert_ne!(keys[0], keys[1]);
  }
}
