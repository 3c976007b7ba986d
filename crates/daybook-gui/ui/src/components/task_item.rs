use daybook_shared::{
  DayRecord,
  TaskRecord
};
use uuid::Uuid;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

/// Address of a task inside the lookup.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct TaskRef {
  pub iso: String,
  pub id:  Uuid
}

#[derive(Properties, PartialEq)]
pub struct TaskItemProps {
  pub task:      TaskRecord,
  pub day:       DayRecord,
  pub on_toggle: Callback<TaskRef>,
  pub on_delete: Callback<TaskRef>
}

#[function_component(TaskItem)]
pub fn task_item(
  props: &TaskItemProps
) -> Html {
  let task_ref = TaskRef {
    iso: props.day.iso.clone(),
    id:  props.task.id
  };
  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let task_ref = task_ref.clone();
    Callback::from(move |_: yew::MouseEvent| {
      on_toggle.emit(task_ref.clone())
    })
  };
  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    Callback::from(
      move |e: yew::MouseEvent| {
        e.stop_propagation();
        on_delete.emit(task_ref.clone());
      }
    )
  };

  html! {
      <div class={classes!("task-item", props.task.completed.then_some("done"))}>
          <input
              type="checkbox"
              class="task-check"
              checked={props.task.completed}
              onclick={on_toggle}
          />
          <div class="task-body">
              <div class="task-title">
                  {
                      if let Some(time) = props.task.time.clone() {
                          html! { <span class="badge">{ time }</span> }
                      } else {
                          html! {}
                      }
                  }
                  { &props.task.title }
              </div>
              {
                  if props.task.description.is_empty() {
                      html! {}
                  } else {
                      html! { <div class="task-subtitle">{ &props.task.description }</div> }
                  }
              }
          </div>
          <button class="btn task-delete" title="Delete" onclick={on_delete}>{ "×" }</button>
      </div>
  }
}
