use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct CalendarDayTaskSetterProps {
  pub label:  String,
  pub on_add: Callback<String>
}

/// Inline form that adds a task to the
/// selected day.
#[function_component(CalendarDayTaskSetter)]
pub fn calendar_day_task_setter(
  props: &CalendarDayTaskSetterProps
) -> Html {
  let draft = use_state(String::new);

  let on_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: yew::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        draft.set(input.value());
      }
    )
  };

  let on_submit = {
    let draft = draft.clone();
    let on_add = props.on_add.clone();
    Callback::from(
      move |e: yew::SubmitEvent| {
        e.prevent_default();
        let title = draft.trim().to_string();
        if title.is_empty() {
          return;
        }
        on_add.emit(title);
        draft.set(String::new());
      }
    )
  };

  html! {
      <form class="task-setter" onsubmit={on_submit}>
          <div class="header">{ &props.label }</div>
          <div class="task-setter-row">
              <input
                  class="input"
                  placeholder="Task title"
                  value={(*draft).clone()}
                  oninput={on_input}
              />
              <button class="btn" type="submit" disabled={draft.trim().is_empty()}>{ "Add" }</button>
          </div>
      </form>
  }
}
