use daybook_shared::Holiday;

const HOLIDAYS_JSON: &str =
  include_str!("../../assets/holidays.json");

pub fn load_holidays() -> Vec<Holiday> {
  parse_holidays(HOLIDAYS_JSON)
}

fn parse_holidays(
  raw: &str
) -> Vec<Holiday> {
  match serde_json::from_str::<Vec<Holiday>>(
    raw
  ) {
    | Ok(holidays) => {
      tracing::info!(
        count = holidays.len(),
        "loaded holiday list"
      );
      holidays
    }
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing holiday list; showing none"
      );
      vec![]
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_holidays_parse() {
    let holidays =
      parse_holidays(HOLIDAYS_JSON);
    assert!(!holidays.is_empty());
    assert!(holidays.iter().all(|holiday| {
      !holiday.name.is_empty()
        && holiday.date.iso.contains('T')
    }));
  }

  #[test]
  fn broken_json_yields_no_holidays() {
    assert!(
      parse_holidays("{ nope").is_empty()
    );
  }
}
