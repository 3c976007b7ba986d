use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::Context;
use chrono::{
  NaiveDate,
  Utc
};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{
  debug,
  info,
  warn
};

pub const PANEL_CONFIG_TOML: &str =
  include_str!("../assets/panel.toml");
const CONFIG_ENV_VAR: &str =
  "DAYBOOK_CONFIG";
const CONFIG_DIR_NAME: &str = "daybook";
const CONFIG_FILE_NAME: &str =
  "panel.toml";

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct PanelConfig {
  #[serde(default)]
  pub version:  u32,
  pub timezone: Option<String>,
  #[serde(default)]
  pub labels:   PanelLabels
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct PanelLabels {
  #[serde(
    default = "default_holiday_single"
  )]
  pub holiday_single: String,
  #[serde(
    default = "default_holiday_range"
  )]
  pub holiday_range:  String,
  #[serde(default = "default_day_tasks")]
  pub day_tasks:      String,
  #[serde(
    default = "default_range_tasks"
  )]
  pub range_tasks:    String,
  #[serde(default = "default_set_task")]
  pub set_task:       String
}

fn default_holiday_single() -> String {
  "Holiday this day".to_string()
}

fn default_holiday_range() -> String {
  "Holiday this day's".to_string()
}

fn default_day_tasks() -> String {
  "Event's for Today".to_string()
}

fn default_range_tasks() -> String {
  "Event's in range".to_string()
}

fn default_set_task() -> String {
  "Set a task for this day".to_string()
}

impl Default for PanelConfig {
  fn default() -> Self {
    Self {
      version:  1,
      timezone: None,
      labels:   PanelLabels::default()
    }
  }
}

impl Default for PanelLabels {
  fn default() -> Self {
    Self {
      holiday_single:
        default_holiday_single(),
      holiday_range:
        default_holiday_range(),
      day_tasks: default_day_tasks(),
      range_tasks:
        default_range_tasks(),
      set_task: default_set_task()
    }
  }
}

impl PanelConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<PanelConfig>(raw)
        .context(
          "failed parsing panel config"
        )?;
    config.sanitize();
    Ok(config)
  }

  /// Config bundled into the binary.
  /// Falls back to defaults when the
  /// embedded file does not parse.
  pub fn embedded() -> Self {
    match Self::from_toml_str(
      PANEL_CONFIG_TOML
    ) {
      | Ok(config) => {
        info!(
          version = config.version,
          timezone = ?config.timezone,
          "loaded panel config"
        );
        config
      }
      | Err(error) => {
        tracing::error!(error = %format!("{error:#}"), "failed parsing embedded panel config; using defaults");
        Self::default()
      }
    }
  }

  /// Resolution order: explicit path,
  /// `$DAYBOOK_CONFIG`, the user config
  /// dir, then the embedded defaults.
  #[tracing::instrument]
  pub fn load(
    path_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let Some(path) =
      resolve_config_path(path_override)
    else {
      debug!(
        "no panel config file; using \
         embedded defaults"
      );
      return Ok(Self::embedded());
    };

    info!(file = %path.display(), "loading panel config");
    let raw = fs::read_to_string(&path)
      .with_context(|| {
        format!(
          "failed to read {}",
          path.display()
        )
      })?;

    Self::from_toml_str(&raw)
      .with_context(|| {
        format!(
          "invalid panel config {}",
          path.display()
        )
      })
  }

  pub fn timezone(&self) -> Tz {
    let Some(raw) =
      self.timezone.as_deref()
    else {
      return chrono_tz::UTC;
    };

    match raw.trim().parse::<Tz>() {
      | Ok(tz) => tz,
      | Err(error) => {
        warn!(
          timezone = raw,
          %error,
          "invalid timezone id; using UTC"
        );
        chrono_tz::UTC
      }
    }
  }

  pub fn today(&self) -> NaiveDate {
    Utc::now()
      .with_timezone(&self.timezone())
      .date_naive()
  }

  fn sanitize(&mut self) {
    let defaults = PanelLabels::default();
    let labels = &mut self.labels;

    for (value, fallback) in [
      (
        &mut labels.holiday_single,
        defaults.holiday_single
      ),
      (
        &mut labels.holiday_range,
        defaults.holiday_range
      ),
      (
        &mut labels.day_tasks,
        defaults.day_tasks
      ),
      (
        &mut labels.range_tasks,
        defaults.range_tasks
      ),
      (
        &mut labels.set_task,
        defaults.set_task
      ),
    ] {
      if value.trim().is_empty() {
        *value = fallback;
      }
    }

    if self
      .timezone
      .as_deref()
      .is_some_and(|tz| {
        tz.trim().is_empty()
      })
    {
      self.timezone = None;
    }
  }
}

fn resolve_config_path(
  path_override: Option<&Path>
) -> Option<PathBuf> {
  if let Some(path) = path_override {
    return Some(path.to_path_buf());
  }

  if let Ok(raw) =
    std::env::var(CONFIG_ENV_VAR)
  {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
      return Some(PathBuf::from(
        trimmed
      ));
    }
  }

  dirs::config_dir()
    .map(|dir| {
      dir
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
    })
    .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_config_matches_defaults() {
    let config = PanelConfig::from_toml_str(
      PANEL_CONFIG_TOML
    )
    .expect("embedded config parses");
    assert_eq!(
      config.labels,
      PanelLabels::default()
    );
    assert_eq!(
      config.timezone(),
      chrono_tz::UTC
    );
  }

  #[test]
  fn blank_labels_fall_back_to_defaults()
  {
    let config =
      PanelConfig::from_toml_str(
        r#"
        timezone = "  "
        [labels]
        day_tasks = "   "
        range_tasks = "In range"
        "#
      )
      .expect("parse config");

    assert_eq!(
      config.labels.day_tasks,
      "Event's for Today"
    );
    assert_eq!(
      config.labels.range_tasks,
      "In range"
    );
    assert_eq!(config.timezone, None);
  }

  #[test]
  fn unknown_timezone_resolves_to_utc() {
    let config =
      PanelConfig::from_toml_str(
        r#"timezone = "Mars/Olympus""#
      )
      .expect("parse config");
    assert_eq!(
      config.timezone(),
      chrono_tz::UTC
    );
  }

  #[test]
  fn malformed_config_is_an_error() {
    assert!(
      PanelConfig::from_toml_str(
        "labels = 3"
      )
      .is_err()
    );
  }
}
