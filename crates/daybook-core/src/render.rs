use std::io::Write;

use daybook_shared::TaskRecord;

use crate::config::{
    PanelConfig,
    PanelLabels,
};
use crate::panel::{
    HolidaySection,
    PanelHeader,
    PanelModel,
    TaskSection,
};

#[derive(Debug, Clone)]
pub struct TextRenderer {
    color: bool,
    labels: PanelLabels,
}

impl TextRenderer {
    pub fn new(config: &PanelConfig, color: bool) -> Self {
        Self {
            color,
            labels: config.labels.clone(),
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn write_panel<W: Write>(&self, out: &mut W, model: &PanelModel) -> anyhow::Result<()> {
        match &model.header {
            PanelHeader::RangeBadge { start, end } => {
                writeln!(
                    out,
                    "{} {} ({}) - {} {} ({})",
                    start.day_number,
                    start.day_short,
                    start.month_short,
                    end.day_number,
                    end.day_short,
                    end.month_short
                )?;
            }
            PanelHeader::SingleDay { day_number, day } => {
                writeln!(out, "{}", self.paint(&day_number.to_string(), "1"))?;
                writeln!(out, "{day}")?;
            }
        }

        if let Some(holidays) = &model.holidays {
            writeln!(out)?;
            writeln!(out, "{}", self.paint(holidays.heading(&self.labels), "35"))?;
            match holidays {
                HolidaySection::Range(entries) => {
                    for entry in entries {
                        writeln!(out, "  * {}: {}", entry.date, entry.name)?;
                    }
                }
                HolidaySection::Single(name) => writeln!(out, "  {name}")?,
            }
        }

        if let Some(tasks) = &model.tasks {
            writeln!(out)?;
            writeln!(out, "{}", self.paint(&tasks.heading(&self.labels), "36"))?;
            match tasks {
                TaskSection::Range { days, .. } => {
                    for day in days {
                        writeln!(out, "{}", day.iso)?;
                        for task in &day.tasks_list_for_the_day {
                            writeln!(out, "    {}", format_task_line(task))?;
                        }
                    }
                }
                TaskSection::Day { day, .. } => {
                    for task in &day.tasks_list_for_the_day {
                        writeln!(out, "  {}", format_task_line(task))?;
                    }
                }
            }
        }

        if model.show_task_setter {
            writeln!(out)?;
            writeln!(out, "+ {}", self.labels.set_task)?;
        }

        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

pub fn format_task_line(task: &TaskRecord) -> String {
    let mark = if task.completed { "[x]" } else { "[ ]" };
    let mut line = match &task.time {
        Some(time) => format!("{mark} {time} {}", task.title),
        None => format!("{mark} {}", task.title),
    };
    if !task.description.is_empty() {
        line.push_str(": ");
        line.push_str(&task.description);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_line_shows_time_and_description() {
        let mut task = TaskRecord::new("standup");
        assert_eq!(format_task_line(&task), "[ ] standup");

        task.time = Some("09:30".to_string());
        task.description = "daily sync".to_string();
        task.completed = true;
        assert_eq!(format_task_line(&task), "[x] 09:30 standup: daily sync");
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let renderer = TextRenderer::new(&PanelConfig::default(), false);
        assert_eq!(renderer.paint("5", "1"), "5");

        let colored = TextRenderer::new(&PanelConfig::default(), true);
        assert_eq!(colored.paint("5", "1"), "\x1b[1m5\x1b[0m");
    }
}
