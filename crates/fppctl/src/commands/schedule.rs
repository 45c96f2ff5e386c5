//! Scheduler command handlers.

use std::cell::Cell;

use tabled::Tabled;

use fpp_api::FppTime;
use fpp_api::models::{ScheduleEntry, ScheduledItem};

use crate::cli::{ScheduleArgs, ScheduleCommand};
use crate::error::CliError;
use crate::output;

use super::Session;

const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Enabled")]
    enabled: bool,
    #[tabled(rename = "What")]
    what: String,
    #[tabled(rename = "Days")]
    day: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Dates")]
    dates: String,
}

impl EntryRow {
    fn new(index: usize, e: &ScheduleEntry) -> Self {
        Self {
            index,
            enabled: e.enabled != 0,
            what: if e.command.is_empty() {
                e.playlist.clone()
            } else {
                format!("{} {}", e.command, e.args.join(" "))
            },
            day: day_label(e.day),
            time: format!("{} - {}", e.start_time, e.end_time),
            dates: format!("{} - {}", e.start_date, e.end_date),
        }
    }
}

/// FPP day codes: 0-6 single weekdays from Sunday, 7 every day, 8-15 the
/// common groupings. Anything else (bitmasks) is shown as the raw code.
fn day_label(day: i64) -> String {
    match day {
        0..=6 => usize::try_from(day)
            .ok()
            .and_then(|i| DAYS.get(i))
            .map_or_else(|| day.to_string(), |d| (*d).to_owned()),
        7 => "Everyday".into(),
        8 => "Weekdays".into(),
        9 => "Weekends".into(),
        10 => "Mon/Wed/Fri".into(),
        11 => "Tue/Thu".into(),
        12 => "Sun-Thu".into(),
        13 => "Fri/Sat".into(),
        14 => "Odd days".into(),
        15 => "Even days".into(),
        other => format!("code {other}"),
    }
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Command")]
    command: String,
}

impl From<&ScheduledItem> for ItemRow {
    fn from(item: &ScheduledItem) -> Self {
        Self {
            start: time_label(item.start_time, &item.start_time_str),
            end: time_label(item.end_time, &item.end_time_str),
            command: format!("{} {}", item.command, item.args.join(" "))
                .trim_end()
                .to_owned(),
        }
    }
}

fn time_label(time: FppTime, fallback: &str) -> String {
    time.time().map_or_else(
        || fallback.to_owned(),
        |t| t.format("%a %b %e %H:%M").to_string(),
    )
}

pub async fn handle(args: ScheduleArgs, session: &Session) -> Result<(), CliError> {
    match args.command {
        ScheduleCommand::List => {
            let entries = session.client.get_schedule(&session.ctx).await?;
            let next = Cell::new(0_usize);
            let out = output::render_list(
                session.format,
                &entries,
                |e| {
                    let index = next.get();
                    next.set(index + 1);
                    EntryRow::new(index, e)
                },
                |e| e.playlist.clone(),
            )?;
            output::print_output(&out, session.quiet);
        }

        ScheduleCommand::Upcoming => {
            let resp = session.client.get_fppd_schedule(&session.ctx).await?;
            let items = resp.schedule.items;
            let out = output::render_list(
                session.format,
                &items,
                |i| ItemRow::from(i),
                |i| {
                    i.start_time
                        .time()
                        .map_or_else(String::new, |t| t.timestamp().to_string())
                },
            )?;
            output::print_output(&out, session.quiet);
        }

        ScheduleCommand::Reload => {
            session.client.post_schedule_reload(&session.ctx).await?;
            output::confirm("Schedule reloaded", session.quiet);
        }
    }
    Ok(())
}
