//! Daemon status, plugins, and FPP commands.

use tabled::Tabled;

use fpp_api::models::{Command, FppdStatus};

use crate::cli::{OutputFormat, RunArgs, RunCommand};
use crate::error::CliError;
use crate::output;

use super::Session;

fn status_detail(s: &FppdStatus) -> String {
    let current = if s.current_playlist.playlist.is_empty() {
        "-".to_owned()
    } else {
        format!(
            "{} (item {} of {})",
            s.current_playlist.playlist, s.current_playlist.index, s.current_playlist.count
        )
    };
    let next = match s.next_playlist.start_time.time() {
        Some(t) => format!(
            "{} at {}",
            s.next_playlist.playlist,
            t.format("%a %b %e %H:%M")
        ),
        None => s.next_playlist.playlist.clone(),
    };

    let mut pairs = vec![
        ("Status", s.status_name.clone()),
        ("Mode", format!("{} ({})", s.mode_name, s.mode)),
        ("Playlist", current),
        ("Sequence", s.current_sequence.clone()),
        ("Song", s.current_song.clone()),
        ("Elapsed", s.time_elapsed.clone()),
        ("Remaining", s.time_remaining.clone()),
        ("Repeat", s.repeat_mode.is_repeating().to_string()),
        ("Next", next),
        ("Scheduler", s.scheduler.status.clone()),
        ("Volume", s.volume.to_string()),
        ("Uptime", s.uptime_str.clone()),
        ("Version", s.fppd.clone()),
    ];
    pairs.extend(
        s.warnings
            .iter()
            .map(|w| ("Warning", w.clone())),
    );
    output::detail_lines(&pairs)
}

pub async fn status(session: &Session) -> Result<(), CliError> {
    let status = session.client.get_fppd_status(&session.ctx).await?;
    let out = output::render_single(session.format, &status, status_detail, |s| {
        s.status_name.clone()
    })?;
    output::print_output(&out, session.quiet);
    Ok(())
}

#[derive(Tabled)]
struct PluginRow {
    #[tabled(rename = "Plugin")]
    name: String,
}

pub async fn plugins(contains: Option<&str>, session: &Session) -> Result<(), CliError> {
    let plugins = session.client.get_plugins(&session.ctx).await?;

    if let Some(wanted) = contains {
        if !plugins.contains(wanted) {
            return Err(CliError::NotFound {
                context: format!("plugin {wanted:?}"),
                list_command: "plugins".into(),
            });
        }
        output::confirm(&format!("{wanted} is installed"), session.quiet);
        return Ok(());
    }

    let out = output::render_list(
        session.format,
        &plugins.0,
        |p| PluginRow { name: p.clone() },
        String::clone,
    )?;
    output::print_output(&out, session.quiet);
    Ok(())
}

pub async fn run(args: RunArgs, session: &Session) -> Result<(), CliError> {
    let command = match args.command {
        RunCommand::InsertPlaylist {
            playlist,
            start,
            end,
            if_not_running,
        } => Command::insert_playlist_after_current(&playlist, start, end, if_not_running),
    };

    let resp = session.client.post_command(&session.ctx, &command).await?;
    let out = match session.format {
        OutputFormat::Table | OutputFormat::Plain => {
            resp.as_str().map_or_else(|| resp.to_string(), str::to_owned)
        }
        format => output::render_single(format, &resp, ToString::to_string, ToString::to_string)?,
    };
    output::print_output(&out, session.quiet);
    Ok(())
}
