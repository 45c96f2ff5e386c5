//! Playlist command handlers.

use tabled::Tabled;

use fpp_api::models::{Playlist, PlaylistEntry};

use crate::cli::{OutputFormat, PlaylistsArgs, PlaylistsCommand};
use crate::error::CliError;
use crate::output;

use super::Session;

#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "Playlist")]
    name: String,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Section")]
    section: &'static str,
    #[tabled(rename = "Type")]
    entry_type: String,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Enabled")]
    enabled: bool,
}

fn entry_rows<'a>(
    section: &'static str,
    entries: &'a [PlaylistEntry],
) -> impl Iterator<Item = EntryRow> + 'a {
    entries.iter().map(move |e| EntryRow {
        section,
        entry_type: e.entry_type.clone(),
        item: entry_label(e),
        enabled: e.enabled != 0,
    })
}

/// Sequence and media names, whichever the entry carries.
fn entry_label(e: &PlaylistEntry) -> String {
    match (e.sequence_name.is_empty(), e.media_name.is_empty()) {
        (false, false) => format!("{} + {}", e.sequence_name, e.media_name),
        (false, true) => e.sequence_name.clone(),
        (true, false) => e.media_name.clone(),
        (true, true) => String::new(),
    }
}

fn playlist_detail(p: &Playlist) -> String {
    let header = output::detail_lines(&[
        ("Name", p.name.clone()),
        ("Description", p.desc.clone()),
        ("Repeat", (p.repeat != 0).to_string()),
        ("Loop count", p.loop_count.to_string()),
        ("Items", p.playlist_info.total_items.to_string()),
        (
            "Duration",
            format!("{:.1}s", p.playlist_info.total_duration),
        ),
    ]);

    let rows: Vec<EntryRow> = entry_rows("lead-in", &p.lead_in)
        .chain(entry_rows("main", &p.main_playlist))
        .chain(entry_rows("lead-out", &p.lead_out))
        .collect();
    if rows.is_empty() {
        return header;
    }
    let table = tabled::Table::new(rows)
        .with(tabled::settings::Style::rounded())
        .to_string();
    format!("{header}\n\n{table}")
}

pub async fn handle(args: PlaylistsArgs, session: &Session) -> Result<(), CliError> {
    match args.command {
        PlaylistsCommand::List => {
            let names = session.client.get_playlists(&session.ctx).await?;
            let out = output::render_list(
                session.format,
                &names,
                |n| NameRow { name: n.clone() },
                String::clone,
            )?;
            output::print_output(&out, session.quiet);
        }

        PlaylistsCommand::Get { name } => {
            let playlist = session
                .client
                .get_playlist(&session.ctx, &name)
                .await
                .map_err(|e| CliError::from(e).listed_by("playlists list"))?;
            let out = match session.format {
                // One line per item, in play order.
                OutputFormat::Plain => playlist
                    .entries()
                    .map(entry_label)
                    .collect::<Vec<_>>()
                    .join("\n"),
                format => {
                    output::render_single(format, &playlist, playlist_detail, |p| p.name.clone())?
                }
            };
            output::print_output(&out, session.quiet);
        }
    }
    Ok(())
}
