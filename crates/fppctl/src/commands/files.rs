//! Media files and configuration files.

use tabled::Tabled;

use fpp_api::models::{ChannelOutput, File};

use crate::error::CliError;
use crate::output;

use super::Session;

#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Modified")]
    modified: String,
}

impl From<&File> for FileRow {
    fn from(f: &File) -> Self {
        Self {
            name: f.name.clone(),
            size: if f.size_human.is_empty() {
                f.size_bytes.to_string()
            } else {
                f.size_human.clone()
            },
            modified: f.mtime.clone(),
        }
    }
}

#[derive(Tabled)]
struct OutputRow {
    #[tabled(rename = "Type")]
    output_type: String,
    #[tabled(rename = "Subtype")]
    sub_type: String,
    #[tabled(rename = "Enabled")]
    enabled: bool,
    #[tabled(rename = "Start")]
    start: i64,
    #[tabled(rename = "Channels")]
    channels: i64,
    #[tabled(rename = "Panels")]
    panels: usize,
}

impl From<&ChannelOutput> for OutputRow {
    fn from(o: &ChannelOutput) -> Self {
        Self {
            output_type: o.output_type.clone(),
            sub_type: o.sub_type.clone(),
            enabled: o.enabled != 0,
            start: o.start_channel,
            channels: o.channel_count,
            panels: o.panels.len(),
        }
    }
}

pub async fn list(dir: &str, session: &Session) -> Result<(), CliError> {
    let files = session.client.get_files(&session.ctx, dir).await?;
    let out = output::render_list(
        session.format,
        &files,
        |f| FileRow::from(f),
        |f| f.name.clone(),
    )?;
    output::print_output(&out, session.quiet);
    Ok(())
}

pub async fn outputs(session: &Session) -> Result<(), CliError> {
    let outputs = session.client.get_channel_outputs(&session.ctx).await?;
    let out = output::render_list(
        session.format,
        &outputs,
        |o| OutputRow::from(o),
        |o| o.output_type.clone(),
    )?;
    output::print_output(&out, session.quiet);
    Ok(())
}

/// Config files have no fixed shape, so they are passed through as JSON.
pub async fn config_file(name: &str, session: &Session) -> Result<(), CliError> {
    let value: serde_json::Value = session.client.get_config(&session.ctx, name).await?;
    let pretty = |v: &serde_json::Value| {
        serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
    };
    let out = output::render_single(session.format, &value, pretty, pretty)?;
    output::print_output(&out, session.quiet);
    Ok(())
}
