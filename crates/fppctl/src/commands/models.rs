//! Overlay model command handlers.

use tabled::Tabled;

use fpp_api::models::Model;
use fpp_api::{ModelState, Rgb};

use crate::cli::{ModelsArgs, ModelsCommand};
use crate::error::CliError;
use crate::output;

use super::Session;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    model_type: String,
    #[tabled(rename = "Start")]
    start: i64,
    #[tabled(rename = "Channels")]
    channels: i64,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&Model> for ModelRow {
    fn from(m: &Model) -> Self {
        Self {
            name: m.name.clone(),
            model_type: m.model_type.clone(),
            start: m.start_channel,
            channels: m.channel_count,
            size: format!("{}x{}", m.width, m.height),
            active: state_label(m.is_active).into(),
        }
    }
}

#[derive(Tabled)]
struct FontRow {
    #[tabled(rename = "Font")]
    name: String,
}

fn state_label(state: i64) -> &'static str {
    match state {
        0 => "off",
        1 => "on",
        2 => "transparent",
        3 => "transparent (rgb)",
        _ => "?",
    }
}

fn model_detail(m: &Model) -> String {
    output::detail_lines(&[
        ("Name", m.name.clone()),
        ("Type", m.model_type.clone()),
        ("Start channel", m.start_channel.to_string()),
        ("Channels", m.channel_count.to_string()),
        ("Channels/node", m.channel_count_per_node.to_string()),
        ("Size", format!("{}x{}", m.width, m.height)),
        ("Orientation", m.orientation.clone()),
        ("Start corner", m.start_corner.clone()),
        ("Strings", m.string_count.to_string()),
        ("Strands/string", m.strands_per_string.to_string()),
        ("State", state_label(m.is_active).into()),
        ("Effect running", m.effect_running.to_string()),
        ("Auto created", m.auto_created.to_string()),
    ])
}

/// Read a state argument: integers and true/false keep their JSON type,
/// anything else is sent as a string.
pub(crate) fn parse_state(raw: &str) -> ModelState {
    if let Ok(n) = raw.parse::<i64>() {
        ModelState::Int(n)
    } else if let Ok(b) = raw.parse::<bool>() {
        ModelState::Bool(b)
    } else {
        ModelState::Text(raw.to_owned())
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle(args: ModelsArgs, session: &Session) -> Result<(), CliError> {
    let Session {
        client,
        ctx,
        format,
        quiet,
    } = session;

    match args.command {
        ModelsCommand::List => {
            let models = client.get_overlays_models(ctx).await?;
            let out = output::render_list(
                *format,
                &models,
                |m| ModelRow::from(m),
                |m| m.name.clone(),
            )?;
            output::print_output(&out, *quiet);
        }

        ModelsCommand::Get { name } => {
            let model = client
                .get_overlays_model(ctx, &name)
                .await
                .map_err(|e| CliError::from(e).listed_by("models list"))?;
            let out = output::render_single(*format, &model, model_detail, |m| m.name.clone())?;
            output::print_output(&out, *quiet);
        }

        ModelsCommand::Data { name, rle } => {
            let data = client
                .get_overlays_model_data(ctx, &name, rle)
                .await
                .map_err(|e| CliError::from(e).listed_by("models list"))?;
            let out = output::render_single(
                *format,
                &data,
                |d| {
                    let values = d
                        .data
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ");
                    output::detail_lines(&[
                        ("Encoding", String::from(if d.rle { "rle" } else { "raw" })),
                        ("Values", d.data.len().to_string()),
                        ("Locked", d.is_locked.to_string()),
                        ("Effect running", d.effect_running.to_string()),
                        ("Data", values),
                    ])
                },
                |d| {
                    d.data
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n")
                },
            )?;
            output::print_output(&out, *quiet);
        }

        ModelsCommand::Clear { name } => {
            client.clear_overlays_model(ctx, &name).await?;
            output::confirm(&format!("Cleared {name}"), *quiet);
        }

        ModelsCommand::State { name, state } => {
            client
                .set_overlays_model_state(ctx, &name, parse_state(&state))
                .await?;
            output::confirm(&format!("Set {name} state to {state}"), *quiet);
        }

        ModelsCommand::Fill { name, r, g, b } => {
            let color = Rgb::clamped(r, g, b);
            client.fill_overlays_model(ctx, &name, color).await?;
            output::confirm(
                &format!("Filled {name} with ({}, {}, {})", color.r, color.g, color.b),
                *quiet,
            );
        }

        ModelsCommand::Pixel {
            name,
            x,
            y,
            r,
            g,
            b,
        } => {
            let color = Rgb::clamped(r, g, b);
            client
                .set_overlays_model_pixel(ctx, &name, x, y, color)
                .await?;
            output::confirm(&format!("Set {name} pixel ({x}, {y})"), *quiet);
        }
    }
    Ok(())
}

pub async fn fonts(session: &Session) -> Result<(), CliError> {
    let fonts = session.client.get_overlays_fonts(&session.ctx).await?;
    let out = output::render_list(
        session.format,
        &fonts,
        |f| FontRow { name: f.clone() },
        String::clone,
    )?;
    output::print_output(&out, session.quiet);
    Ok(())
}
