//! Command dispatch: bridges CLI args -> client calls -> output formatting.

pub mod config_cmd;
pub mod files;
pub mod models;
pub mod playlists;
pub mod schedule;
pub mod system;

use fpp_api::{CallContext, Client};

use crate::cli::{DeviceCommand, OutputFormat};
use crate::error::CliError;

/// Everything a device command needs: the client, the per-invocation call
/// context (Ctrl-C cancels it), and output preferences.
pub struct Session {
    pub client: Client,
    pub ctx: CallContext,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Dispatch a device-bound command to the appropriate handler.
pub async fn dispatch(cmd: DeviceCommand, session: &Session) -> Result<(), CliError> {
    match cmd {
        DeviceCommand::Models(args) => models::handle(args, session).await,
        DeviceCommand::Fonts => models::fonts(session).await,
        DeviceCommand::Playlists(args) => playlists::handle(args, session).await,
        DeviceCommand::Schedule(args) => schedule::handle(args, session).await,
        DeviceCommand::Status => system::status(session).await,
        DeviceCommand::Plugins { contains } => system::plugins(contains.as_deref(), session).await,
        DeviceCommand::Run(args) => system::run(args, session).await,
        DeviceCommand::Files { dir } => files::list(&dir, session).await,
        DeviceCommand::Outputs => files::outputs(session).await,
        DeviceCommand::ConfigFile { name } => files::config_file(&name, session).await,
    }
}
