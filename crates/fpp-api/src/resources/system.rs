// Daemon, plugin and command endpoints

use tracing::debug;

use crate::client::Client;
use crate::context::CallContext;
use crate::error::{Error, ResultExt};
use crate::resources::models::{Command, FppdStatus, Plugins, ScheduleResponse};

impl Client {
    /// Current player status: mode, playlist position, scheduler, sensors.
    ///
    /// `GET /api/fppd/status`
    pub async fn get_fppd_status(&self, ctx: &CallContext) -> Result<FppdStatus, Error> {
        debug!("fetching fppd status");
        self.get(ctx, "/api/fppd/status")
            .await
            .with_context(|| "unable to retrieve fppd status".into())
    }

    /// The schedule as loaded by the daemon, including upcoming items. The
    /// embedded status is returned unchecked.
    ///
    /// `GET /api/fppd/schedule`
    pub async fn get_fppd_schedule(&self, ctx: &CallContext) -> Result<ScheduleResponse, Error> {
        debug!("fetching fppd schedule");
        self.get(ctx, "/api/fppd/schedule")
            .await
            .with_context(|| "unable to retrieve fppd schedule".into())
    }

    /// Installed plugin names.
    ///
    /// `GET /api/plugin`
    pub async fn get_plugins(&self, ctx: &CallContext) -> Result<Plugins, Error> {
        debug!("listing plugins");
        self.get(ctx, "/api/plugin")
            .await
            .with_context(|| "unable to retrieve plugins".into())
    }

    /// Run an FPP command. The response shape depends on the command, so it
    /// is returned as raw JSON.
    ///
    /// `POST /api/command`
    pub async fn post_command(
        &self,
        ctx: &CallContext,
        command: &Command,
    ) -> Result<serde_json::Value, Error> {
        debug!(command = %command.command, args = ?command.args, "running command");
        self.post(ctx, "/api/command", command)
            .await
            .with_context(|| format!("unable to run command {:?}", command.command))
    }
}
