// Schedule endpoints
//
// `/api/schedule` is the editable list of schedule entries. Saving it does
// not take effect until the daemon is told to reload.

use tracing::debug;

use crate::client::Client;
use crate::context::CallContext;
use crate::error::{Error, ResultExt};
use crate::resources::models::{ScheduleEntry, Status};

impl Client {
    /// `GET /api/schedule`
    pub async fn get_schedule(&self, ctx: &CallContext) -> Result<Vec<ScheduleEntry>, Error> {
        debug!("fetching schedule");
        self.get(ctx, "/api/schedule")
            .await
            .with_context(|| "unable to retrieve schedule".into())
    }

    /// Replace the schedule. Returns the schedule as stored by the device.
    ///
    /// `POST /api/schedule`
    pub async fn post_schedule(
        &self,
        ctx: &CallContext,
        entries: &[ScheduleEntry],
    ) -> Result<Vec<ScheduleEntry>, Error> {
        debug!(entries = entries.len(), "updating schedule");
        self.post(ctx, "/api/schedule", entries)
            .await
            .with_context(|| "unable to update schedule".into())
    }

    /// Make the daemon re-read the saved schedule.
    ///
    /// `POST /api/schedule/reload` with a `null` body
    pub async fn post_schedule_reload(&self, ctx: &CallContext) -> Result<(), Error> {
        debug!("reloading schedule");
        let context = || "unable to reload schedule".to_owned();
        let status: Status = self
            .post(ctx, "/api/schedule/reload", &())
            .await
            .with_context(context)?;
        status.into_result().with_context(context)
    }
}
