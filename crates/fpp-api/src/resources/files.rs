// File listing and config file endpoints

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::Client;
use crate::context::CallContext;
use crate::error::{Error, ResultExt};
use crate::resources::models::{ChannelOutput, ChannelOutputsFile, File, Files};

impl Client {
    /// List files in one of the media directories (`sequences`, `music`,
    /// `videos`, `images`, `effects`, `scripts`, `logs`, `uploads`, ...).
    ///
    /// `GET /api/files/{dir}`
    pub async fn get_files(&self, ctx: &CallContext, dir: &str) -> Result<Vec<File>, Error> {
        debug!(dir, "listing files");
        let listing: Files = self
            .get(ctx, &format!("/api/files/{dir}"))
            .await
            .with_context(|| format!("unable to retrieve files in {dir:?}"))?;
        Ok(listing.files)
    }

    /// Fetch a config file from the device's config directory and decode it
    /// into `T`. Use `serde_json::Value` for files without a typed model.
    ///
    /// `GET /api/configfile/{name}`
    pub async fn get_config<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        name: &str,
    ) -> Result<T, Error> {
        debug!(name, "fetching config file");
        self.get(ctx, &format!("/api/configfile/{name}"))
            .await
            .with_context(|| format!("unable to retrieve config file {name:?}"))
    }

    /// Channel output configuration (`channeloutputs.json`): LED panel
    /// matrices and their panel layout.
    pub async fn get_channel_outputs(&self, ctx: &CallContext) -> Result<Vec<ChannelOutput>, Error> {
        let file: ChannelOutputsFile = self
            .get_config(ctx, "channeloutputs.json")
            .await
            .with_context(|| "unable to retrieve channel outputs".into())?;
        Ok(file.channel_outputs)
    }
}
