// Pixel overlay endpoints
//
// Overlay models are named pixel regions that can be taken over from the
// running sequence and written directly: fill, per-pixel set, clear.

use tracing::debug;

use crate::client::Client;
use crate::context::CallContext;
use crate::error::{Error, ResultExt};
use crate::resources::models::{
    Model, ModelData, ModelState, PixelRequest, Rgb, StateRequest, Status,
};

fn model_path(name: &str, suffix: &str) -> String {
    format!("/api/overlays/model/{name}{suffix}")
}

impl Client {
    /// List all overlay models.
    ///
    /// `GET /api/overlays/models`
    pub async fn get_overlays_models(&self, ctx: &CallContext) -> Result<Vec<Model>, Error> {
        debug!("listing overlay models");
        self.get(ctx, "/api/overlays/models")
            .await
            .with_context(|| "unable to retrieve models".into())
    }

    /// `GET /api/overlays/model/{name}`
    pub async fn get_overlays_model(&self, ctx: &CallContext, name: &str) -> Result<Model, Error> {
        debug!(name, "fetching overlay model");
        self.get(ctx, &model_path(name, ""))
            .await
            .with_context(|| format!("unable to retrieve model {name:?}"))
    }

    /// Blank every pixel of a model.
    ///
    /// `GET /api/overlays/model/{name}/clear`
    pub async fn clear_overlays_model(&self, ctx: &CallContext, name: &str) -> Result<(), Error> {
        debug!(name, "clearing overlay model");
        let context = || format!("unable to clear model {name:?}");
        let status: Status = self
            .get(ctx, &model_path(name, "/clear"))
            .await
            .with_context(context)?;
        status.into_result().with_context(context)
    }

    /// Fetch a model's channel data. With `rle`, the device run-length
    /// encodes the `data` array.
    ///
    /// `GET /api/overlays/model/{name}/data[/rle]`
    pub async fn get_overlays_model_data(
        &self,
        ctx: &CallContext,
        name: &str,
        rle: bool,
    ) -> Result<ModelData, Error> {
        let suffix = if rle { "/data/rle" } else { "/data" };
        debug!(name, rle, "fetching overlay model data");
        self.get(ctx, &model_path(name, suffix))
            .await
            .with_context(|| format!("unable to retrieve data for model {name:?}"))
    }

    /// Enable, disable or switch the blending mode of a model.
    ///
    /// `PUT /api/overlays/model/{name}/state` with `{"State": state}`
    pub async fn set_overlays_model_state(
        &self,
        ctx: &CallContext,
        name: &str,
        state: impl Into<ModelState>,
    ) -> Result<(), Error> {
        let body = StateRequest {
            state: state.into(),
        };
        debug!(name, state = ?body.state, "setting overlay model state");
        let context = || format!("unable to set model state {name:?}");
        let status: Status = self
            .put(ctx, &model_path(name, "/state"), &body)
            .await
            .with_context(context)?;
        status.into_result().with_context(context)
    }

    /// Fill a whole model with one colour.
    ///
    /// `PUT /api/overlays/model/{name}/fill` with `{"RGB": [r, g, b]}`
    pub async fn fill_overlays_model(
        &self,
        ctx: &CallContext,
        name: &str,
        color: Rgb,
    ) -> Result<(), Error> {
        let body = PixelRequest {
            x: None,
            y: None,
            rgb: color,
        };
        debug!(name, ?color, "filling overlay model");
        let context = || format!("unable to fill model {name:?}");
        let status: Status = self
            .put(ctx, &model_path(name, "/fill"), &body)
            .await
            .with_context(context)?;
        status.into_result().with_context(context)
    }

    /// Set a single pixel. Coordinates are not bounds-checked; the device
    /// decides what an out-of-range pixel means.
    ///
    /// `PUT /api/overlays/model/{name}/pixel` with `{"X", "Y", "RGB"}`
    pub async fn set_overlays_model_pixel(
        &self,
        ctx: &CallContext,
        name: &str,
        x: u32,
        y: u32,
        color: Rgb,
    ) -> Result<(), Error> {
        let body = PixelRequest {
            x: Some(x),
            y: Some(y),
            rgb: color,
        };
        debug!(name, x, y, ?color, "setting overlay pixel");
        let context = || format!("unable to set pixel on model {name:?}");
        let status: Status = self
            .put(ctx, &model_path(name, "/pixel"), &body)
            .await
            .with_context(context)?;
        status.into_result().with_context(context)
    }

    /// List fonts available for overlay text.
    ///
    /// `GET /api/overlays/fonts`
    pub async fn get_overlays_fonts(&self, ctx: &CallContext) -> Result<Vec<String>, Error> {
        debug!("listing overlay fonts");
        self.get(ctx, "/api/overlays/fonts")
            .await
            .with_context(|| "unable to retrieve fonts".into())
    }
}
