// Playlist endpoints

use tracing::debug;

use crate::client::Client;
use crate::context::CallContext;
use crate::error::{Error, ResultExt};
use crate::resources::models::Playlist;

impl Client {
    /// List playlist names.
    ///
    /// `GET /api/playlists`
    pub async fn get_playlists(&self, ctx: &CallContext) -> Result<Vec<String>, Error> {
        debug!("listing playlists");
        self.get(ctx, "/api/playlists")
            .await
            .with_context(|| "unable to retrieve playlists".into())
    }

    /// Fetch one playlist with its lead-in, main and lead-out sections.
    ///
    /// `GET /api/playlist/{name}`
    pub async fn get_playlist(&self, ctx: &CallContext, name: &str) -> Result<Playlist, Error> {
        debug!(name, "fetching playlist");
        self.get(ctx, &format!("/api/playlist/{name}"))
            .await
            .with_context(|| format!("unable to retrieve playlist {name:?}"))
    }
}
