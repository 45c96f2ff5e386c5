// FPP resource operations
//
// Typed endpoint methods layered on the transport core. Each family lives in
// its own file as inherent methods on `Client`. Operations that return the
// `{Status, message}` envelope check it after the HTTP-level success, so a
// device-side refusal surfaces as `Error::Device` even on HTTP 200.

pub mod files;
pub mod models;
pub mod overlays;
pub mod playlists;
pub mod schedule;
pub mod system;
