// fpp-api: Async Rust client for the Falcon Player (FPP) HTTP API

pub mod client;
pub mod context;
pub mod error;
pub mod flex;
pub mod resources;
pub mod transport;

pub use client::Client;
pub use context::CallContext;
pub use error::{Error, ErrorKind};
pub use flex::{FppTime, Intish, RepeatMode};
pub use resources::models;
pub use resources::models::{ModelState, Rgb, Status};
pub use transport::TransportConfig;
