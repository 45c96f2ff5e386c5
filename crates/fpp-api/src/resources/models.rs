// FPP API request and response types
//
// Field names follow the device's JSON exactly, which mixes PascalCase,
// camelCase and snake_case between endpoints. Response fields use
// `#[serde(default)]` liberally because presence varies across firmware
// versions.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::flex::{FppTime, Intish, RepeatMode};

// ── Status envelope ──────────────────────────────────────────────────

/// The `{ "Status": "OK", "message": "..." }` envelope returned by most
/// mutating endpoints.
///
/// HTTP 200 alone does not mean success; `Status` must also be `"OK"`
/// (any case).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("OK")
    }

    /// `Ok(())` for an OK envelope, otherwise `Error::Device` carrying the
    /// device's message verbatim.
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Error::Device {
                message: self.message,
            })
        }
    }
}

// ── Overlay models ───────────────────────────────────────────────────

/// A pixel overlay model from `/api/overlays/models`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub model_type: String,
    #[serde(rename = "ChannelCount")]
    pub channel_count: i64,
    #[serde(rename = "ChannelCountPerNode")]
    pub channel_count_per_node: i64,
    #[serde(rename = "Orientation")]
    pub orientation: String,
    #[serde(rename = "StartChannel")]
    pub start_channel: i64,
    #[serde(rename = "StartCorner")]
    pub start_corner: String,
    #[serde(rename = "StrandsPerString")]
    pub strands_per_string: i64,
    #[serde(rename = "StringCount")]
    pub string_count: i64,
    #[serde(rename = "autoCreated")]
    pub auto_created: bool,
    #[serde(rename = "effectRunning")]
    pub effect_running: bool,
    pub height: i64,
    pub width: i64,
    #[serde(rename = "isActive")]
    pub is_active: i64,
}

/// Raw channel data for a model, optionally run-length encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelData {
    pub data: Vec<i64>,
    #[serde(rename = "effectRunning")]
    pub effect_running: bool,
    #[serde(rename = "isLocked")]
    pub is_locked: bool,
    pub rle: bool,
}

/// Value for a model's `State`. FPP accepts a number (`0` off, `1` on,
/// `2`/`3` transparent modes), a bool, or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelState {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl From<i64> for ModelState {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for ModelState {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ModelState {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ModelState {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// An RGB colour. Serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a colour from arbitrary integers, clamping each channel into
    /// `0..=255`.
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }
}

fn clamp_channel(value: i64) -> u8 {
    u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Body of the `fill` and `pixel` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PixelRequest {
    #[serde(rename = "X", default, skip_serializing_if = "Option::is_none")]
    pub x: Option<u32>,
    #[serde(rename = "Y", default, skip_serializing_if = "Option::is_none")]
    pub y: Option<u32>,
    #[serde(rename = "RGB")]
    pub rgb: Rgb,
}

/// Body of the `state` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StateRequest {
    #[serde(rename = "State")]
    pub state: ModelState,
}

// ── Playlists ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Playlist {
    pub name: String,
    pub version: i64,
    pub repeat: i64,
    pub loop_count: i64,
    pub empty: bool,
    pub desc: String,
    pub random: i64,
    pub lead_in: Vec<PlaylistEntry>,
    pub main_playlist: Vec<PlaylistEntry>,
    pub lead_out: Vec<PlaylistEntry>,
    pub playlist_info: PlaylistInfo,
}

impl Playlist {
    /// Lead-in, main and lead-out entries in play order.
    pub fn entries(&self) -> impl Iterator<Item = &PlaylistEntry> {
        self.lead_in
            .iter()
            .chain(&self.main_playlist)
            .chain(&self.lead_out)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaylistEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    pub enabled: i64,
    pub play_once: i64,
    pub sequence_name: String,
    pub media_name: String,
    pub video_out: String,
    pub duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistInfo {
    pub total_duration: f64,
    pub total_items: i64,
}

// ── Schedule ─────────────────────────────────────────────────────────

/// One entry of the editable schedule at `/api/schedule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(default)]
    pub enabled: i64,
    #[serde(default)]
    pub sequence: i64,
    #[serde(default)]
    pub day: i64,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub start_time_offset: i64,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub end_time_offset: i64,
    #[serde(default)]
    pub repeat: i64,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub stop_type: i64,
    #[serde(default)]
    pub playlist: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub multisync_command: bool,
}

/// The daemon's view of the schedule at `/api/fppd/schedule`.
///
/// The status envelope is a named field, flattened onto the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(flatten)]
    pub status: Status,
    #[serde(rename = "respCode", default)]
    pub resp_code: i64,
    #[serde(default)]
    pub schedule: Schedule,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub enabled: i64,
    pub entries: Vec<ScheduledEntry>,
    pub items: Vec<ScheduledItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduledEntry {
    pub id: i64,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub enabled: i64,
    pub playlist: String,
    pub command: String,
    pub args: Vec<String>,
    pub day: i64,
    pub day_str: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub repeat: i64,
    pub repeat_interval: i64,
    pub stop_type: i64,
    pub stop_type_str: String,
    pub multisync_command: bool,
    pub multisync_hosts: String,
}

/// A concrete upcoming occurrence computed by the scheduler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduledItem {
    pub id: i64,
    pub priority: i64,
    pub command: String,
    pub args: Vec<String>,
    pub start_time: FppTime,
    pub start_time_str: String,
    pub end_time: FppTime,
    pub end_time_str: String,
    pub multisync_command: bool,
    pub multisync_hosts: String,
}

// ── fppd status ──────────────────────────────────────────────────────

/// Daemon status from `/api/fppd/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FppdStatus {
    #[serde(rename = "MQTT")]
    pub mqtt: Mqtt,
    pub bridging: bool,
    pub current_playlist: CurrentPlaylist,
    pub current_sequence: String,
    pub current_song: String,
    #[serde(rename = "dateStr")]
    pub date_str: String,
    pub fppd: String,
    pub mode: Intish,
    pub mode_name: String,
    pub multisync: bool,
    pub next_playlist: NextPlaylist,
    pub repeat_mode: RepeatMode,
    pub scheduler: Scheduler,
    pub seconds_played: String,
    pub seconds_remaining: String,
    pub sensors: Vec<Sensor>,
    pub status: i64,
    pub status_name: String,
    pub time: String,
    #[serde(rename = "timeStr")]
    pub time_str: String,
    #[serde(rename = "timeStrFull")]
    pub time_str_full: String,
    pub time_elapsed: String,
    pub time_remaining: String,
    pub uptime: String,
    #[serde(rename = "uptimeDays")]
    pub uptime_days: f64,
    #[serde(rename = "uptimeHours")]
    pub uptime_hours: f64,
    #[serde(rename = "uptimeMinutes")]
    pub uptime_minutes: f64,
    #[serde(rename = "uptimeSeconds")]
    pub uptime_seconds: i64,
    #[serde(rename = "uptimeStr")]
    pub uptime_str: String,
    #[serde(rename = "uptimeTotalSeconds")]
    pub uptime_total_seconds: i64,
    pub uuid: String,
    pub volume: i64,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mqtt {
    pub configured: bool,
    pub connected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentPlaylist {
    pub count: Intish,
    pub description: String,
    pub index: Intish,
    pub playlist: String,
    #[serde(rename = "type")]
    pub playlist_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextPlaylist {
    pub playlist: String,
    pub start_time: FppTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scheduler {
    pub enabled: i64,
    #[serde(rename = "nextPlaylist")]
    pub next_playlist: SchedulerNextPlaylist,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulerNextPlaylist {
    pub playlist_name: String,
    pub scheduled_start_time: FppTime,
    pub scheduled_start_time_str: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sensor {
    pub formatted: String,
    pub label: String,
    pub postfix: String,
    pub prefix: String,
    pub value: f64,
    pub value_type: String,
}

// ── Files ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Files {
    #[serde(default)]
    pub files: Vec<File>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct File {
    pub name: String,
    pub mtime: String,
    pub size_bytes: i64,
    pub size_human: String,
}

// ── Plugins ──────────────────────────────────────────────────────────

/// Installed plugin names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plugins(pub Vec<String>);

impl Plugins {
    pub fn contains(&self, plugin: &str) -> bool {
        self.0.iter().any(|p| p == plugin)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Plugins {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Channel outputs (configfile/channeloutputs.json) ─────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ChannelOutputsFile {
    #[serde(rename = "channelOutputs", default)]
    pub channel_outputs: Vec<ChannelOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelOutput {
    #[serde(rename = "type")]
    pub output_type: String,
    pub sub_type: String,
    pub enabled: i64,
    pub cfg_version: i64,
    pub start_channel: i64,
    pub channel_count: i64,
    pub color_order: String,
    pub gamma: String,
    pub wiring_pinout: String,
    pub brightness: i64,
    pub panel_color_depth: i64,
    pub inverted_data: i64,
    pub panel_width: i64,
    pub panel_height: i64,
    pub panel_scan: i64,
    pub panel_output_order: bool,
    pub panel_output_blank_row: bool,
    pub panels: Vec<ChannelOutputPanel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelOutputPanel {
    pub output_number: i64,
    pub panel_number: i64,
    pub color_order: String,
    pub x_offset: i64,
    pub y_offset: i64,
    pub orientation: String,
    pub row: i64,
    pub col: i64,
}

// ── Commands ─────────────────────────────────────────────────────────

/// A named FPP command with positional string arguments, for
/// `POST /api/command`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub command: String,
    pub args: Vec<String>,
}

impl Command {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Queue `playlist` (items `start..=end`) to run after the current one.
    pub fn insert_playlist_after_current(
        playlist: &str,
        start_index: i64,
        end_index: i64,
        if_not_running: bool,
    ) -> Self {
        Self::new(
            "Insert Playlist After Current",
            vec![
                playlist.to_owned(),
                start_index.to_string(),
                end_index.to_string(),
                if_not_running.to_string(),
            ],
        )
    }
}
