//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

use crate::domain::config::BridgeSettings;

const AFTER_HELP: &str = "\
Operations:
  health, get_config, save_config, auth_status, auth_oauth, auth_refresh,
  list_channel_videos, delete_channel_video, list_playlists, create_playlist,
  delete_playlist, list_playlist_videos, add_video_to_playlist, upload_file,
  download_best_mp4, fetch_video_chapters, build_transcript_markdown,
  fetch_channel_report, cut_clips_local_mp4

The operation payload is read from stdin as one JSON object (empty input is {}).
Exactly one JSON line {\"ok\": ..., \"data\"|\"error\": ...} is written to stdout.

Settings file: <config dir>/youtune-bridge/config.toml (keys: root, python)
Log filter: YOUTUNE_BRIDGE_LOG (default: warn)";

/// youtune-bridge - JSON bridge to the python-youtune toolkit
#[derive(Parser, Debug)]
#[command(name = "youtune-bridge")]
#[command(version)]
#[command(about = "Run one python-youtune operation with a JSON payload from stdin")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Operation to run
    #[arg(value_name = "OPERATION")]
    pub operation: Option<String>,

    /// Package root directory [default: ~/python-youtune]
    #[arg(long, env = "YOUTUNE_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Runtime used to execute the package [default: python3]
    #[arg(long, env = "YOUTUNE_PYTHON", value_name = "EXE")]
    pub python: Option<PathBuf>,
}

impl Cli {
    /// The operation name, or None when absent or blank
    pub fn operation_name(&self) -> Option<&str> {
        self.operation
            .as_deref()
            .map(str::trim)
            .filter(|op| !op.is_empty())
    }

    /// Settings given on the command line or through the environment
    pub fn settings(&self) -> BridgeSettings {
        let non_empty = |path: &Option<PathBuf>| {
            path.clone()
                .filter(|p| !p.as_os_str().is_empty())
        };

        BridgeSettings {
            root: non_empty(&self.root),
            python: non_empty(&self.python),
        }
    }
}
