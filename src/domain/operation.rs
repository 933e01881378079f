//! Operation value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::UnsupportedOperationError;

/// Every operation the bridge can route, in wire order
pub const ALL_OPERATIONS: &[Operation] = &[
    Operation::Health,
    Operation::GetConfig,
    Operation::SaveConfig,
    Operation::Package(PackageOperation::AuthStatus),
    Operation::Package(PackageOperation::AuthOauth),
    Operation::Package(PackageOperation::AuthRefresh),
    Operation::Package(PackageOperation::ListChannelVideos),
    Operation::Package(PackageOperation::DeleteChannelVideo),
    Operation::Package(PackageOperation::ListPlaylists),
    Operation::Package(PackageOperation::CreatePlaylist),
    Operation::Package(PackageOperation::DeletePlaylist),
    Operation::Package(PackageOperation::ListPlaylistVideos),
    Operation::Package(PackageOperation::AddVideoToPlaylist),
    Operation::Package(PackageOperation::UploadFile),
    Operation::Package(PackageOperation::DownloadBestMp4),
    Operation::Package(PackageOperation::FetchVideoChapters),
    Operation::Package(PackageOperation::BuildTranscriptMarkdown),
    Operation::Package(PackageOperation::FetchChannelReport),
    Operation::Package(PackageOperation::CutClipsLocalMp4),
];

/// A single named action requested per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Health,
    GetConfig,
    SaveConfig,
    /// Runs against the package's loaded config, with its directories ensured
    Package(PackageOperation),
}

/// Operations that need the package config prepared before they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageOperation {
    AuthStatus,
    AuthOauth,
    AuthRefresh,
    ListChannelVideos,
    DeleteChannelVideo,
    ListPlaylists,
    CreatePlaylist,
    DeletePlaylist,
    ListPlaylistVideos,
    AddVideoToPlaylist,
    UploadFile,
    DownloadBestMp4,
    FetchVideoChapters,
    BuildTranscriptMarkdown,
    FetchChannelReport,
    CutClipsLocalMp4,
}

impl Operation {
    /// Get the wire name for this operation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::GetConfig => "get_config",
            Self::SaveConfig => "save_config",
            Self::Package(op) => op.as_str(),
        }
    }

    /// Whether the dispatcher must load the package config and ensure its
    /// directories before running this operation
    pub const fn needs_prepared_config(&self) -> bool {
        matches!(self, Self::Package(_))
    }
}

impl PackageOperation {
    /// Get the wire name for this operation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthStatus => "auth_status",
            Self::AuthOauth => "auth_oauth",
            Self::AuthRefresh => "auth_refresh",
            Self::ListChannelVideos => "list_channel_videos",
            Self::DeleteChannelVideo => "delete_channel_video",
            Self::ListPlaylists => "list_playlists",
            Self::CreatePlaylist => "create_playlist",
            Self::DeletePlaylist => "delete_playlist",
            Self::ListPlaylistVideos => "list_playlist_videos",
            Self::AddVideoToPlaylist => "add_video_to_playlist",
            Self::UploadFile => "upload_file",
            Self::DownloadBestMp4 => "download_best_mp4",
            Self::FetchVideoChapters => "fetch_video_chapters",
            Self::BuildTranscriptMarkdown => "build_transcript_markdown",
            Self::FetchChannelReport => "fetch_channel_report",
            Self::CutClipsLocalMp4 => "cut_clips_local_mp4",
        }
    }
}

impl FromStr for Operation {
    type Err = UnsupportedOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_OPERATIONS
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnsupportedOperationError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PackageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_operations() {
        for op in ALL_OPERATIONS {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), *op);
        }
    }

    #[test]
    fn operation_set_is_fixed() {
        let names: Vec<&str> = ALL_OPERATIONS.iter().map(Operation::as_str).collect();
        assert_eq!(
            names,
            [
                "health",
                "get_config",
                "save_config",
                "auth_status",
                "auth_oauth",
                "auth_refresh",
                "list_channel_videos",
                "delete_channel_video",
                "list_playlists",
                "create_playlist",
                "delete_playlist",
                "list_playlist_videos",
                "add_video_to_playlist",
                "upload_file",
                "download_best_mp4",
                "fetch_video_chapters",
                "build_transcript_markdown",
                "fetch_channel_report",
                "cut_clips_local_mp4",
            ]
        );
    }

    #[test]
    fn parse_is_exact_match() {
        assert!("Health".parse::<Operation>().is_err());
        assert!(" health".parse::<Operation>().is_err());
        assert!("get-config".parse::<Operation>().is_err());
    }

    #[test]
    fn unknown_operation_names_input() {
        let err = "launch_rocket".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported operation: launch_rocket");
    }

    #[test]
    fn config_operations_skip_preparation() {
        assert!(!Operation::Health.needs_prepared_config());
        assert!(!Operation::GetConfig.needs_prepared_config());
        assert!(!Operation::SaveConfig.needs_prepared_config());
        assert!(Operation::Package(PackageOperation::AuthStatus).needs_prepared_config());
        assert!("cut_clips_local_mp4"
            .parse::<Operation>()
            .unwrap()
            .needs_prepared_config());
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(
            Operation::Package(PackageOperation::UploadFile).to_string(),
            "upload_file"
        );
        assert_eq!(Operation::Health.to_string(), "health");
    }
}
