//! Call protocol spoken with the package runtime
//!
//! One request line goes to the runtime's stdin and one reply line comes back
//! on stdout. The runtime executes [`CALL_SCRIPT`], which imports the named
//! module from `features.youtube`, calls the function and reports the result,
//! or [`RUNTIME_SCRIPT`], which only checks that the package imports.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::application::ports::CollaboratorError;
use crate::domain::config::VideoConfig;

/// Package namespace every module is imported from
pub const PACKAGE_NAMESPACE: &str = "features.youtube";

/// Program passed to the runtime with `-c`.
///
/// When `config` is non-null it is rebuilt into the package's `VideoConfig`
/// from every key its constructor accepts, and passed as the first
/// positional argument. Results exposing `to_dict` are converted; anything
/// JSON cannot encode natively (paths) becomes a string.
pub const CALL_SCRIPT: &str = concat!(
    "import importlib,inspect,json,sys\n",
    "def reply(body):\n",
    "    sys.stdout.write('\\n' + json.dumps(body, default=str) + '\\n')\n",
    "    sys.stdout.flush()\n",
    "def build_config(fields):\n",
    "    from features.youtube.config import VideoConfig\n",
    "    params = inspect.signature(VideoConfig).parameters\n",
    "    if not any(p.kind == p.VAR_KEYWORD for p in params.values()):\n",
    "        fields = {k: v for k, v in fields.items() if k in params}\n",
    "    return VideoConfig(**fields)\n",
    "try:\n",
    "    request = json.loads(sys.stdin.readline())\n",
    "    module = importlib.import_module('features.youtube.' + request['module'])\n",
    "    function = getattr(module, request['function'])\n",
    "    args = list(request.get('args') or [])\n",
    "    if request.get('config') is not None:\n",
    "        args.insert(0, build_config(request['config']))\n",
    "    result = function(*args, **(request.get('kwargs') or {}))\n",
    "    if hasattr(result, 'to_dict'):\n",
    "        result = result.to_dict()\n",
    "    reply({'ok': True, 'result': result})\n",
    "except Exception as exc:\n",
    "    reply({'ok': False, 'error': str(exc)})\n",
);

/// Modules of the package namespace the bridge calls into
pub const PACKAGE_MODULES: &[&str] = &[
    "auth",
    "channel",
    "chapters",
    "config",
    "fetch",
    "pipeline",
    "playlists",
    "transcript",
    "upload",
];

/// Program passed to the runtime with `-c` for the `health` check.
///
/// Imports every module named in the request and replies with
/// `sys.executable`, so a runtime that cannot load the package fails here.
pub const RUNTIME_SCRIPT: &str = concat!(
    "import importlib,json,sys\n",
    "def reply(body):\n",
    "    sys.stdout.write('\\n' + json.dumps(body) + '\\n')\n",
    "    sys.stdout.flush()\n",
    "try:\n",
    "    request = json.loads(sys.stdin.readline())\n",
    "    for name in request['modules']:\n",
    "        importlib.import_module('features.youtube.' + name)\n",
    "    reply({'ok': True, 'result': sys.executable})\n",
    "except Exception as exc:\n",
    "    reply({'ok': False, 'error': str(exc)})\n",
);

/// Request line for [`RUNTIME_SCRIPT`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeCheck<'a> {
    pub modules: &'a [&'a str],
}

impl RuntimeCheck<'static> {
    /// Check every module in [`PACKAGE_MODULES`]
    pub fn package() -> Self {
        Self {
            modules: PACKAGE_MODULES,
        }
    }
}

impl RuntimeCheck<'_> {
    pub fn to_line(&self) -> Result<String, CollaboratorError> {
        encode_line(self)
    }
}

fn encode_line(request: &impl Serialize) -> Result<String, CollaboratorError> {
    let mut line = serde_json::to_string(request)
        .map_err(|e| CollaboratorError::Io(format!("failed to encode request: {e}")))?;
    line.push('\n');
    Ok(line)
}

/// A single package function call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallRequest<'a> {
    pub module: &'a str,
    pub function: &'a str,
    pub config: Option<&'a VideoConfig>,
    pub args: Vec<Value>,
    pub kwargs: Map<String, Value>,
}

impl<'a> CallRequest<'a> {
    /// Call `module.function` without a config argument
    pub fn new(module: &'a str, function: &'a str) -> Self {
        Self {
            module,
            function,
            config: None,
            args: Vec::new(),
            kwargs: Map::new(),
        }
    }

    /// Pass `config` as the first positional argument
    pub fn with_config(mut self, config: &'a VideoConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn kwarg(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.kwargs.insert(name.to_string(), value.into());
        self
    }

    /// Dotted name used in logs
    pub fn target(&self) -> String {
        format!("{PACKAGE_NAMESPACE}.{}.{}", self.module, self.function)
    }

    /// Render as one JSON line including the trailing newline
    pub fn to_line(&self) -> Result<String, CollaboratorError> {
        encode_line(self)
    }
}

/// The runtime's answer to a [`CallRequest`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallReply {
    pub ok: bool,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<String>,
}

impl CallReply {
    /// Parse the reply from the runtime's stdout.
    ///
    /// The reply is the last non-blank line, so anything the package prints
    /// before returning is skipped.
    pub fn parse(stdout: &str) -> Result<Self, CollaboratorError> {
        let line = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .last()
            .ok_or_else(|| CollaboratorError::InvalidOutput("no reply on stdout".to_string()))?;

        serde_json::from_str(line)
            .map_err(|e| CollaboratorError::InvalidOutput(format!("{e}: {line}")))
    }

    /// Turn the reply into the call's result, or the raised message
    pub fn into_result(self) -> Result<Value, CollaboratorError> {
        if self.ok {
            Ok(self.result)
        } else {
            Err(CollaboratorError::Raised(
                self.error
                    .unwrap_or_else(|| "Package call failed without a message.".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> VideoConfig {
        VideoConfig {
            credentials_path: "/auth/client_secret.json".to_string(),
            token_path: "/auth/token.json".to_string(),
            download_directory: "/videos".to_string(),
            yt_dlp_path: "yt-dlp".to_string(),
            ffmpeg_path: "ffmpeg".to_string(),
            extra: Map::new(),
        }
    }

    #[test]
    fn request_line_shape() {
        let config = config();
        let line = CallRequest::new("playlists", "create_playlist")
            .with_config(&config)
            .kwarg("title", "Talks")
            .kwarg("privacy_status", "unlisted")
            .to_line()
            .unwrap();

        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            parsed,
            json!({
                "module": "playlists",
                "function": "create_playlist",
                "config": {
                    "credentials_path": "/auth/client_secret.json",
                    "token_path": "/auth/token.json",
                    "download_directory": "/videos",
                    "yt_dlp_path": "yt-dlp",
                    "ffmpeg_path": "ffmpeg"
                },
                "args": [],
                "kwargs": {"title": "Talks", "privacy_status": "unlisted"}
            })
        );
    }

    #[test]
    fn request_without_config_sends_null() {
        let line = CallRequest::new("transcript", "build_transcript_markdown")
            .arg("https://youtu.be/x")
            .arg(Value::Null)
            .to_line()
            .unwrap();

        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["config"], Value::Null);
        assert_eq!(parsed["args"], json!(["https://youtu.be/x", null]));
    }

    #[test]
    fn target_is_dotted_name() {
        assert_eq!(
            CallRequest::new("auth", "ensure_token").target(),
            "features.youtube.auth.ensure_token"
        );
    }

    #[test]
    fn parse_success_reply() {
        let reply = CallReply::parse("{\"ok\": true, \"result\": {\"deleted\": 1}}\n").unwrap();
        assert_eq!(reply.into_result().unwrap(), json!({"deleted": 1}));
    }

    #[test]
    fn parse_skips_package_chatter() {
        let stdout = "Downloading...\n[download] 100%\n\n{\"ok\": true, \"result\": \"/videos/a.mp4\"}\n";
        let reply = CallReply::parse(stdout).unwrap();
        assert_eq!(reply.into_result().unwrap(), json!("/videos/a.mp4"));
    }

    #[test]
    fn raised_message_is_kept_verbatim() {
        let reply = CallReply::parse("{\"ok\": false, \"error\": \"Token file not found.\"}").unwrap();
        let err = reply.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Token file not found.");
    }

    #[test]
    fn missing_result_is_null() {
        let reply = CallReply::parse("{\"ok\": true}").unwrap();
        assert_eq!(reply.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn empty_stdout_is_invalid_output() {
        let err = CallReply::parse(" \n\n").unwrap_err();
        assert!(matches!(err, CollaboratorError::InvalidOutput(_)));
    }

    #[test]
    fn garbage_is_invalid_output() {
        let err = CallReply::parse("Traceback (most recent call last):").unwrap_err();
        assert!(err.to_string().starts_with("Package returned invalid output"));
    }

    #[test]
    fn script_imports_from_package_namespace() {
        assert!(CALL_SCRIPT.contains(PACKAGE_NAMESPACE));
        assert!(CALL_SCRIPT.contains("to_dict"));
        assert!(RUNTIME_SCRIPT.contains(PACKAGE_NAMESPACE));
        assert!(RUNTIME_SCRIPT.contains("sys.executable"));
    }

    #[test]
    fn runtime_check_lists_package_modules() {
        let line = RuntimeCheck::package().to_line().unwrap();
        let parsed: Value = serde_json::from_str(&line).unwrap();

        assert_eq!(parsed["modules"].as_array().unwrap().len(), PACKAGE_MODULES.len());
        assert!(parsed["modules"]
            .as_array()
            .unwrap()
            .contains(&json!("pipeline")));
    }

    #[test]
    fn request_carries_unknown_config_keys() {
        let mut config = config();
        config
            .extra
            .insert("clips_directory".to_string(), json!("/clips"));

        let line = CallRequest::new("config", "ensure_directories")
            .with_config(&config)
            .to_line()
            .unwrap();
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["config"]["clips_directory"], "/clips");
        assert_eq!(parsed["config"]["token_path"], "/auth/token.json");
    }
}
