//! Shared constants for the webstatus reconciler.

/// The rendering engine agent. Tracked on the side of the other agents
/// because its status constrains its downstream browser.
pub const ENGINE_AGENT: &str = "webkit";

/// The branded browser built on [`ENGINE_AGENT`].
pub const ENGINE_DOWNSTREAM_AGENT: &str = "safari";

/// Project config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "webstatus.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "WEBSTATUS_LOG";

/// Default tracing filter when [`LOG_ENV_VAR`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "webstatus=info";

/// Normalized user agent names the reconciler knows about.
pub const KNOWN_AGENTS: &[&str] = &[
    "baidu",
    "chrome",
    "chrome_android",
    "edge",
    "firefox",
    "firefox_android",
    "opera",
    "opera_android",
    "opera_mini",
    "qq_android",
    "safari",
    "safari_ios",
    "samsunginternet_android",
    "uc_android",
    "webkit",
];

/// Default core agents per source: the sources that are ground truth for
/// their own browser or engine.
pub const DEFAULT_CORE_AGENTS: &[(&str, &[&str])] = &[
    ("chromestatus", &["chrome"]),
    ("edgestatus", &["edge"]),
    ("webkitstatus", &["webkit", "safari"]),
];

/// Default sources that are authoritative for every agent.
pub const DEFAULT_OVERRIDE_SOURCES: &[&str] = &["feedback"];
