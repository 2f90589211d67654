//! Native status vocabularies, one table per tracker.
//!
//! Labels that are absent from a table produce no observation. Labels that
//! map to `Unknown` are explicit negative signals and do produce one.

use webstatus_core::StatusLevel;

/// Native label → status level.
pub type Vocabulary = &'static [(&'static str, StatusLevel)];

pub const CHROMESTATUS: Vocabulary = &[
    ("Enabled by default", StatusLevel::Shipped),
    ("Shipped", StatusLevel::Shipped),
    ("Behind a flag", StatusLevel::Experimental),
    ("Origin trial", StatusLevel::Experimental),
    ("In development", StatusLevel::InDevelopment),
    ("Proposed", StatusLevel::Consideration),
    ("Public support", StatusLevel::Consideration),
    ("No public signals", StatusLevel::Unknown),
    ("Mixed public signals", StatusLevel::Unknown),
    ("Public skepticism", StatusLevel::Unknown),
    ("Opposed", StatusLevel::Unknown),
];

pub const EDGESTATUS: Vocabulary = &[
    ("Shipped", StatusLevel::Shipped),
    ("Preview Release", StatusLevel::Experimental),
    ("Prefixed", StatusLevel::Experimental),
    ("In Development", StatusLevel::InDevelopment),
    ("Under Consideration", StatusLevel::Consideration),
    ("Not currently planned", StatusLevel::Unknown),
];

pub const WEBKITSTATUS: Vocabulary = &[
    ("Supported", StatusLevel::Shipped),
    ("Partially Supported", StatusLevel::Shipped),
    ("Supported In Preview", StatusLevel::Experimental),
    ("In Development", StatusLevel::InDevelopment),
    ("Under Consideration", StatusLevel::Consideration),
];

/// caniuse agent id → normalized user agent. Other agents are ignored.
pub const CANIUSE_AGENTS: &[(&str, &str)] = &[
    ("and_chr", "chrome_android"),
    ("and_ff", "firefox_android"),
    ("and_qq", "qq_android"),
    ("and_uc", "uc_android"),
    ("baidu", "baidu"),
    ("chrome", "chrome"),
    ("edge", "edge"),
    ("firefox", "firefox"),
    ("ios_saf", "safari_ios"),
    ("op_mini", "opera_mini"),
    ("op_mob", "opera_android"),
    ("opera", "opera"),
    ("safari", "safari"),
    ("samsung", "samsunginternet_android"),
];

pub fn lookup(vocabulary: Vocabulary, label: &str) -> Option<StatusLevel> {
    vocabulary
        .iter()
        .find(|(native, _)| *native == label)
        .map(|(_, level)| *level)
}

pub fn caniuse_agent(native: &str) -> Option<&'static str> {
    CANIUSE_AGENTS
        .iter()
        .find(|(id, _)| *id == native)
        .map(|(_, ua)| *ua)
}
