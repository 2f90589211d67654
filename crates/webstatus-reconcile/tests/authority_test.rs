//! Tests for the authority table.

use std::collections::BTreeMap;

use webstatus_core::config::AuthorityConfig;
use webstatus_core::{SourceId, UserAgent};
use webstatus_reconcile::{Authority, AuthorityTable};

#[test]
fn default_table() {
    let table = AuthorityTable::default();
    let check = |source: SourceId, ua: &str| table.authority(&source, &UserAgent::from(ua));

    assert_eq!(check(SourceId::ChromeStatus, "chrome"), Authority::Core);
    assert_eq!(check(SourceId::ChromeStatus, "chrome_android"), Authority::None);
    assert_eq!(check(SourceId::EdgeStatus, "edge"), Authority::Core);
    assert_eq!(check(SourceId::WebkitStatus, "webkit"), Authority::Core);
    assert_eq!(check(SourceId::WebkitStatus, "safari"), Authority::Core);
    assert_eq!(check(SourceId::Caniuse, "chrome"), Authority::None);
    assert_eq!(check(SourceId::Feedback, "firefox"), Authority::Override);
    assert_eq!(check(SourceId::Feedback, "safari"), Authority::Override);
}

#[test]
fn configured_table_replaces_defaults() {
    let config = AuthorityConfig {
        core: BTreeMap::from([(
            "chromestatus".to_string(),
            vec!["chrome".to_string(), "chrome_android".to_string()],
        )]),
        override_sources: Some(vec!["other".to_string()]),
    };
    let table = AuthorityTable::from_config(&config);

    assert_eq!(
        table.authority(&SourceId::ChromeStatus, &UserAgent::from("chrome_android")),
        Authority::Core
    );
    assert_eq!(
        table.authority(&SourceId::WebkitStatus, &UserAgent::from("safari")),
        Authority::None
    );
    assert_eq!(
        table.authority(&SourceId::Feedback, &UserAgent::from("safari")),
        Authority::None
    );
    assert_eq!(
        table.authority(&SourceId::Other, &UserAgent::from("safari")),
        Authority::Override
    );
    assert_eq!(
        table.authority(&SourceId::ChromeStatus, &UserAgent::from("chrome")),
        Authority::Core
    );
}
