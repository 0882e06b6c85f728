use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_business_config_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_business_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg, BusinessConfig::default());
    assert_eq!(cfg.media_host_suffix, ".whatsapp.net");
    assert_eq!(cfg.upload_timeout_ms, 30_000);
    assert_eq!(cfg.download_timeout_secs, 30);
    assert_eq!(cfg.catalog_page_limit, 10);
    assert_eq!(cfg.collection_limit, 51);
}

#[test]
fn build_business_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("BIZCAT_MEDIA_HOST_SUFFIX", ".cdn.test");
    map.insert("BIZCAT_UPLOAD_TIMEOUT_MS", "5000");
    map.insert("BIZCAT_TEMP_DIR", "/var/tmp/bizcat");
    map.insert("BIZCAT_DOWNLOAD_TIMEOUT_SECS", "7");
    map.insert("BIZCAT_CATALOG_PAGE_LIMIT", "25");
    map.insert("BIZCAT_COLLECTION_LIMIT", "12");
    let cfg = build_business_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.media_host_suffix, ".cdn.test");
    assert_eq!(cfg.upload_timeout_ms, 5000);
    assert_eq!(cfg.temp_dir, PathBuf::from("/var/tmp/bizcat"));
    assert_eq!(cfg.download_timeout_secs, 7);
    assert_eq!(cfg.catalog_page_limit, 25);
    assert_eq!(cfg.collection_limit, 12);
}

#[test]
fn build_business_config_rejects_invalid_upload_timeout() {
    let mut map = HashMap::new();
    map.insert("BIZCAT_UPLOAD_TIMEOUT_MS", "soon");
    let result = build_business_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BIZCAT_UPLOAD_TIMEOUT_MS"),
        "expected InvalidEnvVar(BIZCAT_UPLOAD_TIMEOUT_MS), got: {result:?}"
    );
}

#[test]
fn build_business_config_rejects_negative_page_limit() {
    let mut map = HashMap::new();
    map.insert("BIZCAT_CATALOG_PAGE_LIMIT", "-1");
    let result = build_business_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BIZCAT_CATALOG_PAGE_LIMIT"),
        "expected InvalidEnvVar(BIZCAT_CATALOG_PAGE_LIMIT), got: {result:?}"
    );
}

#[test]
fn build_business_config_rejects_empty_host_suffix() {
    let mut map = HashMap::new();
    map.insert("BIZCAT_MEDIA_HOST_SUFFIX", "  ");
    let result = build_business_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BIZCAT_MEDIA_HOST_SUFFIX"),
        "expected InvalidEnvVar(BIZCAT_MEDIA_HOST_SUFFIX), got: {result:?}"
    );
}
