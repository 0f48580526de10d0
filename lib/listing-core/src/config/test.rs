use super::*;

#[test]
fn test_parse_empty_input_uses_defaults() {
    let config = ListingConfig::parse([]).unwrap();
    assert_eq!(config, ListingConfig::default());
    assert_eq!(config.default_page_size, 20);
    assert_eq!(config.max_page_size, 100);
}

#[cfg(feature = "config_yaml")]
#[test]
fn test_from_yaml_later_input_overrides() {
    let config = ListingConfig::from_yaml([
        "defaultPageSize: 10\nmaxPageSize: 50",
        "maxPageSize: 60",
    ])
    .unwrap();

    assert_eq!(
        config,
        ListingConfig {
            default_page_size: 10,
            max_page_size: 60,
        }
    );
}

#[cfg(feature = "config_yaml")]
#[test]
fn test_from_yaml_rejects_default_above_max() {
    let result = ListingConfig::from_yaml(["defaultPageSize: 30\nmaxPageSize: 25"]);
    assert!(matches!(
        result,
        Err(ConfigParsingError::InvalidPageSize {
            default_page_size: 30,
            max_page_size: 25
        })
    ));
}

#[cfg(feature = "config_yaml")]
#[test]
fn test_from_yaml_rejects_zero_page_size() {
    let result = ListingConfig::from_yaml(["defaultPageSize: 0"]);
    assert!(matches!(result, Err(ConfigParsingError::InvalidPageSize { .. })));
}

#[cfg(feature = "config_yaml")]
#[test]
fn test_from_yaml_malformed_value() {
    let result = ListingConfig::from_yaml(["maxPageSize: lots"]);
    assert!(matches!(result, Err(ConfigParsingError::GeneralParsingError(_))));
}
