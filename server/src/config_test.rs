use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_valid_values() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 443 ")), Ok(443));
}

#[test]
fn parse_port_rejects_invalid_values() {
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
}
