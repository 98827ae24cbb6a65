// Host-side tests for configuration parsing and validation.

use skitter_core::{ActivationMode, ConfigError, ElementConfig, Marker, RawOptions};

#[test]
fn drop_marker_defaults_to_one_local_click() {
    let config = ElementConfig::from_markers(&[Marker::Drop], &RawOptions::default()).unwrap();
    assert_eq!(
        config.mode,
        ActivationMode::SelfClick { required_clicks: 1 }
    );
    assert!(!config.draggable);
    assert_eq!(config.drop_color, None);
}

#[test]
fn drop_global_flag_switches_to_page_wide_counting() {
    let raw = RawOptions {
        drop_clicks: Some("5".into()),
        drop_global: true,
        ..Default::default()
    };
    let config = ElementConfig::from_markers(&[Marker::Drop], &raw).unwrap();
    assert_eq!(
        config.mode,
        ActivationMode::PageClick { required_clicks: 5 }
    );
}

#[test]
fn unparsable_values_fail_closed_to_defaults() {
    let raw = RawOptions {
        drop_clicks: Some("lots".into()),
        ..Default::default()
    };
    let config = ElementConfig::from_markers(&[Marker::Drop], &raw).unwrap();
    assert_eq!(
        config.mode,
        ActivationMode::SelfClick { required_clicks: 1 }
    );

    let raw = RawOptions {
        escape_distance: Some("NaN".into()),
        escape_delay: Some("".into()),
        escape_speed: Some("inf".into()),
        ..Default::default()
    };
    let config = ElementConfig::from_markers(&[Marker::Escape], &raw).unwrap();
    assert_eq!(
        config.mode,
        ActivationMode::Proximity {
            radius: 100.0,
            activation_delay: 0.0,
            escape_duration: 0.3,
        }
    );
}

#[test]
fn escape_marker_parses_its_options() {
    let raw = RawOptions {
        escape_distance: Some("150".into()),
        escape_speed: Some("0.5".into()),
        escape_delay: Some("2".into()),
        ..Default::default()
    };
    let config = ElementConfig::from_markers(&[Marker::Escape], &raw).unwrap();
    assert_eq!(
        config.mode,
        ActivationMode::Proximity {
            radius: 150.0,
            activation_delay: 2.0,
            escape_duration: 0.5,
        }
    );
    assert!(!config.mode.is_fall_capable());
}

#[test]
fn mousemove_marker_parses_distance_and_drag() {
    let raw = RawOptions {
        mousemove_distance: Some(" 750 ".into()),
        drop_draggable: true,
        drop_color: Some("#ff0000".into()),
        ..Default::default()
    };
    let config = ElementConfig::from_markers(&[Marker::MouseMoveDrop], &raw).unwrap();
    assert_eq!(
        config.mode,
        ActivationMode::PageDistance {
            required_distance: 750.0
        }
    );
    assert!(config.draggable);
    assert_eq!(config.drop_color.as_deref(), Some("#ff0000"));
    assert!(config.mode.is_fall_capable());
}

#[test]
fn multiple_markers_are_rejected() {
    let err = ElementConfig::from_markers(&[Marker::Drop, Marker::Escape], &RawOptions::default())
        .unwrap_err();
    assert_eq!(err, ConfigError::ConflictingModes(2));
}

#[test]
fn no_marker_is_rejected() {
    let err = ElementConfig::from_markers(&[], &RawOptions::default()).unwrap_err();
    assert_eq!(err, ConfigError::NoMarker);
}
