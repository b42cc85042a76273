//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let err = PropcastError::from(json_error);

    match err {
        PropcastError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let err = PropcastError::from(io_error);

    match err {
        PropcastError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_storage_error_conversion() {
    let db_error = rusqlite::Error::QueryReturnedNoRows;
    let err = PropcastError::from(db_error);

    match err {
        PropcastError::Storage(_) => (),
        _ => panic!("Expected Storage error variant"),
    }
}

#[test]
fn test_invalid_week_display() {
    let err = PropcastError::InvalidWeek { week: 0 };
    assert_eq!(err.to_string(), "week must be >= 1, got 0");
}

#[test]
fn test_player_not_found_display() {
    let err = PropcastError::PlayerNotFound {
        id: "patrick-mahomes".to_string(),
    };
    assert!(err.to_string().contains("patrick-mahomes"));
}
