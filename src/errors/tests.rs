//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_illegal_token_error() {
    let error = Error::new(ErrorImpl::IllegalToken {
        token: "@".to_string(),
        index: 3,
    });

    assert_eq!(error.get_error_name(), "IllegalToken");
    assert_eq!(error.to_string(), "illegal token \"@\" at token index 3");
}

#[test]
fn test_illegal_token_tip() {
    let error = Error::new(ErrorImpl::IllegalToken {
        token: "$".to_string(),
        index: 0,
    });

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`$`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.mk");
    let error: Error = io.into();

    assert_eq!(error.get_error_name(), "Io");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::Io {
            message: "missing.mk".to_string()
        }
    );
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
