//! Exit code constants for the autoconcept CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid state, filesystem failure)
//! - 2: Configuration error (missing credential, invalid config)
//! - 3: Image service failure (transport, status, payload)
//! - 4: Precondition failure (index file or its markers missing)
//! - 5: Template failure (required field not supplied)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid state, or filesystem failure.
pub const USER_ERROR: i32 = 1;

/// Configuration error: missing API credential or invalid config file.
pub const CONFIG_FAILURE: i32 = 2;

/// Image service failure: request, HTTP status, or payload decoding.
pub const IMAGE_SERVICE_FAILURE: i32 = 3;

/// Precondition failure: the feed index is missing or lacks its markers.
pub const PRECONDITION_FAILURE: i32 = 4;

/// Template failure: a placeholder names a field the context did not supply.
pub const TEMPLATE_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            CONFIG_FAILURE,
            IMAGE_SERVICE_FAILURE,
            PRECONDITION_FAILURE,
            TEMPLATE_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn only_success_is_zero() {
        assert_eq!(SUCCESS, 0);
        for code in [
            USER_ERROR,
            CONFIG_FAILURE,
            IMAGE_SERVICE_FAILURE,
            PRECONDITION_FAILURE,
            TEMPLATE_FAILURE,
        ] {
            assert!(code > 0);
        }
    }
}
