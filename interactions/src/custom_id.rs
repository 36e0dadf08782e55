//! Custom ids route component clicks and modal submissions back to their
//! handler. The first character's code point is the handler id and the rest
//! is application data, passed through untouched.
//!
//! Handler ids are `u16`s that are Unicode scalar values other than NUL,
//! i.e. `1..=0xD7FF` and `0xE000..=0xFFFF`. The platform caps custom ids at
//! 100 characters, handler id included.

use crate::CustomIdError;

pub const MAX_LENGTH: usize = 100;

/// A custom id split back into its handler id and application data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded<'a> {
    pub handler_id: u16,
    pub data: &'a str,
}

pub fn is_valid_handler_id(id: u16) -> bool {
    id != 0 && char::from_u32(u32::from(id)).is_some()
}

pub fn encode(handler_id: u16, data: &str) -> Result<String, CustomIdError> {
    let prefix = match char::from_u32(u32::from(handler_id)) {
        Some(c) if handler_id != 0 => c,
        _ => return Err(CustomIdError::InvalidHandlerId(handler_id)),
    };

    let length = 1 + data.chars().count();
    if length > MAX_LENGTH {
        return Err(CustomIdError::TooLong(length));
    }

    let mut custom_id = String::with_capacity(prefix.len_utf8() + data.len());
    custom_id.push(prefix);
    custom_id.push_str(data);
    Ok(custom_id)
}

/// Returns `None` when the custom id cannot have come from [`encode`]: it is
/// empty, or its first character is NUL or outside the BMP.
pub fn decode(custom_id: &str) -> Option<Decoded<'_>> {
    let first = custom_id.chars().next()?;
    let handler_id = u16::try_from(u32::from(first)).ok()?;

    if handler_id == 0 {
        return None;
    }

    Some(Decoded {
        handler_id,
        data: &custom_id[first.len_utf8()..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_control_prefix() {
        let decoded = decode("\u{7}extra-data").unwrap();
        assert_eq!(decoded.handler_id, 7);
        assert_eq!(decoded.data, "extra-data");
    }

    #[test]
    fn test_decode_rejects_unroutable() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("\0abc"), None);
        assert_eq!(decode("\u{1F600}abc"), None);
    }

    #[test]
    fn test_encode_limits() {
        assert_eq!(encode(0, "x"), Err(CustomIdError::InvalidHandlerId(0)));
        assert_eq!(encode(0xD800, "x"), Err(CustomIdError::InvalidHandlerId(0xD800)));
        assert_eq!(encode(1, &"a".repeat(100)), Err(CustomIdError::TooLong(101)));
        assert_eq!(encode(1, &"a".repeat(99)).map(|s| s.chars().count()), Ok(100));
    }

    #[test]
    fn test_data_may_start_with_any_char() {
        let encoded = encode(65, "\u{0}\u{FFFF}").unwrap();
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded.handler_id, 65);
        assert_eq!(decoded.data, "\u{0}\u{FFFF}");
    }

    fn handler_id() -> impl Strategy<Value = u16> {
        prop_oneof![1u16..=0xD7FF, 0xE000u16..=0xFFFF]
    }

    proptest! {
        #[test]
        fn test_round_trip(id in handler_id(), data in "\\PC{0,99}") {
            let encoded = encode(id, &data).unwrap();
            let decoded = decode(&encoded).unwrap();
            prop_assert_eq!(decoded.handler_id, id);
            prop_assert_eq!(decoded.data, data.as_str());
        }

        #[test]
        fn test_validity_matches_encode(id in any::<u16>()) {
            prop_assert_eq!(is_valid_handler_id(id), encode(id, "").is_ok());
        }
    }
}
