//! Verification-code constants and helpers shared by the verify-email page.

/// How long a freshly issued code stays valid.
pub const OTP_TTL_SECONDS: u32 = 600;
/// Client-side wait between resend requests. The backend may extend this via
/// `retryAfterSeconds` on an error payload.
pub const RESEND_COOLDOWN_SECONDS: u32 = 30;

/// Codes are exactly six ASCII digits.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|byte| byte.is_ascii_digit())
}

/// Renders seconds as `m:ss` for countdown labels.
pub fn format_countdown(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::{format_countdown, is_valid_code};

    #[test]
    fn codes_must_be_six_digits() {
        assert!(is_valid_code("123456"));
        assert!(!is_valid_code("12345"));
        assert!(!is_valid_code("1234567"));
        assert!(!is_valid_code("12a456"));
        assert!(!is_valid_code(""));
    }

    #[test]
    fn countdown_formats_minutes_and_padded_seconds() {
        assert_eq!(format_countdown(600), "10:00");
        assert_eq!(format_countdown(61), "1:01");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(0), "0:00");
    }
}
