/// XOR of every byte after the leading `$`, as two uppercase hex digits.
pub fn checksum(body: &str) -> String {
    let folded = body.bytes().skip(1).fold(0u8, |acc, byte| acc ^ byte);
    format!("{folded:02X}")
}

pub fn with_checksum(body: &str) -> String {
    format!("{body}*{}", checksum(body))
}

#[cfg(test)]
mod tests {
    use super::{checksum, with_checksum};

    #[test]
    fn folds_bytes_after_the_dollar_sign() {
        // 'A' ^ 'B' = 0x41 ^ 0x42 = 0x03
        assert_eq!(checksum("$AB"), "03");
    }

    #[test]
    fn empty_body_after_dollar_is_zero() {
        assert_eq!(checksum("$"), "00");
    }

    #[test]
    fn matches_explicit_xor_over_ascii_bodies() {
        let body = "$GPGLL,3749.1940,N,12228.6980,W,143005,A";
        let expected = body.bytes().skip(1).fold(0u8, |acc, byte| acc ^ byte);

        assert_eq!(checksum(body), format!("{expected:02X}"));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let body = "$IIMWV,045.3,R,8.2,N,A";

        assert_eq!(checksum(body), checksum(body));
    }

    #[test]
    fn renders_two_uppercase_hex_digits() {
        let rendered = checksum("$IIVHW,225.0,T,225.0,M,5.5,N,10.2,K");

        assert_eq!(rendered.len(), 2);
        assert!(rendered
            .chars()
            .all(|ch| ch.is_ascii_digit() || ('A'..='F').contains(&ch)));
    }

    #[test]
    fn with_checksum_appends_star_and_digits() {
        assert_eq!(with_checksum("$AB"), "$AB*03");
    }
}
