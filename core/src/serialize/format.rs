/// Digits written after the decimal point of every mantissa.
pub const MANTISSA_DIGITS: usize = 16;

/// Formats a real in lowercase scientific notation with a signed,
/// at-least-two-digit exponent: `3.0000000000000000e+00`.
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let raw = format!("{:.*e}", MANTISSA_DIGITS, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}

/// Formats a complex value as `real,imag` with no separating space.
pub fn format_pair(re: f64, im: f64) -> String {
    format!("{},{}", format_real(re), format_real(im))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_integers_with_two_digit_exponent() {
        assert_eq!(format_real(3.0), "3.0000000000000000e+00");
        assert_eq!(format_real(8.0), "8.0000000000000000e+00");
        assert_eq!(format_real(1000.0), "1.0000000000000000e+03");
    }

    #[test]
    fn formats_zero_and_negative_zero() {
        assert_eq!(format_real(0.0), "0.0000000000000000e+00");
        assert_eq!(format_real(-0.0), "-0.0000000000000000e+00");
    }

    #[test]
    fn formats_small_and_negative_exponents() {
        assert_eq!(format_real(-0.5), "-5.0000000000000000e-01");
        assert_eq!(format_real(9.5367431640625e-7), "9.5367431640625000e-07");
        assert_eq!(format_real(2.0e-300), "2.0000000000000001e-300");
        assert_eq!(format_real(1.0e100), "1.0000000000000000e+100");
    }

    #[test]
    fn formats_full_double_precision() {
        let value = 1.0 / 2.0_f64.sqrt();
        let text = format_real(value);
        assert_eq!(text, "7.0710678118654746e-01");
        assert_eq!(text.parse::<f64>().unwrap(), value);
    }

    #[test]
    fn formats_non_finite_values() {
        assert_eq!(format_real(f64::NAN), "nan");
        assert_eq!(format_real(f64::INFINITY), "inf");
        assert_eq!(format_real(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn pair_is_comma_joined_without_spaces() {
        assert_eq!(
            format_pair(1.0, -2.0),
            "1.0000000000000000e+00,-2.0000000000000000e+00"
        );
    }
}
