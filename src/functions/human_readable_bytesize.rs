const UNITS : [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const DELIMITER : f64 = 1000_f64;

/// Convert a raw bytesize into a human readable string, e.g. 4_248_578 returns 4.25 MB
pub fn human_readable_bytesize(num: i64) -> String {
  let negative = if num < 0 { "-" } else { "" };
  let mut value = num.unsigned_abs() as f64;
  let mut exponent = 0;
  while value >= DELIMITER && exponent < UNITS.len() - 1 {
    value /= DELIMITER;
    exponent += 1;
  }
  let mut pretty_bytes = round_to_hundredths(value);
  // 999.995 kB rounds to 1000 kB, which is 1 MB
  if pretty_bytes >= DELIMITER && exponent < UNITS.len() - 1 {
    pretty_bytes = round_to_hundredths(value / DELIMITER);
    exponent += 1;
  }
  format!("{}{} {}", negative, pretty_bytes, UNITS[exponent])
}

fn round_to_hundredths(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(human_readable_bytesize(4_248_578_547), "4.25 GB");
        assert_eq!(human_readable_bytesize(4_248_578), "4.25 MB");
    }

    #[test]
    fn small_and_negative() {
        assert_eq!(human_readable_bytesize(0), "0 B");
        assert_eq!(human_readable_bytesize(512), "512 B");
        assert_eq!(human_readable_bytesize(1_500), "1.5 kB");
        assert_eq!(human_readable_bytesize(-2_000), "-2 kB");
    }

    #[test]
    fn rounding_moves_to_next_unit() {
        assert_eq!(human_readable_bytesize(999_999), "1 MB");
        assert_eq!(human_readable_bytesize(999_995_000), "1 GB");
        assert_eq!(human_readable_bytesize(999_994), "999.99 kB");
        assert_eq!(human_readable_bytesize(999), "999 B");
    }
}
