//! Human-readable sizes and transfer rates (1024-based units).

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

/// Round to two decimals with ties away from zero (`1.125` -> `1.13`); `{:.2}` alone ties to even.
fn two_places(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// `500 B`, `2.00 kB`, `1.50 MB`, `1.00 GB`. Bytes are an integer count; larger units use two decimals.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let b = bytes as f64;
    if b < MIB {
        format!("{:.2} kB", two_places(b / KIB))
    } else if b < GIB {
        format!("{:.2} MB", two_places(b / MIB))
    } else {
        format!("{:.2} GB", two_places(b / GIB))
    }
}

/// `0.00 B/s`, `512.00 B/s`, `1.50 MB/s`. Negative or non-finite rates show as `0.00 B/s`.
pub fn format_speed(bytes_per_sec: f64) -> String {
    let s = if bytes_per_sec.is_finite() {
        bytes_per_sec.max(0.0)
    } else {
        0.0
    };
    if s < KIB {
        format!("{:.2} B/s", two_places(s))
    } else if s < MIB {
        format!("{:.2} kB/s", two_places(s / KIB))
    } else if s < GIB {
        format!("{:.2} MB/s", two_places(s / MIB))
    } else {
        format!("{:.2} GB/s", two_places(s / GIB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 kB");
        assert_eq!(format_bytes(2048), "2.00 kB");
        assert_eq!(format_bytes(1536 * 1024), "1.50 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.00 GB");
        assert_eq!(format_bytes(5 * 1_073_741_824), "5.00 GB");
    }

    #[test]
    fn bytes_just_below_boundary_stays_in_lower_unit() {
        assert_eq!(format_bytes(1024 * 1024 - 1), "1024.00 kB");
    }

    #[test]
    fn exact_ties_round_up() {
        // 1152 / 1024 = 1.125 and 3712 / 1024 = 3.625, both exact in binary.
        assert_eq!(format_bytes(1152), "1.13 kB");
        assert_eq!(format_bytes(3712), "3.63 kB");
        assert_eq!(format_bytes(1152 * 1024), "1.13 MB");
        assert_eq!(format_speed(1152.0), "1.13 kB/s");
        assert_eq!(format_speed(0.125), "0.13 B/s");
    }

    #[test]
    fn speed_units() {
        assert_eq!(format_speed(0.0), "0.00 B/s");
        assert_eq!(format_speed(512.0), "512.00 B/s");
        assert_eq!(format_speed(2048.0), "2.00 kB/s");
        assert_eq!(format_speed(1.5 * 1024.0 * 1024.0), "1.50 MB/s");
        assert_eq!(format_speed(3.0 * 1024.0 * 1024.0 * 1024.0), "3.00 GB/s");
    }

    #[test]
    fn speed_clamps_bad_input() {
        assert_eq!(format_speed(-10.0), "0.00 B/s");
        assert_eq!(format_speed(f64::NAN), "0.00 B/s");
        assert_eq!(format_speed(f64::INFINITY), "0.00 B/s");
    }
}
