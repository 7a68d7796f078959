use gtk::glib::{self, FormatSizeFlags};

const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Formats a byte amount with binary units: plain bytes below 1 KiB, one decimal above.
///
/// Negative or non finite amounts are reported as "Unknown".
pub fn friendly_unit(bytes: f64) -> String {
    if !bytes.is_finite() || bytes < 0_f64 {
        return "Unknown".to_string();
    }
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024_f64 && unit < UNITS.len() - 1 {
        value /= 1024_f64;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", value as u64, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

pub fn friendly_speed(bytes_per_second: f64) -> String {
    format!("{}/s", friendly_unit(bytes_per_second))
}

/// Transferred amount with IEC units, as GLib prints it: "10 bytes", "1.0 MiB".
pub fn friendly_size(bytes: u64) -> String {
    glib::format_size_full(bytes, FormatSizeFlags::IEC_UNITS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(friendly_unit(0.0), "0 B");
        assert_eq!(friendly_unit(1023.0), "1023 B");
        assert_eq!(friendly_unit(512.7), "512 B");
    }

    #[test]
    fn test_scaled_units() {
        assert_eq!(friendly_unit(1024.0), "1.0 KiB");
        assert_eq!(friendly_unit(1536.0), "1.5 KiB");
        assert_eq!(friendly_unit(512000.0), "500.0 KiB");
        assert_eq!(friendly_unit(1048576.0), "1.0 MiB");
        assert_eq!(friendly_unit(3.0 * 1024.0 * 1024.0 * 1024.0), "3.0 GiB");
    }

    #[test]
    fn test_tib_is_the_largest_unit() {
        let pib = 1024_f64.powi(5);
        assert_eq!(friendly_unit(pib), "1024.0 TiB");
    }

    #[test]
    fn test_unknown_amounts() {
        assert_eq!(friendly_unit(-1.0), "Unknown");
        assert_eq!(friendly_unit(f64::NAN), "Unknown");
    }

    #[test]
    fn test_speed() {
        assert_eq!(friendly_speed(0.0), "0 B/s");
        assert_eq!(friendly_speed(2048.0), "2.0 KiB/s");
    }

    #[test]
    fn test_size_uses_iec_units() {
        assert!(friendly_size(10).starts_with("10"));
        assert!(friendly_size(1048576).starts_with("1.0"));
        assert!(friendly_size(1048576).ends_with("MiB"));
        assert!(friendly_size(3 * 1024 * 1024 * 1024).ends_with("GiB"));
    }
}
