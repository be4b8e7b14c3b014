//! Static cross-reference of human-readable sensor names to SMC keys.
//!
//! Blank rows are print-time section separators; they carry no key and are
//! skipped before any read is issued.

/// (display name, FourCC key) pairs, in display order.
pub const SENSOR_TABLE: &[(&str, &str)] = &[
    ("CPU Core 1", "TC1C"),
    ("CPU Core 2", "TC2C"),
    ("CPU Core 3", "TC3C"),
    ("CPU Core 4", "TC4C"),
    ("CPU Core 5", "TC5C"),
    ("CPU Core 6", "TC6C"),
    ("CPU PECI", "TCXC"),
    ("CPU Proximity", "TC0P"),
    ("CPU System Agent Core", "TCSA"),
    ("", ""),
    ("AMD Radeon Pro 5300M", "TGDD"),
    ("AMD Radeon Pro 5300M Proximity", "TG0P"),
    ("AMD Radeon Pro 5300M VRAM Proximity", "TGVP"),
    ("Intel UHD Graphics 630 Core", "TCGC"),
    ("", ""),
    ("Battery", "TB0T"),
    ("Battery Management Unit", "TB1T"),
    ("Battery Proximity", "TB2T"),
    ("", ""),
    ("Bottom Case", "Ts0S"),
    ("Case", "Ts2S"),
    ("Top Case", "Ts1S"),
    ("", ""),
    ("Airflow Left", "TaLC"),
    ("Airflow Right", "TaRC"),
    ("Ambient Virtual", "TA0V"),
    ("Fin Stack Proximity Left", "Th2H"),
    ("Fin Stack Proximity Right", "Th1H"),
    ("Platform Controller Hub", "TPCD"),
    ("", ""),
    ("Memory Proximity", "TM0P"),
    ("", ""),
    ("Trackpad", "Ts0P"),
    ("Trackpad Actuator", "Ts1P"),
    ("", ""),
    ("Thunderbolt Left Ports", "TTLD"),
    ("Thunderbolt Right Ports", "TTRD"),
    ("", ""),
    ("Wireless Proximity", "TW0P"),
    ("", ""),
    ("SSD Left Proximity", "TH1a"),
    ("SSD Right Proximity", "TH0a"),
];

/// Separator rows break the printed list into sections.
pub fn is_separator(entry: &(&str, &str)) -> bool {
    entry.1.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::SensorKey;

    #[test]
    fn every_non_separator_key_is_well_formed() {
        for entry in SENSOR_TABLE {
            if is_separator(entry) {
                assert!(entry.0.is_empty());
            } else {
                SensorKey::new(entry.1).unwrap();
                assert!(!entry.0.is_empty());
            }
        }
    }

    #[test]
    fn table_covers_the_known_sensor_set() {
        let named = SENSOR_TABLE.iter().filter(|e| !is_separator(e)).count();
        assert_eq!(named, 33);
    }
}
