// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::str::FromStr;

/// Stream widths the depth/color sensor exposes for the demo programs
pub const ALLOWED_WIDTHS: [u32; 3] = [1280, 848, 640];

/// Stream heights the depth/color sensor exposes for the demo programs
pub const ALLOWED_HEIGHTS: [u32; 3] = [720, 480, 360];

/// Framerates the depth/color sensor exposes for the demo programs
pub const ALLOWED_FRAMERATES: [u32; 5] = [15, 25, 30, 60, 90];

/// Video bitrate presets
///
/// These presets define the target bitrate for the recording size estimate
/// based on resolution. Users can choose between quality and file size
/// trade-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitratePreset {
    /// Low bitrate - smaller files, reduced quality
    Low,
    /// Medium bitrate - balanced quality and file size (default)
    #[default]
    Medium,
    /// High bitrate - larger files, better quality
    High,
}

impl BitratePreset {
    /// Get all preset variants for iteration
    pub const ALL: [BitratePreset; 3] = [
        BitratePreset::Low,
        BitratePreset::Medium,
        BitratePreset::High,
    ];

    /// Get display name for the preset
    pub fn display_name(&self) -> &'static str {
        match self {
            BitratePreset::Low => "Low",
            BitratePreset::Medium => "Medium",
            BitratePreset::High => "High",
        }
    }

    /// Get bitrate in kbps for a given stream width
    ///
    /// Bitrates are tuned for the two resolution tiers the sensor offers:
    /// - SD (848x480 and below): Low=1, Medium=2, High=4 Mbps
    /// - HD (1280x720): Low=2.5, Medium=5, High=10 Mbps
    pub fn bitrate_kbps(&self, width: u32) -> u32 {
        match (get_resolution_tier(width), self) {
            (ResolutionTier::SD, BitratePreset::Low) => 1_000,
            (ResolutionTier::SD, BitratePreset::Medium) => 2_000,
            (ResolutionTier::SD, BitratePreset::High) => 4_000,
            (ResolutionTier::HD, BitratePreset::Low) => 2_500,
            (ResolutionTier::HD, BitratePreset::Medium) => 5_000,
            (ResolutionTier::HD, BitratePreset::High) => 10_000,
        }
    }

    /// Estimate the total recording size in bytes
    ///
    /// `streams` is the number of files written side by side (the demos
    /// write separate color and depth videos).
    pub fn estimated_size(&self, width: u32, duration_secs: u64, streams: u32) -> u64 {
        self.bitrate_kbps(width) as u64 * 1000 / 8 * duration_secs * streams as u64
    }
}

impl FromStr for BitratePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(BitratePreset::Low),
            "medium" => Ok(BitratePreset::Medium),
            "high" => Ok(BitratePreset::High),
            other => Err(format!("Unknown bitrate preset: {}", other)),
        }
    }
}

/// Resolution tiers for the bitrate table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    /// SD: 848x480 and below
    SD,
    /// HD: 1280x720
    HD,
}

fn get_resolution_tier(width: u32) -> ResolutionTier {
    if width >= 1280 {
        ResolutionTier::HD
    } else {
        ResolutionTier::SD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitrate_preset_ordering() {
        // Presets are ordered from lowest to highest quality
        let mut prev_bitrate = 0u32;
        for preset in BitratePreset::ALL {
            let bitrate = preset.bitrate_kbps(1280);
            assert!(bitrate > prev_bitrate);
            prev_bitrate = bitrate;
        }
    }

    #[test]
    fn test_bitrate_scales_with_resolution() {
        for preset in BitratePreset::ALL {
            assert!(preset.bitrate_kbps(640) < preset.bitrate_kbps(1280));
        }
    }

    #[test]
    fn test_estimated_size() {
        // 5000 kbps * 60 s * 2 streams = 75 MB
        assert_eq!(
            BitratePreset::Medium.estimated_size(1280, 60, 2),
            5_000u64 * 1000 / 8 * 60 * 2
        );
    }

    #[test]
    fn test_bitrate_preset_parsing() {
        assert_eq!("low".parse::<BitratePreset>(), Ok(BitratePreset::Low));
        assert_eq!("Medium".parse::<BitratePreset>(), Ok(BitratePreset::Medium));
        assert_eq!("HIGH".parse::<BitratePreset>(), Ok(BitratePreset::High));
        assert!("ultra".parse::<BitratePreset>().is_err());
    }
}
