//! Theme module for shortmedia-tui
//!
//! This module provides a centralized color palette and styling constants
//! for the "cinematic studio" aesthetic: deep slate backdrop with the
//! brand's signal-orange accent.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors - Slate Backdrop
// ============================================================================

/// Primary background color - deep slate (#0f172a)
pub const BG_PRIMARY: Color = Color::Rgb(15, 23, 42);

/// Secondary background color - raised panels (#1e293b)
pub const BG_SECONDARY: Color = Color::Rgb(30, 41, 59);

/// Tertiary background color - highlighted areas (#283548)
pub const BG_TERTIARY: Color = Color::Rgb(40, 53, 72);

/// Subtle border color (#334155)
pub const BORDER_SUBTLE: Color = Color::Rgb(51, 65, 85);

// ============================================================================
// Accent Colors - Signal Orange
// ============================================================================

/// Primary orange accent color (#ff6b35)
pub const ORANGE_PRIMARY: Color = Color::Rgb(255, 107, 53);

/// Dimmed orange for secondary elements (#c2410c)
pub const ORANGE_DIM: Color = Color::Rgb(194, 65, 12);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Amber rating color (#fbbf24)
pub const AMBER_STAR: Color = Color::Rgb(251, 191, 36);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#cbd5e1)
pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Shapes and Motion
// ============================================================================

/// Rounded border set used by all cards and panels
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Alternate between two colors on the animation tick, for the pulsing
/// active-era indicator and the scroll hint
pub fn get_pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if (tick / 4) % 2 == 0 {
        bright
    } else {
        dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_color_alternates() {
        assert_eq!(get_pulse_color(0, ORANGE_PRIMARY, ORANGE_DIM), ORANGE_PRIMARY);
        assert_eq!(get_pulse_color(4, ORANGE_PRIMARY, ORANGE_DIM), ORANGE_DIM);
        assert_eq!(get_pulse_color(8, ORANGE_PRIMARY, ORANGE_DIM), ORANGE_PRIMARY);
    }
}
