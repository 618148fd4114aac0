//! Color theme constants for the Luxxor UI
//!
//! Obsidian backgrounds with gold accents.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Brand gold (#D4AF37)
pub const COLOR_GOLD: Color = Color::Rgb(212, 175, 55);

/// Lighter gold for hover states
pub const COLOR_GOLD_LIGHT: Color = Color::Rgb(230, 200, 90);

/// Page background
pub const COLOR_OBSIDIAN: Color = Color::Rgb(10, 10, 10);

/// Sidebar and player chrome
pub const COLOR_CHARCOAL: Color = Color::Rgb(26, 26, 26);

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for body text on dark backgrounds
pub const COLOR_ACCENT: Color = Color::White;

/// Secondary text
pub const COLOR_MUTED: Color = Color::Gray;

/// Dim text for less important info and locked rows
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 20);

// ============================================================================
// Status Colors
// ============================================================================

/// Completed lessons, delivered messages
pub const COLOR_SUCCESS: Color = Color::Rgb(34, 197, 94);

/// Sign out, failed messages
pub const COLOR_DANGER: Color = Color::Rgb(248, 113, 113);

/// Module-count badge
pub const COLOR_INFO: Color = Color::Rgb(96, 165, 250);

/// Progress bar track
pub const COLOR_PROGRESS_BG: Color = Color::Rgb(40, 40, 40);
