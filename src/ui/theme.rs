//! Color theme constants for the chanview UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and the selected row
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Board, thread and post ids
pub const COLOR_ID: Color = Color::Cyan;

/// Post dates
pub const COLOR_DATE: Color = Color::LightGreen;

/// Attached image names
pub const COLOR_IMAGE: Color = Color::Yellow;

/// Fetch in progress
pub const COLOR_LOADING: Color = Color::Yellow;

/// Error messages in the status line
pub const COLOR_ERROR: Color = Color::Red;
