//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the layout
//! questions the views ask: whether the navbar collapses, how wide the
//! sidebar is, and whether multi-column sections stack.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns); the navbar collapses below this
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns); grids stack below this
    pub const MD_WIDTH: u16 = 120;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// if ctx.is_narrow() {
///     // collapse navbar links behind the menu toggle
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Create from a ratatui Rect.
    pub fn from_rect(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Percentage width clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Below this the public navbar collapses into a menu toggle.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Very small terminals drop decorative sections.
    pub fn is_tiny(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Side-by-side sections stack vertically below the medium breakpoint.
    pub fn should_stack(&self) -> bool {
        self.width < breakpoints::MD_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Width of the private-area sidebar.
    pub fn sidebar_width(&self) -> u16 {
        if self.is_narrow() {
            16
        } else {
            self.bounded_width(20, 20, 28)
        }
    }
}
