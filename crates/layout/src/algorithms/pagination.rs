pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Checks whether a block of `height` starting at `cursor_y` stays above `limit_y`.
///
/// * `cursor_y`: The current Y position, measured from the top of the page.
/// * `height`: The vertical extent of the block about to be drawn.
/// * `limit_y`: The lowest Y the block may reach.
pub fn check_fit(cursor_y: f32, height: f32, limit_y: f32) -> BreakAnalysis {
    let available = (limit_y - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: height > available + EPSILON,
        remaining_height: available,
    }
}
