/// Space kept free around the displayed image, in points.
pub const DISPLAY_MARGIN: f32 = 50.0;

/// Scale factor that fits an image of `actual` size into `target`, never
/// enlarging it. Degenerate sizes yield 1.0 for an empty image and 0.0 for
/// an empty target.
pub fn fit_scale(actual: (u32, u32), target: (f32, f32)) -> f32 {
    let (w, h) = actual;
    if w == 0 || h == 0 {
        return 1.0;
    }
    let (tw, th) = (target.0.max(0.0), target.1.max(0.0));
    (tw / w as f32).min(th / h as f32).min(1.0)
}

/// Target box for an image shown in a window of `available` size.
pub fn display_target(available: (f32, f32)) -> (f32, f32) {
    (
        (available.0 - DISPLAY_MARGIN).max(0.0),
        (available.1 - DISPLAY_MARGIN).max(0.0),
    )
}
