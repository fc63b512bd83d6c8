// Inline style strings for orb elements. Kept free of web-sys so host tests can include it.

use portal_core::constants::ORB_BLUR_PX;
use portal_core::OrbSample;

/// Hides the static CSS orbs that the page shows before the dynamic ones load.
pub const HIDE_CSS_ORBS: &str = "body::before, body::after { display: none !important; }";

/// Static part of an orb's style: shape, color and stacking.
pub fn orb_base_css(color: &str, size: f32, fade_sec: f32) -> String {
    format!(
        "position: fixed; left: 0; top: 0; width: {size}px; height: {size}px; \
         border-radius: 50%; \
         background: radial-gradient(circle, {color} 0%, transparent 70%); \
         filter: blur({ORB_BLUR_PX}px); z-index: -1; pointer-events: none; \
         transition: opacity {fade_sec}s ease;"
    )
}

#[inline]
pub fn orb_transform(sample: &OrbSample) -> String {
    format!(
        "translate({}px, {}px) scale({})",
        sample.position.x, sample.position.y, sample.scale
    )
}

#[inline]
pub fn orb_opacity(sample: &OrbSample) -> String {
    format!("{}", sample.opacity.clamp(0.0, 1.0))
}
