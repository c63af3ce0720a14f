//! Helpers for decoding common theme element payloads.

use foyer_core::logging::targets;
use foyer_render::Rect;
use tracing::warn;

use crate::context::UiContext;
use crate::widget::Justification;

use super::element::ThemeElement;

/// Parse an `x,y,width,height` area element, scaled to the display.
///
/// Malformed values are logged and skipped rather than aborting the theme
/// load.
pub fn parse_rect(element: &ThemeElement, ctx: &UiContext) -> Option<Rect> {
    let text = element.text();
    let mut parts = text.split(',').map(|p| p.trim().parse::<f32>());

    let (x, y, w, h) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), Some(Ok(w)), Some(Ok(h))) => (x, y, w, h),
        _ => {
            warn!(
                target: targets::THEME,
                element = element.name(),
                value = text,
                "malformed area, expected x,y,width,height"
            );
            return None;
        }
    };

    let scale = ctx.scale();
    Some(Rect::new(
        scale.norm_x(x),
        scale.norm_y(y),
        scale.norm_x(w),
        scale.norm_y(h),
    ))
}

/// Parse a boolean element. `yes`, `true` and `1` are truthy.
pub fn parse_bool(element: &ThemeElement) -> bool {
    matches!(
        element.text().trim().to_lowercase().as_str(),
        "yes" | "true" | "1"
    )
}

/// Parse an alignment string such as `"center"` or `"right,vcenter"`.
///
/// Tokens are separated by commas or whitespace. Horizontal tokens replace
/// the horizontal component, vertical tokens the vertical one;
/// `allcenter` replaces both. Unknown tokens are ignored.
pub fn parse_alignment(value: &str) -> Justification {
    let mut justification = Justification::LEFT | Justification::TOP;

    for token in value.split([',', ' ']) {
        let token = token.trim().to_lowercase();
        let horizontal = Justification::LEFT | Justification::RIGHT | Justification::HCENTER;
        let vertical = Justification::TOP | Justification::BOTTOM | Justification::VCENTER;

        match token.as_str() {
            "left" => justification = (justification - horizontal) | Justification::LEFT,
            "right" => justification = (justification - horizontal) | Justification::RIGHT,
            "center" | "hcenter" => {
                justification = (justification - horizontal) | Justification::HCENTER
            }
            "top" => justification = (justification - vertical) | Justification::TOP,
            "bottom" => justification = (justification - vertical) | Justification::BOTTOM,
            "vcenter" => justification = (justification - vertical) | Justification::VCENTER,
            "allcenter" => {
                justification = (justification - horizontal - vertical)
                    | Justification::HCENTER
                    | Justification::VCENTER
            }
            _ => {}
        }
    }

    justification
}
