//! Resolves a declared `Dimension` against an (optional) available extent.

use escp_idf::Dimension;
use escp_types::Dots;

/// Returns `None` when the dimension should fall back to the node's
/// intrinsic/content size (`Auto`, or `Percent`/`Fill` with no bound to
/// resolve against).
pub fn resolve_dimension(dim: Option<Dimension>, available: Option<Dots>) -> Option<Dots> {
    match dim? {
        Dimension::Fixed(d) => Some(d),
        Dimension::Auto => None,
        Dimension::Percent(p) => available.map(|a| ((a as f32) * p / 100.0).round() as Dots),
        Dimension::Fill => available,
    }
}

/// Clamps `value` against optional min/max dimensions, each resolved
/// against the same `available` extent as the base dimension.
pub fn clamp_dimension(
    value: Dots,
    min: Option<Dimension>,
    max: Option<Dimension>,
    available: Option<Dots>,
) -> Dots {
    let mut v = value;
    if let Some(m) = resolve_dimension(min, available) {
        v = v.max(m);
    }
    if let Some(m) = resolve_dimension(max, available) {
        v = v.min(m);
    }
    v
}

/// Resolves one margin edge to a concrete gap. `auto` resolves to 0 here —
/// callers that care about `auto` check for it explicitly before calling
/// this, since `auto` means "computed from leftover space", not "zero".
fn resolve_margin_edge(dim: Dimension, available: Option<Dots>) -> Dots {
    match dim {
        Dimension::Auto => 0,
        Dimension::Fill => available.unwrap_or(0),
        other => resolve_dimension(Some(other), available).unwrap_or(0),
    }
}

/// A child's cross-axis position when one or both of its cross-axis margin
/// edges are `auto`, per the rule: both `auto` centres it, one `auto`
/// expands to consume the leftover space on that side. Returns `None` when
/// neither edge is `auto`, so the caller falls back to its own
/// `alignItems`/`align` cross-positioning.
pub fn auto_margin_cross_pos(start: Dimension, end: Dimension, avail_cross: Option<Dots>, child_cross: Dots) -> Option<Dots> {
    let start_auto = matches!(start, Dimension::Auto);
    let end_auto = matches!(end, Dimension::Auto);
    if !start_auto && !end_auto {
        return None;
    }
    let avail = avail_cross?;
    let leftover = (avail - child_cross).max(0);
    Some(match (start_auto, end_auto) {
        (true, true) => leftover / 2,
        (true, false) => (leftover - resolve_margin_edge(end, avail_cross)).max(0),
        (false, true) => resolve_margin_edge(start, avail_cross),
        (false, false) => unreachable!(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_resolves_against_available_and_may_overflow() {
        assert_eq!(resolve_dimension(Some(Dimension::Percent(50.0)), Some(1000)), Some(500));
        // Percentages are allowed to overflow their container.
        assert_eq!(resolve_dimension(Some(Dimension::Percent(150.0)), Some(1000)), Some(1500));
    }

    #[test]
    fn auto_and_unbounded_percent_fall_back_to_intrinsic() {
        assert_eq!(resolve_dimension(Some(Dimension::Auto), Some(1000)), None);
        assert_eq!(resolve_dimension(Some(Dimension::Percent(50.0)), None), None);
    }

    #[test]
    fn clamp_applies_both_bounds() {
        let v = clamp_dimension(1000, Some(Dimension::Fixed(200)), Some(Dimension::Fixed(500)), None);
        assert_eq!(v, 500);
    }

    #[test]
    fn auto_margins_on_both_edges_centre_the_child() {
        let pos = auto_margin_cross_pos(Dimension::Auto, Dimension::Auto, Some(100), 20);
        assert_eq!(pos, Some(40));
    }

    #[test]
    fn auto_margin_on_one_edge_pushes_to_the_opposite_edge() {
        // auto on top, 0 on bottom: child is pushed all the way down.
        assert_eq!(auto_margin_cross_pos(Dimension::Auto, Dimension::Fixed(0), Some(100), 20), Some(80));
        // auto on bottom, 0 on top: child stays at the top.
        assert_eq!(auto_margin_cross_pos(Dimension::Fixed(0), Dimension::Auto, Some(100), 20), Some(0));
    }

    #[test]
    fn neither_edge_auto_defers_to_the_caller() {
        assert_eq!(auto_margin_cross_pos(Dimension::Fixed(5), Dimension::Fixed(5), Some(100), 20), None);
    }
}
