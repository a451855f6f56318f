//! Responsive canvas sizing

use glam::Vec2;

/// Largest size with the design aspect ratio that fits `container`, never larger
/// than the design size. Degenerate containers fall back to the design size.
pub fn fit_canvas(container: Vec2, design: Vec2) -> Vec2 {
    let aspect = design.x / design.y;
    let fitted = if container.x / container.y > aspect {
        // Container is wider than needed
        let h = container.y.min(design.y);
        Vec2::new(h * aspect, h)
    } else {
        // Container is taller than needed
        let w = container.x.min(design.x);
        Vec2::new(w, w / aspect)
    };

    let usable = |v: f32| v.is_finite() && v > 0.0;
    Vec2::new(
        if usable(fitted.x) { fitted.x } else { design.x },
        if usable(fitted.y) { fitted.y } else { design.y },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESIGN: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_wide_container() {
        assert_eq!(fit_canvas(Vec2::new(1000.0, 300.0), DESIGN), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_tall_container() {
        assert_eq!(fit_canvas(Vec2::new(400.0, 900.0), DESIGN), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_capped_at_design() {
        assert_eq!(fit_canvas(Vec2::new(4000.0, 3000.0), DESIGN), DESIGN);
    }

    #[test]
    fn test_degenerate_container() {
        assert_eq!(fit_canvas(Vec2::ZERO, DESIGN), DESIGN);
        assert_eq!(fit_canvas(Vec2::new(500.0, 0.0), DESIGN), DESIGN);
    }
}
