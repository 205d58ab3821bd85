//! Plain-text rendering of a single solve.

use raygeo_core::Intersection;

/// Printed instead of coordinates when the ray misses.
pub const NO_INTERSECTION: &str = "discriminant negative! no l_d";

/// x, y and z on their own lines, or the miss message.
///
/// Uses `{:?}` so integral values keep a trailing `.0`.
pub fn format_plain(hit: Option<&Intersection>) -> String {
    match hit {
        Some(hit) => format!("{:?}\n{:?}\n{:?}\n", hit.point.x, hit.point.y, hit.point.z),
        None => format!("{}\n", NO_INTERSECTION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raygeo_core::Root;
    use raygeo_math::Vector3;

    #[test]
    fn test_format_hit() {
        let hit = Intersection {
            point: Vector3::new(0.0, -0.5, 79.5),
            t: 1.0,
            root: Root::Far,
        };
        assert_eq!(format_plain(Some(&hit)), "0.0\n-0.5\n79.5\n");
    }

    #[test]
    fn test_format_miss() {
        assert_eq!(format_plain(None), "discriminant negative! no l_d\n");
    }
}
