//! Procedural gear outline.
//!
//! A gear with `n` teeth is approximated by `n * 2` triangular wedges, each
//! sharing the origin as apex. The rim radius alternates between the full
//! radius and `radius - tooth_depth` from one wedge boundary to the next,
//! which produces the tooth/gap silhouette.

use std::f32::consts::TAU;

use thiserror::Error;

use cogwork_core::FlatVertex;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GearError {
    #[error("gear needs at least one tooth")]
    NoTeeth,
    #[error("gear radius must be positive")]
    Radius,
    #[error("tooth depth must be in 0..radius")]
    ToothDepth,
}

/// Generates the triangle list for a gear in the z = 0 plane.
///
/// The output always holds `teeth * 2` wedges — `teeth * 6` vertices — and
/// wedge `i` spans the angles `i * step ..= (i + 1) * step` where `step`
/// divides the full turn into `teeth * 2` equal parts. Rim endpoint `k`
/// sits at the full radius when `k` is even, at the root radius otherwise.
///
/// Inputs that would produce degenerate or self-intersecting outlines
/// (`teeth == 0`, non-positive radius, `tooth_depth >= radius`) are
/// rejected up front.
pub fn gear(radius: f32, teeth: u32, tooth_depth: f32) -> Result<Vec<FlatVertex>, GearError> {
    if teeth == 0 {
        return Err(GearError::NoTeeth);
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GearError::Radius);
    }
    if !(0.0..radius).contains(&tooth_depth) {
        return Err(GearError::ToothDepth);
    }

    let wedges = teeth * 2;
    let step = TAU / wedges as f32;
    let rim_radius = |k: u32| {
        if k % 2 == 0 {
            radius
        } else {
            radius - tooth_depth
        }
    };

    let mut vertices = Vec::with_capacity(wedges as usize * 3);
    for i in 0..wedges {
        let angle1 = i as f32 * step;
        let angle2 = (i + 1) as f32 * step;
        let r1 = rim_radius(i);
        let r2 = rim_radius(i + 1);

        vertices.push(FlatVertex::new(0.0, 0.0, 0.0));
        vertices.push(FlatVertex::new(angle1.cos() * r1, angle1.sin() * r1, 0.0));
        vertices.push(FlatVertex::new(angle2.cos() * r2, angle2.sin() * r2, 0.0));
    }

    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radius_of(v: &FlatVertex) -> f32 {
        (v.position[0].powi(2) + v.position[1].powi(2)).sqrt()
    }

    #[test]
    fn vertex_count_is_six_per_tooth() {
        for teeth in [1, 4, 15, 20, 64] {
            let v = gear(1.0, teeth, 0.1).unwrap();
            assert_eq!(v.len(), teeth as usize * 6);
        }
    }

    #[test]
    fn four_teeth_example() {
        // 4 teeth → 8 wedges → 24 vertices → 72 floats
        let v = gear(1.0, 4, 0.5).unwrap();
        assert_eq!(v.len(), 24);
        assert_eq!(v.len() * 3, 72);
    }

    #[test]
    fn every_wedge_apex_is_the_origin() {
        let v = gear(0.3, 20, 0.05).unwrap();
        for wedge in v.chunks_exact(3) {
            assert_eq!(wedge[0].position, [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn all_vertices_lie_in_the_z_plane() {
        let v = gear(0.2, 15, 0.04).unwrap();
        assert!(v.iter().all(|v| v.position[2] == 0.0));
    }

    #[test]
    fn rim_radius_alternates_by_endpoint_parity() {
        let (radius, depth) = (1.0, 0.25);
        let v = gear(radius, 5, depth).unwrap();
        for (i, wedge) in v.chunks_exact(3).enumerate() {
            let expect = |k: usize| if k % 2 == 0 { radius } else { radius - depth };
            assert!((radius_of(&wedge[1]) - expect(i)).abs() < 1e-5);
            assert!((radius_of(&wedge[2]) - expect(i + 1)).abs() < 1e-5);
        }
    }

    #[test]
    fn wedges_partition_the_full_turn() {
        let teeth = 7u32;
        let v = gear(1.0, teeth, 0.1).unwrap();
        let step = TAU / (teeth * 2) as f32;
        for (i, wedge) in v.chunks_exact(3).enumerate() {
            let a1 = f32::atan2(wedge[1].position[1], wedge[1].position[0]).rem_euclid(TAU);
            let expected = (i as f32 * step).rem_euclid(TAU);
            // compare on the circle, tolerating the 2π wrap
            let diff = (a1 - expected).abs();
            assert!(diff < 1e-4 || (TAU - diff) < 1e-4, "wedge {i}: {a1} vs {expected}");
        }
        // the last wedge's trailing edge closes the loop at exactly 2π
        let last = &v[v.len() - 1];
        let a2 = f32::atan2(last.position[1], last.position[0]).rem_euclid(TAU);
        assert!(a2 < 1e-4 || (TAU - a2) < 1e-4);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert_eq!(gear(1.0, 0, 0.1), Err(GearError::NoTeeth));
        assert_eq!(gear(0.0, 4, 0.0), Err(GearError::Radius));
        assert_eq!(gear(-1.0, 4, 0.1), Err(GearError::Radius));
        assert_eq!(gear(1.0, 4, 1.0), Err(GearError::ToothDepth));
        assert_eq!(gear(1.0, 4, 1.5), Err(GearError::ToothDepth));
        assert_eq!(gear(1.0, 4, -0.1), Err(GearError::ToothDepth));
    }
}
