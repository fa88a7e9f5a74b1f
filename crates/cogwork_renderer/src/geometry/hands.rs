//! The three clock-hand triangles.
//!
//! Each hand is a single narrow triangle pointing up at twelve o'clock in
//! its rest pose; the scene rotates it about -Z. The second hand is the
//! longest and thinnest, the hour hand the shortest and widest.

use cogwork_core::FlatVertex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

const HOUR: [FlatVertex; 3] = [
    FlatVertex::new(0.0, 0.12, 0.0),
    FlatVertex::new(-0.025, -0.1, 0.0),
    FlatVertex::new(0.025, -0.1, 0.0),
];

const MINUTE: [FlatVertex; 3] = [
    FlatVertex::new(0.0, 0.15, 0.0),
    FlatVertex::new(-0.015, -0.15, 0.0),
    FlatVertex::new(0.015, -0.15, 0.0),
];

const SECOND: [FlatVertex; 3] = [
    FlatVertex::new(0.0, 0.2, 0.0),
    FlatVertex::new(-0.02, -0.2, 0.0),
    FlatVertex::new(0.02, -0.2, 0.0),
];

/// Returns the rest-pose triangle for `kind`.
pub fn hand(kind: Hand) -> &'static [FlatVertex; 3] {
    match kind {
        Hand::Hour => &HOUR,
        Hand::Minute => &MINUTE,
        Hand::Second => &SECOND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_are_flat_triangles() {
        for kind in [Hand::Hour, Hand::Minute, Hand::Second] {
            let tri = hand(kind);
            assert_eq!(tri.len(), 3);
            assert!(tri.iter().all(|v| v.position[2] == 0.0));
        }
    }

    #[test]
    fn second_hand_is_longest() {
        let tip = |kind| hand(kind)[0].position[1];
        assert!(tip(Hand::Second) > tip(Hand::Minute));
        assert!(tip(Hand::Minute) > tip(Hand::Hour));
    }
}
