//! Tests for `point` module

use super::point::*;
use std::cmp::Ordering;

#[test]
fn test_point_creation() {
    let point = Point::new(7, vec![0.1, 0.2, 0.3]);

    assert_eq!(point.label, 7);
    assert_eq!(point.dimension(), 3);
}

#[test]
fn test_point_serialization() {
    let point = Point::new(1, vec![0.1, 0.2]);
    let json = serde_json::to_string(&point).unwrap();
    let deserialized: Point = serde_json::from_str(&json).unwrap();

    assert_eq!(point.label, deserialized.label);
    assert_eq!(point.vector, deserialized.vector);
}

#[test]
fn test_neighbor_orders_by_distance() {
    let near = Neighbor::new(10, 1.0);
    let far = Neighbor::new(2, 5.0);

    assert!(near < far);
    assert_eq!(near.cmp(&far), Ordering::Less);
}

#[test]
fn test_neighbor_ties_break_by_label() {
    // Equal distances: the smaller label precedes, so the larger label is
    // treated as farther and evicted first.
    let a = Neighbor::new(3, 2.5);
    let b = Neighbor::new(8, 2.5);

    assert!(a < b);
    assert!(b > a);
}

#[test]
fn test_neighbor_equality_is_bitwise_on_distance() {
    let a = Neighbor::new(1, 0.5);
    let b = Neighbor::new(1, 0.5);
    let c = Neighbor::new(1, 0.5 + f32::EPSILON);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_neighbor_nan_distance_has_total_order() {
    // total_cmp puts +NaN above every finite value; Ord must not panic.
    let nan = Neighbor::new(0, f32::NAN);
    let finite = Neighbor::new(1, 1.0e9);

    assert!(finite < nan);
    assert_eq!(nan.cmp(&nan), Ordering::Equal);
}
