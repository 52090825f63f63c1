use crate::objective::ObjectivePoint;
use std::cmp::Ordering;

/// Returns true if `p` Pareto-dominates `q`, minimizing both objectives.
///
/// `p` dominates `q` iff it is as good on both objectives and strictly
/// better on at least one. Two identical points never dominate each other.
pub fn dominates(p: &ObjectivePoint, q: &ObjectivePoint) -> bool {
    (p.f1 <= q.f1 && p.f2 <= q.f2) && (p.f1 < q.f1 || p.f2 < q.f2)
}

/// The domination order between two points.
///
/// `Less` means `p` dominates `q`, `Greater` means `q` dominates `p`, and
/// `Equal` covers both identical and mutually non-dominated points. This is
/// a partial order presented as a three-way comparison, mirroring how the
/// non-dominated sort consumes it.
pub fn domination_ord(p: &ObjectivePoint, q: &ObjectivePoint) -> Ordering {
    if dominates(p, q) {
        Ordering::Less
    } else if dominates(q, p) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::{dominates, domination_ord};
    use crate::objective::ObjectivePoint;
    use std::cmp::Ordering;

    fn point(f1: f64, f2: f64) -> ObjectivePoint {
        ObjectivePoint { f1, f2 }
    }

    #[test]
    fn test_dominates() {
        let a = point(1.0, 0.1);
        let b = point(0.1, 0.1);
        let c = point(0.1, 1.0);

        assert_eq!(false, dominates(&a, &a));
        assert_eq!(false, dominates(&a, &b));
        assert_eq!(false, dominates(&a, &c));

        assert_eq!(true, dominates(&b, &a));
        assert_eq!(false, dominates(&b, &b));
        assert_eq!(true, dominates(&b, &c));

        assert_eq!(false, dominates(&c, &a));
        assert_eq!(false, dominates(&c, &b));
        assert_eq!(false, dominates(&c, &c));
    }

    #[test]
    fn test_antisymmetry() {
        // For any distinct pair, at most one direction of dominance holds.
        let points = [
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(0.0, 1.0),
            point(0.5, 0.5),
            point(1.0, 1.0),
        ];
        for p in &points {
            for q in &points {
                assert!(!(dominates(p, q) && dominates(q, p)));
            }
        }
    }

    #[test]
    fn test_identical_points_are_incomparable() {
        let p = point(0.3, 0.7);
        assert_eq!(Ordering::Equal, domination_ord(&p, &p));
    }

    #[test]
    fn test_domination_ord() {
        assert_eq!(Ordering::Equal, domination_ord(&point(1.0, 2.0), &point(2.0, 1.0)));
        assert_eq!(Ordering::Less, domination_ord(&point(1.0, 2.0), &point(1.0, 3.0)));
        assert_eq!(Ordering::Less, domination_ord(&point(0.0, 2.0), &point(1.0, 2.0)));
        assert_eq!(Ordering::Greater, domination_ord(&point(1.0, 3.0), &point(1.0, 2.0)));
        assert_eq!(Ordering::Greater, domination_ord(&point(1.0, 2.0), &point(0.0, 2.0)));
    }
}
