use rampedit::curve::{demo_set, Curve, CurveColor, CurveKind, CurveSet, Point};
use rampedit::{CurveDelegate, RampEditError};

fn seed() -> CurveSet {
    demo_set()
}

fn sorted(points: &[Point]) -> bool {
    points.windows(2).all(|w| w[0].x <= w[1].x)
}

#[test]
fn edit_moves_point_to_the_end() {
    let mut set = seed();
    let index = set.edit_point(0, 1, Point::new(130.0, 0.9)).unwrap();
    assert_eq!(index, 4);
    assert_eq!(
        set.points(0).unwrap(),
        &[
            Point::new(-10.0, 0.0),
            Point::new(25.0, 0.2),
            Point::new(70.0, 0.4),
            Point::new(120.0, 1.0),
            Point::new(130.0, 0.9),
        ]
    );
}

#[test]
fn add_inserts_between_neighbours() {
    let mut set = seed();
    set.add_point(0, Point::new(50.0, 0.5)).unwrap();
    let points = set.points(0).unwrap();
    assert_eq!(points.len(), 6);
    assert_eq!(points.iter().filter(|p| **p == Point::new(50.0, 0.5)).count(), 1);
    let at = points.iter().position(|p| p.x == 50.0).unwrap();
    assert_eq!(points[at - 1], Point::new(25.0, 0.2));
    assert_eq!(points[at + 1], Point::new(70.0, 0.4));
}

#[test]
fn visibility_toggle_leaves_curve_data_alone() {
    let mut set = seed();
    for k in 0..set.curve_count() {
        let points = set.points(k).unwrap().to_vec();
        let color = set.curve_color(k).unwrap();
        let kind = set.curve_kind(k).unwrap();
        set.toggle_visible(k).unwrap();
        assert!(!set.is_visible(k).unwrap());
        assert_eq!(set.points(k).unwrap(), points.as_slice());
        assert_eq!(set.curve_color(k).unwrap(), color);
        assert_eq!(set.curve_kind(k).unwrap(), kind);
    }
}

#[test]
fn mixed_edits_through_delegate_keep_every_curve_sorted() {
    let mut set = seed();
    let delegate: &mut dyn CurveDelegate = &mut set;
    let count = delegate.curve_count();

    for round in 0..20 {
        let curve = round % count;
        let len = delegate.points(curve).unwrap().len();
        let x = ((round * 37) % 300) as f32 - 100.0;
        let j = delegate
            .edit_point(curve, round % len, Point::new(x, 0.5))
            .unwrap();
        let points = delegate.points(curve).unwrap();
        assert_eq!(points[j].x, x);
        assert!(points[..j].iter().all(|p| p.x < x));

        delegate.add_point(curve, Point::new(x + 1.5, 0.25)).unwrap();
        assert_eq!(delegate.points(curve).unwrap().len(), len + 1);
    }

    assert_eq!(delegate.curve_count(), 3);
    for curve in 0..3 {
        assert!(sorted(delegate.points(curve).unwrap()));
    }
}

#[test]
fn direct_point_access_is_resorted() {
    let mut set = seed();
    {
        let mut points = set.points_mut(2).unwrap();
        points[0] = Point::new(999.0, 0.0);
        points[5].x = -999.0;
    }
    let points = set.points(2).unwrap();
    assert!(sorted(points));
    assert_eq!(points.first().unwrap().x, -999.0);
    assert_eq!(points.last().unwrap().x, 999.0);
}

#[test]
fn bad_indices_are_errors() {
    let mut set = seed();
    assert!(matches!(
        set.curve_color(3),
        Err(RampEditError::CurveIndexOutOfRange { index: 3, count: 3 })
    ));
    assert!(matches!(
        set.edit_point(1, 4, Point::default()),
        Err(RampEditError::PointIndexOutOfRange { curve: 1, index: 4, len: 4 })
    ));
    assert!(set.points_mut(9).is_err());
}

#[test]
fn curves_can_be_supplied_by_the_caller() {
    let set = CurveSet::new(vec![
        Curve::new("a", CurveColor::GREEN, CurveKind::Linear, vec![Point::new(1.0, 1.0)]),
        Curve::new("b", CurveColor::BLUE, CurveKind::Discrete, vec![]).with_visible(false),
    ]);
    assert_eq!(set.curve_count(), 2);
    assert_eq!(set.curve_name(1).unwrap(), "b");
    assert!(!set.is_visible(1).unwrap());
    assert_eq!(set.point_count(1).unwrap(), 0);
    assert_eq!(CurveDelegate::background_color(&set), CurveColor::TRANSPARENT);
}
