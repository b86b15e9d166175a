use geoseg::{BusStop, Endpoint, GeoPoint, Place, ReferenceablePoint, Segment, SegmentError};

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Points on the equator, `deg` degrees east of Greenwich
fn equator(deg: f64) -> GeoPoint {
    GeoPoint::new(0.0, deg)
}

#[test]
fn distance_matches_the_point_type() {
    let pairs = [
        (GeoPoint::new(39.8628, -4.0228), GeoPoint::new(39.8568, -4.0240)),
        (GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(51.5072, -0.1276)),
        (equator(0.0), equator(10.0)),
    ];

    for (from, to) in pairs {
        let seg = Segment::new(from, to).unwrap();
        assert_eq!(seg.distance(), from.distance_to(&to));
    }
}

#[test]
fn coincident_points() {
    let p = GeoPoint::new(39.8628, -4.0228);
    assert_eq!(Segment::new(p, p).unwrap().distance(), 0.0);
}

#[test]
fn missing_or_invalid_origin() {
    let to = Some(equator(1.0));
    assert_eq!(
        Segment::from_optional(None, to).unwrap_err(),
        SegmentError::UnreferenceablePoint(Endpoint::From)
    );
    assert_eq!(
        Segment::new(GeoPoint::new(f64::NAN, 0.0), equator(1.0)).unwrap_err(),
        SegmentError::UnreferenceablePoint(Endpoint::From)
    );
}

#[test]
fn missing_or_invalid_destination() {
    assert_eq!(
        Segment::from_optional(Some(equator(1.0)), None).unwrap_err(),
        SegmentError::UnreferenceablePoint(Endpoint::To)
    );

    let broken = Place::from(BusStop::new("", "No id", equator(1.0)));
    assert_eq!(
        Segment::new(Place::from(equator(0.0)), broken).unwrap_err(),
        SegmentError::UnreferenceablePoint(Endpoint::To)
    );
}

#[test]
fn ordering_by_distance_only() {
    let one = Segment::new(equator(0.0), equator(1.0)).unwrap();
    let two_a = Segment::new(equator(0.0), equator(2.0)).unwrap();
    let two_b = Segment::new(equator(10.0), equator(12.0)).unwrap();

    let mut segments = vec![two_a.clone(), one.clone(), two_b.clone()];
    segments.sort_by(|a, b| a.compare_to(b));

    assert_eq!(segments[0], one);
    assert_eq!(one.compare_to(&two_a), Ordering::Less);
    assert_eq!(two_a.compare_to(&one), Ordering::Greater);
    assert_eq!(two_a.compare_to(&two_b), Ordering::Equal);
    assert_ne!(two_a, two_b);
}

#[test]
fn equal_points_make_equal_segments() {
    let a = Segment::new(equator(0.0), equator(3.0)).unwrap();
    let b = Segment::new(equator(0.0), equator(3.0)).unwrap();

    assert_eq!(a, b);
    assert_eq!(a, a);
    assert_eq!(hash_of(&a), hash_of(&b));

    let set: HashSet<_> = [a.clone(), b].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert!(set.contains(&a));
}

#[test]
fn changing_an_endpoint_breaks_equality() {
    let here = GeoPoint::new(39.8628, -4.0228);
    let stop = BusStop::new("P010", "Alcazar", GeoPoint::new(39.8620, -4.0210));
    let renamed = BusStop { id: "P011".to_string(), ..stop.clone() };

    let a = Segment::new(Place::from(here), Place::from(stop)).unwrap();
    let b = Segment::new(Place::from(here), Place::from(renamed)).unwrap();

    // same distance, different stop
    assert_eq!(a.distance(), b.distance());
    assert_ne!(a, b);

    let reversed = Segment::new(a.to().clone(), a.from().clone()).unwrap();
    assert_ne!(a, reversed);
}

#[test]
fn display() {
    let seg = Segment::new(equator(0.0), equator(0.0)).unwrap();
    assert_eq!(seg.to_string(), "from: [0, 0], to: [0, 0], distance: 0.0");

    let here = GeoPoint::new(39.5, -4.25);
    let stop = BusStop::new("P001", "Zocodover", here);
    let seg = Segment::new(Place::from(here), Place::from(stop)).unwrap();
    assert_eq!(seg.to_string(), "from: [39.5, -4.25], to: [P001 (Zocodover) @ 39.5, -4.25], distance: 0.0");
}

#[test]
fn segments_can_be_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Segment<GeoPoint>>();
    assert_send_sync::<Segment<Place>>();
}
