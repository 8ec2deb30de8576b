use sc2_speedmine::{mining_targets::mining_target, prelude::*};

const R: f32 = 1.35;
const EPS: f32 = 1e-3;

#[test]
fn intersection_lies_on_both_circles() {
	let c0 = Point2::new(0.0, 0.0);
	let c1 = Point2::new(2.0, 0.0);
	let points = Point2::circle_intersection(c0, R, c1, R).expect("circles intersect");

	for p in &points {
		assert!((p.distance(c0) - R).abs() < EPS);
		assert!((p.distance(c1) - R).abs() < EPS);
	}
	assert!((points[0].x - 1.0).abs() < EPS);
	assert!((points[0].y + points[1].y).abs() < EPS);
}

#[test]
fn degenerate_circles_have_no_intersection() {
	let c = Point2::new(3.0, 3.0);
	assert_eq!(Point2::circle_intersection(c, R, c, R), None);
	assert_eq!(Point2::circle_intersection(c, R, Point2::new(10.0, 3.0), R), None);
	assert_eq!(Point2::circle_intersection(c, 5.0, Point2::new(3.5, 3.0), 1.0), None);
}

#[test]
fn lone_mineral_target_faces_anchor() {
	let mineral = Point2::new(10.0, 10.0);
	let anchor = Point2::new(10.0, 20.0);
	let target = mining_target(mineral, vec![mineral], anchor, R);

	assert!((target.distance(mineral) - R).abs() < EPS);
	assert!((target.x - 10.0).abs() < EPS);
	assert!(target.y > mineral.y);
}

#[test]
fn close_neighbour_moves_target_to_intersection() {
	let mineral = Point2::new(0.0, 0.0);
	let neighbour = Point2::new(1.0, 0.0);
	let anchor = Point2::new(0.0, 10.0);
	let target = mining_target(mineral, vec![mineral, neighbour], anchor, R);

	// both candidates are R away from both minerals, the one facing anchor is chosen
	assert!((target.distance(mineral) - R).abs() < EPS);
	assert!((target.distance(neighbour) - R).abs() < EPS);
	assert!((target.x - 0.5).abs() < EPS);
	assert!(target.y > 0.0);
}

#[test]
fn far_neighbour_is_ignored() {
	let mineral = Point2::new(0.0, 0.0);
	let anchor = Point2::new(0.0, 10.0);
	let target = mining_target(mineral, vec![Point2::new(3.0, 0.0)], anchor, R);

	assert_eq!(target, mineral.towards(anchor, R));
}

#[test]
fn targets_cover_all_minerals() {
	let minerals = vec![
		MineralSite::new(1, Point2::new(43.0, 50.0)),
		MineralSite::new(2, Point2::new(43.0, 51.0)),
		MineralSite::new(3, Point2::new(57.0, 50.0)),
	]
	.into_iter()
	.collect::<Units<_>>();
	let mut targets = sc2_speedmine::mining_targets::MiningTargets::new();

	assert!(targets.refresh(&minerals, &[Point2::new(50.0, 50.0)], Point2::default(), R));
	assert_eq!(targets.len(), 3);
	assert!(targets.covers(&minerals));
	// nothing new, cache is kept
	assert!(!targets.refresh(&minerals, &[Point2::new(50.0, 50.0)], Point2::default(), R));

	let lone = targets.get(Point2::new(57.0, 50.0)).expect("target is calculated");
	assert!((lone.x - (57.0 - R)).abs() < EPS);
	assert!((lone.y - 50.0).abs() < EPS);
}
