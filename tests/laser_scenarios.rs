use approx::assert_relative_eq;
use planar_laser::{
    DirectionCheck, Laser2D, Laser2DParams, LineMap, NoNoise, Point2, Pose2, RngNoise,
    SimulatedRangeSensor,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const ZERO_COV: [[f64; 2]; 2] = [[0.0, 0.0], [0.0, 0.0]];

/// A closed rectangular room, symmetric about the x axis
fn room() -> LineMap {
    LineMap::from_xy(&[(-4.0, -3.0), (6.0, -3.0), (6.0, 3.0), (-4.0, 3.0), (-4.0, -3.0)])
}

#[test]
fn wall_on_beam_bearing_from_rotated_pose() {
    let params = Laser2DParams::new(FRAC_PI_2, FRAC_PI_4, 10.0, ZERO_COV);
    let laser = Laser2D::new(params, Pose2::new(1.0, 2.0, FRAC_PI_2)).unwrap();
    let map = LineMap::from_xy(&[(-10.0, 6.0), (10.0, 6.0)]);

    let z = laser.observe(&map, &mut NoNoise);
    assert_eq!(z.n_beams(), 3);
    assert_relative_eq!(z.ranges()[0], 4.0 * 2.0f64.sqrt(), epsilon = 1.0e-9);
    assert_relative_eq!(z.ranges()[1], 4.0, epsilon = 1.0e-9);
    assert_relative_eq!(z.ranges()[2], 4.0 * 2.0f64.sqrt(), epsilon = 1.0e-9);
}

#[test]
fn symmetric_room_gives_symmetric_ranges() {
    let params = Laser2DParams::new(PI, PI / 8.0, 20.0, ZERO_COV);
    let laser = Laser2D::new(params, Pose2::default()).unwrap();

    let z = laser.observe(&room(), &mut NoNoise);
    let r = z.ranges();
    assert_eq!(r.len(), 9);
    for i in 0..r.len() {
        assert_relative_eq!(r[i], r[r.len() - 1 - i], epsilon = 1.0e-9);
    }

    assert_relative_eq!(r[0], 3.0, epsilon = 1.0e-9);
    assert_relative_eq!(r[2], 3.0 * 2.0f64.sqrt(), epsilon = 1.0e-9);
    assert_relative_eq!(r[4], 6.0, epsilon = 1.0e-9);
}

#[test]
fn direction_checks_agree_inside_room() {
    let base = Laser2DParams::new(2.0 * PI - 0.1, 0.05, 20.0, ZERO_COV);
    let pose = Pose2::new(0.5, -0.7, 0.27);
    let sign = Laser2D::new(base.clone(), pose).unwrap();
    let forward =
        Laser2D::new(base.with_direction_check(DirectionCheck::Forward), pose).unwrap();

    let a = sign.observe(&room(), &mut NoNoise);
    let b = forward.observe(&room(), &mut NoNoise);
    for (ra, rb) in a.ranges().iter().zip(b.ranges()) {
        assert_relative_eq!(*ra, *rb, epsilon = 1.0e-9);
        assert!(*ra < 20.0);
    }
}

#[test]
fn noise_free_observations_are_repeatable() {
    let params = Laser2DParams::new(PI, PI / 16.0, 20.0, ZERO_COV);
    let mut laser = Laser2D::new(params, Pose2::new(-1.0, 0.5, 0.4)).unwrap();

    let first = laser.take_observation(&room(), &mut RngNoise::thread());
    let second = laser.take_observation(&room(), &mut RngNoise::thread());
    assert_eq!(first, second);
}

#[test]
fn seeded_noise_is_reproducible() {
    let params = Laser2DParams::new(PI, PI / 16.0, 20.0, [[0.01, 0.0], [0.0, 0.001]]);
    let pose = Pose2::new(0.0, 0.0, 0.0);
    let mut a = Laser2D::new(params.clone(), pose).unwrap();
    let mut b = Laser2D::new(params, pose).unwrap();

    let za = a.take_observation(&room(), &mut RngNoise::seeded(42));
    let zb = b.take_observation(&room(), &mut RngNoise::seeded(42));
    assert_eq!(za, zb);

    let clean = a.observe(&room(), &mut NoNoise);
    assert_ne!(za, clean);
}

#[test]
fn range_noise_matches_covariance() {
    let params = Laser2DParams::new(0.2, 0.1, 20.0, [[0.01, 0.0], [0.0, 0.0025]]);
    let laser = Laser2D::new(params, Pose2::default()).unwrap();
    let mut noise = RngNoise::seeded(9);

    let n = 3000;
    let mut ranges = Vec::with_capacity(n);
    let mut bearings = Vec::with_capacity(n);
    for _ in 0..n {
        let z = laser.observe(&room(), &mut noise);
        let (range, bearing) = z.column(1).unwrap();
        ranges.push(range - 6.0);
        bearings.push(bearing);
    }

    let (mean, std) = mean_std(&ranges);
    assert_relative_eq!(mean, 0.0, epsilon = 0.01);
    assert_relative_eq!(std, 0.1, epsilon = 0.01);

    let (mean, std) = mean_std(&bearings);
    assert_relative_eq!(mean, 0.0, epsilon = 0.005);
    assert_relative_eq!(std, 0.05, epsilon = 0.005);
}

#[test]
fn endpoints_land_on_the_wall() {
    let params = Laser2DParams::new(FRAC_PI_2, PI / 8.0, 20.0, ZERO_COV);
    let pose = Pose2::new(1.0, 1.0, 0.3);
    let mut laser = Laser2D::new(params, pose).unwrap();
    let map = LineMap::from_xy(&[(5.0, -10.0), (5.0, 10.0)]);

    laser.take_observation(&map, &mut NoNoise);
    let z = laser.last_observation().unwrap();
    assert_eq!(z.n_beams(), 5);
    for p in z.endpoints(laser.pose()) {
        assert_relative_eq!(p.x, 5.0, epsilon = 1.0e-9);
        assert!(p.y.abs() < 10.0);
    }
}

#[test]
fn config_from_json_drives_sensor() {
    let text = r#"{
        "fov": 3.141592653589793,
        "resolution": 1.5707963267948966,
        "max_distance": 10.0,
        "noise_cov": [[0.0, 0.0], [0.0, 0.0]]
    }"#;
    let params = Laser2DParams::from_json_str(text).unwrap();
    let laser = Laser2D::new(params, Pose2::default()).unwrap();
    let map = LineMap::try_new(vec![Point2::new(5.0, -5.0), Point2::new(5.0, 5.0)]).unwrap();

    let z = laser.observe(&map, &mut NoNoise);
    assert_eq!(z.ranges(), &[10.0, 5.0, 10.0]);
}

fn mean_std(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}
