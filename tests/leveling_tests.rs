mod support;

use approx::assert_abs_diff_eq;
use bikegeo::solver::{Stage, stage_points};
use bikegeo::{Parameters, PointId};
use support::{point, scenario_params, solve};

fn variants() -> Vec<Parameters> {
    let base = scenario_params();
    vec![
        base.clone(),
        Parameters {
            r1_size: 10.0,
            ..base.clone()
        },
        Parameters {
            r2_size: 11.5,
            t2_size: 2.0,
            ..base.clone()
        },
        Parameters {
            t_length: 1.5,
            ..base.clone()
        },
        Parameters {
            s_mode: true,
            ..base.clone()
        },
        Parameters {
            b_drop: -1.0,
            d_angle: 40.0,
            ..base
        },
    ]
}

#[test]
fn ground_tangent_lies_on_y_zero_for_every_variant() {
    for params in variants() {
        let geometry = solve(&params);
        let ground = geometry.ground_tangent().unwrap();
        assert_abs_diff_eq!(ground.start.y, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ground.end.y, 0.0, epsilon = 1e-9);
        let r = geometry.rotations;
        assert_eq!(r.total, r.wheelbase + r.wheel_tangent);
    }
}

#[test]
fn ground_touches_each_wheel_straight_below_its_axle() {
    let geometry = solve(&Parameters {
        r1_size: 10.0,
        ..scenario_params()
    });
    let ground = geometry.ground_tangent().unwrap();
    let front = point(&geometry, PointId::TEnd);
    let rear = point(&geometry, PointId::SEnd);
    assert_abs_diff_eq!(ground.start.x, front.x, epsilon = 1e-9);
    assert_abs_diff_eq!(ground.end.x, rear.x, epsilon = 1e-9);
    assert_abs_diff_eq!(front.y, geometry.sizes.w1, epsilon = 1e-9);
    assert_abs_diff_eq!(rear.y, geometry.sizes.w2, epsilon = 1e-9);
}

#[test]
fn leveling_is_a_rigid_motion() {
    let ids = [
        PointId::BStart,
        PointId::BEnd,
        PointId::AEnd,
        PointId::FEnd,
        PointId::TEnd,
        PointId::SEnd,
        PointId::CrankEnd,
        PointId::NdsCrankEnd,
        PointId::DrvCenter,
        PointId::TangentPointD2,
    ];
    for params in variants() {
        let before = stage_points(&params, Stage::Gears).unwrap();
        let after = stage_points(&params, Stage::Leveled).unwrap();
        for a in ids {
            for b in ids {
                let d0 = (before.require(a).unwrap() - before.require(b).unwrap()).norm();
                let d1 = (after.require(a).unwrap() - after.require(b).unwrap()).norm();
                assert_abs_diff_eq!(d0, d1, epsilon = 1e-9);
            }
            // Z passes through untouched
            assert_abs_diff_eq!(
                before.require(a).unwrap().z,
                after.require(a).unwrap().z,
                epsilon = 1e-12
            );
        }
    }
}

#[test]
fn bb_height_is_the_leveled_bottom_bracket() {
    for params in variants() {
        let geometry = solve(&params);
        assert_eq!(geometry.sizes.bb_height, point(&geometry, PointId::BStart).y);
    }
}

#[test]
fn handlebar_follows_the_leveled_head_tube() {
    let geometry = solve(&Parameters {
        r1_size: 9.0,
        ..scenario_params()
    });
    let f_end = point(&geometry, PointId::FEnd);
    let p_end = point(&geometry, PointId::PEnd);
    let top = point(&geometry, PointId::StemTop);
    let base = point(&geometry, PointId::StemBase);
    let steerer = (f_end - p_end).normalize();
    let stem = (base - top).normalize();
    assert_abs_diff_eq!(steerer.x, stem.x, epsilon = 1e-9);
    assert_abs_diff_eq!(steerer.y, stem.y, epsilon = 1e-9);
}
