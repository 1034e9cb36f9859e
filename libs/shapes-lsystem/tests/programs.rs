use shapes_lsystem::{create_lsystem, parse, LSystem, LSystemError, ParseErrorKind};
use shapes_mesh::primitives::create_cylinder;
use shapes_mesh::MeshError;

const TREE: &str = "
    sx 2 sy 2 ry 90 rx 90
    shape tube rx 15 call rlimb rx -15 call llimb
    rule rlimb sx 0.925 sy 0.925 tz 1 rx 1.2 call rlimb2
    rule rlimb2.1 shape connect call rlimb
    rule rlimb2.1 rx 15 shape connect call rlimb
    rule rlimb2.1 rz 90 call rlimb
    rule llimb sx 0.925 sy 0.925 tz 1 rx -1.2 call llimb2
    rule llimb2.1 shape connect call llimb
    rule llimb2.1 rx -15 shape connect call llimb
    rule llimb2.1 rz 90 call llimb
";

#[test]
fn scenario_d_single_connect_matches_unit_tube() {
    let tube = create_cylinder(10, 1).unwrap();
    let mesh = create_lsystem("shape connect", 10, 1).unwrap();
    assert_eq!(mesh.triangle_count(), tube.triangle_count());
    assert_eq!(mesh.point_count(), tube.point_count());
}

#[test]
fn tree_program_builds_valid_mesh() {
    let output = LSystem::new(parse(TREE).unwrap()).generate(5, 40).unwrap();
    assert!(output.tubes > 1);
    assert!(output.dropped_calls > 0);
    assert!(output.mesh.validate().is_ok());
}

#[test]
fn tree_program_is_reproducible() {
    let lsystem = LSystem::new(parse(TREE).unwrap());
    let a = lsystem.generate_with_seed(5, 30, 9).unwrap();
    let b = lsystem.generate_with_seed(5, 30, 9).unwrap();
    assert_eq!(a.mesh, b.mesh);
    assert_eq!(a.tubes, b.tubes);
}

#[test]
fn max_depth_bounds_tube_count() {
    let text = "call grow rule grow shape connect tz 1 call grow";
    for depth in 1..6 {
        let output = LSystem::new(parse(text).unwrap()).generate(4, depth).unwrap();
        assert_eq!(output.tubes, depth - 1);
    }
}

#[test]
fn parse_errors_surface_through_create() {
    let err = create_lsystem("shape connect call nowhere", 4, 2).unwrap_err();
    match err {
        LSystemError::Parse(e) => {
            assert_eq!(e.kind, ParseErrorKind::UnknownRule { name: "nowhere".to_string() })
        }
        other => panic!("expected parse error, got {other}"),
    }
    assert!(matches!(create_lsystem("", 4, 2), Err(LSystemError::Parse(_))));
}

#[test]
fn oversized_scene_reports_index_overflow() {
    let text = "call split rule split shape disjoint call split call split";
    let err = create_lsystem(text, 100, 12).unwrap_err();
    assert!(matches!(err, LSystemError::Mesh(MeshError::TooManyVertices { .. })));
}
