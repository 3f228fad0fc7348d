// tests/mission_run.rs
use glam::I64Vec2;
use plateau_rover::{
    Axis, BoundsError, CommandError, Heading, Mission, MissionErrorKind, Outcome, ParseError,
    Plateau, RoverConfig, RoverInterpreter,
};

fn run(input: &str) -> Vec<String> {
    let mission: Mission = input.parse().unwrap();
    RoverInterpreter::standard(RoverConfig::default())
        .run_mission(&mission)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_plateau_rejects_degenerate_bounds() {
    let err = Plateau::from_upper_right(I64Vec2::new(0, 5)).unwrap_err();
    assert_eq!(
        err,
        BoundsError::Degenerate {
            axis: Axis::X,
            min: 0,
            value: 0
        }
    );
    assert!(err.to_string().starts_with("top-right X coordinate should be more than 0"));

    let err = Plateau::from_upper_right(I64Vec2::new(4, 0)).unwrap_err();
    assert!(matches!(err, BoundsError::Degenerate { axis: Axis::Y, .. }));
}

#[test]
fn test_plateau_check_names_violated_bound() {
    let plateau = Plateau::from_upper_right(I64Vec2::new(5, 5)).unwrap();

    assert!(plateau.contains(I64Vec2::ZERO));
    assert!(plateau.contains(I64Vec2::new(5, 5)));
    assert_eq!(
        plateau.check(I64Vec2::new(-1, 3)),
        Err(BoundsError::BelowMin {
            axis: Axis::X,
            min: 0,
            value: -1
        })
    );
    assert_eq!(
        plateau.check(I64Vec2::new(2, 6)),
        Err(BoundsError::AboveMax {
            axis: Axis::Y,
            max: 5,
            value: 6
        })
    );
}

#[test]
fn test_mission_two_rovers() {
    let output = run("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n");
    assert_eq!(output, ["1 3 N", "5 1 E"]);
}

#[test]
fn test_rover_leaving_the_plateau_is_reported_not_fatal() {
    let mission: Mission = "5 5\n4 4 N\nMM\n1 2 N\nMM".parse().unwrap();
    let reports = RoverInterpreter::standard(RoverConfig::default())
        .run_mission(&mission)
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert!(reports[0].left_plateau());
    assert_eq!(
        reports[0].outcome,
        Outcome::LeftPlateau(BoundsError::AboveMax {
            axis: Axis::Y,
            max: 5,
            value: 6
        })
    );
    assert_eq!(reports[0].to_string(), "Rover left the plateau: 4 6 N");

    // The second rover still runs.
    assert!(!reports[1].left_plateau());
    assert_eq!(reports[1].finish.position, I64Vec2::new(1, 4));
    assert_eq!(reports[1].finish.heading, Heading::North);
}

#[test]
fn test_mission_without_rovers() {
    let mission: Mission = "5 5\n".parse().unwrap();
    assert!(mission.is_empty());
    assert!(run("5 5").is_empty());
}

#[test]
fn test_bad_bounds_line() {
    let err = "5,5\n1 2 N\nM".parse::<Mission>().unwrap_err();
    assert_eq!(err.line, 1);
    assert!(matches!(err.kind, MissionErrorKind::Parse(ParseError::MalformedBounds(_))));

    let err = "0 5".parse::<Mission>().unwrap_err();
    assert_eq!(err.line, 1);
    assert!(matches!(err.kind, MissionErrorKind::Bounds(BoundsError::Degenerate { .. })));

    let err = "".parse::<Mission>().unwrap_err();
    assert_eq!(err.kind, MissionErrorKind::Empty);
}

#[test]
fn test_odd_rover_line_count() {
    let err = "5 5\n1 2 N".parse::<Mission>().unwrap_err();
    assert_eq!(err.kind, MissionErrorKind::OddRoverLines(1));
    assert_eq!(err.line, 2);
    assert!(err.to_string().contains("got 1 lines"));
}

#[test]
fn test_start_position_outside_plateau_reports_its_line() {
    let err = "5 5\n1 2 N\nM\n10 2 N\nMM".parse::<Mission>().unwrap_err();
    assert_eq!(err.line, 4);
    assert!(matches!(
        err.kind,
        MissionErrorKind::Bounds(BoundsError::AboveMax { axis: Axis::X, .. })
    ));
    assert!(err.to_string().ends_with("(line 4)"));
}

#[test]
fn test_bad_heading_letter() {
    let err = "5 5\n1 2 Q\nM".parse::<Mission>().unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(
        err.kind,
        MissionErrorKind::Parse(ParseError::InvalidHeading("Q".to_string()))
    );
}

#[test]
fn test_bad_command_fails_whole_mission_with_its_line() {
    let mission: Mission = "5 5\n1 2 N\nMM\n3 3 E\nMMXM".parse().unwrap();
    let err = RoverInterpreter::standard(RoverConfig::default())
        .run_mission(&mission)
        .unwrap_err();

    assert_eq!(err.line, 5);
    assert_eq!(
        err.kind,
        MissionErrorKind::Command(CommandError::UnknownSymbol { symbol: 'X', index: 2 })
    );
}

#[test]
fn test_windows_line_endings_and_trailing_blank_lines() {
    let output = run("5 5\r\n1 2 N\r\nMM\r\n\r\n\n");
    assert_eq!(output, ["1 4 N"]);
}

#[test]
fn test_custom_lower_left() {
    let config = RoverConfig {
        lower_left: I64Vec2::new(-5, -5),
        ..Default::default()
    };
    let mission = Mission::parse("5 5\n0 0 S\nMMMMM", &config).unwrap();
    assert_eq!(mission.plateau.min(), I64Vec2::new(-5, -5));

    let reports = RoverInterpreter::standard(config)
        .run_mission(&mission)
        .unwrap();
    assert_eq!(reports[0].to_string(), "0 -5 S");
}

#[test]
fn test_reports_serialize_to_json() {
    let mission: Mission = "5 5\n4 4 N\nMM".parse().unwrap();
    let reports = RoverInterpreter::standard(RoverConfig::default())
        .run_mission(&mission)
        .unwrap();

    let json = serde_json::to_value(&reports).unwrap();
    let report = &json[0];
    assert_eq!(report["line"], 2);
    assert_eq!(report["finish"]["heading"], "North");
    assert_eq!(report["finish"]["position"], serde_json::json!([4, 6]));
    assert_eq!(report["outcome"]["status"], "left_plateau");
    assert_eq!(report["outcome"]["violation"]["kind"], "above_max");
}

#[test]
fn test_move_past_i32_edge_leaves_the_plateau() {
    let edge = i64::from(i32::MAX);
    let mission: Mission = "2147483647 2147483647\n2147483647 2147483647 N\nM"
        .parse()
        .unwrap();
    let reports = RoverInterpreter::standard(RoverConfig::default())
        .run_mission(&mission)
        .unwrap();

    assert_eq!(reports[0].finish.position, I64Vec2::new(edge, edge + 1));
    assert_eq!(
        reports[0].outcome,
        Outcome::LeftPlateau(BoundsError::AboveMax {
            axis: Axis::Y,
            max: edge,
            value: edge + 1
        })
    );
}

#[test]
fn test_large_move_distance_leaves_the_plateau() {
    let config = RoverConfig {
        move_distance: i32::MAX,
        ..Default::default()
    };
    let mission = Mission::parse("5 5\n0 0 E\nMM", &config).unwrap();
    let reports = RoverInterpreter::standard(config)
        .run_mission(&mission)
        .unwrap();

    assert_eq!(reports[0].finish.position.x, 2 * i64::from(i32::MAX));
    assert!(reports[0].left_plateau());
}

#[test]
fn test_coordinates_beyond_i32_are_rejected() {
    let err = "2147483648 5".parse::<Mission>().unwrap_err();
    assert!(matches!(err.kind, MissionErrorKind::Parse(ParseError::MalformedBounds(_))));
}

#[test]
fn test_plateau_deserialization_enforces_corners() {
    let plateau: Plateau = serde_json::from_str(r#"{"min":[0,0],"max":[5,5]}"#).unwrap();
    assert_eq!(plateau.max(), I64Vec2::new(5, 5));

    let err = serde_json::from_str::<Plateau>(r#"{"min":[5,5],"max":[0,0]}"#).unwrap_err();
    assert!(err.to_string().contains("top-right X coordinate should be more than 5"));
}
