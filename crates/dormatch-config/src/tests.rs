use super::*;

const FULL_ROSTER: &str = r#"
[[groups]]
group = "A"
room_count = 2

[[groups.occupants]]
id = "20240001"
name = "Ana"
score = 81

[[groups.occupants]]
id = "20240002"
name = "Bea"
score = 40

[[groups.occupants]]
id = "20240003"
name = "Cay"
score = 66

[[groups]]
group = "B"
room_count = 1
room_scores = [55]

[[groups.occupants]]
id = "20240011"
name = "Dee"
score = 55
"#;

#[test]
fn parses_toml_roster() {
    let config = RosterConfig::from_toml_str(FULL_ROSTER).unwrap();
    config.validate().unwrap();

    let a = config.roster(Group::A).unwrap();
    assert_eq!(a.room_count, 2);
    assert_eq!(a.occupants.len(), 3);
    assert_eq!(a.occupants[0].id, "20240001");
    assert!(a.room_scores.is_none());

    let b = config.roster(Group::B).unwrap();
    assert_eq!(b.room_scores.as_deref(), Some(&[55][..]));
}

#[test]
fn parses_yaml_roster() {
    let config = RosterConfig::from_yaml_str(
        r#"
groups:
  - group: A
    room_count: 1
    occupants:
      - id: "1"
        name: Ana
        score: 10
"#,
    )
    .unwrap();
    config.validate().unwrap();
    assert_eq!(config.roster(Group::A).unwrap().occupants.len(), 1);
    assert!(config.roster(Group::B).is_none());
}

#[test]
fn empty_roster_is_valid() {
    let config = RosterConfig::new();
    config.validate().unwrap();
    assert!(config.roster(Group::A).is_none());
}

#[test]
fn rejects_duplicate_group() {
    let config = RosterConfig::from_toml_str(
        r#"
[[groups]]
group = "A"
room_count = 1

[[groups]]
group = "A"
room_count = 2
"#,
    )
    .unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn rejects_overfull_group() {
    let config = RosterConfig::from_toml_str(
        r#"
[[groups]]
group = "A"
room_count = 1

[[groups.occupants]]
id = "1"
name = "x"
score = 0

[[groups.occupants]]
id = "2"
name = "y"
score = 0

[[groups.occupants]]
id = "3"
name = "z"
score = 0
"#,
    )
    .unwrap();
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::Invalid(_)
    ));
}

#[test]
fn rejects_repeated_occupant_id() {
    let config = RosterConfig::from_toml_str(
        r#"
[[groups]]
group = "A"
room_count = 2

[[groups.occupants]]
id = "1"
name = "x"
score = 0

[[groups.occupants]]
id = "1"
name = "y"
score = 0
"#,
    )
    .unwrap();
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::Invalid(_)
    ));
}

#[test]
fn rejects_mismatched_room_scores() {
    let config = RosterConfig::from_toml_str(
        r#"
[[groups]]
group = "A"
room_count = 2
room_scores = [10]
"#,
    )
    .unwrap();
    assert!(matches!(
        config.validate().unwrap_err(),
        ConfigError::Invalid(_)
    ));
}

#[test]
fn load_missing_file_errors() {
    let err = RosterConfig::load("definitely-not-here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
