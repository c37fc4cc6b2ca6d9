/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use poscar_rs::poscar::{
    self, parse, read_poscar, serialize, write_poscar, PoscarConfig, PoscarParser, PoscarWriter,
};
use poscar_rs::{CoordinateSystem, DynamicsFlag, PoscarError, Structure};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const QUARTZ: &str = "\
alpha quartz fragment
   1.0
     4.9160 0.0000 0.0000
    -2.4580 4.2574 0.0000
     0.0000 0.0000 5.4054
   Si O
   2 4
Direct
  0.4697 0.0000 0.0000
  0.0000 0.4697 0.6667
  0.4135 0.2669 0.1191
  0.2669 0.4135 0.5475
  0.7331 0.1466 0.7857
  0.5865 0.8534 0.2142
";

const SLAB: &str = "\
Cu slab

  3.61
  0.5 0.5 0.0
  0.0 0.5 0.5
  0.5 0.0 0.5
  Cu
  3
Selective Dynamics
Direct
  0.0 0.0 0.0   F F F
  0.1 0.2 0.3   T T T
  -0.2 0.4 1.1  T F T

";

/// Compare two structures, allowing for the fixed output precision
fn assert_same_structure(a: &Structure, b: &Structure) {
    assert_eq!(a.title, b.title);
    assert_relative_eq!(a.scale, b.scale, epsilon = 1e-12);
    for (ra, rb) in a.lattice.iter().zip(&b.lattice) {
        assert_relative_eq!(ra.x, rb.x, epsilon = 1e-14);
        assert_relative_eq!(ra.y, rb.y, epsilon = 1e-14);
        assert_relative_eq!(ra.z, rb.z, epsilon = 1e-14);
    }
    assert_eq!(a.species, b.species);
    assert_eq!(a.atom_counts, b.atom_counts);
    assert_eq!(a.coordinate_system, b.coordinate_system);
    assert_eq!(a.selective_dynamics, b.selective_dynamics);
    assert_eq!(a.positions.len(), b.positions.len());
    for (pa, pb) in a.positions.iter().zip(&b.positions) {
        assert_relative_eq!(pa.x, pb.x, epsilon = 1e-14);
        assert_relative_eq!(pa.y, pb.y, epsilon = 1e-14);
        assert_relative_eq!(pa.z, pb.z, epsilon = 1e-14);
    }
    if a.selective_dynamics {
        assert_eq!(a.dynamics_flags, b.dynamics_flags);
    }
}

#[test]
fn test_parse_species_and_counts() {
    let s = parse(QUARTZ).unwrap();
    assert_eq!(s.species, vec!["Si", "O"]);
    assert_eq!(s.atom_counts, vec![2, 4]);
    assert_eq!(s.total_atoms(), 6);
    assert_eq!(s.positions.len(), 6);
    assert_relative_eq!(s.lattice[1].x, -2.4580);
    assert_eq!(
        s.atom_species().collect::<Vec<_>>(),
        vec!["Si", "Si", "O", "O", "O", "O"]
    );
}

#[test]
fn test_parse_selective_dynamics_block() {
    let s = parse(SLAB).unwrap();
    assert!(s.selective_dynamics);
    assert_eq!(s.coordinate_system, CoordinateSystem::Direct);
    assert_eq!(s.dynamics_flags[0], [DynamicsFlag::Fixed; 3]);
    assert_eq!(
        s.dynamics_flags[2],
        [DynamicsFlag::Free, DynamicsFlag::Fixed, DynamicsFlag::Free]
    );
    assert_relative_eq!(s.positions[2].z, 1.1);
}

#[test]
fn test_round_trip() {
    for text in [QUARTZ, SLAB] {
        let original = parse(text).unwrap();
        let reparsed = parse(&serialize(&original)).unwrap();
        assert_same_structure(&original, &reparsed);
    }
}

#[test]
fn test_round_trip_after_cartesian_conversion() {
    let mut s = parse(SLAB).unwrap();
    s.to_cartesian();
    let text = serialize(&s);
    assert!(text.contains("\nCartesian\n"));
    assert!(text.contains("\n   1.0000000000000\n"));
    assert_same_structure(&s, &parse(&text).unwrap());
}

#[test]
fn test_flags_not_written_without_selective_dynamics() {
    let s = parse(QUARTZ).unwrap();
    let text = serialize(&s);
    assert!(!text.contains("Selective"));
    assert!(!text.contains(" F"));
    assert!(text.ends_with("\n"));
}

#[test]
fn test_count_mismatch_is_format_error() {
    let truncated: String = QUARTZ.lines().take(12).collect::<Vec<_>>().join("\n");
    match parse(&truncated) {
        Err(PoscarError::Format { operation, .. }) => assert_eq!(operation, "parse"),
        other => panic!("expected format error, got {:?}", other),
    }

    let miscounted = QUARTZ.replace("   2 4\n", "   2 5\n");
    assert!(matches!(parse(&miscounted), Err(PoscarError::Format { .. })));

    let mislabelled = QUARTZ.replace("   Si O\n", "   Si\n");
    assert!(matches!(parse(&mislabelled), Err(PoscarError::Format { .. })));
}

#[test]
fn test_bad_numbers_are_format_errors() {
    let bad_scale = QUARTZ.replace("   1.0\n", "   one\n");
    assert!(matches!(parse(&bad_scale), Err(PoscarError::Format { .. })));

    let bad_coordinate = QUARTZ.replace("0.4135 0.2669 0.1191", "0.4135 x 0.1191");
    assert!(matches!(parse(&bad_coordinate), Err(PoscarError::Format { .. })));
}

#[test]
fn test_read_write_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("POSCAR");
    fs::write(&input, SLAB).unwrap();

    let structure = read_poscar(&input).unwrap();
    let output = dir.path().join("CONTCAR");
    write_poscar(&structure, &output).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, serialize(&structure));
    assert_same_structure(&structure, &read_poscar(&output).unwrap());
}

#[test]
fn test_write_rejects_inconsistent_structure() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("POSCAR");
    let mut s = parse(QUARTZ).unwrap();
    s.positions.pop();

    assert!(matches!(write_poscar(&s, &output), Err(PoscarError::Format { .. })));
    assert!(!output.exists());
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist");
    match read_poscar(&path) {
        Err(PoscarError::MissingFile(p)) => assert_eq!(p, path),
        other => panic!("expected missing file error, got {:?}", other),
    }
}

#[test]
fn test_config_driven_read_and_overwrite() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("POSCAR");
    fs::write(&input, QUARTZ).unwrap();

    let config = PoscarConfig::new(&input);
    let mut structure = PoscarParser::new(config.clone())
        .read(None::<&Path>)
        .unwrap();
    structure.title = "edited".to_string();
    PoscarWriter::new(config).write(&structure, None::<&Path>).unwrap();

    let reread = read_poscar(&input).unwrap();
    assert_eq!(reread.title, "edited");
}

#[test]
fn test_show_writes_serialized_text() {
    let s = parse(QUARTZ).unwrap();
    let mut sink = Vec::new();
    poscar::show(&s, &mut sink).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), serialize(&s));
}
