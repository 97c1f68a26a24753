//! Integration tests for reformatting field files

use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

use hydroplot_grid::{
    angular_spacing, read_radius_table, Error, GridShape, RadialAxis, Record, Reformatter,
};
use rstest::{fixture, rstest};
use tempfile::TempDir;

/// Write samples exactly as a simulation would, native byte order
fn write_field(path: &Path, values: &[f64]) {
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    fs::write(path, bytes).unwrap();
}

/// Decode little-endian records of `width` doubles
fn read_output(path: &Path, width: usize) -> Vec<Vec<f64>> {
    let bytes = fs::read(path).unwrap();
    assert_eq!(bytes.len() % (8 * width), 0);
    bytes
        .chunks_exact(8 * width)
        .map(|record| {
            record
                .chunks_exact(8)
                .map(|b| f64::from_le_bytes(b.try_into().unwrap()))
                .collect()
        })
        .collect()
}

/// Deterministic field where every sample is unique
fn sample_values(shape: GridShape) -> Vec<f64> {
    (0..shape.number_of_samples())
        .map(|i| 1.0 + i as f64 * 0.25)
        .collect()
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

#[fixture]
fn workspace() -> Workspace {
    Workspace {
        dir: tempfile::tempdir().unwrap(),
    }
}

#[rstest]
fn worked_example(workspace: Workspace) {
    let input = workspace.path("gasdens0.dat");
    let output = workspace.path("gasdens0.bin");
    write_field(&input, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let n = Reformatter::new()
        .reformat_file(&input, GridShape::new(2, 3), &RadialAxis::linear(0.0, 2.0), &output)
        .unwrap();
    assert_eq!(n, 8);

    let records = read_output(&output, 3);
    let expected = [
        [0.0, 0.0, 1.0],
        [PI, 0.0, 2.0],
        [2.0 * PI, 0.0, 3.0],
        [3.0 * PI, 0.0, 1.0],
        [0.0, 1.0, 4.0],
        [PI, 1.0, 5.0],
        [2.0 * PI, 1.0, 6.0],
        [3.0 * PI, 1.0, 4.0],
    ];
    for (record, expected) in records.iter().zip(expected.iter()) {
        assert_eq!(record.as_slice(), expected.as_slice());
    }
}

#[rstest]
#[case(1, 2)]
#[case(4, 5)]
#[case(16, 32)]
#[case(7, 128)]
fn surface_record_count(workspace: Workspace, #[case] nrad: usize, #[case] nsec: usize) {
    let shape = GridShape::new(nrad, nsec);
    let input = workspace.path("field.dat");
    let output = workspace.path("field.bin");
    write_field(&input, &sample_values(shape));

    let n = Reformatter::new()
        .reformat_file(&input, shape, &RadialAxis::linear(0.4, 2.5), &output)
        .unwrap();

    assert_eq!(n, nrad * (nsec + 1));
    assert_eq!(
        fs::metadata(&output).unwrap().len() as usize,
        nrad * (nsec + 1) * Record::BYTES
    );
}

#[rstest]
#[case(3, 4)]
#[case(10, 17)]
fn closing_record_repeats_first_sample(workspace: Workspace, #[case] nrad: usize, #[case] nsec: usize) {
    let shape = GridShape::new(nrad, nsec);
    let input = workspace.path("field.dat");
    let output = workspace.path("field.bin");
    write_field(&input, &sample_values(shape));

    Reformatter::new()
        .reformat_file(&input, shape, &RadialAxis::linear(1.0, 3.0), &output)
        .unwrap();

    let dx = angular_spacing(nsec);
    for row in read_output(&output, 3).chunks_exact(nsec + 1) {
        let first = &row[0];
        let last = &row[nsec];
        assert_eq!(last[0], nsec as f64 * dx);
        assert_eq!(last[1], first[1]);
        assert_eq!(last[2], first[2]);
    }
}

#[rstest]
fn curve_mode_averages_rows(workspace: Workspace) {
    let shape = GridShape::new(3, 4);
    let values = sample_values(shape);
    let input = workspace.path("field.dat");
    let output = workspace.path("profile.bin");
    write_field(&input, &values);

    let reformatter = Reformatter::builder().curve(true).build();
    let n = reformatter
        .reformat_file(&input, shape, &RadialAxis::linear(0.0, 3.0), &output)
        .unwrap();
    assert_eq!(n, 3);

    let records = read_output(&output, 2);
    for (j, (record, row)) in records.iter().zip(values.chunks_exact(4)).enumerate() {
        let mean = row.iter().sum::<f64>() / 4.0;
        assert_eq!(record[0], j as f64);
        assert!((record[1] - mean).abs() < 1e-12);
    }
}

#[rstest]
fn radius_table_overrides_bounds(workspace: Workspace) {
    let shape = GridShape::new(3, 2);
    let input = workspace.path("field.dat");
    let table = workspace.path("used_rad.dat");
    let output = workspace.path("field.bin");
    write_field(&input, &sample_values(shape));

    // edges as written by the simulation, nrad + 1 of them
    fs::write(&table, "0.4\n0.55\n\n0.7 extra\n0.85\n").unwrap();
    let radii = read_radius_table(&table).unwrap();
    assert_eq!(radii, vec![0.4, 0.55, 0.7, 0.85]);

    Reformatter::new()
        .reformat_file(&input, shape, &RadialAxis::Table(radii.clone()), &output)
        .unwrap();

    for (j, row) in read_output(&output, 3).chunks_exact(3).enumerate() {
        assert!(row.iter().all(|record| record[1] == radii[j]));
    }
}

#[rstest]
#[case(0.0, 0.0, [0.0, 1.0, 2.0, 3.0])]
#[case(5.0, 5.0, [5.0, 6.0, 7.0, 8.0])]
#[case(1.0, 3.0, [1.0, 1.5, 2.0, 2.5])]
fn linear_radii(
    workspace: Workspace,
    #[case] rmin: f64,
    #[case] rmax: f64,
    #[case] expected: [f64; 4],
) {
    let shape = GridShape::new(4, 2);
    let input = workspace.path("field.dat");
    let output = workspace.path("profile.bin");
    write_field(&input, &sample_values(shape));

    Reformatter::builder()
        .curve(true)
        .build()
        .reformat_file(&input, shape, &RadialAxis::linear(rmin, rmax), &output)
        .unwrap();

    let radii: Vec<f64> = read_output(&output, 2).iter().map(|r| r[0]).collect();
    assert_eq!(radii, expected.to_vec());
}

#[rstest]
fn log_scale_values(workspace: Workspace) {
    let input = workspace.path("field.dat");
    let output = workspace.path("field.bin");
    write_field(&input, &[1.0, 10.0, 100.0, 1000.0]);

    Reformatter::builder()
        .log_scale(true)
        .build()
        .reformat_file(&input, GridShape::new(1, 4), &RadialAxis::default(), &output)
        .unwrap();

    let values: Vec<f64> = read_output(&output, 3).iter().map(|r| r[2]).collect();
    for (value, expected) in values.iter().zip([0.0, 1.0, 2.0, 3.0, 0.0]) {
        assert!((value - expected).abs() < 1e-12);
    }
    assert_eq!(values.len(), 5);
}

#[rstest]
fn one_dimensional_profile_is_broadcast(workspace: Workspace) {
    let input = workspace.path("gasdens1D0.dat");
    let output = workspace.path("gasdens1D0.bin");
    write_field(&input, &[2.0, 4.0]);

    let n = Reformatter::new()
        .reformat_profile_file(&input, GridShape::new(2, 3), &RadialAxis::linear(1.0, 1.0), &output)
        .unwrap();
    assert_eq!(n, 8);

    let records = read_output(&output, 3);
    assert!(records[..4].iter().all(|r| r[1] == 1.0 && r[2] == 2.0));
    assert!(records[4..].iter().all(|r| r[1] == 2.0 && r[2] == 4.0));
}

#[rstest]
fn short_file_is_an_error_by_default(workspace: Workspace) {
    let input = workspace.path("field.dat");
    let output = workspace.path("field.bin");
    write_field(&input, &[1.0, 2.0, 3.0, 4.0, 5.0]);

    let result = Reformatter::new().reformat_file(&input, GridShape::new(2, 3), &RadialAxis::default(), &output);

    match result {
        Err(Error::UnexpectedByteLength { expected, found }) => {
            assert_eq!(expected, 48);
            assert_eq!(found, 40);
        }
        other => panic!("expected a byte length error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[rstest]
fn short_file_is_truncated_when_allowed(workspace: Workspace) {
    let input = workspace.path("field.dat");
    let output = workspace.path("field.bin");

    // five whole samples and a few stray bytes
    let mut bytes: Vec<u8> = [1.0f64, 2.0, 3.0, 4.0, 5.0]
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect();
    bytes.extend_from_slice(&[0u8; 3]);
    fs::write(&input, bytes).unwrap();

    let n = Reformatter::builder()
        .allow_truncated(true)
        .build()
        .reformat_file(&input, GridShape::new(2, 3), &RadialAxis::default(), &output)
        .unwrap();

    // one closed row of 4 and a partial row of 2
    assert_eq!(n, 6);
}

#[rstest]
#[case(0, 4)]
#[case(4, 0)]
#[case(4, 1)]
#[case(1 << 40, 1 << 20)]
#[case(usize::MAX, 2)]
fn invalid_dimensions(workspace: Workspace, #[case] nrad: usize, #[case] nsec: usize) {
    let input = workspace.path("field.dat");
    write_field(&input, &[1.0; 4]);

    let result = Reformatter::new().reformat_file(
        &input,
        GridShape::new(nrad, nsec),
        &RadialAxis::default(),
        workspace.path("field.bin"),
    );
    assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
}

#[rstest]
fn oversized_grid_is_rejected_when_lenient(workspace: Workspace) {
    let input = workspace.path("field.dat");
    write_field(&input, &[1.0, 2.0, 3.0]);

    let result = Reformatter::builder()
        .allow_truncated(true)
        .build()
        .reformat_file(
            &input,
            GridShape::new(1 << 40, 1 << 20),
            &RadialAxis::default(),
            workspace.path("field.bin"),
        );

    assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
}

#[rstest]
fn large_declared_grid_reads_only_available_samples(workspace: Workspace) {
    let input = workspace.path("field.dat");
    let output = workspace.path("field.bin");
    write_field(&input, &[1.0, 2.0, 3.0]);

    let n = Reformatter::builder()
        .allow_truncated(true)
        .build()
        .reformat_file(&input, GridShape::new(1 << 30, 1 << 10), &RadialAxis::default(), &output)
        .unwrap();

    // a single partial row, nothing to close
    assert_eq!(n, 3);
    let records = read_output(&output, 3);
    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r[1] == 0.0));
    assert_eq!(records[2][2], 3.0);
}

#[rstest]
fn short_radius_table(workspace: Workspace) {
    let input = workspace.path("field.dat");
    write_field(&input, &[1.0; 6]);

    let result = Reformatter::new().reformat_file(
        &input,
        GridShape::new(3, 2),
        &RadialAxis::Table(vec![0.4, 0.5]),
        workspace.path("field.bin"),
    );
    assert!(matches!(
        result,
        Err(Error::RadiusTableTooShort {
            expected: 3,
            found: 2
        })
    ));
}

#[rstest]
fn malformed_radius_table(workspace: Workspace) {
    let table = workspace.path("used_rad.dat");
    fs::write(&table, "0.4\n0.5\nabc\n").unwrap();

    let result = read_radius_table(&table);
    assert!(matches!(result, Err(Error::MalformedRadius { line: 3, .. })));
}
