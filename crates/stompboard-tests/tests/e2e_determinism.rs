//! Determinism tests: the same records always produce the same model bytes.

use std::fs;

use stompboard_cli::commands::generate_all::process_directory;
use stompboard_spec::{canonical_model_hash, generate_pedal_model, parse_dimensions};
use stompboard_tests::determinism::verify_determinism;
use stompboard_tests::fixtures::{sample_catalog, PedalsFixture};

#[test]
fn test_assembly_is_deterministic() {
    for spec in sample_catalog() {
        let result = verify_determinism(
            || {
                generate_pedal_model(&spec)
                    .unwrap()
                    .to_json_pretty()
                    .unwrap()
            },
            5,
        );
        assert!(result.is_deterministic, "{}: {}", spec.slug, result);
    }
}

#[test]
fn test_dimension_parsing_is_deterministic() {
    let result = verify_determinism(
        || {
            let d = parse_dimensions("4.77\" x 2.6\" x 1.39\"").unwrap();
            [d.width, d.height, d.depth]
                .iter()
                .flat_map(|v| v.to_le_bytes())
                .collect::<Vec<u8>>()
        },
        3,
    );
    assert!(result.is_deterministic, "{}", result);
}

#[test]
fn test_batch_runs_produce_identical_files() {
    let first = PedalsFixture::new();
    let second = PedalsFixture::new();
    for spec in sample_catalog() {
        first.add_record(&spec);
        second.add_record(&spec);
    }

    let a = process_directory(&first.pedals_dir, &first.models_dir).unwrap();
    let b = process_directory(&second.pedals_dir, &second.models_dir).unwrap();
    assert_eq!(first.model_files(), second.model_files());

    for name in first.model_files() {
        let left = fs::read(first.models_dir.join(&name)).unwrap();
        let right = fs::read(second.models_dir.join(&name)).unwrap();
        assert_eq!(left, right, "{} differs between runs", name);
    }

    let hashes = |s: &stompboard_cli::commands::generate_all::GenerationSummary| {
        s.records
            .iter()
            .map(|r| (r.slug.clone(), r.spec_hash.clone(), r.model_hash.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(hashes(&a), hashes(&b));
}

#[test]
fn test_summary_hash_matches_written_model() {
    let fixture = PedalsFixture::new();
    let spec = sample_catalog().remove(1);
    fixture.add_record(&spec);

    let summary = process_directory(&fixture.pedals_dir, &fixture.models_dir).unwrap();
    let model = generate_pedal_model(&spec).unwrap();
    assert_eq!(
        summary.records[0].model_hash,
        Some(canonical_model_hash(&model).unwrap())
    );
}
