//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that the digits module is accessible via absolute path.
#[test]
fn test_digits_module_exports() {
    use randgen_core::digits::{extract_middle, MiddleDigits, PAD_WIDTH};

    let d: MiddleDigits = extract_middle(1_522_756);
    assert_eq!(d.padded.len(), PAD_WIDTH);
    assert_eq!(d.value, 5227);
    assert!((d.ratio() - 0.5227).abs() < 1e-12);
}

/// Test that the generator entry points are accessible via absolute path.
#[test]
fn test_generator_function_exports() {
    use randgen_core::generators::const_multiplier::const_multiplier;
    use randgen_core::generators::mid_products::mid_products;
    use randgen_core::generators::mid_squares::mid_squares;
    use randgen_core::generators::DEFAULT_MULTIPLIER;

    assert_eq!(mid_squares(1234, 1).unwrap().len(), 1);
    assert_eq!(mid_products(5015, 5734, 1).unwrap().len(), 1);
    assert_eq!(
        const_multiplier(9803, 1, DEFAULT_MULTIPLIER).unwrap().len(),
        1
    );
}

/// Test that the dispatch layer round-trips every algorithm.
#[test]
fn test_dispatch_exports() {
    use randgen_core::generators::{generate, GeneratorKind, GeneratorOutput, GeneratorSpec};

    let specs = [
        GeneratorSpec::MidSquares {
            seed: 1234,
            count: 3,
        },
        GeneratorSpec::MidProducts {
            seed_x: 5015,
            seed_y: 5734,
            count: 3,
        },
        GeneratorSpec::ConstMultiplier {
            seed: 9803,
            count: 3,
            constant: 73,
        },
    ];
    for spec in &specs {
        let output: GeneratorOutput = generate(spec).unwrap();
        assert_eq!(output.kind(), spec.kind());
        assert_eq!(output.len(), 3);
        assert!(output
            .ratios()
            .iter()
            .all(|r| (0.0..1.0).contains(r)));
    }
    assert_eq!(GeneratorKind::MidSquares.name(), "Middle-of-Squares");
}

/// Test that error types are accessible and render descriptive messages.
#[test]
fn test_types_module_exports() {
    use randgen_core::generators::mid_squares::mid_squares;
    use randgen_core::types::GeneratorError;

    let err = mid_squares(123, 10).unwrap_err();
    assert_eq!(
        err,
        GeneratorError::SeedTooShort {
            seed: 123,
            digits: 3
        }
    );
    assert!(format!("{}", err).contains("at least 4"));
}
