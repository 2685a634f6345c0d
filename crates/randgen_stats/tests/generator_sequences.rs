//! Integration tests running the test battery over real generator output.

use randgen_core::generators::{generate, GeneratorSpec};
use randgen_stats::{run_test, TestKind, TestReport};

/// Every test family runs over every generator's ratio column without
/// validation errors, and the uniformity table accounts for every record.
#[test]
fn test_battery_over_all_generators() {
    let specs = [
        GeneratorSpec::MidSquares {
            seed: 5735,
            count: 50,
        },
        GeneratorSpec::MidProducts {
            seed_x: 5015,
            seed_y: 5734,
            count: 50,
        },
        GeneratorSpec::ConstMultiplier {
            seed: 9803,
            count: 50,
            constant: 73,
        },
    ];

    for spec in &specs {
        let ratios = generate(spec).unwrap().ratios();
        assert_eq!(ratios.len(), 50);

        for kind in [TestKind::Mean, TestKind::Variance, TestKind::Uniformity] {
            let report = run_test(kind, &ratios, 0.05, None).unwrap();
            assert!(report.statistic().is_finite());
            if let TestReport::Uniformity(u) = &report {
                assert_eq!(u.table.len(), 10);
                let total: usize = u.table.iter().map(|bin| bin.observed).sum();
                assert_eq!(total, 50);
            }
        }
    }
}

/// A sequence collapsed to a constant is still testable: the mean test
/// rejects the off-centre mean and the variance test rejects the zero
/// spread, without any error being raised.
#[test]
fn test_degenerate_sequence_is_testable() {
    // 1000² = 1000000 → middle 0000; the sequence collapses to zero.
    let ratios = generate(&GeneratorSpec::MidSquares {
        seed: 1000,
        count: 30,
    })
    .unwrap()
    .ratios();
    assert!(ratios.iter().all(|&r| r == 0.0));

    let mean = run_test(TestKind::Mean, &ratios, 0.05, None).unwrap();
    assert!(!mean.accepted());

    let variance = run_test(TestKind::Variance, &ratios, 0.05, None).unwrap();
    assert!(!variance.accepted());
}
