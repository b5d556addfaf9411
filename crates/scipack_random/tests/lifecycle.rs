//! Integration tests for generator construction and teardown.

use scipack_random::{
    construct, construct_by_id, construct_with_entropy, destroy, spawn_streams, GeneratorError,
    GeneratorKind, HardwareEntropy, ResultCode, SeedMode, RDRAND_RETRY_LIMIT,
};

// ============================================================================
// Hardware Seeding
// ============================================================================

#[test]
fn test_zero_seed_is_hardware_seeded() {
    for kind in GeneratorKind::ALL {
        let mut a = construct(kind, 0).unwrap();
        let mut b = construct(kind, 0).unwrap();
        assert_eq!(a.seed_mode(), SeedMode::Hardware);
        // Two hardware-seeded streams agreeing on 4 words is negligible.
        assert_ne!(a.next(4).unwrap(), b.next(4).unwrap());
    }
}

#[test]
fn test_hardware_entropy_backend() {
    let source = HardwareEntropy::new();
    assert!(["rdrand", "os"].contains(&source.backend_name()));
}

#[test]
fn test_entropy_failure_budget() {
    let mut attempts = 0usize;
    let mut source = || {
        attempts += 1;
        None::<u64>
    };
    let err = construct_with_entropy(GeneratorKind::Xorshift64, 0, &mut source).unwrap_err();
    assert_eq!(
        err,
        GeneratorError::HardwareEntropyExhausted {
            attempts: RDRAND_RETRY_LIMIT
        }
    );
    assert_eq!(err.code(), ResultCode::HardwareEntropyExhausted);
    assert_eq!(attempts, RDRAND_RETRY_LIMIT);
}

#[test]
fn test_entropy_recovers_within_budget() {
    let mut draws = vec![None, None, Some(0x1234u64), Some(0x5678u64)].into_iter();
    let mut source = || draws.next().flatten();
    let rng = construct_with_entropy(GeneratorKind::Pcg64i, 0, &mut source);
    assert!(rng.is_ok());
}

// ============================================================================
// Identifiers and Teardown
// ============================================================================

#[test]
fn test_construct_by_id_matches_construct() {
    for kind in GeneratorKind::ALL {
        let mut a = construct_by_id(kind.identifier(), 99).unwrap();
        let mut b = construct(kind, 99).unwrap();
        assert_eq!(a.next(8).unwrap(), b.next(8).unwrap());
    }
}

#[test]
fn test_invalid_id_reports_argument_out_of_bounds() {
    let result = construct_by_id(0x1234, 1);
    assert_eq!(ResultCode::of(&result), ResultCode::ArgumentOutOfBounds);
}

#[test]
fn test_destroy_twice_is_safe() {
    let mut handle = Some(construct(GeneratorKind::Xorshift64, 4).unwrap());
    destroy(&mut handle);
    destroy(&mut handle);
    assert!(handle.is_none());
}

// ============================================================================
// Parallel Streams
// ============================================================================

#[test]
fn test_streams_are_reproducible() {
    let mut a = spawn_streams(GeneratorKind::Pcg64i, 8, 4).unwrap();
    let mut b = spawn_streams(GeneratorKind::Pcg64i, 8, 4).unwrap();
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        assert_eq!(x.next(16).unwrap(), y.next(16).unwrap());
    }
}

#[test]
fn test_streams_are_distinct() {
    let mut streams = spawn_streams(GeneratorKind::Xorshift64, 8, 8).unwrap();
    let heads: Vec<Vec<u64>> = streams.iter_mut().map(|s| s.next(4).unwrap()).collect();
    for i in 0..heads.len() {
        for j in (i + 1)..heads.len() {
            assert_ne!(heads[i], heads[j]);
        }
    }
}

#[test]
fn test_streams_run_on_threads() {
    let streams = spawn_streams(GeneratorKind::Pcg64i, 2, 4).unwrap();
    let handles: Vec<_> = streams
        .into_iter()
        .map(|mut rng| std::thread::spawn(move || rng.rand(1_000, 10, 20).unwrap()))
        .collect();

    for handle in handles {
        let draws = handle.join().unwrap();
        assert!(draws.iter().all(|d| (10..=20).contains(d)));
    }
}
