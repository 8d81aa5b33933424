use algo_etude::*;
use num_bigint::BigUint;

/// u64 列から BigUint 列を作るヘルパー
fn seq(values: &[u64]) -> Vec<BigUint> {
    values.iter().map(|&v| BigUint::from(v)).collect()
}

// ===== 端点ケース =====

#[test]
fn test_nonpositive_seed_is_empty() {
    assert_eq!(syracuse_sequence(0), Vec::<BigUint>::new());
    assert_eq!(syracuse_sequence(-5), Vec::<BigUint>::new());
    assert_eq!(syracuse_sequence_recursive(0), Vec::<BigUint>::new());
    assert_eq!(syracuse_sequence_recursive(-5), Vec::<BigUint>::new());
}

#[test]
fn test_seed_one() {
    assert_eq!(syracuse_sequence(1), seq(&[1]));
    assert_eq!(syracuse_sequence_recursive(1), seq(&[1]));
}

// ===== 既知の軌道 =====

#[test]
fn test_seed_5() {
    assert_eq!(syracuse_sequence(5), seq(&[5, 16, 8, 4, 2, 1]));
    assert_eq!(syracuse_sequence_recursive(5), seq(&[5, 16, 8, 4, 2, 1]));
}

#[test]
fn test_seed_150() {
    let expected = seq(&[
        150, 75, 226, 113, 340, 170, 85, 256, 128, 64, 32, 16, 8, 4, 2, 1,
    ]);
    let got = syracuse_sequence(150);
    assert_eq!(got.len(), 16);
    assert_eq!(got, expected);
    assert_eq!(syracuse_sequence_recursive(150), expected);
}

#[test]
fn test_seed_27() {
    // 27 の軌道は 111 ステップ（初期値を含めて 112 項）、最大値 9232
    let got = syracuse_sequence(27);
    assert_eq!(got.len(), 112);
    assert_eq!(got[0], BigUint::from(27u64));
    assert_eq!(got[got.len() - 3..].to_vec(), seq(&[4, 2, 1]));
    assert_eq!(got.iter().max().unwrap(), &BigUint::from(9232u64));
}

// ===== 反復版と再帰版の一致 =====

#[test]
fn test_iterative_matches_recursive_1_to_10000() {
    for n in 1i64..10000 {
        assert_eq!(
            syracuse_sequence(n),
            syracuse_sequence_recursive(n),
            "mismatch for n={}",
            n
        );
    }
}

// ===== 範囲検証 =====

#[test]
fn test_verify_range_small() {
    let result = verify_range(1, 999, |_, _| {});

    assert!(result.all_match);
    assert!(result.mismatches.is_empty());
    assert_eq!(result.total_checked, 999);
    // 1..999 の最長軌道は n=871 (179項)
    assert_eq!(result.max_length, 179);
    assert_eq!(result.max_length_seed, 871);
}

#[test]
fn test_verify_range_empty() {
    let result = verify_range(10, 5, |_, _| {});
    assert_eq!(result.total_checked, 0);
    assert!(result.all_match);
    assert_eq!(result.max_length, 0);
}

#[test]
fn test_verify_range_progress_reported() {
    use std::sync::atomic::{AtomicU64, Ordering};

    let calls = AtomicU64::new(0);
    let last_done = AtomicU64::new(0);
    verify_range(1, 2500, |done, total| {
        calls.fetch_add(1, Ordering::Relaxed);
        last_done.store(done, Ordering::Relaxed);
        assert_eq!(total, 2500);
    });

    assert!(calls.load(Ordering::Relaxed) >= 3);
    assert_eq!(last_done.load(Ordering::Relaxed), 2500);
}

#[test]
fn test_verify_range_parallel_matches_single() {
    let single = verify_range(1, 2000, |_, _| {});
    let parallel = verify_range_parallel(1, 2000, |_, _| {});

    assert_eq!(parallel.total_checked, single.total_checked);
    assert_eq!(parallel.all_match, single.all_match);
    assert_eq!(parallel.max_length, single.max_length);
    assert!(parallel.mismatches.is_empty());
    // 並列版が報告する種も実際に最長軌道を持つ
    assert_eq!(
        syracuse_sequence(parallel.max_length_seed).len(),
        parallel.max_length
    );
}

#[test]
fn test_verify_range_parallel_handles_nonpositive_seeds() {
    // 種 <= 0 は両版とも空列なので常に一致する
    let result = verify_range_parallel(-10, 10, |_, _| {});
    assert_eq!(result.total_checked, 21);
    assert!(result.all_match);
}
