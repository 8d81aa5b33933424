use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use rayon::prelude::*;

use crate::syracuse::{syracuse_sequence, syracuse_sequence_recursive};

/// 範囲検証の結果
#[derive(Debug, Clone)]
pub struct VerifyResult {
    /// 検証した種の総数
    pub total_checked: u64,
    /// 全種で反復版と再帰版の軌道が一致したか
    pub all_match: bool,
    /// 最長の軌道長（項数）
    pub max_length: usize,
    /// 最長軌道を持つ種
    pub max_length_seed: i64,
    /// 不一致だった種
    pub mismatches: Vec<i64>,
}

/// [start, end] の全種で反復版と再帰版の軌道一致を検証する（シングルスレッド版）。
/// progress_callback: (完了数, 総数) を定期的に呼ぶ。
pub fn verify_range(
    start: i64,
    end: i64,
    progress_callback: impl Fn(u64, u64),
) -> VerifyResult {
    if start > end {
        return VerifyResult {
            total_checked: 0,
            all_match: true,
            max_length: 0,
            max_length_seed: start,
            mismatches: Vec::new(),
        };
    }

    let total = (end as i128 - start as i128 + 1) as u64;

    let mut total_checked = 0u64;
    let mut max_length = 0usize;
    let mut max_length_seed = start;
    let mut mismatches: Vec<i64> = Vec::new();

    for seed in start..=end {
        let iterative = syracuse_sequence(seed);
        let recursive = syracuse_sequence_recursive(seed);

        if iterative != recursive {
            mismatches.push(seed);
        }
        if iterative.len() > max_length {
            max_length = iterative.len();
            max_length_seed = seed;
        }

        total_checked += 1;

        if total_checked % 1000 == 0 {
            progress_callback(total_checked, total);
        }
    }

    progress_callback(total_checked, total);

    VerifyResult {
        total_checked,
        all_match: mismatches.is_empty(),
        max_length,
        max_length_seed,
        mismatches,
    }
}

/// [start, end] の全種を並列検証する。Rayon でチャンク分割して処理。
/// progress_callback: (完了数, 総数) を定期的に呼ぶ（スレッドセーフ）。
pub fn verify_range_parallel(
    start: i64,
    end: i64,
    progress_callback: impl Fn(u64, u64) + Sync,
) -> VerifyResult {
    if start > end {
        return VerifyResult {
            total_checked: 0,
            all_match: true,
            max_length: 0,
            max_length_seed: start,
            mismatches: Vec::new(),
        };
    }

    let total = (end as i128 - start as i128 + 1) as u64;

    // チャンク分割: 各チャンク1000種
    let chunk_size: u64 = 1000;
    let num_chunks = total.div_ceil(chunk_size);

    let global_done = AtomicU64::new(0);
    let global_max_len = AtomicU64::new(0);
    let global_max_len_seed = Mutex::new(start);
    let global_mismatches: Mutex<Vec<i64>> = Mutex::new(Vec::new());

    (0..num_chunks).into_par_iter().for_each(|chunk_idx| {
        let chunk_start = start + (chunk_idx * chunk_size) as i64;
        let chunk_end = std::cmp::min(chunk_start + chunk_size as i64 - 1, end);

        let mut local_max_len = 0usize;
        let mut local_max_len_seed = chunk_start;
        let mut local_mismatches: Vec<i64> = Vec::new();
        let mut unreported = 0u64;

        for seed in chunk_start..=chunk_end {
            let iterative = syracuse_sequence(seed);
            let recursive = syracuse_sequence_recursive(seed);

            if iterative != recursive {
                local_mismatches.push(seed);
            }
            if iterative.len() > local_max_len {
                local_max_len = iterative.len();
                local_max_len_seed = seed;
            }

            unreported += 1;

            // チャンク内でも定期的に進捗報告
            if unreported >= 100 {
                let done = global_done.fetch_add(unreported, Ordering::Relaxed) + unreported;
                progress_callback(done, total);
                unreported = 0;
            }
        }

        // 残りをグローバルに反映
        if unreported > 0 {
            let done = global_done.fetch_add(unreported, Ordering::Relaxed) + unreported;
            progress_callback(done, total);
        }

        // 最長軌道を更新
        let prev_max = global_max_len.load(Ordering::Relaxed);
        if local_max_len as u64 > prev_max {
            global_max_len.fetch_max(local_max_len as u64, Ordering::Relaxed);
            let mut guard = global_max_len_seed.lock().unwrap();
            if local_max_len as u64 >= global_max_len.load(Ordering::Relaxed) {
                *guard = local_max_len_seed;
            }
        }

        if !local_mismatches.is_empty() {
            global_mismatches.lock().unwrap().extend(local_mismatches);
        }
    });

    let total_checked = global_done.load(Ordering::Relaxed);
    let max_length = global_max_len.load(Ordering::Relaxed) as usize;
    let max_length_seed = *global_max_len_seed.lock().unwrap();
    let mut mismatches = global_mismatches.into_inner().unwrap();
    mismatches.sort_unstable();

    VerifyResult {
        total_checked,
        all_match: mismatches.is_empty(),
        max_length,
        max_length_seed,
        mismatches,
    }
}
