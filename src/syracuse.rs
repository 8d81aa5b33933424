use std::collections::VecDeque;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// シラキュース数列の1ステップ。偶数なら半分、奇数なら 3n+1。
#[inline]
pub fn syracuse_step(n: &BigUint) -> BigUint {
    if n.is_even() {
        n >> 1u32
    } else {
        n * 3u32 + 1u32
    }
}

/// シラキュース数列（反復版）。
///
/// 種 n から「偶数なら /2、奇数なら 3n+1」を 1 に到達するまで適用した
/// 軌道を返す（終端の 1 を含む）。n < 1 は空列、n == 1 は `[1]`。
/// 軌道の値は任意精度なので 3n+1 ステップで桁あふれは起きない。
///
/// コラッツ予想が偽となる種が存在すればこの関数は停止しない。
/// 周期検出やステップ上限は意図的に設けていない。
pub fn syracuse_sequence(n: i64) -> Vec<BigUint> {
    if n < 1 {
        return Vec::new();
    }

    let mut current = BigUint::from(n as u64);
    let mut sequence = vec![current.clone()];
    while !current.is_one() {
        current = syracuse_step(&current);
        sequence.push(current.clone());
    }
    sequence
}

/// シラキュース数列（再帰版）。
///
/// 「現在値を、残りの軌道の先頭に前置する」という再帰的構成を、
/// 明示的なフレームスタックで展開して計算する。素朴な再帰だと軌道長ぶんの
/// コールスタックを消費して長い軌道でオーバーフローするため、
/// 失敗モードはスタック溢れではなく軌道長に比例したヒープ確保になる。
/// 出力は反復版と全種で一致する。
pub fn syracuse_sequence_recursive(n: i64) -> Vec<BigUint> {
    if n < 1 {
        return Vec::new();
    }

    // 下降: 基底ケース n == 1 に到達するまで未完了フレームを積む
    let mut frames: Vec<BigUint> = Vec::new();
    let mut current = BigUint::from(n as u64);
    while !current.is_one() {
        let next = syracuse_step(&current);
        frames.push(current);
        current = next;
    }

    // 巻き戻し: 基底ケース [1] へ各フレームの値を前置していく
    let mut sequence: VecDeque<BigUint> = VecDeque::with_capacity(frames.len() + 1);
    sequence.push_back(BigUint::one());
    while let Some(value) = frames.pop() {
        sequence.push_front(value);
    }
    Vec::from(sequence)
}
