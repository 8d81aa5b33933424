/// バブルソートのパス・交換回数統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// 実行されたパス数
    pub passes: u64,
    /// 隣接交換の総数
    pub swaps: u64,
}

/// バブルソート。全順序を持つ任意の要素型を昇順に整列する。
///
/// 各パスで隣接する逆順ペアを交換し、パスごとに右端の境界を1つ縮める
/// （最大の未整列要素はパスごとに確定する）。交換が一度も起きなかった
/// パスで打ち切るため、整列済み入力は1パスで終了する。
/// 同値要素の相対順序は保証しない（不安定ソート）。
///
/// 計算量は最悪・平均 O(n²)、整列済み入力では O(n)。
/// 入力は作業用コピーに複製され、呼び出し元のコレクションは変更されない。
pub fn bubble_sort<T: Ord>(collection: impl IntoIterator<Item = T>) -> Vec<T> {
    bubble_sort_with_stats(collection).0
}

/// 統計付きバブルソート。整列結果と (パス数, 交換数) を返す。
pub fn bubble_sort_with_stats<T: Ord>(
    collection: impl IntoIterator<Item = T>,
) -> (Vec<T>, SortStats) {
    let mut items: Vec<T> = collection.into_iter().collect();
    let mut stats = SortStats::default();

    let length = items.len();
    for i in 0..length.saturating_sub(1) {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..length - 1 - i {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break; // 整列済み
        }
    }

    (items, stats)
}
