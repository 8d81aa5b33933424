use thiserror::Error;

/// ビーズソートの入力検証エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BeadSortError {
    /// 負の要素が含まれている
    #[error("negative item {value} at index {index}: bead sort accepts non-negative integers only")]
    NegativeItem { index: usize, value: i64 },
}

/// ビーズソート（重力ソート）。非負整数のみ対象。
///
/// 各位置 i を「ロッド」とみなし、要素値をロッド上のビーズ数として扱う。
/// 左のロッドが右より多ければ超過分（差分）を右へ落とす隣接走査を
/// 要素数ぶん繰り返すと昇順に整列する。計算量は O(n²)。
///
/// 走査を始める前に全要素を検証し、負の要素があれば変換を一切行わずに
/// エラーを返す。入力は作業用コピーに複製され、呼び出し元の
/// コレクションは変更されない。
///
/// 空入力は空の結果、1要素入力はそのまま返る。
pub fn bead_sort(collection: impl IntoIterator<Item = i64>) -> Result<Vec<i64>, BeadSortError> {
    let mut rods: Vec<i64> = collection.into_iter().collect();

    // 変換前に全要素を検証する
    for (index, &value) in rods.iter().enumerate() {
        if value < 0 {
            return Err(BeadSortError::NegativeItem { index, value });
        }
    }

    // 1ラウンド = 隣接ペアの左→右走査
    for _ in 0..rods.len() {
        for i in 1..rods.len() {
            if rods[i - 1] > rods[i] {
                let excess = rods[i - 1] - rods[i];
                rods[i - 1] -= excess;
                rods[i] += excess;
            }
        }
    }

    Ok(rods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(bead_sort(Vec::new()).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_single() {
        assert_eq!(bead_sort([42]).unwrap(), vec![42]);
    }

    #[test]
    fn test_basic() {
        assert_eq!(
            bead_sort([4, 3, 8, 2, 7, 1, 9, 5, 0, 6]).unwrap(),
            vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
    }

    #[test]
    fn test_negative_item_reports_position() {
        let err = bead_sort([1, 0, -1, 5]).unwrap_err();
        assert_eq!(err, BeadSortError::NegativeItem { index: 2, value: -1 });
    }

    #[test]
    fn test_validation_runs_before_any_transform() {
        // 負の要素が末尾でも先頭側の変換は起きない（入力は複製のみ）
        let input = vec![9, 3, 7, -4];
        assert!(bead_sort(input.iter().copied()).is_err());
        assert_eq!(input, vec![9, 3, 7, -4]);
    }
}
