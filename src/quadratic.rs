use num_complex::Complex64;
use thiserror::Error;

/// 二次方程式の入力エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuadraticError {
    /// a == 0 では一次方程式に退化する
    #[error("leading coefficient must be non-zero")]
    ZeroLeadingCoefficient,
}

/// 二次方程式 ax² + bx + c = 0 を閉形式で解く。
///
/// 判別式の符号で実根と複素根に分かれるが、戻り値ではどちらも複素数として
/// 表現し区別しない（実根は虚部 0）。根は (-b - √D)/2a, (-b + √D)/2a の順。
pub fn quadratic_equation(
    a: f64,
    b: f64,
    c: f64,
) -> Result<(Complex64, Complex64), QuadraticError> {
    if a == 0.0 {
        return Err(QuadraticError::ZeroLeadingCoefficient);
    }

    let discriminant = b * b - 4.0 * a * c;

    // 判別式の符号に応じて実数平方根か虚数平方根を取る
    let sqrt_discriminant = if discriminant >= 0.0 {
        Complex64::new(discriminant.sqrt(), 0.0)
    } else {
        Complex64::new(0.0, (-discriminant).sqrt())
    };

    let x_1 = (-b - sqrt_discriminant) / (2.0 * a);
    let x_2 = (-b + sqrt_discriminant) / (2.0 * a);

    Ok((x_1, x_2))
}
