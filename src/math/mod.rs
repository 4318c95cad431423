/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Builds an affine matrix that scales each axis and then translates.
///
/// The result has `scaling` on the diagonal, `translation` in the last
/// column and `[0, 0, 0, 1]` as the bottom row. No rotation is ever produced.
#[must_use]
pub fn scale_translate(scaling: &Vector3, translation: &Vector3) -> Matrix4 {
    let mut matrix = Matrix4::new_nonuniform_scaling(scaling);
    matrix[(0, 3)] = translation.x;
    matrix[(1, 3)] = translation.y;
    matrix[(2, 3)] = translation.z;
    matrix
}

/// Flattens a matrix into 16 values in row-major order.
///
/// nalgebra stores matrices column-major, so the iteration walks rows
/// explicitly.
#[must_use]
pub fn to_row_major(matrix: &Matrix4) -> [f64; 16] {
    let mut out = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = matrix[(row, col)];
        }
    }
    out
}
