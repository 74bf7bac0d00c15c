//! # Nested Containers
//!
//! One-, two- and three-level ordered containers. They are plain `Vec`
//! nestings, so inner lengths are free to differ from row to row. The
//! per-kind aliases give the familiar names (`RealMatrix`, `BoolTensor`, ...)
//! without introducing new types; every alias compares through the same
//! generic `DeepEq` impl.

use crate::scalar::Complex;

/// Ordered sequence of `T`.
pub type Array<T> = Vec<T>;
/// Ordered sequence of sequences. Rows may differ in length.
pub type Matrix<T> = Vec<Array<T>>;
/// Ordered sequence of matrices. Ragged at every level.
pub type Tensor<T> = Vec<Matrix<T>>;

pub type BoolArray = Array<bool>;
pub type IntArray = Array<i32>;
pub type RealArray = Array<f64>;
pub type ComplexArray = Array<Complex>;
pub type StringArray = Array<String>;

pub type BoolMatrix = Matrix<bool>;
pub type IntMatrix = Matrix<i32>;
pub type RealMatrix = Matrix<f64>;
pub type ComplexMatrix = Matrix<Complex>;

pub type BoolTensor = Tensor<bool>;
pub type IntTensor = Tensor<i32>;
pub type RealTensor = Tensor<f64>;
pub type ComplexTensor = Tensor<Complex>;

/// `len` copies of `value`.
pub fn filled_array<T: Clone>(value: T, len: usize) -> Array<T> {
    vec![value; len]
}

/// A `rows` × `cols` matrix of `value`.
pub fn filled_matrix<T: Clone>(value: T, rows: usize, cols: usize) -> Matrix<T> {
    vec![filled_array(value, cols); rows]
}

/// An `n1` × `n2` × `n3` tensor of `value`.
pub fn filled_tensor<T: Clone>(value: T, n1: usize, n2: usize, n3: usize) -> Tensor<T> {
    vec![filled_matrix(value, n2, n3); n1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_shapes() {
        let a = filled_array(1.5, 4);
        assert_eq!(a, vec![1.5; 4]);

        let m: BoolMatrix = filled_matrix(false, 3, 2);
        assert_eq!(m.len(), 3);
        assert!(m.iter().all(|row| row.len() == 2));

        let t: IntTensor = filled_tensor(7, 3, 2, 1);
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(|m| m.len() == 2 && m.iter().all(|r| r == &vec![7])));
    }

    #[test]
    fn test_zero_sized_fills_are_empty() {
        assert!(filled_array(0, 0).is_empty());
        let m: RealMatrix = filled_matrix(0.0, 0, 5);
        assert!(m.is_empty());
        let m: RealMatrix = filled_matrix(0.0, 2, 0);
        assert_eq!(m, vec![Vec::<f64>::new(), Vec::new()]);
    }
}
