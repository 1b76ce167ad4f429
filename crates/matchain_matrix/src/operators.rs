use crate::Matrix;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Self::Output {
        Matrix::add(self, rhs).unwrap()
    }
}

impl Add<Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Self::Output {
        Matrix::add(self, &rhs).unwrap()
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Self::Output {
        Matrix::add(&self, rhs).unwrap()
    }
}

impl Add<Matrix> for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Self::Output {
        Matrix::add(&self, &rhs).unwrap()
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Self::Output {
        Matrix::sub(self, rhs).unwrap()
    }
}

impl Sub<Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Self::Output {
        Matrix::sub(self, &rhs).unwrap()
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Self::Output {
        Matrix::sub(&self, rhs).unwrap()
    }
}

impl Sub<Matrix> for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Self::Output {
        Matrix::sub(&self, &rhs).unwrap()
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        Matrix::mul(self, rhs).unwrap()
    }
}

impl Mul<Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        Matrix::mul(self, &rhs).unwrap()
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        Matrix::mul(&self, rhs).unwrap()
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Self::Output {
        Matrix::mul(&self, &rhs).unwrap()
    }
}

impl Div<&Matrix> for &Matrix {
    type Output = Matrix;

    fn div(self, rhs: &Matrix) -> Self::Output {
        Matrix::div(self, rhs).unwrap()
    }
}

impl Div<Matrix> for &Matrix {
    type Output = Matrix;

    fn div(self, rhs: Matrix) -> Self::Output {
        Matrix::div(self, &rhs).unwrap()
    }
}

impl Div<&Matrix> for Matrix {
    type Output = Matrix;

    fn div(self, rhs: &Matrix) -> Self::Output {
        Matrix::div(&self, rhs).unwrap()
    }
}

impl Div<Matrix> for Matrix {
    type Output = Matrix;

    fn div(self, rhs: Matrix) -> Self::Output {
        Matrix::div(&self, &rhs).unwrap()
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        Matrix::neg(self).unwrap()
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        Matrix::neg(&self).unwrap()
    }
}
