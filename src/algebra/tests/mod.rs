mod cholesky;
mod matrix;
mod vector;
