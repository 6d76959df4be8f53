// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Errors of the algebra.
///
/// Every set operation is total, empty results are values. The only checked failure is a cube described at runtime whose number of dimensions does not match the static arity of the structure it is converted to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("dimension mismatch: expected {expected} dimensions, got {got}")]
  DimensionMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_arity<T>(cube: &[T], expected: usize) -> Result<()> {
  if cube.len() == expected {
    Ok(())
  } else {
    Err(Error::DimensionMismatch { expected, got: cube.len() })
  }
}
