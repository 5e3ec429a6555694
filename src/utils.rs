#[cfg(feature = "python-bindings")]
use std::collections::HashMap;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

/// Extract a unit mapping from a Python object.
///
/// Accepts either a `dict[int, str]` or a sequence of `(int, str)` pairs,
/// mirroring the shapes the Rust builder accepts. Returned pair order is
/// irrelevant: the unit table sorts by magnitude.
#[cfg(feature = "python-bindings")]
pub fn extract_unit_mapping<'py>(mapping: &Bound<'py, PyAny>) -> PyResult<Vec<(i64, String)>> {
    if let Ok(dict) = mapping.extract::<HashMap<i64, String>>() {
        return Ok(dict.into_iter().collect());
    }

    if let Ok(pairs) = mapping.extract::<Vec<(i64, String)>>() {
        return Ok(pairs);
    }

    Err(PyTypeError::new_err(
        "expected a dict mapping microsecond magnitudes (int) to labels (str), \
         or a sequence of (int, str) pairs",
    ))
}
