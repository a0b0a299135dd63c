//! Typed numeric column with embedded null sentinels (kdb-style)

/// Null sentinel for I64 columns
///
/// Using i64::MIN as the null sentinel, similar to kdb's type-specific nulls.
/// Converted to NaN when the column is widened to f64.
pub const NULL_I64: i64 = i64::MIN;

/// A numeric column with type-specific null representation (kdb-style)
///
/// All nulls are embedded as sentinel values in the data vector:
/// - F64: f64::NAN
/// - I64: NULL_I64 (i64::MIN)
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    /// F64 column: data with embedded NaN for missing values
    F64(Vec<f64>),

    /// I64 column: missing values represented as NULL_I64
    I64(Vec<i64>),
}

impl Column {
    pub fn new_f64(data: Vec<f64>) -> Self {
        Column::F64(data)
    }

    pub fn new_i64(data: Vec<i64>) -> Self {
        Column::I64(data)
    }

    pub fn len(&self) -> usize {
        match self {
            Column::F64(data) => data.len(),
            Column::I64(data) => data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `row` widened to f64 (null sentinels become NaN)
    pub fn get_f64(&self, row: usize) -> Option<f64> {
        match self {
            Column::F64(data) => data.get(row).copied(),
            Column::I64(data) => data.get(row).map(|&v| widen(v)),
        }
    }

    /// Widen to an owned f64 vector
    ///
    /// F64 data is copied as-is; I64 nulls become NaN.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Column::F64(data) => data.clone(),
            Column::I64(data) => data.iter().map(|&v| widen(v)).collect(),
        }
    }

    /// Check if column contains any null values
    pub fn has_nulls(&self) -> bool {
        match self {
            Column::F64(data) => data.iter().any(|x| x.is_nan()),
            Column::I64(data) => data.iter().any(|x| *x == NULL_I64),
        }
    }
}

#[inline(always)]
fn widen(v: i64) -> f64 {
    if v == NULL_I64 {
        f64::NAN
    } else {
        v as f64
    }
}

impl From<Vec<f64>> for Column {
    fn from(data: Vec<f64>) -> Self {
        Column::F64(data)
    }
}

impl From<Vec<i64>> for Column {
    fn from(data: Vec<i64>) -> Self {
        Column::I64(data)
    }
}
