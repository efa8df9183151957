use crate::constants::N_XYZ_COORDINATES;

/// Untimed 3-axis measurement.
///
/// # Examples
///
/// ```
/// use common::XYZ;
///
/// let xyz = XYZ::new([1.0, 2.0, 3.0]);
/// assert_eq!(xyz.y(), 2.0);
/// assert!(XYZ::try_from(vec![1.0, 2.0]).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct XYZ([f64; N_XYZ_COORDINATES]);

impl XYZ {
    pub fn new(data: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(data)
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn z(&self) -> f64 {
        self.0[2]
    }

    pub fn inner(&self) -> [f64; N_XYZ_COORDINATES] {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl From<XYZ> for [f64; N_XYZ_COORDINATES] {
    fn from(value: XYZ) -> Self {
        value.inner()
    }
}

impl From<[f64; N_XYZ_COORDINATES]> for XYZ {
    fn from(value: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(value)
    }
}

impl TryFrom<Vec<f64>> for XYZ {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        let data: [f64; N_XYZ_COORDINATES] = value
            .try_into()
            .map_err(|_| "Invalid length of input vector")?;
        Ok(Self(data))
    }
}
