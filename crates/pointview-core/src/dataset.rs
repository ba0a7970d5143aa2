use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::PRIMARY_LABEL;
use crate::error::{PointViewError, Result};

/// Class id attached to a point. Only the primary class is distinguished;
/// every other value is drawn as the secondary class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub i32);

impl Label {
    pub const PRIMARY: Label = Label(PRIMARY_LABEL);

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Immutable set of points stored as parallel columns.
///
/// All four columns always have the same length; construction fails otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct PointDataset {
    x: Vec<f32>,
    y: Vec<f32>,
    label: Vec<Label>,
    file_path: Vec<String>,
}

/// One row of a [`PointDataset`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointRecord<'a> {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub label: Label,
    pub file_path: &'a str,
}

impl PointDataset {
    pub fn new(
        x: Vec<f32>,
        y: Vec<f32>,
        label: Vec<Label>,
        file_path: Vec<String>,
    ) -> Result<Self> {
        let n = x.len();
        if y.len() != n || label.len() != n || file_path.len() != n {
            return Err(PointViewError::MismatchedLengths {
                x: x.len(),
                y: y.len(),
                label: label.len(),
                file_path: file_path.len(),
            });
        }

        Ok(Self {
            x,
            y,
            label,
            file_path,
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<PointRecord<'_>> {
        if index >= self.len() {
            return None;
        }
        Some(PointRecord {
            index,
            x: self.x[index],
            y: self.y[index],
            label: self.label[index],
            file_path: &self.file_path[index],
        })
    }

    /// Thumbnail path of point `index`.
    pub fn file_path(&self, index: usize) -> Result<&str> {
        self.file_path
            .get(index)
            .map(String::as_str)
            .ok_or(PointViewError::IndexOutOfRange {
                index,
                total: self.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = PointRecord<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub fn x(&self) -> &[f32] {
        &self.x
    }

    pub fn y(&self) -> &[f32] {
        &self.y
    }

    pub fn labels(&self) -> &[Label] {
        &self.label
    }

    /// Axis-aligned bounds as `([min_x, min_y], [max_x, max_y])`, or `None` when empty.
    pub fn bounds(&self) -> Option<([f32; 2], [f32; 2])> {
        if self.is_empty() {
            return None;
        }
        let mut min = [f32::INFINITY; 2];
        let mut max = [f32::NEG_INFINITY; 2];
        for p in self.iter() {
            min[0] = min[0].min(p.x);
            min[1] = min[1].min(p.y);
            max[0] = max[0].max(p.x);
            max[1] = max[1].max(p.y);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_one_is_primary() {
        assert!(Label(1).is_primary());
        assert!(!Label(2).is_primary());
        assert!(!Label(0).is_primary());
    }

    #[test]
    fn bounds_of_empty_dataset() {
        let ds = PointDataset::new(vec![], vec![], vec![], vec![]).unwrap();
        assert!(ds.bounds().is_none());
    }
}
