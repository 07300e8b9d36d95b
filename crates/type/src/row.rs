// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Index,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, Value};

/// A fully materialized output row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
	values: Vec<Value>,
}

impl Row {
	pub fn new(values: Vec<Value>) -> Self {
		Self {
			values,
		}
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		self.values.get(index)
	}

	pub fn values(&self) -> &[Value] {
		&self.values
	}

	pub fn into_values(self) -> Vec<Value> {
		self.values
	}

	/// Builds a new row holding the given columns, in the given order.
	pub fn project(&self, indexes: &[usize]) -> Result<Row> {
		let width = self.values.len();
		indexes.iter()
			.map(|&index| {
				self.values.get(index).cloned().ok_or(Error::ColumnOutOfRange {
					index,
					width,
				})
			})
			.collect::<Result<Vec<_>>>()
			.map(Row::new)
	}
}

impl Index<usize> for Row {
	type Output = Value;

	fn index(&self, index: usize) -> &Self::Output {
		&self.values[index]
	}
}

impl From<Vec<Value>> for Row {
	fn from(values: Vec<Value>) -> Self {
		Row::new(values)
	}
}

impl Display for Row {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("(")?;
		for (i, value) in self.values.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{value}")?;
		}
		f.write_str(")")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row() -> Row {
		Row::new(vec![Value::int8(1), Value::utf8("a"), Value::bool(false)])
	}

	#[test]
	fn test_project_reorders_columns() {
		let projected = row().project(&[2, 0]).unwrap();
		assert_eq!(projected.values(), &[Value::bool(false), Value::int8(1)]);
	}

	#[test]
	fn test_project_out_of_range() {
		let err = row().project(&[0, 3]).unwrap_err();
		assert!(matches!(
			err,
			Error::ColumnOutOfRange {
				index: 3,
				width: 3
			}
		));
	}

	#[test]
	fn test_display() {
		assert_eq!(row().to_string(), "(1, a, false)");
		assert_eq!(Row::default().to_string(), "()");
	}
}
