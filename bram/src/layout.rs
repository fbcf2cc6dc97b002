use crate::bits;
use bit_vec::BitVec;

/// A named bit field of a memory word.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Field {
	pub name: &'static str,
	pub width: usize
}

/// The ordered fields of a memory word. The first field lands in the most
/// significant bits.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Layout {
	fields: &'static [Field]
}

impl Layout {
	pub const fn new(fields: &'static [Field]) -> Self {
		Layout { fields }
	}

	pub fn fields(&self) -> &'static [Field] {
		self.fields
	}

	/// Total width of a packed word in bits.
	pub fn width(&self) -> usize {
		self.fields.iter().map(|field| field.width).sum()
	}

	/// Returns the range of bit indices, counted from the most significant bit,
	/// that a field occupies in a packed word.
	pub fn span(&self, name: &str) -> Option<::std::ops::Range<usize>> {
		let mut start = 0;

		for field in self.fields {
			if field.name == name {
				return Some(start..start + field.width);
			}

			start += field.width;
		}

		None
	}

	/// Packs one value per field into a single word, most significant bit first.
	/// Each value is truncated to the width of its field, see `bits::push`.
	///
	/// # Panics
	/// If the number of values differs from the number of fields.
	pub fn pack(&self, values: &[i64]) -> BitVec {
		assert_eq!(values.len(), self.fields.len(), "Layout has {} fields, but {} values were supplied", self.fields.len(), values.len());

		let mut word = BitVec::with_capacity(self.width());

		for (field, &value) in self.fields.iter().zip(values) {
			bits::push(&mut word, value, field.width);
		}

		word
	}
}
