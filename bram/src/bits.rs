use bit_vec::BitVec;
use std::cmp;

/// Appends the low `width` bits of `value` to `bits`, most significant bit first.
///
/// ### Out of range behavior
/// Bits of `value` above `width` are silently discarded. Negative values are
/// shifted arithmetically, so they come out in two's complement, and widths
/// beyond 64 repeat the sign bit.
pub fn push(bits: &mut BitVec, value: i64, width: usize) {
	bits.reserve(width);

	for position in (0..width).rev() {
		let shift = cmp::min(position, 63);

		bits.push((value >> shift) & 1 == 1);
	}
}

/// Extracts exactly `width` bits of `value`, most significant bit first.
/// See `push` for the truncation rules.
pub fn extract(value: i64, width: usize) -> BitVec {
	let mut bits = BitVec::with_capacity(width);
	push(&mut bits, value, width);

	bits
}

/// Renders bits as a string of `0` and `1` characters, in order.
pub fn to_binary_string(bits: &BitVec) -> String {
	bits.iter().map(|bit| if bit { '1' } else { '0' }).collect()
}

#[cfg(test)]
mod test {
	use super::{extract, push, to_binary_string};
	use bit_vec::BitVec;

	#[test]
	fn test_extract_exact() {
		assert_eq!(to_binary_string(&extract(7, 4)), "0111");
		assert_eq!(to_binary_string(&extract(10, 14)), "00000000001010");
		assert_eq!(to_binary_string(&extract(16379, 14)), "11111111111011");
		assert_eq!(to_binary_string(&extract(0, 10)), "0000000000");
		assert_eq!(extract(5, 0).len(), 0);
	}

	#[test]
	fn test_round_trip() {
		for &width in [1usize, 4, 10, 14, 63].iter() {
			let limit = if width >= 63 { ::std::i64::MAX } else { (1i64 << width) - 1 };

			for &value in [0, 1, limit / 3, limit / 2, limit - 1, limit].iter() {
				let digits = to_binary_string(&extract(value, width));

				assert_eq!(digits.len(), width);
				assert_eq!(i64::from_str_radix(&digits, 2), Ok(value), "width {} value {}", width, value);
			}
		}
	}

	#[test]
	fn test_truncation() {
		// 1024 needs 11 bits, only the low 10 are kept
		assert_eq!(to_binary_string(&extract(1024, 10)), "0000000000");
		assert_eq!(to_binary_string(&extract(1027, 10)), "0000000011");
		assert_eq!(to_binary_string(&extract(0xFF, 4)), "1111");
	}

	#[test]
	fn test_negative() {
		assert_eq!(to_binary_string(&extract(-1, 4)), "1111");
		assert_eq!(to_binary_string(&extract(-2, 6)), "111110");
		assert_eq!(to_binary_string(&extract(-1, 70)), "1".repeat(70));
		assert_eq!(to_binary_string(&extract(5, 66)), format!("{}101", "0".repeat(63)));
	}

	#[test]
	fn test_push_appends() {
		let mut bits = BitVec::new();

		push(&mut bits, 3, 2);
		push(&mut bits, 0, 3);
		push(&mut bits, 1, 1);

		assert_eq!(to_binary_string(&bits), "110001");
	}
}
