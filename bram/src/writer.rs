use bit_vec::BitVec;
use std::io::{Error, Result, Write};

/// Hierarchical name of the RAM being initialized. Lines are emitted as
/// `<block>[<index>].<memory>[<address>]`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MemoryPath {
	pub block: String,
	pub memory: String
}

impl Default for MemoryPath {
	fn default() -> Self {
		MemoryPath {
			block: "BRAM_FIFO_blk".to_owned(),
			memory: "FIFO.RAM.RAM".to_owned()
		}
	}
}

/// Writes sized binary literal assignments, one line per memory word:
///
/// ```text
/// BRAM_FIFO_blk[1].FIFO.RAM.RAM[5] <= 8'b00000101;
/// ```
pub struct InitWriter<O> where O: Write {
	out: O,
	path: MemoryPath,
	width: usize,
	words: usize,
	line: Vec<u8>
}

impl<O> InitWriter<O> where O: Write {
	/// Starts a new dump of words that are `width` bits wide.
	pub fn new(out: O, path: MemoryPath, width: usize) -> Self {
		InitWriter {
			out,
			path,
			width,
			words: 0,
			line: Vec::new()
		}
	}

	/// Number of words written so far.
	pub fn words(&self) -> usize {
		self.words
	}

	/// Writes the assignment of a single word to `address` of memory block `block`.
	///
	/// # Panics
	/// If the word is not exactly as wide as the writer.
	pub fn word(&mut self, block: u32, address: usize, word: &BitVec) -> Result<()> {
		assert_eq!(word.len(), self.width, "Word width mismatch: expected {} bits, got {}", self.width, word.len());

		self.line.clear();
		write!(self.line, "{}[{}].{}[{}] <= {}'b", self.path.block, block, self.path.memory, address, self.width)?;
		self.line.extend(word.iter().map(|bit| if bit { b'1' } else { b'0' }));
		self.line.extend_from_slice(b";\n");

		self.out.write_all(&self.line)?;
		self.words += 1;

		Ok(())
	}

	/// Flushes the output, returning it.
	pub fn finish(mut self) -> Result<O> {
		self.out.flush()?;

		Ok(self.out)
	}
}

/// Duplicates everything written into a primary and a secondary output.
///
/// Only failures of the primary are returned from `write` and `flush`. The first
/// failure of the secondary is kept aside, and nothing more is copied to it.
pub struct Tee<A, B> where A: Write, B: Write {
	primary: A,
	secondary: B,
	secondary_error: Option<Error>
}

impl<A, B> Tee<A, B> where A: Write, B: Write {
	pub fn new(primary: A, secondary: B) -> Self {
		Tee { primary, secondary, secondary_error: None }
	}

	/// Takes the error that stopped copies to the secondary output, if any.
	pub fn take_secondary_error(&mut self) -> Option<Error> {
		self.secondary_error.take()
	}

	pub fn into_inner(self) -> (A, B) {
		(self.primary, self.secondary)
	}
}

impl<A, B> Write for Tee<A, B> where A: Write, B: Write {
	fn write(&mut self, buf: &[u8]) -> Result<usize> {
		self.primary.write_all(buf)?;

		if self.secondary_error.is_none() {
			if let Err(err) = self.secondary.write_all(buf) {
				self.secondary_error = Some(err);
			}
		}

		Ok(buf.len())
	}

	fn flush(&mut self) -> Result<()> {
		self.primary.flush()?;

		if self.secondary_error.is_none() {
			if let Err(err) = self.secondary.flush() {
				self.secondary_error = Some(err);
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::{InitWriter, MemoryPath, Tee};
	use crate::bits::extract;
	use std::io::{Error, ErrorKind, Result, Write};

	#[test]
	fn test_line_format() {
		let mut writer = InitWriter::new(Vec::new(), MemoryPath::default(), 8);

		writer.word(1, 5, &extract(5, 8)).unwrap();
		writer.word(0, 0, &extract(255, 8)).unwrap();

		assert_eq!(writer.words(), 2);

		let out = String::from_utf8(writer.finish().unwrap()).unwrap();

		assert_eq!(out, "BRAM_FIFO_blk[1].FIFO.RAM.RAM[5] <= 8'b00000101;\nBRAM_FIFO_blk[0].FIFO.RAM.RAM[0] <= 8'b11111111;\n");
	}

	#[test]
	fn test_custom_path() {
		let path = MemoryPath { block: "mem".to_owned(), memory: "ram".to_owned() };
		let mut writer = InitWriter::new(Vec::new(), path, 3);

		writer.word(7, 2, &extract(6, 3)).unwrap();

		assert_eq!(writer.finish().unwrap(), b"mem[7].ram[2] <= 3'b110;\n".to_vec());
	}

	#[test]
	#[should_panic]
	fn test_width_mismatch() {
		let mut writer = InitWriter::new(Vec::new(), MemoryPath::default(), 8);

		let _ = writer.word(0, 0, &extract(1, 4));
	}

	#[test]
	fn test_tee() {
		let mut primary = Vec::new();
		let mut secondary = Vec::new();

		{
			let mut writer = InitWriter::new(Tee::new(&mut primary, &mut secondary), MemoryPath::default(), 2);
			writer.word(0, 1, &extract(2, 2)).unwrap();

			let mut tee = writer.finish().unwrap();
			assert!(tee.take_secondary_error().is_none());
		}

		assert_eq!(primary, secondary);
		assert_eq!(primary, b"BRAM_FIFO_blk[0].FIFO.RAM.RAM[1] <= 2'b10;\n".to_vec());
	}

	struct Closed;

	impl Write for Closed {
		fn write(&mut self, _: &[u8]) -> Result<usize> {
			Err(Error::new(ErrorKind::BrokenPipe, "closed"))
		}

		fn flush(&mut self) -> Result<()> {
			Ok(())
		}
	}

	#[test]
	fn test_tee_secondary_failure() {
		let mut writer = InitWriter::new(Tee::new(Vec::new(), Closed), MemoryPath::default(), 2);

		writer.word(0, 0, &extract(1, 2)).unwrap();
		writer.word(0, 1, &extract(3, 2)).unwrap();

		let mut tee = writer.finish().unwrap();

		assert_eq!(tee.take_secondary_error().map(|err| err.kind()), Some(ErrorKind::BrokenPipe));
		assert!(tee.take_secondary_error().is_none());

		let (primary, _) = tee.into_inner();
		assert_eq!(primary.len(), 2 * "BRAM_FIFO_blk[0].FIFO.RAM.RAM[0] <= 2'b01;\n".len());
	}
}
