#![forbid(unsafe_code)]

//! # `bram`: block RAM initialization dumps
//!
//! Hardware simulators and synthesis tools accept memory contents as a list of
//! assignments to a RAM array, each one a sized binary literal:
//!
//! ```text
//! BRAM_FIFO_blk[0].FIFO.RAM.RAM[3] <= 72'b0000...0111;
//! ```
//!
//! This crate is split into three parts:
//!
//!  * `bits`: exact-width extraction of integer values into bit sequences
//!  * `layout`: named fields of declared widths, packed most significant first into one word
//!  * `writer`: emitting packed words as initializer lines

// Variable length bit collections
extern crate bit_vec;

pub mod bits;
pub mod layout;
pub mod writer;

pub use layout::{Field, Layout};
pub use writer::{InitWriter, MemoryPath, Tee};
