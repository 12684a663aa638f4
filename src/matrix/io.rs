//! Raw binary (de)serialization: little-endian IEEE-754 f32s in row-major order, no header.
use super::Matrix;
use crate::error::{Error, Result};
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use std::io::{Read, Write};
use std::mem::size_of;

impl Matrix {
    /// Number of bytes the serialized matrix occupies.
    pub fn num_bytes(&self) -> usize {
        self.num_elems() * size_of::<f32>()
    }

    /// Replaces the contents of the matrix with exactly `rows * cols` f32s read from `reader`.
    ///
    /// The shape is kept. If the stream ends early the matrix is left untouched.
    pub fn read_from<R>(&mut self, reader: R) -> Result<()>
    where
        R: Read,
    {
        let expected = self.num_bytes();
        let mut bytes = Vec::with_capacity(expected);
        reader.take(expected as u64).read_to_end(&mut bytes)?;
        if bytes.len() < expected {
            return Err(Error::Format {
                expected,
                actual: bytes.len(),
            });
        }

        let mut data = vec![0f32; self.num_elems()];
        LittleEndian::read_f32_into(&bytes, &mut data);
        self.data = data;
        Ok(())
    }

    /// Writes the matrix in the layout [`Matrix::read_from`] expects.
    pub fn write_to<W>(&self, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for &x in &self.data {
            writer.write_f32::<LittleEndian>(x)?;
        }
        writer.flush()?;
        Ok(())
    }
}
