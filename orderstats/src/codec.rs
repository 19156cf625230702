// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Little-endian byte buffers for the persisted quantile model.

use std::io;
use std::io::Cursor;
use std::io::Read;

use byteorder::ByteOrder;
use byteorder::LittleEndian;
use byteorder::ReadBytesExt;

pub(crate) struct ModelBytes {
    bytes: Vec<u8>,
}

impl ModelBytes {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn write(&mut self, buf: &[u8]) {
        self.bytes.extend_from_slice(buf);
    }

    pub fn write_u8(&mut self, n: u8) {
        self.bytes.push(n);
    }

    pub fn write_u32_le(&mut self, n: u32) {
        let mut buf = [0u8; 4];
        LittleEndian::write_u32(&mut buf, n);
        self.write(&buf);
    }

    pub fn write_i64_le(&mut self, n: i64) {
        let mut buf = [0u8; 8];
        LittleEndian::write_i64(&mut buf, n);
        self.write(&buf);
    }

    pub fn write_f64_le(&mut self, n: f64) {
        let mut buf = [0u8; 8];
        LittleEndian::write_f64(&mut buf, n);
        self.write(&buf);
    }

    /// Writes a u32 length prefix followed by the UTF-8 bytes.
    pub fn write_str(&mut self, s: &str) {
        self.write_u32_le(s.len() as u32);
        self.write(s.as_bytes());
    }
}

pub(crate) struct ModelSlice<'a> {
    slice: Cursor<&'a [u8]>,
}

impl<'a> ModelSlice<'a> {
    pub fn new(slice: &'a [u8]) -> ModelSlice<'a> {
        ModelSlice {
            slice: Cursor::new(slice),
        }
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        let len = self.slice.get_ref().len() as u64;
        len.saturating_sub(self.slice.position()) as usize
    }

    pub fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.slice.read_exact(buf)
    }

    pub fn read_u8(&mut self) -> io::Result<u8> {
        self.slice.read_u8()
    }

    pub fn read_u32_le(&mut self) -> io::Result<u32> {
        self.slice.read_u32::<LittleEndian>()
    }

    pub fn read_i64_le(&mut self) -> io::Result<i64> {
        self.slice.read_i64::<LittleEndian>()
    }

    pub fn read_f64_le(&mut self) -> io::Result<f64> {
        self.slice.read_f64::<LittleEndian>()
    }

    /// Reads a u32 length prefix followed by that many UTF-8 bytes.
    pub fn read_string(&mut self) -> io::Result<String> {
        let len = self.read_u32_le()? as usize;
        if len > self.remaining() {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }
        let mut buf = vec![0u8; len];
        self.read_exact(&mut buf)?;
        String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_length_beyond_buffer() {
        let mut bytes = ModelBytes::with_capacity(8);
        bytes.write_u32_le(100);
        bytes.write(b"abc");
        let bytes = bytes.into_bytes();
        let mut slice = ModelSlice::new(&bytes);
        let err = slice.read_string().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_mixed_fields() {
        let mut bytes = ModelBytes::with_capacity(32);
        bytes.write_u8(7);
        bytes.write_i64_le(-3);
        bytes.write_f64_le(2.5);
        bytes.write_str("median");
        let bytes = bytes.into_bytes();

        let mut slice = ModelSlice::new(&bytes);
        assert_eq!(slice.read_u8().unwrap(), 7);
        assert_eq!(slice.read_i64_le().unwrap(), -3);
        assert_eq!(slice.read_f64_le().unwrap(), 2.5);
        assert_eq!(slice.read_string().unwrap(), "median");
        assert_eq!(slice.remaining(), 0);
    }
}
