//! Script construction
//!
//! Only the pieces needed to assemble coinbase scripts: data pushes, script
//! numbers and single opcodes. Script execution lives elsewhere.

use serde::{Deserialize, Serialize};

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_CHECKSIG: u8 = 0xac;

/// Raw script bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(pub Vec<u8>);

impl Script {
    /// Create an empty script
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push an integer. -1 and 0..=16 become their dedicated opcodes,
    /// anything else is pushed as a script number.
    pub fn push_int(self, value: i64) -> Self {
        match value {
            -1 => self.push_opcode(OP_1NEGATE),
            0 => self.push_opcode(OP_0),
            1..=16 => self.push_opcode(OP_1 + (value as u8 - 1)),
            _ => self.push_script_num(value),
        }
    }

    /// Push a script number as data, even for small values
    pub fn push_script_num(self, value: i64) -> Self {
        let encoded = encode_script_num(value);
        self.push_slice(&encoded)
    }

    /// Push arbitrary data with the smallest length prefix that fits
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Append a single opcode
    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number
pub fn encode_script_num(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while magnitude > 0 {
        out.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }

    // The top bit carries the sign; add a byte when the magnitude already uses it
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_num_encoding() {
        assert_eq!(encode_script_num(0), Vec::<u8>::new());
        assert_eq!(encode_script_num(4), vec![0x04]);
        assert_eq!(encode_script_num(-1), vec![0x81]);
        assert_eq!(encode_script_num(0x80), vec![0x80, 0x00]);
        assert_eq!(encode_script_num(-0x80), vec![0x80, 0x80]);
        assert_eq!(encode_script_num(486604799), vec![0xff, 0xff, 0x00, 0x1d]);
    }

    #[test]
    fn test_push_int_small_values_use_opcodes() {
        assert_eq!(Script::new().push_int(0).0, vec![OP_0]);
        assert_eq!(Script::new().push_int(16).0, vec![0x60]);
        assert_eq!(Script::new().push_int(-1).0, vec![OP_1NEGATE]);
        assert_eq!(Script::new().push_int(17).0, vec![0x01, 0x11]);
    }

    #[test]
    fn test_push_script_num_keeps_small_values_as_data() {
        assert_eq!(Script::new().push_script_num(4).0, vec![0x01, 0x04]);
    }

    #[test]
    fn test_push_slice_prefixes() {
        let short = Script::new().push_slice(&[7u8; 75]);
        assert_eq!(short.0[0], 75);
        assert_eq!(short.len(), 76);

        let medium = Script::new().push_slice(&[7u8; 76]);
        assert_eq!(&medium.0[..2], &[OP_PUSHDATA1, 76]);

        let long = Script::new().push_slice(&[7u8; 300]);
        assert_eq!(&long.0[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
    }

    #[test]
    fn test_pay_to_pubkey_shape() {
        let script = Script::new().push_slice(&[0x04; 65]).push_opcode(OP_CHECKSIG);
        assert_eq!(script.len(), 67);
        assert_eq!(script.0[0], 65);
        assert_eq!(*script.0.last().unwrap(), OP_CHECKSIG);
    }
}
