use serde::{Deserialize, Serialize};

/// Script opcodes used when assembling coinbase and pay-to-pubkey scripts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
#[allow(non_camel_case_types)]
pub enum Opcode {
    OP_0 = 0x00,
    OP_PUSHDATA1 = 0x4c,
    OP_PUSHDATA2 = 0x4d,
    OP_PUSHDATA4 = 0x4e,
    OP_1NEGATE = 0x4f,
    OP_1 = 0x51,
    OP_16 = 0x60,
    OP_CHECKSIG = 0xac,
}

/// Raw script bytes
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(with = "hex::serde")]
    bytes: Vec<u8>,
}

impl Script {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Pay-to-pubkey: `<pubkey> OP_CHECKSIG`.
    pub fn p2pk_script_pubkey(pubkey: &[u8]) -> Self {
        ScriptBuilder::new().push_slice(pubkey).push_opcode(Opcode::OP_CHECKSIG).into_script()
    }
}

/// Incremental script assembler with the reference client's push rules.
#[derive(Clone, Debug, Default)]
pub struct ScriptBuilder {
    bytes: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn push_opcode(mut self, opcode: Opcode) -> Self {
        self.bytes.push(opcode as u8);
        self
    }

    /// Pushes an integer, using the small-integer opcodes for -1 and 0..=16.
    pub fn push_int(self, n: i64) -> Self {
        match n {
            0 => self.push_opcode(Opcode::OP_0),
            -1 => self.push_opcode(Opcode::OP_1NEGATE),
            1..=16 => {
                let mut builder = self;
                builder.bytes.push(Opcode::OP_1 as u8 + (n as u8 - 1));
                builder
            }
            _ => self.push_num(n),
        }
    }

    /// Pushes the minimal script-number encoding of `n` as data, even where an
    /// opcode would do. The genesis coinbase relies on this for its `4` marker.
    pub fn push_num(self, n: i64) -> Self {
        let encoded = encode_script_num(n);
        self.push_slice(&encoded)
    }

    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < Opcode::OP_PUSHDATA1 as usize {
            self.bytes.push(len as u8);
        } else if len <= u8::MAX as usize {
            self.bytes.push(Opcode::OP_PUSHDATA1 as u8);
            self.bytes.push(len as u8);
        } else if len <= u16::MAX as usize {
            self.bytes.push(Opcode::OP_PUSHDATA2 as u8);
            self.bytes.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.bytes.push(Opcode::OP_PUSHDATA4 as u8);
            self.bytes.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.bytes.extend_from_slice(data);
        self
    }

    pub fn into_script(self) -> Script {
        Script::from_bytes(self.bytes)
    }
}

/// Little-endian sign-magnitude encoding with the sign in the top bit of the last byte.
pub fn encode_script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    // `out` is non-empty because n != 0.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}
