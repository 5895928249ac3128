//!
//! # Transaction
//!
//! Legacy (pre-segwit) transaction layout, enough to build and identify a
//! genesis coinbase.
//!

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::{self, Write};

use crate::constants::SEQUENCE_FINAL;
use crate::hashing;
use crate::script::Script;
use crate::{Amount, Hash, ZERO_HASH};

/// A 32-byte transaction identifier, double SHA-256 of the consensus encoding.
pub type TransactionId = Hash;

/// Reference to a previous transaction output
#[derive(Eq, Default, Hash, PartialEq, Debug, Copy, Clone, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutpoint {
    pub transaction_id: TransactionId,
    pub index: u32,
}

impl TransactionOutpoint {
    pub fn new(transaction_id: TransactionId, index: u32) -> Self {
        Self { transaction_id, index }
    }

    /// The outpoint carried by coinbase inputs.
    pub fn null() -> Self {
        Self { transaction_id: ZERO_HASH, index: u32::MAX }
    }

    pub fn is_null(&self) -> bool {
        self.transaction_id.is_zero() && self.index == u32::MAX
    }
}

impl Display for TransactionOutpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.transaction_id, self.index)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub previous_outpoint: TransactionOutpoint,
    pub signature_script: Script,
    pub sequence: u32,
}

impl TransactionInput {
    pub fn new(previous_outpoint: TransactionOutpoint, signature_script: Script, sequence: u32) -> Self {
        Self { previous_outpoint, signature_script, sequence }
    }

    pub fn coinbase(signature_script: Script) -> Self {
        Self::new(TransactionOutpoint::null(), signature_script, SEQUENCE_FINAL)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutput {
    pub value: Amount,
    pub script_public_key: Script,
}

impl TransactionOutput {
    pub fn new(value: Amount, script_public_key: Script) -> Self {
        Self { value, script_public_key }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn new(version: i32, inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>, lock_time: u32) -> Self {
        Self { version, inputs, outputs, lock_time }
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_outpoint.is_null()
    }

    /// Writes the consensus encoding into `writer`.
    pub fn consensus_encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.version.to_le_bytes())?;
        write_compact_size(writer, self.inputs.len() as u64)?;
        for input in &self.inputs {
            writer.write_all(input.previous_outpoint.transaction_id.as_bytes())?;
            writer.write_all(&input.previous_outpoint.index.to_le_bytes())?;
            write_var_bytes(writer, input.signature_script.as_bytes())?;
            writer.write_all(&input.sequence.to_le_bytes())?;
        }
        write_compact_size(writer, self.outputs.len() as u64)?;
        for output in &self.outputs {
            writer.write_all(&output.value.to_le_bytes())?;
            write_var_bytes(writer, output.script_public_key.as_bytes())?;
        }
        writer.write_all(&self.lock_time.to_le_bytes())
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.consensus_encode(&mut bytes);
        bytes
    }

    pub fn id(&self) -> TransactionId {
        hashing::tx::id(self)
    }
}

/// Bitcoin-style variable length integer.
pub fn write_compact_size<W: Write>(writer: &mut W, n: u64) -> io::Result<()> {
    match n {
        0..=0xfc => writer.write_all(&[n as u8]),
        0xfd..=0xffff => {
            writer.write_all(&[0xfd])?;
            writer.write_all(&(n as u16).to_le_bytes())
        }
        0x1_0000..=0xffff_ffff => {
            writer.write_all(&[0xfe])?;
            writer.write_all(&(n as u32).to_le_bytes())
        }
        _ => {
            writer.write_all(&[0xff])?;
            writer.write_all(&n.to_le_bytes())
        }
    }
}

fn write_var_bytes<W: Write>(writer: &mut W, bytes: &[u8]) -> io::Result<()> {
    write_compact_size(writer, bytes.len() as u64)?;
    writer.write_all(bytes)
}
