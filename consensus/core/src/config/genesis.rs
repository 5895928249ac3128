use log::debug;
use serde::{Deserialize, Serialize};

use crate::block::{Block, Header};
use crate::constants::{GENESIS_COINBASE_BITS_PUSH, GENESIS_COINBASE_EXTRA_NONCE};
use crate::errors::{ParamsError, ParamsResult};
use crate::hashing::header::check_proof_of_work;
use crate::network::NetworkId;
use crate::script::{Script, ScriptBuilder};
use crate::tx::{Transaction, TransactionInput, TransactionOutput};
use crate::{Amount, Hash, ZERO_HASH};

/// Inputs that fully determine a genesis block
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisParams {
    /// Arbitrary message embedded in the coinbase scriptSig
    pub timestamp_message: String,
    /// Public key paid by the single coinbase output
    #[serde(with = "hex::serde")]
    pub output_pubkey: Vec<u8>,
    pub reward: Amount,
    pub version: i32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Expected genesis hash and merkle root compiled into a network's parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisPin {
    pub hash: Hash,
    pub merkle_root: Hash,
}

/// A constructed genesis block together with its cached hash
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisBlock {
    block: Block,
    hash: Hash,
}

/// The genesis coinbase: scriptSig `<486604799> <4> <message>`, one pay-to-pubkey output.
pub fn coinbase_transaction(params: &GenesisParams) -> Transaction {
    let script_sig = ScriptBuilder::new()
        .push_int(GENESIS_COINBASE_BITS_PUSH)
        .push_num(GENESIS_COINBASE_EXTRA_NONCE)
        .push_slice(params.timestamp_message.as_bytes())
        .into_script();
    let output = TransactionOutput::new(params.reward, Script::p2pk_script_pubkey(&params.output_pubkey));
    Transaction::new(1, vec![TransactionInput::coinbase(script_sig)], vec![output], 0)
}

impl GenesisBlock {
    pub fn build(params: &GenesisParams) -> Self {
        let coinbase = coinbase_transaction(params);
        let mut block = Block::new(Header::new(params.version, ZERO_HASH, ZERO_HASH, params.time, params.bits, params.nonce), vec![coinbase]);
        block.header.hash_merkle_root = block.calculate_merkle_root();
        let hash = block.hash();
        Self { block, hash }
    }

    /// Builds the block and refuses it unless both hash and merkle root equal the pin.
    pub fn build_verified(network: NetworkId, params: &GenesisParams, pin: &GenesisPin) -> ParamsResult<Self> {
        let genesis = Self::build(params);
        genesis.verify(network, pin)?;
        debug!("{} genesis verified: hash {}, merkle root {}", network, genesis.hash, genesis.merkle_root());
        Ok(genesis)
    }

    pub fn verify(&self, network: NetworkId, pin: &GenesisPin) -> ParamsResult<()> {
        if self.hash != pin.hash {
            return Err(ParamsError::GenesisHashMismatch { network, expected: pin.hash, computed: self.hash });
        }
        if self.merkle_root() != pin.merkle_root {
            return Err(ParamsError::GenesisMerkleMismatch { network, expected: pin.merkle_root, computed: self.merkle_root() });
        }
        Ok(())
    }

    pub fn hash(&self) -> Hash {
        self.hash
    }

    pub fn merkle_root(&self) -> Hash {
        self.block.header.hash_merkle_root
    }

    pub fn header(&self) -> &Header {
        &self.block.header
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn coinbase(&self) -> &Transaction {
        &self.block.transactions[0]
    }

    /// Whether the hash satisfies the target encoded in the header's own bits.
    pub fn meets_target(&self) -> bool {
        check_proof_of_work(&self.block.header)
    }
}
