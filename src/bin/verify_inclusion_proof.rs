use clap::Parser;
use log::{error, info};
use std::{error::Error, path::PathBuf, process::ExitCode};

use prime_merkle::{
    load_from_file,
    merkle_tree::{
        utils::{decode_leaf, leaf_from_hex, leaf_to_hex, verify_proof},
        MerkleProof,
    },
    InclusionProof,
};

/// Checks an exported inclusion claim the way the on-chain validator does.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON claim written by gen_inclusion_proof
    #[arg(long, default_value = "inclusion_proof.json")]
    input: PathBuf,

    /// Root to check against, e.g. the one read from the contract. Defaults to the root in the claim
    #[arg(long)]
    root: Option<String>,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let claim: InclusionProof = load_from_file(&args.input)?;
    let proof = MerkleProof::try_from(&claim)?;
    let root = match &args.root {
        Some(root) => leaf_from_hex(root)?,
        None => proof.root,
    };

    if verify_proof(&proof.leaf, proof.index, &proof.sibling_hashes, &root) {
        info!(
            "leaf {} (value {}) is included under root {}",
            proof.index,
            decode_leaf(&proof.leaf),
            leaf_to_hex(&root)
        );
        Ok(ExitCode::SUCCESS)
    } else {
        error!("proof for leaf {} does not verify", proof.index);
        Ok(ExitCode::FAILURE)
    }
}
