use clap::Parser;
use log::{debug, info};
use rand::Rng;
use std::{error::Error, path::PathBuf};

use prime_merkle::{
    merkle_tree::{
        params::{DEFAULT_NUM_PRIMES, FIRST_CLAIMABLE_INDEX},
        utils::{decode_leaf, leaf_to_hex},
        MerkleTree, Tree,
    },
    save_to_file, InclusionProof,
};

/// Commits to a set of primes and exports the inclusion proof of one of them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// How many primes, starting from 2, to commit to
    #[arg(long, default_value_t = DEFAULT_NUM_PRIMES)]
    num_primes: usize,

    /// Read the committed values from the `value` column of this CSV instead
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Leaf to prove. A random claimable leaf when omitted
    #[arg(long)]
    index: Option<usize>,

    /// Where to write the JSON claim
    #[arg(long, default_value = "inclusion_proof.json")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let merkle_tree = match &args.csv {
        Some(path) => {
            info!("building Merkle tree from {}", path.display());
            MerkleTree::from_csv(path)?
        }
        None => {
            info!("building Merkle tree over the first {} primes", args.num_primes);
            MerkleTree::from_primes(args.num_primes)?
        }
    };

    let leaf_count = merkle_tree.leaf_count();
    info!(
        "root {} over {} leaves, depth {}",
        leaf_to_hex(merkle_tree.root()),
        leaf_count,
        merkle_tree.depth()
    );

    let index = match args.index {
        Some(index) => index,
        None if leaf_count > FIRST_CLAIMABLE_INDEX => {
            rand::thread_rng().gen_range(FIRST_CLAIMABLE_INDEX..leaf_count)
        }
        None => 0,
    };

    let proof = merkle_tree.generate_proof(index)?;
    debug!("siblings: {:?}", proof.sibling_hashes.iter().map(leaf_to_hex).collect::<Vec<_>>());

    if !merkle_tree.verify_proof(&proof) {
        return Err("generated proof does not verify against the tree root".into());
    }

    save_to_file(&args.output, &InclusionProof::from(&proof))?;
    info!(
        "wrote proof for leaf {} (value {}) with {} siblings to {}",
        index,
        decode_leaf(&proof.leaf),
        proof.sibling_hashes.len(),
        args.output.display()
    );

    Ok(())
}
