#[cfg(test)]
mod test {

    use crate::merkle_tree::utils::{encode_leaf, hash_pair, verify_proof};
    use crate::merkle_tree::{Leaf, MerkleError, MerkleTree, Tree};
    use num_bigint::BigUint;
    use rand::Rng;

    fn leaf(value: u64) -> Leaf {
        encode_leaf(&BigUint::from(value)).unwrap()
    }

    fn leaves(values: &[u64]) -> Vec<Leaf> {
        values.iter().map(|&value| leaf(value)).collect()
    }

    #[test]
    fn test_mt() {
        // create new merkle tree over the first 16 primes
        let merkle_tree = MerkleTree::from_csv("src/merkle_tree/csv/primes_16.csv").unwrap();

        // get root
        let root = merkle_tree.root();

        // expect root hash to be different than 0
        assert_ne!(*root, [0u8; 32]);
        // expect depth to be 4
        assert_eq!(*merkle_tree.depth(), 4_usize);
        assert_eq!(merkle_tree.leaf_count(), 16);

        // the same set loaded from csv or generated in memory commits to the same root
        assert_eq!(root, MerkleTree::from_primes(16).unwrap().root());

        // get proof for entry 0
        let proof = merkle_tree.generate_proof(0).unwrap();

        // verify proof
        assert!(merkle_tree.verify_proof(&proof));

        // should create valid proof for each entry in the tree and verify it
        for i in 0..16 {
            let proof = merkle_tree.generate_proof(i).unwrap();
            assert_eq!(proof.sibling_hashes.len(), 4);
            assert!(merkle_tree.verify_proof(&proof));
        }

        // should return the index of a value that exists in the tree
        assert_eq!(merkle_tree.index_of(&BigUint::from(53u32)), Some(15));

        // shouldn't return the index of a value that doesn't exist in the tree
        assert_eq!(merkle_tree.index_of(&BigUint::from(4u32)), None);

        // shouldn't create a proof for an entry that doesn't exist in the tree
        assert!(matches!(
            merkle_tree.generate_proof(16),
            Err(MerkleError::IndexOutOfRange {
                index: 16,
                leaf_count: 16
            })
        ));

        // shouldn't verify a proof with a wrong leaf
        let mut proof_invalid_1 = proof.clone();
        proof_invalid_1.leaf = leaf(4);
        assert!(!merkle_tree.verify_proof(&proof_invalid_1));

        // shouldn't verify a proof with a wrong root hash
        let mut proof_invalid_2 = proof.clone();
        proof_invalid_2.root = [0u8; 32];
        assert!(!merkle_tree.verify_proof(&proof_invalid_2));

        // shouldn't verify a proof with a wrong sibling
        let mut proof_invalid_3 = proof;
        proof_invalid_3.sibling_hashes[0] = [0u8; 32];
        assert!(!merkle_tree.verify_proof(&proof_invalid_3));
    }

    #[test]
    fn test_four_primes_scenario() {
        let merkle_tree = MerkleTree::new(leaves(&[2, 3, 5, 7])).unwrap();
        let nodes = merkle_tree.nodes();

        let left = hash_pair(&leaf(2), &leaf(3));
        let right = hash_pair(&leaf(5), &leaf(7));
        assert_eq!(nodes[1], vec![left, right]);
        assert_eq!(*merkle_tree.root(), hash_pair(&left, &right));

        let proof = merkle_tree.generate_proof(1).unwrap();
        assert_eq!(proof.sibling_hashes, vec![leaf(2), right]);
        assert_eq!(proof.path_indices, vec![1, 0]);
        assert_eq!(proof.submission_args(), (vec![leaf(2), right], leaf(3)));

        assert!(verify_proof(
            &leaf(3),
            1,
            &proof.sibling_hashes,
            merkle_tree.root()
        ));
    }

    #[test]
    fn test_balanced_tree_levels() {
        let merkle_tree = MerkleTree::new(leaves(&[2, 3, 5, 7, 11, 13, 17, 19])).unwrap();
        let widths: Vec<usize> = merkle_tree.nodes().iter().map(Vec::len).collect();

        assert_eq!(widths, vec![8, 4, 2, 1]);
        assert_eq!(*merkle_tree.depth(), 3);
    }

    #[test]
    fn test_odd_levels_pair_last_node_with_itself() {
        let merkle_tree = MerkleTree::new(leaves(&[2, 3, 5, 7, 11])).unwrap();
        let nodes = merkle_tree.nodes();
        let widths: Vec<usize> = nodes.iter().map(Vec::len).collect();

        assert_eq!(widths, vec![5, 3, 2, 1]);
        assert_eq!(nodes[1][2], hash_pair(&leaf(11), &leaf(11)));
        assert_eq!(nodes[2][1], hash_pair(&nodes[1][2], &nodes[1][2]));
        assert_eq!(nodes[3][0], hash_pair(&nodes[2][0], &nodes[2][1]));

        // the unpaired node is its own sibling, so the proof folds to the root
        let proof = merkle_tree.generate_proof(4).unwrap();
        assert_eq!(
            proof.sibling_hashes,
            vec![leaf(11), nodes[1][2], nodes[2][0]]
        );
        assert_eq!(proof.path_indices, vec![0, 0, 1]);
        assert!(merkle_tree.verify_proof(&proof));
    }

    #[test]
    fn test_single_leaf_tree() {
        let merkle_tree = MerkleTree::new(leaves(&[2])).unwrap();

        assert_eq!(*merkle_tree.root(), leaf(2));
        assert_eq!(*merkle_tree.depth(), 0);
        assert_eq!(merkle_tree.nodes().len(), 1);

        let proof = merkle_tree.generate_proof(0).unwrap();
        assert!(proof.sibling_hashes.is_empty());
        assert!(merkle_tree.verify_proof(&proof));
        assert!(merkle_tree.generate_proof(1).is_err());
    }

    #[test]
    fn test_empty_tree() {
        assert!(matches!(
            MerkleTree::new(vec![]),
            Err(MerkleError::EmptyInput)
        ));
        assert!(matches!(
            MerkleTree::from_primes(0),
            Err(MerkleError::EmptyInput)
        ));
    }

    #[test]
    fn test_every_index_verifies_for_every_size() {
        for size in 1..=33 {
            let merkle_tree = MerkleTree::from_primes(size).unwrap();

            for index in 0..size {
                let proof = merkle_tree.generate_proof(index).unwrap();
                assert!(
                    verify_proof(&proof.leaf, index, &proof.sibling_hashes, merkle_tree.root()),
                    "proof for index {} of a {} leaf tree should verify",
                    index,
                    size
                );
            }
        }
    }

    #[test]
    fn test_tampering_breaks_verification() {
        let merkle_tree = MerkleTree::from_primes(16).unwrap();
        let index = rand::thread_rng().gen_range(0..16);
        let proof = merkle_tree.generate_proof(index).unwrap();
        let root = merkle_tree.root();

        for sibling in 0..proof.sibling_hashes.len() {
            for byte in 0..32 {
                let mut tampered = proof.sibling_hashes.clone();
                tampered[sibling][byte] ^= 0x01;
                assert!(!verify_proof(&proof.leaf, index, &tampered, root));
            }
        }

        for byte in 0..32 {
            let mut tampered_leaf = proof.leaf;
            tampered_leaf[byte] ^= 0x80;
            assert!(!verify_proof(
                &tampered_leaf,
                index,
                &proof.sibling_hashes,
                root
            ));
        }
    }

    #[test]
    fn test_verification_ignores_index_parity() {
        let merkle_tree = MerkleTree::from_primes(8).unwrap();
        let proof = merkle_tree.generate_proof(5).unwrap();

        assert!(verify_proof(
            &proof.leaf,
            4,
            &proof.sibling_hashes,
            merkle_tree.root()
        ));
    }

    #[test]
    fn test_leaf_order_changes_root() {
        let merkle_tree = MerkleTree::new(leaves(&[2, 3, 5, 7])).unwrap();
        let merkle_tree_2 = MerkleTree::new(leaves(&[2, 5, 3, 7])).unwrap();
        assert_ne!(merkle_tree.root(), merkle_tree_2.root());

        // swapping siblings keeps the root since each pair is hashed in sorted order
        let merkle_tree_3 = MerkleTree::new(leaves(&[3, 2, 7, 5])).unwrap();
        assert_eq!(merkle_tree.root(), merkle_tree_3.root());

        // a proof is only accepted by the tree it was generated from
        let proof = merkle_tree_2.generate_proof(0).unwrap();
        assert!(!merkle_tree.verify_proof(&proof));
    }

    #[test]
    fn test_generate_proofs_batch() {
        let merkle_tree = MerkleTree::from_primes(21).unwrap();
        let indices: Vec<usize> = (0..21).rev().collect();

        let proofs = merkle_tree.generate_proofs(&indices).unwrap();
        assert_eq!(proofs.len(), indices.len());

        for (proof, &index) in proofs.iter().zip(indices.iter()) {
            assert_eq!(proof.index, index);
            assert_eq!(*proof, merkle_tree.generate_proof(index).unwrap());
            assert!(merkle_tree.verify_proof(proof));
        }

        assert!(merkle_tree.generate_proofs(&[0, 21]).is_err());
    }

    #[test]
    fn test_mt_from_csv_with_hex_values() {
        let merkle_tree =
            MerkleTree::from_csv("src/merkle_tree/csv/primes_5_mixed_radix.csv").unwrap();
        assert_eq!(
            merkle_tree.root(),
            MerkleTree::from_primes(5).unwrap().root()
        );
    }

    #[test]
    fn test_mt_from_csv_overflow() {
        let result = MerkleTree::from_csv("src/merkle_tree/csv/value_overflow.csv");
        assert!(matches!(result, Err(MerkleError::Encoding { bits: 257 })));
    }

    #[test]
    fn test_mt_from_csv_invalid_value() {
        let result = MerkleTree::from_csv("src/merkle_tree/csv/invalid_value.csv");
        assert!(matches!(result, Err(MerkleError::InvalidValue(_))));

        let result = MerkleTree::from_csv("src/merkle_tree/csv/missing.csv");
        assert!(matches!(result, Err(MerkleError::Io(_))));
    }
}
