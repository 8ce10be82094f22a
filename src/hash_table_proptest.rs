#![cfg(test)]

// State-machine property tests for HashTable, kept inside the crate so they
// can look at chain layout through `chain_stats`.

use crate::error::Error;
use crate::hash_fn::BucketHasher;
use crate::hash_table::HashTable;
use hashbrown::HashMap;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

// Pool-indexed operations so shrinking moves toward earlier keys.
#[derive(Clone, Debug)]
enum Op {
    Set(usize, i32),
    Get(usize),
    Unset(usize),
    Mutate(usize, i32),
    Probe(String),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<Op>)> {
    proptest::collection::vec("[a-z]{0,6}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
            2 => idx.clone().prop_map(Op::Get),
            2 => idx.clone().prop_map(Op::Unset),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
            1 => "[a-z]{0,6}".prop_map(Op::Probe),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Invariants checked after every operation:
// - count() equals the model's len (distinct keys set and not unset).
// - set reports the displaced value exactly when the model had one.
// - get/unset on absent keys fail with NotFound and change nothing.
// - no chain is longer than the number of entries; occupied buckets <= count.
// - before the set that placed the newest entry, the load factor was within
//   the limit: (count - 1) / block_size <= 0.75 whenever growth could apply.
fn run_scenario<H: BucketHasher>(
    mut sut: HashTable<i32, H>,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();
    let initial_block_size = sut.block_size();

    for op in ops {
        let before_block_size = sut.block_size();
        match op {
            Op::Set(i, v) => {
                let k = &pool[i];
                let prev = sut.set(k.as_str(), v).expect("in-range hasher");
                prop_assert_eq!(prev, model.insert(k.clone(), v));
                let count = sut.count();
                prop_assert!(
                    (count - 1) as f64 / sut.block_size() as f64 <= 0.75,
                    "load factor check missed growth"
                );
            }
            Op::Get(i) => {
                let k = &pool[i];
                match model.get(k) {
                    Some(mv) => prop_assert_eq!(sut.get(k), Ok(mv)),
                    None => prop_assert_eq!(sut.get(k), Err(Error::not_found(k))),
                }
            }
            Op::Unset(i) => {
                let k = &pool[i];
                match model.remove(k) {
                    Some(mv) => prop_assert_eq!(sut.unset(k), Ok(mv)),
                    None => prop_assert_eq!(sut.unset(k), Err(Error::not_found(k))),
                }
            }
            Op::Mutate(i, d) => {
                let k = &pool[i];
                if let Some(mv) = model.get_mut(k) {
                    let sv = sut.get_mut(k).expect("present in model");
                    *sv = sv.wrapping_add(d);
                    *mv = mv.wrapping_add(d);
                } else {
                    prop_assert!(sut.get_mut(k).unwrap_err().is_not_found());
                }
            }
            Op::Probe(s) => {
                prop_assert_eq!(sut.contains_key(&s), Ok(model.contains_key(&s)));
            }
        }

        // Block size never shrinks and stays a power-of-two multiple of the start.
        prop_assert!(sut.block_size() >= before_block_size);
        let ratio = sut.block_size() / initial_block_size;
        prop_assert!(ratio.is_power_of_two());
        prop_assert_eq!(sut.block_size() % initial_block_size, 0);

        prop_assert_eq!(sut.count(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        let stats = sut.chain_stats();
        prop_assert!(stats.longest_chain <= sut.count());
        prop_assert!(stats.occupied_buckets <= sut.count());
    }

    for (k, v) in &model {
        prop_assert_eq!(sut.get(k), Ok(v));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    // Equivalence with hashbrown::HashMap under the default polynomial hasher.
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), block_size in 1usize..=8) {
        run_scenario(HashTable::new(block_size).unwrap(), &pool, ops)?;
    }

    // Same invariants with every key forced into bucket 0, so growth has to
    // carry whole chains across reconstruction.
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), block_size in 1usize..=4) {
        let sut = HashTable::with_hasher(block_size, |_: usize, _: &str| 0usize).unwrap();
        run_scenario(sut, &pool, ops)?;
    }
}
