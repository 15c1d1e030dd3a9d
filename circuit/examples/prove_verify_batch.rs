//! Example proving a batch of signatures on random messages in one Groth16
//! proof.
//!
//! Run with `--release`; the default batch has 200 signatures.

use circuit::{
    build_witness, compile, prove, setup, verify, CircuitShape, DefaultBatchCircuit, BATCH_SIZE,
};
use rand::thread_rng;
use std::time::Instant;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut rng = thread_rng();
    let batch = DefaultBatchCircuit::sample(&mut rng).expect("sample batch");
    println!("Signed {} random messages.", BATCH_SIZE);

    let compile_start = Instant::now();
    let compiled = compile(DefaultBatchCircuit::shape()).expect("compile");
    let compile_time = compile_start.elapsed();

    let setup_start = Instant::now();
    let (pk, vk) = setup(&compiled, &mut rng).expect("setup");
    let setup_time = setup_start.elapsed();

    let witness_start = Instant::now();
    let (witness, public) = build_witness(&compiled, batch).expect("witness");
    let witness_time = witness_start.elapsed();

    let prove_start = Instant::now();
    let proof = prove(&compiled, &pk, &witness, &mut rng).expect("prove");
    let prove_time = prove_start.elapsed();
    let proof_bytes = proof.to_bytes().expect("serialize proof");

    let verify_start = Instant::now();
    let outcome = verify(&proof, &vk, &public).expect("verify");
    let verify_time = verify_start.elapsed();

    println!("Constraints: {}", compiled.digest().num_constraints);
    println!("Public inputs: {}", public.len());
    println!("Compile time: {:?}", compile_time);
    println!("Setup time: {:?}", setup_time);
    println!("Witness time: {:?}", witness_time);
    println!("Proving time: {:?}", prove_time);
    println!("Proof size (bytes): {}", proof_bytes.len());
    println!("Verification time: {:?}", verify_time);
    assert!(outcome.is_valid());
    println!("Batch proof verified.");
}
