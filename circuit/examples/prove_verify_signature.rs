//! Example signing a message, checking it natively, then proving and
//! verifying the signature with Groth16.

use circuit::{
    build_witness, compile, prove, setup, verify, CircuitShape, SignatureCircuit, SignatureWitness,
};
use eddsa::{Message, SigningKey};
use rand::thread_rng;
use std::time::Instant;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut rng = thread_rng();
    let signing_key = SigningKey::random(&mut rng);
    let verifying_key = signing_key.verifying_key();

    let message = Message::from_bytes(b"privateKeyprivateKeyprivateKe").expect("message");
    let signature = signing_key.sign(&message).expect("sign");
    assert!(verifying_key.verify(&message, &signature).expect("native verify"));
    println!("Native signature check passed.");

    let compile_start = Instant::now();
    let compiled = compile(SignatureCircuit::shape()).expect("compile");
    let compile_time = compile_start.elapsed();
    let digest = compiled.digest();

    let setup_start = Instant::now();
    let (pk, vk) = setup(&compiled, &mut rng).expect("setup");
    let setup_time = setup_start.elapsed();

    let witness = SignatureWitness::new(&signature, &verifying_key, &message);
    let (witness, public) =
        build_witness(&compiled, SignatureCircuit::new(witness)).expect("witness");

    let prove_start = Instant::now();
    let proof = prove(&compiled, &pk, &witness, &mut rng).expect("prove");
    let prove_time = prove_start.elapsed();
    let proof_bytes = proof.to_bytes().expect("serialize proof");

    let verify_start = Instant::now();
    let outcome = verify(&proof, &vk, &public).expect("verify");
    let verify_time = verify_start.elapsed();

    println!("Constraints: {}", digest.num_constraints);
    println!("Public inputs: {}", digest.num_public_inputs());
    println!("Witness variables: {}", digest.num_witness_variables);
    println!("Compile time: {:?}", compile_time);
    println!("Setup time: {:?}", setup_time);
    println!("Proving time: {:?}", prove_time);
    println!("Proof size (bytes): {}", proof_bytes.len());
    println!("Verification time: {:?}", verify_time);
    assert!(outcome.is_valid());
    println!("EdDSA proof verified.");
}
