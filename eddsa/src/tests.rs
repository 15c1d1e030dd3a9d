use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn message(bytes: &[u8]) -> Message {
    Message::from_bytes(bytes).expect("message")
}

#[test]
fn test_sign_verify() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let pk = sk.verifying_key();
    let msg = message(b"privateKeyprivateKeyprivateKe");

    let sig = sk.sign(&msg).expect("sign");
    let ok = pk.verify(&msg, &sig).expect("verify");
    assert!(ok);
}

#[test]
fn test_signing_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let msg = message(b"same message");

    assert_eq!(sk.sign(&msg).expect("sign"), sk.sign(&msg).expect("sign"));
}

#[test]
fn test_verify_rejects_wrong_message() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let pk = sk.verifying_key();
    let sig = sk.sign(&message(b"abc")).expect("sign");

    let ok = pk.verify(&message(b"abd"), &sig).expect("verify");
    assert!(!ok);
}

#[test]
fn test_verify_rejects_wrong_key() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let msg = message(b"xyz");
    let sig = sk.sign(&msg).expect("sign");

    let wrong_pk = SigningKey::random(&mut rng).verifying_key();

    let ok = wrong_pk.verify(&msg, &sig).expect("verify");
    assert!(!ok);
}

#[test]
fn test_verify_rejects_modified_response() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let pk = sk.verifying_key();
    let msg = message(b"xyz");
    let mut sig = sk.sign(&msg).expect("sign");
    sig.s += curve::ScalarField::from(1u64);

    assert!(!pk.verify(&msg, &sig).expect("verify"));
}

#[test]
fn test_signature_bytes_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let sk = SigningKey::random(&mut rng);
    let sig = sk.sign(&message(b"bytes")).expect("sign");

    let bytes = sig.to_bytes();
    assert_eq!(bytes.len(), SIG_SIZE);
    assert_eq!(Signature::from_bytes(&bytes), Ok(sig));
    assert!(Signature::from_bytes(&bytes[..SIG_SIZE - 1]).is_err());
}

#[test]
fn test_verifying_key_bytes_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let pk = SigningKey::random(&mut rng).verifying_key();

    let bytes = pk.to_bytes();
    assert_eq!(bytes.len(), PK_SIZE);
    assert_eq!(VerifyingKey::from_bytes(&bytes), Ok(pk));
}

#[test]
fn test_serde_round_trip() {
    let mut rng = StdRng::seed_from_u64(9);
    let sk = SigningKey::random(&mut rng);
    let pk = VerifyingKey::from(&sk);
    let msg = message(b"serde");
    let sig = sk.sign(&msg).expect("sign");

    let sk2: SigningKey =
        bincode::deserialize(&bincode::serialize(&sk).expect("serialize sk")).expect("sk");
    let pk2: VerifyingKey =
        bincode::deserialize(&bincode::serialize(&pk).expect("serialize pk")).expect("pk");
    let sig2: Signature =
        bincode::deserialize(&bincode::serialize(&sig).expect("serialize sig")).expect("sig");

    assert_eq!(sk2, sk);
    assert!(pk2.verify(&msg, &sig2).expect("verify"));
}
