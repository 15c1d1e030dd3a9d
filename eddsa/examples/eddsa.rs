use eddsa::{Message, Signature, SigningKey, VerifyingKey};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg = Message::from_bytes(b"hello eddsa").expect("message");
    let sig = sk.sign(&msg).expect("sign");
    let sig_bytes = sig.to_bytes();

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2 = Signature::from_bytes(&sig_bytes).expect("decode sig");

    let ok = vk2.verify(&msg, &sig2).expect("verify");
    assert!(ok);
    assert_eq!(sk2.sign(&msg).expect("sign"), sig);

    println!("public key: {:02x?}", vk.to_bytes());
    println!("signature: {:02x?}", sig_bytes);
    println!("valid signature");
}
