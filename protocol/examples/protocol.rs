use protocol::{
    AsymmetricCryptogram, KeyPair, PublicKey, Signature, SymmetricCryptogram, TextEncoding, hash,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let password = b"correct horse";
    let message = b"hello e521";

    info!(digest = %hex::encode_upper(hash(message)), "hashed message");

    let sym = SymmetricCryptogram::encrypt(&mut rng, message, password);
    let sym = SymmetricCryptogram::from_text(&sym.to_text()).expect("parse cryptogram");
    assert_eq!(sym.decrypt(password).expect("decrypt"), message);
    assert!(sym.decrypt(b"wrong").is_err());

    let pair = KeyPair::from_password(password);
    let pk_text = pair.public.to_text();
    let pk = PublicKey::from_text(&pk_text).expect("parse public key");
    info!(x = %pk.point().x(), "derived public key");

    let cryptogram = pk.encrypt(&mut rng, message);
    let ct_bytes = bincode::serialize(&cryptogram).expect("serialize cryptogram");
    let cryptogram: AsymmetricCryptogram =
        bincode::deserialize(&ct_bytes).expect("deserialize cryptogram");
    assert_eq!(pair.secret.decrypt(&cryptogram).expect("decrypt"), message);

    let sig = pair.secret.sign(message);
    let sig = Signature::from_text(&sig.to_text()).expect("parse signature");
    let ok = pk.verify(message, &sig);
    assert!(ok);
    info!(ok, "verified signature");
}
