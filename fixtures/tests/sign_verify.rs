use rsa::{Pkcs1v15Sign, RsaPrivateKey, traits::PublicKeyParts};
use sha2::{Digest, Sha256};
use testkeys_fixtures::{edited, strict, testkeys};

fn sign_and_verify(key: &RsaPrivateKey, payload: &[u8]) {
    let digest = Sha256::digest(payload);
    let signature = key.sign(Pkcs1v15Sign::new::<Sha256>(), &digest).unwrap();

    key.to_public_key()
        .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &signature)
        .unwrap();
}

#[test]
fn lenient_key_is_loaded() {
    let k1 = testkeys::k1.as_ref().expect("k1 decoded at load");

    assert_eq!(k1.n().bits(), 1024);
    k1.validate().unwrap();
    sign_and_verify(k1, b"test payload");
}

#[test]
fn keys_in_one_module_are_distinct() {
    assert!(testkeys::k2.is_some());
    assert_ne!(testkeys::k1.as_ref(), testkeys::k2.as_ref());
}

#[test]
fn strict_keys_are_plain_values() {
    let signer: &RsaPrivateKey = &strict::signer;
    let other: &RsaPrivateKey = &strict::other;

    assert_eq!(signer.n().bits(), 2048);
    assert_eq!(other.n().bits(), 1024);
    sign_and_verify(signer, b"another payload");

    let digest = Sha256::digest(b"another payload");
    let signature = signer.sign(Pkcs1v15Sign::new::<Sha256>(), &digest).unwrap();
    assert!(
        other
            .to_public_key()
            .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &signature)
            .is_err()
    );
}

#[test]
fn lenient_module_tolerates_a_hand_edited_block() {
    assert!(edited::broken.is_none());

    let intact = edited::intact.as_ref().expect("untouched block still loads");
    assert_eq!(intact.n().bits(), 512);
    sign_and_verify(intact, b"payload");
}
