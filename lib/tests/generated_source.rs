use rsa::{Pkcs1v15Sign, RsaPrivateKey, traits::PublicKeyParts};
use sha2::{Digest, Sha256};
use testkeys::{LoadPolicy, Options, armor, crypto::PrivateKey, generate_source};

/// Pulls the raw string literals back out of a rendered module.
fn embedded_blocks(source: &str) -> Vec<&str> {
    source
        .split("r\"")
        .skip(1)
        .filter_map(|rest| rest.split_once('"').map(|(block, _)| block))
        .collect()
}

fn rsa(key: PrivateKey) -> RsaPrivateKey {
    let PrivateKey::Rsa(key) = key;
    key
}

#[test]
fn embedded_keys_decode_and_sign() {
    let options = Options {
        package: "testkeys".to_string(),
        policy: LoadPolicy::Strict,
        jobs: 2,
    };
    let source = generate_source(&["k1:rsa:1024", "k2:rsa:2048"], &options).unwrap();

    let blocks = embedded_blocks(&source);
    assert_eq!(blocks.len(), 2);

    let k1 = rsa(armor::decode_key(blocks[0]).unwrap());
    let k2 = rsa(armor::decode_key(blocks[1]).unwrap());
    assert_eq!(k1.n().bits(), 1024);
    assert_eq!(k2.n().bits(), 2048);

    let digest = Sha256::digest(b"test payload");
    let signature = k1.sign(Pkcs1v15Sign::new::<Sha256>(), &digest).unwrap();
    k1.to_public_key()
        .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &signature)
        .unwrap();
    assert!(
        k2.to_public_key()
            .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &signature)
            .is_err()
    );
}

#[test]
fn every_run_embeds_fresh_keys() {
    let first = generate_source(&["k:rsa:512"], &Options::default()).unwrap();
    let second = generate_source(&["k:rsa:512"], &Options::default()).unwrap();

    assert_ne!(embedded_blocks(&first), embedded_blocks(&second));
}
