use rsa_keys::{KeyGenerator, PrivateKey, PublicKey};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let bits = 2048;

    let private_key_path = dir.path().join("id_rsa");
    let public_key_path = dir.path().join("id_rsa.pub");
    {
        // Create private key and write to .pem file
        let private_key = KeyGenerator::new().generate(bits)?;
        fs::write(&private_key_path, private_key.to_pem().as_bytes())?;

        // Derive public key and write to .pem file
        let public_key = private_key.public_key();
        fs::write(&public_key_path, public_key.to_pem())?;
    }

    // Retrieve public key from .pem file
    let public_key = PublicKey::from_pem(&fs::read_to_string(&public_key_path)?)?;
    // Retrieve private key from .pem file
    let private_key = PrivateKey::from_pem(&fs::read_to_string(&private_key_path)?)?;

    assert_eq!(private_key.public_key(), public_key);
    println!(
        "private key: {} bits, public key: {} bytes",
        private_key.size(),
        public_key.size()
    );

    Ok(())
}
