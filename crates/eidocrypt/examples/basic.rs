//! Encrypts a message, decrypts it back, and shows how a wrong key surfaces.

use eidocrypt::{decrypt, encrypt, ErrorKind};

fn main() -> Result<(), eidocrypt::Error> {
    let key = "ThisIsASecretKey";
    let ciphertext = encrypt("Hello, World!", key)?;
    println!("ciphertext: {ciphertext}");

    let plaintext = decrypt(&ciphertext, key)?;
    println!("plaintext: {plaintext}");
    assert_eq!(plaintext, "Hello, World!");

    match decrypt(&ciphertext, "ThisIsASecretKez") {
        Ok(text) => println!("wrong key produced different text: {text:?}"),
        Err(err) => match err.kind() {
            ErrorKind::Padding(_) | ErrorKind::Decoding(_) => println!("wrong key rejected: {err}"),
            other => return Err(eidocrypt::Error::Decryption(other.clone())),
        },
    }
    Ok(())
}
