//! The capability seam, demonstrated natively.
//!
//! Guest logic programs against `Capabilities`, so it runs anywhere a mock
//! can stand in for the host. Run with `cargo run --example extract-json`.

use tether::Capabilities;
use tether_host::http;

/// Pretends to be a host whose `get` always serves the same JSON body.
struct CannedHost;

impl Capabilities for CannedHost {
    fn get(&self, _url: &str) -> Vec<u8> {
        br#"{"message":"Hi","attempts":1}"#.to_vec()
    }

    fn bytes_to_string(&self, bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).expect("canned body is utf-8")
    }
}

#[derive(serde::Deserialize)]
struct Reply {
    message: String,
    attempts: u32,
}

fn main() -> tether::HostResult<()> {
    let caps = CannedHost;

    let text = http::get_string_with(&caps, "http://example.test/");
    println!("as text: {text}");

    let reply: Reply = http::get_json_with(&caps, "http://example.test/")?;
    println!("as json: message={} attempts={}", reply.message, reply.attempts);

    Ok(())
}
