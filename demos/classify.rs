use http_status::{classify, registry, StatusCode};
use std::env;

// Usage: cargo run --example classify -- 404 not-found 299 teapot
fn main() {
    env_logger::init();

    for arg in env::args().skip(1) {
        match arg.parse::<StatusCode>() {
            Ok(code) => println!(
                "{arg}: {code} ({}, {})",
                code.class(),
                code.reference().url()
            ),
            Err(err) => match arg.parse::<i64>() {
                Ok(number) => println!("{arg}: unregistered, {}", classify(number)),
                Err(_) => println!("{arg}: {err}"),
            },
        }
    }

    if env::args().len() == 1 {
        for code in registry::all() {
            println!("{:<40} {}", code.to_string(), code.reference());
        }
    }
}
