//! `dlkit classify <name>` – print the media kind of a filename or URL.

use dlkit_core::classify::{classify, TypeHint};

pub fn run_classify(name: &str, hint: char) {
    println!("{}", classify(TypeHint::from_char(hint), name));
}
