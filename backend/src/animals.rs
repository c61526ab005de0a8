use std::collections::HashMap;

use lazy_static::lazy_static;

/// Animal-name substrings the classifier output is filtered against.
pub const SUPPORTED_ANIMALS: [&str; 11] = [
    "cat", "dog", "elephant", "lion", "tiger", "bear", "zebra", "giraffe", "penguin", "kangaroo",
    "rabbit",
];

lazy_static! {
    /// Canonical Wikipedia articles, used when a generated reply lacks a
    /// usable URL. The rabbit entry is intentionally absent; that animal is
    /// answered by a dedicated branch in the analysis service.
    pub static ref FALLBACK_URLS: HashMap<&'static str, &'static str> = HashMap::from([
        ("cat", "https://en.wikipedia.org/wiki/Cat"),
        ("dog", "https://en.wikipedia.org/wiki/Dog"),
        ("elephant", "https://en.wikipedia.org/wiki/Elephant"),
        ("lion", "https://en.wikipedia.org/wiki/Lion"),
        ("tiger", "https://en.wikipedia.org/wiki/Tiger"),
        ("bear", "https://en.wikipedia.org/wiki/Bear"),
        ("zebra", "https://en.wikipedia.org/wiki/Zebra"),
        ("giraffe", "https://en.wikipedia.org/wiki/Giraffe"),
        ("penguin", "https://en.wikipedia.org/wiki/Penguin"),
        ("kangaroo", "https://en.wikipedia.org/wiki/Kangaroo"),
    ]);
}
