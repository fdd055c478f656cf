use super::report::dialect;

pub fn run() {
    let words = dialect(false).reserved_words();
    println!("Reserved words ({}):", words.len());
    for word in words.iter() {
        println!("  {word}");
    }
}
