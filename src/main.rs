fn main() {
    if let Err(err) = note_taker::entry() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
