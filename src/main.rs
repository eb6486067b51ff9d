fn main() {
    if let Err(err) = floortrack::run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
