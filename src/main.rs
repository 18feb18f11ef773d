fn main() {
    if let Err(e) = sparkline::cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
