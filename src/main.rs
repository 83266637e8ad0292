//! extman terminal frontend.

fn main() {
    extman::logging::init();

    if let Err(e) = extman::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
