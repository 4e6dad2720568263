fn main() {
    if let Err(err) = atom_orbits::cli::start() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
