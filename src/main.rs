fn main() {
    if let Err(err) = age_ledger::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
