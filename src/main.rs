use std::io;

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    sample_stats::run(stdin.lock(), stdout.lock())
}
