use mockdata::cli::{exit_with, init_logging, run_switch};

fn main() {
    init_logging();
    exit_with(run_switch())
}
