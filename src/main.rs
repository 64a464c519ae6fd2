//! rJobfinder main entrypoint.

use rjobfinder::run;
use rjobfinder::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
