//! pancheck main entrypoint.

use pancheck::run;
use pancheck::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
