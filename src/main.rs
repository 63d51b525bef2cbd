//! rBillsheet main entrypoint.

use rbillsheet::run;
use rbillsheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
