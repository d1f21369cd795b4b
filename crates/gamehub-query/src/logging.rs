//! Terminal logging setup.

use log::LevelFilter;

/// Install the coloured terminal logger at `level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(level: LevelFilter) {
    let mut builder = colog::default_builder();
    builder.filter_level(level);
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }
}
