//! Panic hook that gives the terminal back before the panic message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring step in front of the current panic hook.
///
/// Call before creating the [`super::TerminalManager`]; `color_eyre::install`
/// must run first so its report hook is the one chained.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        let _ = panic::take_hook();
    }
}
