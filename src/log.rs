//! Debug logging for the toolbox functions. Logs go to stderr and are disabled unless
//! turned on with [`enable`] or by setting `TOOLBOX_LOG` to `1` or `true` before the
//! first log call.

use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};

lazy_static! {
    static ref ENABLED: AtomicBool = AtomicBool::new(from_env());
}

fn switch_value(value: &str) -> bool {
    matches!(value.trim(), "1" | "true")
}

fn from_env() -> bool {
    std::env::var("TOOLBOX_LOG")
        .map(|value| switch_value(&value))
        .unwrap_or(false)
}

pub fn enable() {
    ENABLED.store(true, Ordering::Relaxed);
}

pub fn disable() {
    ENABLED.store(false, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! log {
    (list, $($token:tt)*) => (
        if $crate::log::is_enabled() {
            use $crate::colored::Colorize;

            eprintln!("<{}> [{}] {}", "LOG".black().on_purple(), "list".black().on_green(), format_args!($($token)*));
        }
    );
    (queue, $($token:tt)*) => (
        if $crate::log::is_enabled() {
            use $crate::colored::Colorize;

            eprintln!("<{}> [{}] {}", "LOG".black().on_purple(), "queue".black().on_blue(), format_args!($($token)*));
        }
    );
    (text, $($token:tt)*) => (
        if $crate::log::is_enabled() {
            use $crate::colored::Colorize;

            eprintln!("<{}> [{}] {}", "LOG".black().on_purple(), "text".black().on_cyan(), format_args!($($token)*));
        }
    );
    (scores, $($token:tt)*) => (
        if $crate::log::is_enabled() {
            use $crate::colored::Colorize;

            eprintln!("<{}> [{}] {}", "LOG".black().on_purple(), "scores".black().on_yellow(), format_args!($($token)*));
        }
    );
    ($($token:tt)*) => (
        if $crate::log::is_enabled() {
            use $crate::colored::Colorize;

            eprintln!("<{}> {}", "LOG".black().on_purple(), format_args!($($token)*));
        }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_switch_value() {
        assert!(switch_value("1"));
        assert!(switch_value("true"));
        assert!(switch_value(" true\n"));
        assert!(!switch_value("0"));
        assert!(!switch_value(""));
        assert!(!switch_value("yes"));
    }

    #[test]
    fn t_enable_disable() {
        enable();
        assert!(is_enabled());
        log!(list, "logging from a test: {}", 42);
        log!("untagged log from a test");

        disable();
        assert!(!is_enabled());
    }
}
