//! User-facing status lines. Diagnostics go through `tracing` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

#[derive(Clone, Copy)]
enum Kind {
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    fn color(self) -> &'static str {
        match self {
            Kind::Info => "\x1b[34m",
            Kind::Success => "\x1b[32m",
            Kind::Warning => "\x1b[33m",
            Kind::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Kind::Info => "ℹ️",
            Kind::Success => "✅",
            Kind::Warning => "⚠️",
            Kind::Error => "❌",
        }
    }

    /// Warnings and errors go to stderr so they never end up in redirected output.
    fn to_stderr(self) -> bool {
        matches!(self, Kind::Warning | Kind::Error)
    }
}

fn emit(kind: Kind, msg: impl fmt::Display) {
    let line = format!("{}{}{} {}{}", kind.color(), BOLD, kind.icon(), RESET, msg);
    if kind.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Kind::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Kind::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Kind::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Kind::Error, msg);
}

/// Indented secondary line under a previous message.
pub fn detail<T: fmt::Display>(msg: T) {
    println!("   {DIM}{msg}{RESET}");
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{BOLD}== {msg} =={RESET}", Kind::Info.color());
}
