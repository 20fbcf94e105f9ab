// src/macros.rs

/// String shorthand: `s!()` → `String::new()`, `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a fresh `String`.
///
/// `join!("microsoft.", kind, ".", name)`
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Declare a lazily compiled, process-wide `Regex`.
///
/// Patterns are compile-time literals; a bad one is a programming error and
/// fails the first test that touches it.
#[macro_export]
macro_rules! static_regex {
    ($(#[$meta:meta])* $vis:vis $name:ident = $pat:expr;) => {
        $(#[$meta])*
        $vis static $name: ::std::sync::LazyLock<::regex::Regex> =
            ::std::sync::LazyLock::new(|| ::regex::Regex::new($pat).unwrap());
    };
}
