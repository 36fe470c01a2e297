// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Bail out of a parser with `None`, leaving a trace event behind.
/// `unparsed!(input, "reason")` evaluates to `None`.
#[macro_export]
macro_rules! unparsed {
    ($input:expr, $why:expr) => {{
        ::tracing::trace!(input = %$input, reason = $why, "unparsed");
        None
    }};
}
