// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a [`Result`]. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of each block. Here's
/// an example.
///
/// ```
/// use r3bl_content_widget::throws;
///
/// fn try_do_something() -> miette::Result<()> {
///     throws!({
///         let _it = 1 + 1;
///     });
/// }
/// assert!(try_do_something().is_ok());
/// ```
#[macro_export]
macro_rules! throws {
  ($it: block) => {{
    $it
    return Ok(())
  }};
  ($it: stmt) => {{
    $it
    return Ok(())
  }};
}

/// A wrapper for `pretty_assertions::assert_eq!` macro. Only usable in code that has
/// `pretty_assertions` available (tests).
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
