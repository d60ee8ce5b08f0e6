// src/macros.rs
#[macro_export]
macro_rules! s {
    // s!() → String::new()
    () => {
        ::std::string::String::new()
    };
    // s!(x) → String::from(x); literals, consts, &str borrows
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
