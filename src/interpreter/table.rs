use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        function::{builtin, convert, fact, int_ops, log, min_max, round},
    },
    value::Number,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the byte
/// offset of the call. It returns the computed value wrapped in
/// `EvalResult`.
type BuiltinFn = fn(&[Number], usize) -> EvalResult<Number>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin is variadic with a minimum of `n`.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// This many arguments or more.
    AtLeast(usize),
    /// Any of the listed argument counts.
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity contract.
    ///
    /// # Example
    /// ```
    /// use mathex::interpreter::table::Arity;
    ///
    /// assert!(Arity::Exact(1).check(1));
    /// assert!(!Arity::Exact(1).check(2));
    /// assert!(Arity::AtLeast(2).check(5));
    /// assert!(Arity::OneOf(&[1, 2]).check(2));
    /// ```
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(1) => write!(f, "exactly 1 argument"),
            Self::Exact(n) => write!(f, "exactly {n} arguments"),
            Self::AtLeast(n) => write!(f, "at least {n} arguments"),
            Self::OneOf(arr) => {
                let counts = arr.iter()
                                .map(ToString::to_string)
                                .collect::<Vec<_>>()
                                .join(" or ");
                write!(f, "{counts} arguments")
            },
        }
    }
}

/// Metadata and implementation for one builtin function.
pub struct FunctionDef {
    /// The function name as written in source.
    pub name:  &'static str,
    /// The arity contract enforced by the parser (and re-checked by the
    /// evaluator).
    pub arity: Arity,
    func:      BuiltinFn,
}

impl FunctionDef {
    /// Invokes the builtin on already-evaluated arguments.
    ///
    /// The caller is responsible for checking [`FunctionDef::arity`] first.
    pub fn call(&self, args: &[Number], position: usize) -> EvalResult<Number> {
        (self.func)(args, position)
    }
}

/// Defines the builtin function table.
///
/// Each entry provides a string name, an arity contract, and a function
/// pointer implementing the builtin. The macro produces the static
/// `FUNCTION_TABLE` used for lookup and the public `BUILTIN_FUNCTIONS` name
/// list.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static FUNCTION_TABLE: &[FunctionDef] = &[
            $(
                FunctionDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"       => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"       => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"       => { arity: Arity::Exact(1), func: builtin::tan },
    "abs"       => { arity: Arity::Exact(1), func: builtin::abs },
    "sqrt"      => { arity: Arity::Exact(1), func: builtin::sqrt },
    "log"       => { arity: Arity::OneOf(&[1, 2]), func: log::log },
    "log2"      => { arity: Arity::Exact(1), func: |args, position| log::log_base("log2", 2.0, args, position) },
    "log10"     => { arity: Arity::Exact(1), func: |args, position| log::log_base("log10", 10.0, args, position) },
    "fact"      => { arity: Arity::Exact(1), func: |args, position| fact::fact("fact", args, position) },
    "factorial" => { arity: Arity::Exact(1), func: |args, position| fact::fact("factorial", args, position) },
    "gcd"       => { arity: Arity::AtLeast(2), func: int_ops::gcd },
    "lcm"       => { arity: Arity::AtLeast(2), func: int_ops::lcm },
    "xor"       => { arity: Arity::AtLeast(2), func: int_ops::xor },
    "int"       => { arity: Arity::Exact(1), func: convert::int },
    "float"     => { arity: Arity::Exact(1), func: convert::float },
    "min"       => { arity: Arity::AtLeast(2), func: |args, position| min_max::min_max("min", args, position) },
    "max"       => { arity: Arity::AtLeast(2), func: |args, position| min_max::min_max("max", args, position) },
    "round"     => { arity: Arity::OneOf(&[1, 2]), func: round::round },
    "ceil"      => { arity: Arity::Exact(1), func: |args, position| round::ceil_floor("ceil", args, position) },
    "floor"     => { arity: Arity::Exact(1), func: |args, position| round::ceil_floor("floor", args, position) },
    "hypot"     => { arity: Arity::AtLeast(1), func: builtin::hypot },
    "not"       => { arity: Arity::Exact(1), func: builtin::not },
}

/// The named constants of the expression language.
static CONSTANT_TABLE: &[(&str, f64)] = &[("PI", std::f64::consts::PI),
                                          ("TAU", std::f64::consts::TAU),
                                          ("E", std::f64::consts::E),
                                          ("INF", f64::INFINITY),
                                          ("NAN", f64::NAN)];

/// Looks up a builtin function by name.
///
/// # Example
/// ```
/// use mathex::interpreter::table::{Arity, function};
///
/// let sin = function("sin").unwrap();
/// assert_eq!(sin.arity, Arity::Exact(1));
/// assert!(function("nope").is_none());
/// ```
#[must_use]
pub fn function(name: &str) -> Option<&'static FunctionDef> {
    FUNCTION_TABLE.iter().find(|def| def.name == name)
}

/// Looks up a named constant, returning its value.
///
/// # Example
/// ```
/// use mathex::interpreter::{table::constant, value::Number};
///
/// assert_eq!(constant("PI"),
///            Some(Number::Real(std::f64::consts::PI)));
/// assert_eq!(constant("pi"), None);
/// ```
#[must_use]
pub fn constant(name: &str) -> Option<Number> {
    CONSTANT_TABLE.iter()
                  .find(|(n, _)| *n == name)
                  .map(|(_, v)| Number::Real(*v))
}
