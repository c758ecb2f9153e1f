/// The evaluator module reduces AST nodes and computes results.
///
/// The evaluator traverses the AST bottom-up, performs arithmetic and
/// comparison operations with integer/real promotion, and dispatches builtin
/// function calls. It is the final stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Applies the numeric promotion rule at every operator boundary.
/// - Reports evaluation errors such as division by zero or domain
///   violations.
pub mod evaluator;
/// The lexer module tokenizes a source expression for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens, each
/// corresponding to meaningful elements such as numbers, identifiers,
/// operators, and punctuation. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Handles numeric literals, identifiers, and multi-character operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST using precedence climbing. Identifiers are validated
/// eagerly against the constant and function tables, so every name and every
/// call arity in a parsed tree is known good.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces operator precedence and associativity from a static table.
/// - Validates grammar, identifiers, and call arities with offset info.
pub mod parser;
/// The table module holds the fixed constant and function tables.
///
/// Both tables are static and read-only for the lifetime of the program, so
/// concurrent evaluations can share them without synchronization. The
/// parser uses them to validate identifiers; the evaluator uses them for
/// dispatch.
///
/// # Responsibilities
/// - Maps constant names (`PI`, `TAU`, `NAN`, `E`, `INF`) to their values.
/// - Maps function names to arity contracts and implementations.
/// - Defines the [`table::Arity`] contract type.
pub mod table;
/// The value module defines the runtime numeric type.
///
/// This module declares the [`value::Number`] tagged union of 64-bit
/// integers and IEEE-754 doubles, together with the promotion and conversion
/// methods used throughout evaluation.
///
/// # Responsibilities
/// - Defines the `Number` enum and its two kinds.
/// - Provides checked promotion between integer and real values.
/// - Implements display formatting that survives a re-parse.
pub mod value;
