/// AST (Abstract Syntax Tree) module
/// Contains the node types a parser builds from the token stream
///
/// Submodules:
/// - ast: Core node traits, wrappers and the `Program` root
/// - expressions: Expression nodes
/// - statements: Statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;
