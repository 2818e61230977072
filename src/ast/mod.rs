/*
*                    pl0parse -- PL/0 syntax frontend.
*
* program    = block "." ;
* block      = [ "const" ident "=" number { "," ident "=" number } ";" ]
*              [ "var" ident { "," ident } ";" ]
*              { "procedure" ident ";" block ";" } statement ;
* statement  = ident ":=" expression
*            | "call" ident
*            | "?" ident
*            | "!" expression
*            | "begin" statement { ";" statement } "end"
*            | "if" condition "then" statement
*            | "while" condition "do" statement ;
* condition  = "odd" expression | expression rel-op expression ;
* expression = [ "+" | "-" ] term { ( "+" | "-" ) term } ;
* term       = factor { ( "*" | "/" ) factor } ;
* factor     = ident | number | "(" expression ")" ;
* rel-op     = "=" | "<" | "<=" | ">" | ">=" ;
*/

// Abstract Syntax Tree definitions.
// Every node prints back as PL/0 source through `Display`.

mod block;
mod expressions;
mod literals;
mod program;
mod statements;
pub mod visitor;

pub use block::Block;
pub use expressions::{Condition, Expr, MulOp, RelOp, Sign, Term};
pub use literals::Factor;
pub use program::Program;
pub use statements::Statement;
pub use visitor::{count_nodes, AstVisitor};
