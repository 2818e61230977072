use pl0parse::ast::visitor::{walk_block, AstVisitor};
use pl0parse::ast::{count_nodes, Block, Factor};
use pl0parse::errors::Pl0Result;
use pl0parse::parse_source;

#[test]
fn test_unparse_canonical_program() -> Pl0Result<()> {
    let source = "const a = 1, b = 2; var x, y; procedure p; ? x; begin call p; ! x end.";
    let program = parse_source(source)?;
    assert_eq!(program.to_string(), source);
    Ok(())
}

#[test]
fn test_unparse_normalizes_layout() -> Pl0Result<()> {
    let program = parse_source("VAR i;\nBEGIN\n  i:=+0;\n  WHILE i<=10 DO i:=i+{1}\nEND.")?;
    assert_eq!(program.to_string(), "var i; begin i := 0; while i <= 10 do i := i + (1) end.");
    Ok(())
}

#[test]
fn test_unparse_expressions() -> Pl0Result<()> {
    let program = parse_source("if odd -a*b/(c-d) then !e - f + 007.")?;
    assert_eq!(program.to_string(), "if odd -a * b / (c - d) then ! e - f + 007.");
    Ok(())
}

#[test]
fn test_unparse_reparses_to_same_ast() -> Pl0Result<()> {
    let source = "
        const max = 100;
        var n, f;
        procedure fact;
            var m;
            begin
                m := n;
                if m > 1 then
                begin
                    n := n - 1;
                    call fact;
                    f := f * m
                end
            end;
        begin
            ? n;
            f := 1;
            if n < max then call fact;
            ! f
        end.
    ";
    let program = parse_source(source)?;
    let reparsed = parse_source(&program.to_string())?;
    assert_eq!(program, reparsed);
    Ok(())
}

#[test]
fn test_count_nodes() -> Pl0Result<()> {
    // program, block, statement, expr, term, factor
    assert_eq!(count_nodes(&parse_source("!1.")?), 6);
    // the parenthesized factor adds an inner expr, term and factor
    assert_eq!(count_nodes(&parse_source("x := (1).")?), 9);
    // procedure blocks are counted with their bodies
    assert_eq!(count_nodes(&parse_source("procedure p; call p; call p.")?), 5);
    Ok(())
}

#[derive(Default)]
struct IdentCollector {
    idents: Vec<String>,
    blocks: usize,
}

impl AstVisitor for IdentCollector {
    fn visit_block(&mut self, block: &Block) {
        self.blocks += 1;
        walk_block(self, block);
    }

    fn visit_factor(&mut self, factor: &Factor) {
        if let Factor::Ident(name) = factor {
            self.idents.push(name.clone());
        }
        pl0parse::ast::visitor::walk_factor(self, factor);
    }
}

#[test]
fn test_custom_visitor() -> Pl0Result<()> {
    let program = parse_source("procedure p; procedure q; !a; !b * (c + d); while e < 1 do !f.")?;
    let mut collector = IdentCollector::default();
    collector.visit_program(&program);
    assert_eq!(collector.blocks, 3);
    assert_eq!(collector.idents, vec!["a", "b", "c", "d", "e", "f"]);
    Ok(())
}
