//! Lowering Tests
//!
//! Builds syntax trees with `AstBuilder`, lowers them and checks the HIR
//! through the pretty printer and the arena accessors.
//! Run with: cargo test -p tern-engine --test lowering -- --nocapture

use tern_engine::compiler::hir::{BlockId, DeclId, DeclKind, Expr, Hir, PrettyPrint, Stmt};
use tern_engine::compiler::lower::lower as lower_module;
use tern_engine::diagnostics::{DiagnosticCode, Diagnostics};
use tern_engine::syntax::ast::{BinaryOperator, Statement};
use tern_engine::syntax::AstBuilder;

fn lower(build: impl FnOnce(&AstBuilder) -> Vec<Statement>) -> (Hir, Diagnostics) {
    let b = AstBuilder::new();
    let statements = build(&b);
    let module = b.module(statements);
    let interner = b.into_interner();
    lower_module(&module, &interner)
}

fn lower_and_print(build: impl FnOnce(&AstBuilder) -> Vec<Statement>) -> String {
    let (hir, diagnostics) = lower(build);
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics.records());
    hir.pretty_print()
}

/// Declaration referenced by the `Drop` at `index` in `block`
fn dropped_ref(hir: &Hir, block: BlockId, index: usize) -> DeclId {
    match &hir.block(block).stmts[index] {
        Stmt::Drop { value, .. } => value.as_decl_ref().expect("drop of a reference").decl,
        other => panic!("expected a drop, found {:?}", other),
    }
}

fn messages(diagnostics: &Diagnostics) -> Vec<String> {
    diagnostics.iter().map(|record| record.message()).collect()
}

// =============================================================================
// NAME RESOLUTION
// =============================================================================

mod resolution {
    use super::*;

    #[test]
    fn test_inner_declaration_shadows_outer() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.let_decl("x", None, Some(b.int(1))),
                b.block(vec![
                    b.let_decl("x", None, Some(b.int(2))),
                    b.expr_stmt(b.name("x")),
                ]),
                b.expr_stmt(b.name("x")),
            ]
        });
        assert!(diagnostics.is_empty());

        let body = BlockId(1);
        let group = BlockId(2);
        let outer_x = hir.block(body).var_decls[0];
        let inner_x = hir.block(group).var_decls[0];
        assert_ne!(outer_x, inner_x);

        assert_eq!(dropped_ref(&hir, group, 1), inner_x);
        assert_eq!(dropped_ref(&hir, body, 1), outer_x);
    }

    #[test]
    fn test_local_cannot_be_used_before_declaration() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.expr_stmt(b.name("x")),
                b.let_decl("x", None, Some(b.int(1))),
            ]
        });

        assert_eq!(diagnostics.len(), 1);
        let record = &diagnostics.records()[0];
        assert_eq!(record.code, DiagnosticCode::NameNotFound);
        assert_eq!(record.args, vec!["x"]);
        assert!(record.span.is_some());

        assert_eq!(
            hir.pretty_print(),
            "BLOCK 0:\n  BLOCK 1:\n    VAR DECL x\n    ref(x) <- 1"
        );
    }

    #[test]
    fn test_variable_is_visible_in_its_own_initializer() {
        let (hir, diagnostics) = lower(|b| vec![b.let_decl("x", None, Some(b.name("x")))]);
        assert!(diagnostics.is_empty());
        assert_eq!(
            hir.pretty_print(),
            "BLOCK 0:\n  BLOCK 1:\n    VAR DECL x\n    ref(x) <- ref(x)"
        );
    }

    #[test]
    fn test_sibling_blocks_do_not_see_each_other() {
        let (_hir, diagnostics) = lower(|b| {
            vec![
                b.block(vec![b.let_decl("hidden", None, None)]),
                b.block(vec![b.expr_stmt(b.name("hidden"))]),
            ]
        });
        assert_eq!(messages(&diagnostics), vec!["Cannot find name 'hidden'"]);
    }

    #[test]
    fn test_duplicate_declarations_first_wins() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.let_decl("a", None, Some(b.int(1))),
                b.let_decl("a", None, Some(b.int(2))),
                b.expr_stmt(b.name("a")),
            ]
        });
        assert!(diagnostics.is_empty());

        let body = BlockId(1);
        assert_eq!(hir.block(body).var_decls.len(), 2);
        let first = hir.block(body).var_decls[0];
        assert_eq!(dropped_ref(&hir, body, 2), first);

        // Each initializer still assigns its own declaration
        match &hir.block(body).stmts[1] {
            Stmt::Assign { target, .. } => assert_eq!(target.decl, hir.block(body).var_decls[1]),
            other => panic!("expected an assignment, found {:?}", other),
        }
    }

    #[test]
    fn test_namespace_members_stay_inside() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.namespace("geometry", vec![b.let_decl("pi", None, Some(b.float(1.5)))]),
                b.expr_stmt(b.name("pi")),
            ]
        });
        assert_eq!(messages(&diagnostics), vec!["Cannot find name 'pi'"]);
        assert_eq!(
            hir.pretty_print(),
            "BLOCK 0:\n  BLOCK 1:\n    BLOCK 2:\n      VAR DECL pi\n      ref(pi) <- 1.5"
        );
    }
}

// =============================================================================
// FUNCTIONS AND HOISTING
// =============================================================================

mod functions {
    use super::*;

    #[test]
    fn test_module_function_callable_before_declaration() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.expr_stmt(b.call(b.name("g"), vec![])),
                b.function("g", vec![], vec![]),
            ]
        });
        assert!(diagnostics.is_empty());
        assert_eq!(
            hir.pretty_print(),
            "\
BLOCK 0:
  GLOBAL FUNC REF g
  BLOCK 1:
    VAR DECL g
    (CALL ref(g) ())
    ref(g) <- (FUNC BLOCK 2)
    BLOCK 2:"
        );

        let placeholder = hir.block(BlockId(0)).var_decls[0];
        let concrete = hir.block(BlockId(1)).var_decls[0];
        assert!(hir.decl(placeholder).is_placeholder());
        assert_eq!(hir.decl(concrete).kind, DeclKind::Function);
        assert_eq!(hir.resolve_function(placeholder), Some(concrete));

        let callee = match &hir.block(BlockId(1)).stmts[0] {
            Stmt::Drop {
                value: Expr::Call { callee, .. },
                ..
            } => callee.as_decl_ref().expect("callee is a name").decl,
            other => panic!("expected a call, found {:?}", other),
        };
        assert_eq!(callee, placeholder);
        assert_eq!(hir.resolve_function(callee), Some(concrete));
    }

    #[test]
    fn test_nested_functions_are_not_hoisted() {
        let (hir, diagnostics) = lower(|b| {
            vec![b.function(
                "outer",
                vec![],
                vec![
                    b.expr_stmt(b.call(b.name("inner"), vec![])),
                    b.function("inner", vec![], vec![]),
                ],
            )]
        });
        assert_eq!(messages(&diagnostics), vec!["Cannot find name 'inner'"]);
        assert_eq!(hir.block(BlockId(0)).var_decls.len(), 1);
    }

    #[test]
    fn test_each_hoisted_function_gets_its_own_placeholder() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.function("twice", vec![], vec![]),
                b.function("twice", vec![], vec![]),
            ]
        });
        assert!(diagnostics.is_empty());

        let placeholders = &hir.block(BlockId(0)).var_decls;
        let concrete = &hir.block(BlockId(1)).var_decls;
        assert_eq!(placeholders.len(), 2);
        assert_eq!(hir.resolve_function(placeholders[0]), Some(concrete[0]));
        assert_eq!(hir.resolve_function(placeholders[1]), Some(concrete[1]));
    }

    #[test]
    fn test_parameters_and_body() {
        let output = lower_and_print(|b| {
            vec![b.function(
                "add",
                vec![b.param("a", Some(b.type_ref("i32"))), b.param("b", None)],
                vec![b.expr_stmt(b.binary(BinaryOperator::Add, b.name("a"), b.name("b")))],
            )]
        });
        assert_eq!(
            output,
            "\
BLOCK 0:
  GLOBAL FUNC REF add
  BLOCK 1:
    VAR DECL add
    ref(add) <- (FUNC BLOCK 2)
    BLOCK 2:
      VAR DECL a:type(i32)
      VAR DECL b
      (add ref(a) ref(b))"
        );
    }

    #[test]
    fn test_parameters_not_visible_outside() {
        let (_hir, diagnostics) = lower(|b| {
            vec![
                b.function("f", vec![b.param("p", None)], vec![]),
                b.expr_stmt(b.name("p")),
            ]
        });
        assert_eq!(messages(&diagnostics), vec!["Cannot find name 'p'"]);
    }

    #[test]
    fn test_function_can_call_itself() {
        let (_hir, diagnostics) = lower(|b| {
            vec![b.block(vec![b.function(
                "again",
                vec![],
                vec![b.expr_stmt(b.call(b.name("again"), vec![]))],
            )])]
        });
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_function_expression_has_no_binding() {
        let output = lower_and_print(|b| {
            vec![b.let_decl(
                "f",
                None,
                Some(b.function_expr(vec![b.param("x", None)], vec![b.expr_stmt(b.name("x"))])),
            )]
        });
        assert_eq!(
            output,
            "\
BLOCK 0:
  BLOCK 1:
    VAR DECL f
    ref(f) <- (FUNC BLOCK 2)
    BLOCK 2:
      VAR DECL x
      ref(x)"
        );
    }

    #[test]
    fn test_unsupported_parameters_are_skipped() {
        let (hir, diagnostics) = lower(|b| {
            vec![b.function(
                "f",
                vec![
                    b.param("kept", None),
                    b.rest_param("rest"),
                    b.optional_param("maybe"),
                    b.default_param("fallback", b.int(0)),
                ],
                vec![],
            )]
        });
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Unsupported construct: rest parameter",
                "Unsupported construct: optional parameter",
                "Unsupported construct: default parameter value",
            ]
        );

        let params: Vec<_> = hir
            .block(BlockId(2))
            .var_decls
            .iter()
            .map(|id| hir.decl(*id).name.as_str())
            .collect();
        assert_eq!(params, vec!["kept"]);
    }

    #[test]
    fn test_generic_function_body_still_lowers() {
        let (hir, diagnostics) = lower(|b| {
            vec![b.generic_function(
                "id",
                &["T"],
                vec![b.param("value", None)],
                vec![b.expr_stmt(b.name("value"))],
            )]
        });
        assert_eq!(messages(&diagnostics), vec!["Unsupported construct: type parameter"]);
        assert_eq!(hir.block(BlockId(2)).stmts.len(), 1);
    }

    #[test]
    fn test_return_is_unsupported() {
        let (hir, diagnostics) = lower(|b| {
            vec![b.function(
                "f",
                vec![],
                vec![b.return_(Some(b.int(1))), b.let_decl("after", None, None)],
            )]
        });
        assert_eq!(messages(&diagnostics), vec!["Unsupported construct: return statement"]);
        assert_eq!(hir.block(BlockId(2)).var_decls.len(), 1);
    }
}

// =============================================================================
// ASSIGNMENT
// =============================================================================

mod assignment {
    use super::*;

    #[test]
    fn test_nested_assignment_shape() {
        // x = (y = 5) + 1
        let output = lower_and_print(|b| {
            vec![
                b.let_decl("x", None, None),
                b.let_decl("y", None, None),
                b.expr_stmt(b.assign(
                    b.name("x"),
                    b.binary(
                        BinaryOperator::Add,
                        b.paren(b.assign(b.name("y"), b.int(5))),
                        b.int(1),
                    ),
                )),
            ]
        });
        assert_eq!(
            output,
            "\
BLOCK 0:
  BLOCK 1:
    VAR DECL x
    VAR DECL y
    VAR DECL ~tmp0
    VAR DECL ~tmp1
    ref(~tmp1) <- 5
    ref(y) <- ref(~tmp1)
    ref(~tmp0) <- (add ref(~tmp1) 1)
    ref(x) <- ref(~tmp0)
    ref(~tmp0)"
        );
    }

    #[test]
    fn test_temporaries_are_unique_across_blocks() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.let_decl("a", None, None),
                b.expr_stmt(b.assign(b.name("a"), b.int(1))),
                b.block(vec![b.expr_stmt(b.assign(b.name("a"), b.int(2)))]),
                b.expr_stmt(b.assign(b.name("a"), b.int(3))),
            ]
        });
        assert!(diagnostics.is_empty());

        let temps: Vec<_> = hir
            .decls()
            .iter()
            .filter(|decl| decl.is_temporary())
            .map(|decl| (decl.name.as_str(), decl.owner))
            .collect();
        assert_eq!(
            temps,
            vec![
                ("~tmp0", BlockId(1)),
                ("~tmp1", BlockId(2)),
                ("~tmp2", BlockId(1)),
            ]
        );
    }

    #[test]
    fn test_assignment_to_unknown_name() {
        let (hir, diagnostics) = lower(|b| vec![b.expr_stmt(b.assign(b.name("nowhere"), b.int(1)))]);
        assert_eq!(messages(&diagnostics), vec!["Cannot find name 'nowhere'"]);

        // The value was computed into the temporary before the target failed
        assert_eq!(
            hir.pretty_print(),
            "BLOCK 0:\n  BLOCK 1:\n    VAR DECL ~tmp0\n    ref(~tmp0) <- 1"
        );
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

mod expressions {
    use super::*;

    #[test]
    fn test_equality_operators_collapse() {
        let print = |op: BinaryOperator| {
            lower_and_print(|b| {
                vec![
                    b.let_decl("a", None, None),
                    b.let_decl("b", None, None),
                    b.expr_stmt(b.binary(op, b.name("a"), b.name("b"))),
                ]
            })
        };

        let loose = print(BinaryOperator::Equal);
        let strict = print(BinaryOperator::StrictEqual);
        assert_eq!(loose, strict);
        assert!(loose.ends_with("(equal ref(a) ref(b))"));
    }

    #[test]
    fn test_arithmetic_operators() {
        let output = lower_and_print(|b| {
            vec![
                b.let_decl("n", None, None),
                b.expr_stmt(b.binary(
                    BinaryOperator::Divide,
                    b.binary(BinaryOperator::Subtract, b.name("n"), b.int(1)),
                    b.binary(BinaryOperator::Multiply, b.float(2.0), b.name("n")),
                )),
            ]
        });
        assert!(output.ends_with("(div (sub ref(n) 1) (mul 2.0 ref(n)))"));
    }

    #[test]
    fn test_call_arguments_in_order() {
        let output = lower_and_print(|b| {
            vec![
                b.let_decl("f", None, None),
                b.let_decl("g", None, None),
                b.expr_stmt(b.call(b.name("f"), vec![b.int(1), b.float(2.5), b.name("g")])),
            ]
        });
        assert!(output.ends_with("(CALL ref(f) (1, 2.5, ref(g)))"));
    }

    #[test]
    fn test_first_failing_argument_fails_call() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.let_decl("f", None, None),
                b.expr_stmt(b.call(b.name("f"), vec![b.name("missing"), b.string("s")])),
            ]
        });
        assert_eq!(messages(&diagnostics), vec!["Cannot find name 'missing'"]);
        assert!(hir.block(BlockId(1)).stmts.is_empty());
    }

    #[test]
    fn test_unsupported_expressions() {
        let (_hir, diagnostics) = lower(|b| {
            vec![
                b.expr_stmt(b.string("text")),
                b.expr_stmt(b.boolean(true)),
                b.expr_stmt(b.null()),
                b.expr_stmt(b.array(vec![])),
                b.expr_stmt(b.conditional(b.int(1), b.int(2), b.int(3))),
            ]
        });
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Unsupported construct: string literal",
                "Unsupported construct: boolean literal",
                "Unsupported construct: null literal",
                "Unsupported construct: array literal",
                "Unsupported construct: conditional expression",
            ]
        );
    }
}

// =============================================================================
// CONTROL FLOW
// =============================================================================

mod control_flow {
    use super::*;

    #[test]
    fn test_if_else() {
        let output = lower_and_print(|b| {
            vec![
                b.let_decl("x", None, Some(b.int(1))),
                b.if_(
                    b.binary(BinaryOperator::Equal, b.name("x"), b.int(1)),
                    vec![b.let_decl("y", None, Some(b.int(2)))],
                    Some(vec![b.expr_stmt(b.assign(b.name("x"), b.int(3)))]),
                ),
            ]
        });
        assert_eq!(
            output,
            "\
BLOCK 0:
  BLOCK 1:
    VAR DECL x
    ref(x) <- 1
    IF:
      COND:(equal ref(x) 1)
      THEN: BLOCK 2
      ELSE: BLOCK 3
    BLOCK 2:
      VAR DECL y
      ref(y) <- 2
    BLOCK 3:
      VAR DECL ~tmp0
      ref(~tmp0) <- 3
      ref(x) <- ref(~tmp0)
      ref(~tmp0)"
        );
    }

    #[test]
    fn test_if_with_single_statement_branches() {
        let output = lower_and_print(|b| {
            vec![
                b.let_decl("x", None, None),
                b.if_stmt(
                    b.name("x"),
                    b.expr_stmt(b.int(1)),
                    Some(b.if_stmt(b.name("x"), b.expr_stmt(b.int(2)), None)),
                ),
            ]
        });
        assert_eq!(
            output,
            "\
BLOCK 0:
  BLOCK 1:
    VAR DECL x
    IF:
      COND:ref(x)
      THEN: BLOCK 2
      ELSE: BLOCK 3
    BLOCK 2:
      1
    BLOCK 3:
      IF:
        COND:ref(x)
        THEN: BLOCK 4
      BLOCK 4:
        2"
        );
    }

    #[test]
    fn test_failed_condition_skips_statement() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.if_(b.name("missing"), vec![b.let_decl("a", None, None)], None),
                b.let_decl("after", None, None),
            ]
        });
        assert_eq!(messages(&diagnostics), vec!["Cannot find name 'missing'"]);
        assert_eq!(hir.blocks().len(), 2);
        assert_eq!(hir.block(BlockId(1)).var_decls.len(), 1);
    }

    #[test]
    fn test_while_loop() {
        let output = lower_and_print(|b| {
            vec![
                b.let_decl("i", None, Some(b.int(3))),
                b.while_(
                    b.name("i"),
                    vec![b.expr_stmt(b.assign(
                        b.name("i"),
                        b.binary(BinaryOperator::Subtract, b.name("i"), b.int(1)),
                    ))],
                ),
            ]
        });
        assert_eq!(
            output,
            "\
BLOCK 0:
  BLOCK 1:
    VAR DECL i
    ref(i) <- 3
    WHILE:
      COND:ref(i)
      BODY: BLOCK 2
    BLOCK 2:
      VAR DECL ~tmp0
      ref(~tmp0) <- (sub ref(i) 1)
      ref(i) <- ref(~tmp0)
      ref(~tmp0)"
        );
    }

    #[test]
    fn test_empty_statement_is_ignored() {
        let output = lower_and_print(|b| vec![b.empty(), b.let_decl("x", None, None), b.empty()]);
        assert_eq!(output, "BLOCK 0:\n  BLOCK 1:\n    VAR DECL x");
    }
}

// =============================================================================
// RESILIENCE
// =============================================================================

mod resilience {
    use super::*;

    #[test]
    fn test_one_unsupported_construct_one_diagnostic() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.let_decl("before", None, Some(b.int(1))),
                b.for_(None, None, None, vec![b.let_decl("inside", None, None)]),
                b.let_decl("after", None, Some(b.int(2))),
            ]
        });

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.count(DiagnosticCode::UnsupportedConstruct), 1);
        assert_eq!(diagnostics.records()[0].args, vec!["for statement"]);

        assert_eq!(
            hir.pretty_print(),
            "\
BLOCK 0:
  BLOCK 1:
    VAR DECL before
    VAR DECL after
    ref(before) <- 1
    ref(after) <- 2"
        );
    }

    #[test]
    fn test_diagnostics_follow_traversal_order() {
        let (_hir, diagnostics) = lower(|b| {
            vec![
                b.class("Point"),
                b.expr_stmt(b.name("first")),
                b.do_while(vec![], b.int(1)),
                b.function("f", vec![], vec![b.break_(), b.throw(b.int(1))]),
                b.export(b.let_decl("exported", None, None)),
                b.destructuring_decl(&["a", "b"], b.int(0)),
            ]
        });

        assert_eq!(
            messages(&diagnostics),
            vec![
                "Unsupported construct: class declaration",
                "Cannot find name 'first'",
                "Unsupported construct: do-while statement",
                "Unsupported construct: break statement",
                "Unsupported construct: throw statement",
                "Unsupported construct: export declaration",
                "Unsupported construct: array pattern",
            ]
        );
    }

    #[test]
    fn test_every_block_sealed_after_lowering() {
        let (hir, _diagnostics) = lower(|b| {
            vec![
                b.function("f", vec![], vec![b.if_(b.int(1), vec![], Some(vec![]))]),
                b.while_(b.int(0), vec![b.block(vec![])]),
                b.for_(None, None, None, vec![]),
            ]
        });
        assert!(hir.blocks().iter().all(|block| block.sealed));
    }
}

// =============================================================================
// BLOCK STRUCTURE
// =============================================================================

mod blocks {
    use super::*;

    #[test]
    fn test_block_ids_increase_in_creation_order() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.function(
                    "f",
                    vec![],
                    vec![b.while_(b.int(1), vec![b.if_(b.int(1), vec![], Some(vec![]))])],
                ),
                b.block(vec![b.namespace("ns", vec![])]),
                b.let_decl("g", None, Some(b.function_expr(vec![], vec![b.block(vec![])]))),
            ]
        });
        assert!(diagnostics.is_empty());

        for (index, block) in hir.blocks().iter().enumerate() {
            assert_eq!(block.id.as_u32() as usize, index);
            if let Some(parent) = block.parent {
                assert!(parent < block.id);
                assert!(hir.block(parent).sub_blocks.contains(&block.id));
            }
            assert!(block.sub_blocks.windows(2).all(|pair| pair[0] < pair[1]));
        }
        assert_eq!(hir.blocks().iter().filter(|block| block.is_root()).count(), 1);
    }

    #[test]
    fn test_function_body_nests_under_declaring_block() {
        let (hir, _diagnostics) = lower(|b| {
            vec![b.block(vec![b.function("local", vec![], vec![])])]
        });

        // 0 unit, 1 body, 2 brace group, 3 function body
        assert_eq!(hir.block(BlockId(3)).parent, Some(BlockId(2)));
        assert_eq!(hir.block(BlockId(2)).parent, Some(BlockId(1)));
        assert_eq!(hir.block(BlockId(1)).parent, Some(BlockId(0)));
    }

    #[test]
    fn test_references_point_into_ancestor_blocks() {
        let (hir, diagnostics) = lower(|b| {
            vec![
                b.let_decl("outer", None, Some(b.int(1))),
                b.function(
                    "f",
                    vec![b.param("p", None)],
                    vec![b.while_(
                        b.name("p"),
                        vec![b.expr_stmt(b.binary(BinaryOperator::Add, b.name("outer"), b.name("p")))],
                    )],
                ),
            ]
        });
        assert!(diagnostics.is_empty());

        let loop_body = BlockId(3);
        match &hir.block(loop_body).stmts[0] {
            Stmt::Drop {
                value: Expr::Binary { lhs, rhs, .. },
                ..
            } => {
                for operand in [lhs, rhs] {
                    let decl = operand.as_decl_ref().expect("operand is a name").decl;
                    let owner = hir.decl(decl).owner;
                    assert!(hir.is_ancestor_or_self(owner, loop_body));
                }
            }
            other => panic!("expected a binary drop, found {:?}", other),
        }
    }
}
