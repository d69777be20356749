use lunula::{Interpreter, InterpreterError, Limits, ParseError, RuntimeError, Value};

fn eval(source: &str) -> Option<Value> {
    let mut session = Interpreter::new();
    session.run_source(source)
           .unwrap_or_else(|e| panic!("Script failed: {e}\n{source}"))
}

fn eval_err(source: &str) -> InterpreterError {
    let mut session = Interpreter::new();
    match session.run_source(source) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{source}"),
        Err(e) => e,
    }
}

fn number(source: &str) -> f64 {
    match eval(source) {
        Some(Value::Number(n)) => n,
        other => panic!("Expected a number result, got {other:?}:\n{source}"),
    }
}

fn text(source: &str) -> String {
    match eval(source) {
        Some(Value::Str(s)) => s,
        other => panic!("Expected a string result, got {other:?}:\n{source}"),
    }
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(number("local x = 2 + 3 * 4\nx"), 14.0);
    assert_eq!(number("local x = (2 + 3) * 4\nx"), 20.0);
    assert_eq!(number("local x = 10 / 4\nx"), 2.5);
    assert_eq!(number("local x = 7 % 4\nx"), 3.0);
    assert_eq!(number("local x = 2 + 3 - 1\nx"), 4.0);
}

#[test]
fn fractional_literals() {
    assert_eq!(number("local x = .5 + .5\nx"), 1.0);
    assert_eq!(number("local x = 3.25 * 4\nx"), 13.0);
}

#[test]
fn string_concatenation() {
    assert_eq!(text("local s = \"a\" + \"b\" + \"c\"\ns"), "abc");
    assert_eq!(text("local s = 'single' + \" and double\"\ns"), "single and double");
}

#[test]
fn no_implicit_coercion() {
    assert!(matches!(eval_err("local x = 1 + \"a\""),
                     InterpreterError::Runtime(RuntimeError::TypeError { .. })));
    assert!(matches!(eval_err("local x = \"a\" - \"b\""),
                     InterpreterError::Runtime(RuntimeError::TypeError { .. })));
    assert!(matches!(eval_err("local x = \"a\" * 2"),
                     InterpreterError::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn division_by_zero_is_recoverable() {
    let mut session = Interpreter::new();

    let failure = session.run_source("local x = 5 / 0").unwrap_err();
    assert!(matches!(failure, InterpreterError::Runtime(RuntimeError::DivisionByZero)));

    // The same session keeps working after the failed unit.
    session.run_source("local y = 2").unwrap();
    assert_eq!(session.run_source("y").unwrap(), Some(Value::Number(2.0)));
}

#[test]
fn assignment_and_flat_namespace() {
    assert_eq!(number("local x = 5\nx"), 5.0);
    assert_eq!(number("x = 3\nx"), 3.0);
    assert_eq!(number("local x = 1\nx = x + 1\nx"), 2.0);

    // A `local` inside a function body lands in the same namespace.
    assert_eq!(number("function setup() local y = 7 end\nsetup()\ny"), 7.0);
}

#[test]
fn if_then_else() {
    assert_eq!(number("local x = 0\nif true then x = 1 end\nx"), 1.0);
    assert_eq!(number("local x = 0\nif false then x = 1 end\nx"), 0.0);
    assert_eq!(number("local x = 0\nif true then x = 1 else x = 2 end\nx"), 1.0);
    assert_eq!(number("local x = 0\nif false then x = 1 else x = 2 end\nx"), 2.0);
}

#[test]
fn elseif_chains() {
    let program = "local pick = 0\nif FIRST then pick = 1 elseif SECOND then pick = 2 else pick \
                   = 3 end\npick";

    let pick = |first: &str, second: &str| {
        number(&program.replace("FIRST", first).replace("SECOND", second))
    };

    assert_eq!(pick("true", "true"), 1.0);
    assert_eq!(pick("false", "true"), 2.0);
    assert_eq!(pick("false", "false"), 3.0);
}

#[test]
fn nested_blocks_pair_correctly() {
    // The skipped branch contains a `while` block; its `end` must not close
    // the `if`.
    assert_eq!(number("local x = 0\nif false then while true do x = 1 end else x = 2 end\nx"),
               2.0);
    assert_eq!(number("local x = 0\nif true then if false then x = 1 else x = 2 end end\nx"),
               2.0);
}

#[test]
fn while_loops() {
    assert_eq!(number("local go = true\nlocal count = 0\nwhile go do count = count + 1 go = \
                       false end\ncount"),
               1.0);
    assert_eq!(number("local count = 0\nwhile false do count = count + 1 end\ncount"), 0.0);
}

#[test]
fn non_boolean_conditions_are_rejected() {
    assert!(matches!(eval_err("if 1 then end"),
                     InterpreterError::Runtime(RuntimeError::TypeError { .. })));
    assert!(matches!(eval_err("while 1 do end"),
                     InterpreterError::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn user_defined_functions() {
    assert_eq!(number("function bump() counter = counter + 1 end\nlocal counter = 0\nbump()\n\
                       bump()\ncounter"),
               2.0);

    // A completed call produces nil.
    assert_eq!(eval("function noop() end\nnoop()"), Some(Value::Nil));
}

#[test]
fn function_redefinition_newest_wins() {
    assert_eq!(number("function f() result = 1 end\nfunction f() result = 2 end\nlocal result = \
                       0\nf()\nresult"),
               2.0);
}

#[test]
fn functions_persist_across_units() {
    let mut session = Interpreter::new();
    session.run_source("function greet() message = \"hi\" end").unwrap();

    // The defining unit's tokens are gone; the stored body still runs.
    session.run_source("greet()").unwrap();
    assert_eq!(session.run_source("message").unwrap(),
               Some(Value::Str("hi".to_string())));
}

#[test]
fn function_parameters_are_rejected() {
    assert!(matches!(eval_err("function f(x) end"),
                     InterpreterError::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(eval_err("function f() end\nf(1)"),
                     InterpreterError::Runtime(RuntimeError::ArgumentCountMismatch { .. })));
}

#[test]
fn runaway_recursion_is_bounded() {
    let failure = eval_err("function loop() loop() end\nloop()");
    assert!(matches!(failure,
                     InterpreterError::Runtime(RuntimeError::Capacity { resource: "nested calls",
                                                                        .. })));
}

#[test]
fn builtin_conversions() {
    assert_eq!(eval("type(nil)"), Some(Value::Str("nil".to_string())));
    assert_eq!(eval("type(true)"), Some(Value::Str("boolean".to_string())));
    assert_eq!(eval("type(3)"), Some(Value::Str("number".to_string())));
    assert_eq!(eval("type(\"x\")"), Some(Value::Str("string".to_string())));

    assert_eq!(text("tostring(tonumber(\"42\"))"), "42");
    assert_eq!(eval("tonumber(\"abc\")"), Some(Value::Nil));
    assert_eq!(eval("tonumber(true)"), Some(Value::Nil));
    assert_eq!(number("tonumber(\" 12.5 \")"), 12.5);
    assert_eq!(text("tostring(nil)"), "nil");
    assert_eq!(text("tostring(true)"), "true");
}

#[test]
fn builtin_math() {
    assert_eq!(number("math.sqrt(9)"), 3.0);
    assert_eq!(number("math.sqrt(2 + 2)"), 2.0);

    // Negative input yields nil, never an error.
    assert_eq!(eval("math.sqrt(0 - 9)"), Some(Value::Nil));
    assert_eq!(eval("math.sqrt(\"nope\")"), Some(Value::Nil));

    let sample = number("math.random()");
    assert!((0.0..1.0).contains(&sample));
}

#[test]
fn builtin_clocks() {
    assert!(number("os.time()") > 0.0);
    assert!(number("os.clock()") >= 0.0);
}

#[test]
fn builtin_strings() {
    assert_eq!(number("string.len(\"hello\")"), 5.0);
    assert_eq!(eval("string.len(5)"), Some(Value::Nil));

    assert_eq!(text("string.sub(\"hello\", 2, 4)"), "ell");
    assert_eq!(text("string.sub(\"hello\", 1, 99)"), "hello");
    assert_eq!(text("string.sub(\"hello\", 4, 2)"), "");
    assert_eq!(eval("string.sub(5, 1, 2)"), Some(Value::Nil));
}

#[test]
fn builtin_tables() {
    assert_eq!(number("local t = {}\ntable.insert(t, 5)\nlocal x = table.remove(t)\nx"), 5.0);
    assert_eq!(number("local t = {1, 2}\ntable.remove(t)"), 2.0);

    // Insert-then-remove on an empty table is a harmless no-op.
    assert_eq!(eval("local t = {}\ntable.remove(t)"), Some(Value::Nil));

    // Tables are shared between bindings, not copied.
    assert_eq!(number("local a = {}\nlocal b = a\ntable.insert(a, 1)\ntable.remove(b)"), 1.0);

    assert!(matches!(eval_err("table.insert(1, 2)"),
                     InterpreterError::Runtime(RuntimeError::TypeError { .. })));
    assert!(matches!(eval_err("table.remove(\"not a table\")"),
                     InterpreterError::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn builtin_arity_is_checked() {
    assert!(matches!(eval_err("print(1, 2)"),
                     InterpreterError::Runtime(RuntimeError::ArgumentCountMismatch { .. })));
    assert!(matches!(eval_err("string.sub(\"hello\", 2)"),
                     InterpreterError::Runtime(RuntimeError::ArgumentCountMismatch { .. })));
}

#[test]
fn builtin_catalogue_is_complete() {
    use lunula::interpreter::builtins::core::BUILTIN_FUNCTIONS;

    assert_eq!(BUILTIN_FUNCTIONS.len(), 12);
    assert!(BUILTIN_FUNCTIONS.contains(&"print"));
    assert!(BUILTIN_FUNCTIONS.contains(&"table.remove"));
}

#[test]
fn undefined_names() {
    assert!(matches!(eval_err("x"),
                     InterpreterError::Runtime(RuntimeError::UndefinedVariable { .. })));
    assert!(matches!(eval_err("nope()"),
                     InterpreterError::Runtime(RuntimeError::UndefinedFunction { .. })));
}

#[test]
fn lexical_errors() {
    assert!(matches!(eval_err("local s = \"oops"),
                     InterpreterError::Parse(ParseError::UnterminatedString)));
    assert!(matches!(eval_err("local a = @"),
                     InterpreterError::Parse(ParseError::InvalidCharacter { character: '@' })));
}

#[test]
fn malformed_numbers_fail_at_evaluation() {
    assert!(matches!(eval_err("local x = 1.2.3"),
                     InterpreterError::Parse(ParseError::MalformedNumber { .. })));
}

#[test]
fn syntax_errors() {
    assert!(matches!(eval_err("if true x = 1 end"),
                     InterpreterError::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(eval_err("local x"),
                     InterpreterError::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(eval_err("local x = (1 + 2"),
                     InterpreterError::Parse(ParseError::ExpectedToken { .. })));
    assert!(matches!(eval_err("if true then"),
                     InterpreterError::Parse(ParseError::UnexpectedEndOfInput)));
    assert!(matches!(eval_err("5 + 5"),
                     InterpreterError::Parse(ParseError::UnexpectedStatement { .. })));
    assert!(matches!(eval_err("local x = 1;"),
                     InterpreterError::Parse(ParseError::UnexpectedStatement { .. })));
}

#[test]
fn inert_keywords_are_rejected() {
    assert!(matches!(eval_err("break"),
                     InterpreterError::Parse(ParseError::UnsupportedKeyword { keyword: "break" })));
    assert!(matches!(eval_err("return"),
                     InterpreterError::Parse(ParseError::UnsupportedKeyword { keyword: "return" })));
    assert!(matches!(eval_err("for i = 1 do end"),
                     InterpreterError::Parse(ParseError::UnsupportedKeyword { keyword: "for" })));
}

#[test]
fn keyword_prefixed_identifiers() {
    assert_eq!(number("local iffy = 1\niffy"), 1.0);
    assert_eq!(number("local end_count = 2\nend_count"), 2.0);
}

#[test]
fn empty_unit_produces_nothing() {
    assert_eq!(Interpreter::new().run_source("").unwrap(), None);
    assert_eq!(Interpreter::new().run_source("   \n  ").unwrap(), None);
}

#[test]
fn variable_capacity_is_enforced() {
    let mut session = Interpreter::with_limits(Limits { max_variables: 1,
                                                        ..Limits::default() });
    session.run_source("local a = 1").unwrap();

    let failure = session.run_source("local b = 2").unwrap_err();
    assert!(matches!(failure,
                     InterpreterError::Runtime(RuntimeError::Capacity { resource: "variables",
                                                                        limit: 1 })));

    // Overwriting the existing binding is still allowed.
    session.run_source("a = 2").unwrap();
}

#[test]
fn function_capacity_is_enforced() {
    let mut session = Interpreter::with_limits(Limits { max_functions: 1,
                                                        ..Limits::default() });
    session.run_source("function one() end").unwrap();

    let failure = session.run_source("function two() end").unwrap_err();
    assert!(matches!(failure,
                     InterpreterError::Runtime(RuntimeError::Capacity { resource: "functions",
                                                                        .. })));
}

#[test]
fn value_stack_bounds() {
    let mut session = Interpreter::with_limits(Limits { max_stack: 1,
                                                        ..Limits::default() });
    session.push_value(Value::Nil).unwrap();
    assert!(matches!(session.push_value(Value::Nil),
                     Err(RuntimeError::Capacity { resource: "stack values", .. })));

    let mut empty = Interpreter::new();
    assert!(matches!(empty.pop_value(), Err(RuntimeError::StackUnderflow)));
}

#[test]
fn function_values_format_like_their_kind() {
    assert_eq!(Value::Function(3).type_name(), "function");
    assert_eq!(Value::Function(3).to_string(), "function: 3");
    assert!(Value::new_table().to_string().starts_with("table: "));
}

#[test]
fn last_expression_value_is_echoed() {
    assert_eq!(eval("local x = 1"), None);
    assert_eq!(eval("print(\"hi\")"), Some(Value::Nil));
    assert_eq!(eval("local x = 1\nx\nlocal y = 2"), Some(Value::Number(1.0)));
}
