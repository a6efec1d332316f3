
use calc_rs::{assert_approx_eq, builtin_functions};
use test_helpers::eval;

#[test]
fn test_function_values() {
    let cases = [
        ("sin(0)", 0.0),
        ("cos(0)", 1.0),
        ("tan(0)", 0.0),
        ("sqrt(4)", 2.0),
        ("pow(2,3)", 8.0),
        ("ln(1)", 0.0),
        ("log10(100)", 2.0),
        ("log2(8)", 3.0),
        ("abs(-5)", 5.0),
    ];
    for (expression, expected) in cases {
        assert_approx_eq!(
            eval(expression).unwrap(),
            expected,
            calc_rs::constants::TEST_PRECISION,
            "wrong result for {expression}"
        );
    }
}

#[test]
fn test_trig_identity() {
    // sin²(x) + cos²(x) = 1
    assert_approx_eq!(eval("pow(sin(1),2)+pow(cos(1),2)").unwrap(), 1.0);
}

#[test]
fn test_expression_arguments() {
    assert_eq!(eval("pow(1+1, 5-2)").unwrap(), 8.0);
    assert_eq!(eval("sqrt(2*2)").unwrap(), 2.0);
    assert_eq!(eval("abs(3-8)").unwrap(), 5.0);
}

#[test]
fn test_function_calls_inside_arguments() {
    assert_eq!(eval("pow(sqrt(4), abs(-3))").unwrap(), 8.0);
    assert_approx_eq!(eval("log2(pow(2, 10))").unwrap(), 10.0);
}

#[test]
fn test_negative_arguments_through_unary() {
    assert_eq!(eval("abs(-2.5)").unwrap(), 2.5);
    assert_approx_eq!(eval("sin(-0)").unwrap(), 0.0);
    assert_eq!(eval("pow(-2, 3)").unwrap(), -8.0);
}

#[test]
fn test_ln_of_composed_argument() {
    assert_approx_eq!(eval("ln(pow(2, 2))").unwrap(), (4.0f64).ln());
}

#[test]
fn test_builtin_function_listing() {
    let functions = builtin_functions();
    assert!(functions.contains("sin"));
    assert!(functions.contains("cos"));
    assert!(functions.contains("sqrt"));
    assert!(functions.contains("pow"));
    assert_eq!(functions.len(), 9);
}
