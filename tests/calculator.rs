use torchlite::{Config, Error, Session, State};

const EPSILON: f64 = 1e-9;

fn evaluate(expression: &str) -> Result<f64, Error> {
    let mut session = Session::new();
    session.append(expression);
    session.evaluate().expect("a non-empty display is evaluated")
}

fn assert_close(result: Result<f64, Error>, expected: f64) {
    let value = result.unwrap();
    assert!((value - expected).abs() < EPSILON, "{} != {}", value, expected);
}

#[test]
fn precedence() {
    assert_eq!(evaluate("2+3*4"), Ok(14.0));
    assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
    assert_eq!(evaluate("2+3×4−6÷2"), Ok(11.0));
}

#[test]
fn power_is_right_associative() {
    assert_eq!(evaluate("2^3^2"), Ok(512.0));
}

#[test]
fn trigonometry_in_degrees() {
    assert_close(evaluate("sin(30)"), 0.5);
    assert_close(evaluate("sin(log(10))×0+cos(0)"), 1.0);
}

#[test]
fn constants() {
    assert_close(evaluate("2*π"), 6.28318530718);
    assert_close(evaluate("ln(e^3)"), 3.0);
}

#[test]
fn errors() {
    assert_eq!(evaluate("5/0"), Err(Error::DivisionByZero));
    assert_eq!(evaluate("log(-1)").unwrap_err().kind(), "DomainError");
    assert_eq!(evaluate("√(-4)").unwrap_err().kind(), "DomainError");
    assert_eq!(evaluate("2×(3").unwrap_err().kind(), "SyntaxError");
    assert_eq!(evaluate("2×"), Err(Error::Syntax("empty expression before operator".into())));
    assert_eq!(evaluate("2#"), Err(Error::UnknownToken('#')));
}

#[test]
fn clear_then_evaluate_is_a_no_op() {
    let mut session = Session::new();
    session.append("1+2");
    session.clear();
    assert_eq!(session.evaluate(), None);
    assert!(session.history().is_empty());
    assert_eq!(session.state(), State::Empty);
}

#[test]
fn backspace_after_append() {
    let mut session = Session::new();
    session.append("12");
    session.backspace();
    assert_eq!(session.display(), "1");
}

#[test]
fn bounded_history_is_chronological() {
    let mut session = Session::new();
    for expression in &["1+1", "2+2", "3+3", "4+4"] {
        session.append(expression);
        session.evaluate();
    }

    let entries: Vec<(&str, Result<f64, Error>)> = session
        .history()
        .iter()
        .map(|entry| (entry.expression.as_str(), entry.result.clone()))
        .collect();
    assert_eq!(
        entries,
        vec![("2+2", Ok(4.0)), ("3+3", Ok(6.0)), ("4+4", Ok(8.0))]
    );
}

#[test]
fn unbounded_history_keeps_failures() {
    let mut session = Session::with_config(Config::unbounded());
    for expression in &["1+1", "1/0", "2+2", "3+3", "4+4"] {
        session.append(expression);
        session.evaluate();
        session.clear();
    }

    let history = session.history();
    assert_eq!(history.len(), 5);
    assert_eq!(history.iter().filter(|entry| !entry.is_success()).count(), 1);
    assert_eq!(history.latest().map(|entry| entry.expression.as_str()), Some("4+4"));
}

#[test]
fn keypad_sequence() {
    let mut session = Session::with_config(Config::from_toml("precision = 4").unwrap());
    for key in &["√(", "2", ")", "×", "√(", "8", ")"] {
        session.append(key);
    }
    assert_eq!(session.display(), "√(2)×√(8)");
    assert_close(session.evaluate().unwrap(), 4.0);
    assert_eq!(session.display(), "4");

    // a new key press after the result starts a new expression
    session.append("9");
    assert_eq!(session.display(), "9");
}

#[test]
fn large_results_display_unchanged() {
    let mut session = Session::new();
    session.append("1000000×1000246");
    assert_eq!(session.evaluate(), Some(Ok(1_000_246_000_000.0)));
    assert_eq!(session.display(), "1000246000000");

    session.append("tan(90)");
    let value = session.evaluate().unwrap().unwrap();
    assert_eq!(session.display().parse::<f64>(), Ok(value));
}

#[test]
fn long_input() {
    let mut session = Session::new();
    session.append(&vec!["1"; 10_000].join("+"));
    assert_eq!(session.evaluate(), Some(Ok(10_000.0)));
    assert_eq!(session.display(), "10000");

    session.append(&format!("{}2{}", "√(".repeat(2_000), ")".repeat(2_000)));
    assert_close(session.evaluate().unwrap(), 1.0);
}
