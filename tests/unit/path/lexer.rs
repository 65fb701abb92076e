use super::*;

fn numbers(tokens: &[Token]) -> Vec<f64> {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Number(v) => Some(*v),
            Token::Command(_) => None,
        })
        .collect()
}

#[test]
fn lexes_commands_and_signed_decimals() {
    let tokens = lex("M10 -2.5L3.,.5Z");
    assert_eq!(
        tokens,
        vec![
            Token::Command('M'),
            Token::Number(10.0),
            Token::Number(-2.5),
            Token::Command('L'),
            Token::Number(3.0),
            Token::Number(0.5),
            Token::Command('Z'),
        ]
    );
}

#[test]
fn adjacent_negative_numbers_split() {
    assert_eq!(numbers(&lex("10-5-6")), vec![10.0, -5.0, -6.0]);
}

#[test]
fn stray_punctuation_is_skipped() {
    let tokens = lex("  #, M ;; 1 ( 2 ) - . ");
    assert_eq!(
        tokens,
        vec![Token::Command('M'), Token::Number(1.0), Token::Number(2.0)]
    );
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(lex("").is_empty());
    assert!(lex("   \n\t").is_empty());
}
