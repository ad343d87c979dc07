//! Operators and multi-word synonyms, with and without whitespace splitting.

mod common;

use synparse::error::Result;
use synparse::parser::QueryParser;

use common::synonym_analyzer;

fn assert_renders(split_on_whitespace: bool, cases: &[(&str, &str)]) -> Result<()> {
    let parser = QueryParser::builder(synonym_analyzer())
        .default_field("field")
        .split_on_whitespace(split_on_whitespace)
        .build()?;

    for (input, expected) in cases {
        let rendered = parser.parse(input)?.to_string_with_field("field");
        assert_eq!(
            &rendered, expected,
            "query {input:?} with split_on_whitespace={split_on_whitespace}"
        );
    }

    Ok(())
}

/// Cases where whitespace splitting makes no difference: an operator or a
/// non-plain clause interrupts the words.
const INTERRUPTED: &[(&str, &str)] = &[
    ("+guinea pig", "+guinea pig"),
    ("-guinea pig", "-guinea pig"),
    ("!guinea pig", "-guinea pig"),
    ("guinea* pig", "guinea* pig"),
    ("guinea? pig", "guinea? pig"),
    ("guinea~2 pig", "guinea~2 pig"),
    ("guinea^2 pig", "(guinea)^2.0 pig"),
    ("guinea +pig", "guinea +pig"),
    ("guinea -pig", "guinea -pig"),
    ("guinea !pig", "guinea -pig"),
    ("guinea pig*", "guinea pig*"),
    ("guinea pig?", "guinea pig?"),
    ("guinea pig~2", "guinea pig~2"),
    ("guinea pig^2", "guinea (pig)^2.0"),
    ("field:guinea pig", "guinea pig"),
    ("guinea field:pig", "guinea pig"),
    ("NOT guinea pig", "-guinea pig"),
    ("guinea NOT pig", "guinea -pig"),
    ("guinea pig AND dogs", "guinea +pig +Synonym(dog dogs)"),
    ("dogs AND guinea pig", "+Synonym(dog dogs) +guinea pig"),
    ("guinea pig && dogs", "guinea +pig +Synonym(dog dogs)"),
    ("dogs && guinea pig", "+Synonym(dog dogs) +guinea pig"),
    ("guinea pig OR dogs", "guinea pig Synonym(dog dogs)"),
    ("dogs OR guinea pig", "Synonym(dog dogs) guinea pig"),
    ("guinea pig || dogs", "guinea pig Synonym(dog dogs)"),
    ("dogs || guinea pig", "Synonym(dog dogs) guinea pig"),
    ("\"guinea\" pig", "guinea pig"),
    ("guinea \"pig\"", "guinea pig"),
    ("(guinea) pig", "guinea pig"),
    ("guinea (pig)", "guinea pig"),
    ("/guinea/ pig", "/guinea/ pig"),
    ("guinea /pig/", "guinea /pig/"),
    ("\"guinea pig\"~2", "\"(guinea cavy) pig\"~2"),
    ("field:\"guinea pig\"", "\"(guinea cavy) pig\""),
];

#[test]
fn test_operators_interrupt_multi_word_analysis() -> Result<()> {
    assert_renders(false, INTERRUPTED)?;
    assert_renders(true, INTERRUPTED)
}

#[test]
fn test_operators_and_multi_word_synonyms() -> Result<()> {
    assert_renders(
        false,
        &[
            ("guinea pig", "Synonym(cavy guinea) pig"),
            ("(guinea pig)", "Synonym(cavy guinea) pig"),
            ("+(guinea pig)", "+(Synonym(cavy guinea) pig)"),
            ("-(guinea pig)", "-(Synonym(cavy guinea) pig)"),
            ("!(guinea pig)", "-(Synonym(cavy guinea) pig)"),
            ("NOT (guinea pig)", "-(Synonym(cavy guinea) pig)"),
            ("(guinea pig)^2", "(Synonym(cavy guinea) pig)^2.0"),
            ("field:(guinea pig)", "Synonym(cavy guinea) pig"),
            ("+small guinea pig", "+small Synonym(cavy guinea) pig"),
            ("-small guinea pig", "-small Synonym(cavy guinea) pig"),
            ("!small guinea pig", "-small Synonym(cavy guinea) pig"),
            ("NOT small guinea pig", "-small Synonym(cavy guinea) pig"),
            ("small* guinea pig", "small* Synonym(cavy guinea) pig"),
            ("small? guinea pig", "small? Synonym(cavy guinea) pig"),
            ("\"small\" guinea pig", "small Synonym(cavy guinea) pig"),
            ("guinea pig +running", "Synonym(cavy guinea) pig +running"),
            ("guinea pig -running", "Synonym(cavy guinea) pig -running"),
            ("guinea pig !running", "Synonym(cavy guinea) pig -running"),
            ("guinea pig NOT running", "Synonym(cavy guinea) pig -running"),
            ("guinea pig running*", "Synonym(cavy guinea) pig running*"),
            ("guinea pig running?", "Synonym(cavy guinea) pig running?"),
            ("guinea pig \"running\"", "Synonym(cavy guinea) pig running"),
        ],
    )
}

#[test]
fn test_operators_and_multi_word_synonyms_split_on_whitespace() -> Result<()> {
    assert_renders(
        true,
        &[
            ("guinea pig", "guinea pig"),
            ("(guinea pig)", "guinea pig"),
            ("+(guinea pig)", "+(guinea pig)"),
            ("-(guinea pig)", "-(guinea pig)"),
            ("!(guinea pig)", "-(guinea pig)"),
            ("NOT (guinea pig)", "-(guinea pig)"),
            ("(guinea pig)^2", "(guinea pig)^2.0"),
            ("field:(guinea pig)", "guinea pig"),
            ("+small guinea pig", "+small guinea pig"),
            ("-small guinea pig", "-small guinea pig"),
            ("!small guinea pig", "-small guinea pig"),
            ("NOT small guinea pig", "-small guinea pig"),
            ("small* guinea pig", "small* guinea pig"),
            ("small? guinea pig", "small? guinea pig"),
            ("\"small\" guinea pig", "small guinea pig"),
            ("guinea pig +running", "guinea pig +running"),
            ("guinea pig -running", "guinea pig -running"),
            ("guinea pig !running", "guinea pig -running"),
            ("guinea pig NOT running", "guinea pig -running"),
            ("guinea pig running*", "guinea pig running*"),
            ("guinea pig running?", "guinea pig running?"),
            ("guinea pig \"running\"", "guinea pig running"),
        ],
    )
}

#[test]
fn test_multi_word_synonym_with_default_and() -> Result<()> {
    let parser = QueryParser::builder(synonym_analyzer())
        .split_on_whitespace(false)
        .default_operator(synparse::parser::Operator::And)
        .build()?;

    assert_eq!(
        parser.parse("guinea pig")?.to_string_with_field("field"),
        "+Synonym(cavy guinea) +pig"
    );
    // `pig` binds to OR, so only "old guinea" is analyzed together.
    assert_eq!(
        parser.parse("old guinea pig OR dogs")?.to_string_with_field("field"),
        "+old +guinea pig Synonym(dog dogs)"
    );

    Ok(())
}
