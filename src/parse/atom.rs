//! Atom tokens: organic-subset symbols and bracket atoms.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize, value, verify},
    sequence::{preceded, tuple},
    IResult,
};
use std::str::FromStr;

use super::SmilesError;
use crate::element;
use crate::Atom;

type Res<'a, T> = IResult<&'a str, T>;

/// Largest charge magnitude accepted in strict mode.
pub const MAX_STRICT_CHARGE: i8 = 15;
/// Largest explicit hydrogen count accepted in strict mode.
pub const MAX_STRICT_HYDROGENS: u8 = 9;

/// Reads a bare organic-subset atom at the start of `input`.
/// Returns the atom and the number of bytes consumed.
pub fn read_organic_atom(input: &str) -> Option<(Atom, usize)> {
    element::organic_symbol(input).map(|symbol| (Atom::organic(symbol), symbol.len()))
}

/// Reads a bracket atom. `input` starts at the `[`, `pos` is its offset.
pub fn read_bracket_atom(input: &str, pos: usize) -> Result<(Atom, usize), SmilesError> {
    let malformed = |_| SmilesError::MalformedBracketAtom { pos };

    let (rest, _) = char::<_, nom::error::Error<&str>>('[')(input).map_err(malformed)?;
    let (rest, isotope) = opt(number::<u16>)(rest).map_err(malformed)?;
    if isotope == Some(0) {
        return Err(SmilesError::InvalidIsotope { pos, isotope: 0 });
    }
    let (rest, (symbol, chirality, hydrogens, charge, class)) = tuple((
        element_symbol,
        opt(chirality),
        opt(hydrogen_count),
        opt(charge),
        opt(preceded(char(':'), number::<u32>)),
    ))(rest)
    .map_err(malformed)?;
    let (rest, _) = char::<_, nom::error::Error<&str>>(']')(rest).map_err(malformed)?;

    let atom = Atom {
        index: 0,
        symbol,
        isotope,
        charge: charge.unwrap_or(0),
        hydrogens: Some(hydrogens.unwrap_or(0)),
        chirality: chirality.map(str::to_string),
        class,
        bracket: true,
    };
    Ok((atom, input.len() - rest.len()))
}

/// Semantic problems that the grammar itself accepts.
/// Strict parses reject them; lenient parses only log them.
pub fn semantic_warning(atom: &Atom) -> Option<String> {
    if atom.charge.unsigned_abs() > MAX_STRICT_CHARGE.unsigned_abs() {
        return Some(format!(
            "Charge {} of atom {} exceeds +/-{}",
            atom.charge, atom.symbol, MAX_STRICT_CHARGE
        ));
    }
    match atom.hydrogens {
        Some(h) if h > MAX_STRICT_HYDROGENS => Some(format!(
            "Hydrogen count {} of atom {} exceeds {}",
            h, atom.symbol, MAX_STRICT_HYDROGENS
        )),
        _ => None,
    }
}

fn number<T: FromStr>(input: &str) -> Res<T> {
    map_res(digit1, |digits: &str| digits.parse::<T>())(input)
}

fn element_symbol(input: &str) -> Res<&'static str> {
    for len in [2, 1] {
        if let Some(symbol) = input.get(..len).and_then(element::bracket_symbol) {
            return Ok((&input[len..], symbol));
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Alpha,
    )))
}

/// `@`, `@@`, or one of the numbered chirality classes such as `@TB12`.
fn chirality(input: &str) -> Res<&str> {
    recognize(preceded(
        char('@'),
        opt(alt((
            recognize(char('@')),
            chiral_class("TH", 2),
            chiral_class("AL", 2),
            chiral_class("SP", 3),
            chiral_class("TB", 20),
            chiral_class("OH", 30),
        ))),
    ))(input)
}

fn chiral_class<'a>(class: &'static str, max: u8) -> impl FnMut(&'a str) -> Res<'a, &'a str> {
    recognize(verify(preceded(tag(class), number::<u8>), move |n: &u8| {
        (1..=max).contains(n)
    }))
}

/// `H` alone means one hydrogen.
fn hydrogen_count(input: &str) -> Res<u8> {
    map(preceded(char('H'), opt(number::<u8>)), |count| {
        count.unwrap_or(1)
    })(input)
}

fn charge(input: &str) -> Res<i8> {
    alt((
        value(2, tag("++")),
        value(-2, tag("--")),
        preceded(char('+'), number::<i8>),
        map(preceded(char('-'), number::<i8>), |n| -n),
        value(1, char('+')),
        value(-1, char('-')),
    ))(input)
}
