//! Text format for judged cases.
//!
//! Input file: `T`, then per case `N` followed by `N` lines `X Y`.
//! Output file: per case a header `Case #i: K` followed by `K` lines of three
//! 1-based point labels.
//!
//! The reader checks syntax, coordinate range and the declared triangle count
//! (`0..=n/3`, needed before the triples can be read). Label range and label
//! reuse are checked by `Partition::from_indices`, so a judge can attribute
//! them to the right side.

use crate::error::{AssignError, ParseError};
use crate::geom2::{in_coord_range, Pt};

/// Point set of one case, labelled `1..=points.len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseInput {
    pub points: Vec<Pt>,
}

/// Raw label triples of one case, as written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaseOutput {
    pub triples: Vec<[i64; 3]>,
}

/// Whitespace tokenizer that remembers line numbers for diagnostics.
struct Tokens<'a> {
    iter: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let iter = text
            .lines()
            .enumerate()
            .flat_map(|(k, l)| l.split_whitespace().map(move |t| (k + 1, t)));
        Self {
            iter: Box::new(iter),
            line: 1,
        }
    }

    fn token(&mut self, expected: &'static str) -> Result<(usize, &'a str), ParseError> {
        let (line, tok) = self.iter.next().ok_or(ParseError::UnexpectedEof {
            line: self.line,
            expected,
        })?;
        self.line = line;
        Ok((line, tok))
    }

    fn int(&mut self, expected: &'static str) -> Result<(usize, i64), ParseError> {
        let (line, tok) = self.token(expected)?;
        tok.parse::<i64>()
            .map(|v| (line, v))
            .map_err(|_| ParseError::Unexpected {
                line,
                expected,
                found: tok.to_string(),
            })
    }

    fn count(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let (line, v) = self.int(expected)?;
        usize::try_from(v).map_err(|_| ParseError::OutOfRange {
            line,
            what: expected,
            value: v,
        })
    }

    fn coord(&mut self) -> Result<i64, ParseError> {
        let (line, v) = self.int("coordinate")?;
        if in_coord_range(v) {
            Ok(v)
        } else {
            Err(ParseError::OutOfRange {
                line,
                what: "coordinate",
                value: v,
            })
        }
    }

    fn finish(mut self) -> Result<(), ParseError> {
        match self.iter.next() {
            None => Ok(()),
            Some((line, found)) => Err(ParseError::Trailing {
                line,
                found: found.to_string(),
            }),
        }
    }
}

pub fn parse_input(text: &str) -> Result<Vec<CaseInput>, ParseError> {
    let mut tok = Tokens::new(text);
    let t = tok.count("case count")?;
    let mut cases = Vec::with_capacity(t.min(1 << 16));
    for _ in 0..t {
        let n = tok.count("point count")?;
        let mut points = Vec::with_capacity(n.min(1 << 20));
        for _ in 0..n {
            let x = tok.coord()?;
            let y = tok.coord()?;
            points.push(Pt::new(x, y));
        }
        cases.push(CaseInput { points });
    }
    tok.finish()?;
    Ok(cases)
}

/// Parse one output block per entry of `inputs`.
pub fn parse_output(text: &str, inputs: &[CaseInput]) -> Result<Vec<CaseOutput>, ParseError> {
    let mut tok = Tokens::new(text);
    let mut out = Vec::with_capacity(inputs.len());
    for case_no in 1..=inputs.len() {
        header(&mut tok, case_no)?;
        let k = triangle_count(&mut tok, &inputs[case_no - 1])?;
        let mut triples = Vec::with_capacity(k.min(1 << 20));
        for _ in 0..k {
            let (_, a) = tok.int("point index")?;
            let (_, b) = tok.int("point index")?;
            let (_, c) = tok.int("point index")?;
            triples.push([a, b, c]);
        }
        out.push(CaseOutput { triples });
    }
    tok.finish()?;
    Ok(out)
}

/// Declared triangle count, bounded to `[0, n / 3]` before any triple is read.
fn triangle_count(tok: &mut Tokens<'_>, input: &CaseInput) -> Result<usize, ParseError> {
    let (line, k) = tok.int("triangle count")?;
    let max = input.points.len() / 3;
    usize::try_from(k)
        .ok()
        .filter(|&k| k <= max)
        .ok_or(ParseError::TriangleCount {
            line,
            source: AssignError::CountOutOfRange { count: k, max },
        })
}

fn header(tok: &mut Tokens<'_>, case_no: usize) -> Result<(), ParseError> {
    let (line, word) = tok.token("`Case`")?;
    let (_, tag) = tok.token("`#i:`")?;
    if word != "Case" || tag != format!("#{case_no}:") {
        return Err(ParseError::CaseHeader {
            line,
            expected: case_no,
            found: format!("{word} {tag}"),
        });
    }
    Ok(())
}

pub fn write_input(cases: &[CaseInput]) -> String {
    let body: String = cases
        .iter()
        .map(|case| {
            let points: String = case
                .points
                .iter()
                .map(|p| format!("{} {}\n", p.x, p.y))
                .collect();
            format!("{}\n{points}", case.points.len())
        })
        .collect();
    format!("{}\n{body}", cases.len())
}

pub fn write_output(outputs: &[CaseOutput]) -> String {
    outputs
        .iter()
        .enumerate()
        .map(|(k, out)| {
            let triples: String = out
                .triples
                .iter()
                .map(|[a, b, c]| format!("{a} {b} {c}\n"))
                .collect();
            format!("Case #{}: {}\n{triples}", k + 1, out.triples.len())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "2\n6\n0 0\n4 0\n0 4\n1 1\n2 1\n1 2\n3\n0 0\n1 0\n2 0\n";

    #[test]
    fn parses_multi_case_input() {
        let cases = parse_input(INPUT).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].points.len(), 6);
        assert_eq!(cases[0].points[5], Pt::new(1, 2));
        assert_eq!(cases[1].points[2], Pt::new(2, 0));
    }

    #[test]
    fn parses_output_blocks() {
        let cases = parse_input(INPUT).unwrap();
        let out = parse_output("Case #1: 2\n1 2 3\n4 5 6\nCase #2: 0\n", &cases).unwrap();
        assert_eq!(out[0].triples, vec![[1, 2, 3], [4, 5, 6]]);
        assert!(out[1].triples.is_empty());
    }

    #[test]
    fn labels_are_not_range_checked_here() {
        let cases = parse_input("1\n3\n0 0\n1 0\n0 1\n").unwrap();
        let out = parse_output("Case #1: 1\n-1 9 9\n", &cases).unwrap();
        assert_eq!(out[0].triples, vec![[-1, 9, 9]]);
    }

    #[test]
    fn rejects_bad_header() {
        let cases = parse_input(INPUT).unwrap();
        let err = parse_output("Case #2: 0\nCase #1: 0\n", &cases).unwrap_err();
        assert_eq!(
            err,
            ParseError::CaseHeader {
                line: 1,
                expected: 1,
                found: "Case #2:".into()
            }
        );
    }

    #[test]
    fn rejects_truncated_and_trailing_text() {
        let cases = parse_input(INPUT).unwrap();
        assert!(matches!(
            parse_output("Case #1: 1\n1 2\n", &cases),
            Err(ParseError::Unexpected { .. }) | Err(ParseError::UnexpectedEof { .. })
        ));
        assert_eq!(
            parse_output("Case #1: 0\nCase #2: 0\nextra\n", &cases),
            Err(ParseError::Trailing {
                line: 3,
                found: "extra".into()
            })
        );
    }

    #[test]
    fn rejects_negative_count_and_wild_coordinates() {
        let cases = parse_input(INPUT).unwrap();
        let negative = parse_output("Case #1: -1\n", &cases).unwrap_err();
        assert_eq!(
            negative,
            ParseError::TriangleCount {
                line: 1,
                source: AssignError::CountOutOfRange { count: -1, max: 2 }
            }
        );
        assert_eq!(
            negative.to_string(),
            "line 1: Expected number of triangles to be in range [0, 2] but was -1"
        );
        assert!(matches!(
            parse_output("Case #1: 0\nCase #2: 2\n1 2 3\n", &cases),
            Err(ParseError::TriangleCount {
                line: 2,
                source: AssignError::CountOutOfRange { count: 2, max: 1 }
            })
        ));
        let big = format!("1\n1\n{} 0\n", i64::MAX);
        assert!(matches!(
            parse_input(&big),
            Err(ParseError::OutOfRange { what: "coordinate", .. })
        ));
        assert!(matches!(
            parse_input("1\n1\n0 zero\n"),
            Err(ParseError::Unexpected { line: 3, .. })
        ));
    }

    #[test]
    fn writers_round_trip_through_readers() {
        let cases = parse_input(INPUT).unwrap();
        assert_eq!(parse_input(&write_input(&cases)).unwrap(), cases);
        let outs = vec![
            CaseOutput {
                triples: vec![[1, 2, 3]],
            },
            CaseOutput::default(),
        ];
        assert_eq!(parse_output(&write_output(&outs), &cases).unwrap(), outs);
    }
}
