//! Replays the JSON operation traces under `tests/traces/` and checks every
//! recorded result.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;

use serde::Deserialize;

use range_query_tree::ErrorKind;
use range_query_tree::RangeQueryTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TraceError {
    InvalidInput,
    OutOfRange,
}

impl TraceError {
    fn kind(self) -> ErrorKind {
        return match self {
            TraceError::InvalidInput => ErrorKind::InvalidInput,
            TraceError::OutOfRange => ErrorKind::OutOfRange,
        };
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Step {
    Query {
        l: usize,
        r: usize,
        expect: Option<i64>,
        error: Option<TraceError>,
    },
    Update {
        pos: usize,
        value: i64,
        error: Option<TraceError>,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct Trace {
    #[allow(dead_code)]
    description: String,
    values: Vec<i64>,
    build_error: Option<TraceError>,
    steps: Vec<Step>,
}

impl Trace {
    fn load(name: &str) -> Trace {
        let path = format!("{}/tests/traces/{}", env!("CARGO_MANIFEST_DIR"), name);
        let file = File::open(&path).expect("failed to open trace file");
        let mut reader = BufReader::new(file);
        let mut raw_json = Vec::new();
        reader.read_to_end(&mut raw_json).expect("failed to read");
        return serde_json::from_slice(&raw_json).expect("failed to parse JSON");
    }
}

fn replay(name: &str) {
    let trace = Trace::load(name);
    let mut model = trace.values.clone();

    let mut tree: RangeQueryTree<i64> = match RangeQueryTree::build(trace.values) {
        Ok(tree) => {
            assert!(trace.build_error.is_none(), "{}: build should have failed", name);
            tree
        }
        Err(err) => {
            assert_eq!(trace.build_error.map(TraceError::kind), Some(err.kind()), "{}", name);
            return;
        }
    };

    for (i, step) in trace.steps.iter().enumerate() {
        match step {
            Step::Query { l, r, expect, error } => {
                let result = tree.query(*l, *r);
                match error {
                    Some(e) => assert_eq!(result.map_err(|err| err.kind()), Err(e.kind()), "{} step {}", name, i),
                    None => {
                        assert_eq!(result, Ok(expect.expect("query step without expect")), "{} step {}", name, i);
                        let naive: i64 = model[*l..=*r].iter().sum();
                        assert_eq!(Some(naive), *expect, "{} step {}: trace disagrees with model", name, i);
                    }
                }
            }
            Step::Update { pos, value, error } => {
                let result = tree.update(*pos, *value);
                match error {
                    Some(e) => assert_eq!(result.map_err(|err| err.kind()), Err(e.kind()), "{} step {}", name, i),
                    None => {
                        assert_eq!(result, Ok(()), "{} step {}", name, i);
                        model[*pos] = *value;
                    }
                }
            }
        }
    }

    assert_eq!(tree.leaves(), model, "{}: final leaves", name);
}

#[test]
fn scenario_trace() {
    replay("scenario.json");
}

#[test]
fn boundaries_trace() {
    replay("boundaries.json");
}

#[test]
fn single_trace() {
    replay("single.json");
}

#[test]
fn empty_trace() {
    replay("empty.json");
}
