use std::str::FromStr;

use crate::core::{
    error::Error,
    ledger::Policy,
};

/// One line of simulator input, parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `RQ <process> <size> <F|B|W>`
    Request {
        owner: String,
        size: usize,
        policy: Policy,
    },
    /// `RL <process>`
    Release { owner: String },
    /// `C`
    Compact,
    /// `STAT`
    Status,
    /// `X`
    Exit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| Error::InvalidRequest("empty command".into()))?;

        // Take every operand up front so that trailing garbage
        // is caught the same way for every verb.
        let operands: Vec<&str> = words.collect();

        let command = match (verb, operands.as_slice()) {
            ("RQ", [owner, size, policy]) => Command::Request {
                owner: owner.to_string(),
                size: parse_size(size)?,
                policy: policy.parse()?,
            },
            ("RL", [owner]) => Command::Release {
                owner: owner.to_string(),
            },
            ("C", []) => Command::Compact,
            ("STAT", []) => Command::Status,
            ("X", []) => Command::Exit,
            ("RQ", _) => return Err(usage("RQ <process> <size> <F|B|W>")),
            ("RL", _) => return Err(usage("RL <process>")),
            ("C" | "STAT" | "X", _) => return Err(usage(verb)),
            (other, _) => {
                return Err(Error::InvalidRequest(format!("unknown command '{other}'")))
            }
        };
        Ok(command)
    }
}

fn usage(form: &str) -> Error {
    Error::InvalidRequest(format!("usage: {form}"))
}

fn parse_size(token: &str) -> Result<usize, Error> {
    // Parse as a signed number first so that "-5" is reported
    // as a non-positive size rather than as garbage.
    let size: i64 = token
        .parse()
        .map_err(|_| Error::InvalidRequest(format!("size '{token}' is not an integer")))?;

    if size <= 0 {
        return Err(Error::InvalidRequest(format!("size must be positive, got {size}")));
    }
    usize::try_from(size)
        .map_err(|_| Error::InvalidRequest(format!("size {size} is too large")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_request() {
        assert_eq!(
            "RQ P1 40 F".parse::<Command>(),
            Ok(Command::Request {
                owner: "P1".into(),
                size: 40,
                policy: Policy::First,
            })
        );
        assert_eq!(
            "  RQ   P2 7 W \n".parse::<Command>(),
            Ok(Command::Request {
                owner: "P2".into(),
                size: 7,
                policy: Policy::Worst,
            })
        );
    }

    #[test]
    fn parses_simple_verbs() {
        assert_eq!("RL P1".parse::<Command>(), Ok(Command::Release { owner: "P1".into() }));
        assert_eq!("C".parse::<Command>(), Ok(Command::Compact));
        assert_eq!("STAT\n".parse::<Command>(), Ok(Command::Status));
        assert_eq!("X".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn rejects_bad_sizes() {
        for line in ["RQ P1 0 F", "RQ P1 -5 F", "RQ P1 ten F", "RQ P1 4.5 B"] {
            assert!(
                matches!(line.parse::<Command>(), Err(Error::InvalidRequest(_))),
                "{line} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_wrong_arity_and_unknown_verbs() {
        for line in ["RQ P1 10", "RQ P1 10 F extra", "RL", "C now", "STATUS", "", "rq P1 1 F"] {
            assert!(
                matches!(line.parse::<Command>(), Err(Error::InvalidRequest(_))),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(matches!(
            "RQ P1 10 Q".parse::<Command>(),
            Err(Error::InvalidRequest(_))
        ));
    }
}
