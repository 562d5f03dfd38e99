//! Module containing the interactive prompt-read-validate loop that turns
//! lines of user input into a [Vehicle].
//!
//! Each input line is expected to hold five whitespace separated tokens:
//! ```text
//! <ice|ev> <year> <name> <capacity> <consumption>
//! ```

use std::io::{BufRead, Write};

use crate::error::{ReadError, ReadResult};
use crate::imports::*;
use crate::vehicle::{Vehicle, VehicleKind};

fn parse_int_field(field: &'static str, token: Option<&str>) -> ReadResult<i32> {
    // an absent token is not a valid integer either
    let token = token.unwrap_or_default();
    token.parse::<i32>().map_err(|_| ReadError::NonIntegerField {
        field,
        token: token.to_owned(),
    })
}

/// Parses one line of input into a vehicle.
///
/// Checks run in a fixed order and the first failure wins: the type tag,
/// then `year`, `capacity` and `consumption` as integers, then the
/// positivity rules of [Vehicle::new].  Tokens past the fifth are ignored.
pub fn parse_vehicle_spec(line: &str) -> ReadResult<Vehicle> {
    let mut tokens = line.split_whitespace();

    let type_token = tokens.next().unwrap_or_default();
    let kind = VehicleKind::from_tag(type_token).ok_or_else(|| ReadError::InvalidType {
        token: type_token.to_owned(),
    })?;

    let year_token = tokens.next();
    let name = tokens.next().unwrap_or_default();
    let capacity_token = tokens.next();
    let consumption_token = tokens.next();

    let year = parse_int_field("year", year_token)?;
    let capacity = parse_int_field("capacity", capacity_token)?;
    let consumption = parse_int_field("consumption", consumption_token)?;

    let extra = tokens.count();
    if extra > 0 {
        log::warn!(
            "ignoring {} token(s) beyond the expected {}",
            extra,
            SPEC_TOKEN_COUNT
        );
    }

    Ok(Vehicle::new(kind, year, name, capacity, consumption)?)
}

/// Drives the prompt/response loop over a line-oriented `input`, writing
/// prompts and diagnostics to `output`.
///
/// # Example
/// ```
/// use range_comparator_core::prelude::*;
///
/// let input = "fcev 2016 HondaClarity 1000 100\nice 2023 ChevroletCorvette 19 30";
/// let mut output: Vec<u8> = Vec::new();
/// let mut reader = VehicleReader::new(input.as_bytes(), &mut output);
/// let veh = reader.read_vehicle().unwrap();
/// assert_eq!(veh.to_string(), "2023 ChevroletCorvette");
/// assert_eq!(reader.attempts(), 2);
/// drop(reader);
/// assert_eq!(
///     String::from_utf8(output).unwrap(),
///     "Specify vehicle: Invalid vehicle type. Ice or ev only, please.\nSpecify vehicle: "
/// );
/// ```
pub struct VehicleReader<R, W> {
    input: R,
    output: W,
    buf: Vec<u8>,
    attempts: usize,
}

impl<R: BufRead, W: Write> VehicleReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: Vec::new(),
            attempts: 0,
        }
    }

    /// Prompts until a line describes a valid vehicle and returns it.
    ///
    /// Invalid lines are reported on `output` and discarded.  Only
    /// [ReadError::EndOfInput] and [ReadError::Io] are returned to the
    /// caller.
    pub fn read_vehicle(&mut self) -> ReadResult<Vehicle> {
        self.attempts = 0;
        loop {
            self.attempts += 1;
            self.output.write_all(PROMPT.as_bytes())?;
            self.output.flush()?;

            self.buf.clear();
            if self.input.read_until(b'\n', &mut self.buf)? == 0 {
                log::debug!("input exhausted after {} attempt(s)", self.attempts);
                return Err(ReadError::EndOfInput);
            }
            // malformed bytes become U+FFFD, as a lossy console decoder would
            let line = String::from_utf8_lossy(&self.buf);

            match parse_vehicle_spec(&line) {
                Ok(veh) => {
                    log::debug!(
                        "read {} vehicle `{}` on attempt {}",
                        veh.kind(),
                        veh,
                        self.attempts
                    );
                    return Ok(veh);
                }
                Err(err) if err.is_recoverable() => {
                    log::debug!("attempt {} rejected: {:?}", self.attempts, err);
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Number of prompts written by the most recent [read_vehicle](Self::read_vehicle)
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn get_ref(&self) -> (&R, &W) {
        (&self.input, &self.output)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Reads a single vehicle without keeping a [VehicleReader] around
pub fn read_vehicle<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> ReadResult<Vehicle> {
    VehicleReader::new(input, output).read_vehicle()
}

#[cfg(test)]
mod reader_tests {
    use super::*;
    use std::io::Cursor;

    const VALID_LINE: &str = "ice 2023 HondaCivicTypeR 12 30";

    fn read(input: &str) -> (ReadResult<Vehicle>, String) {
        let mut output = Vec::new();
        let res = read_vehicle(&mut Cursor::new(input), &mut output);
        (res, String::from_utf8(output).unwrap())
    }

    /// Feeds `invalid` `n_attempts` times followed by a valid line and checks
    /// that `expected_msg` was reported once per invalid line.
    fn assert_rejected_n(invalid: &str, expected_msg: &str, n_attempts: usize) {
        let input = format!("{invalid}\n").repeat(n_attempts) + VALID_LINE;
        let (res, output) = read(&input);
        assert_eq!(res.unwrap().to_string(), "2023 HondaCivicTypeR");
        let expected = format!("Specify vehicle: {expected_msg}\n").repeat(n_attempts)
            + "Specify vehicle: ";
        assert_eq!(output, expected, "unexpected output for {invalid:?}");
    }

    fn assert_rejected(invalid: &str, expected_msg: &str) {
        assert_rejected_n(invalid, expected_msg, 1)
    }

    #[test]
    fn test_read_valid_ice() {
        let (res, output) = read("ice 2023 ChevroletCorvette 19 30");
        let veh = res.unwrap();
        assert_eq!(veh.kind(), VehicleKind::Combustion);
        assert_eq!(veh.to_string(), "2023 ChevroletCorvette");
        assert_eq!(veh.range(), 570.0);
        assert_eq!(output, "Specify vehicle: ");
    }

    #[test]
    fn test_read_valid_ev() {
        let (res, output) = read("ev 2025 RivianR1t 150000 300\n");
        let veh = res.unwrap();
        assert_eq!(veh.kind(), VehicleKind::Electric);
        assert_eq!(veh.to_string(), "2025 RivianR1t");
        assert_eq!(veh.range(), 500.0);
        assert_eq!(output, "Specify vehicle: ");
    }

    #[test]
    fn test_invalid_type() {
        assert_rejected("fcev 2016 HondaClarity 1000 100", INVALID_TYPE_MSG);
        assert_rejected("ICE 2023 HondaCivic 12 30", INVALID_TYPE_MSG);
        assert_rejected("", INVALID_TYPE_MSG);
        // type is checked before any integer field
        assert_rejected("fcev year HondaClarity x y", INVALID_TYPE_MSG);
    }

    #[test]
    fn test_non_integer_fields() {
        for invalid in [
            "ice ice HondaCivic 1000 1000",
            "ice 2023 34 Honda 1000 1000",
            "ice 2023 HondaCivicTypeR 1000.4 1000",
            "ice 2023 HondaCivicTypeR CTR 1000",
            "ice 2023 HondaCivicTypeR 12 1000.3",
            "ice 2023 HondaCivicTypeR 12 championshipwhite",
            "ice 2023 HondaCivicTypeR 2147483648 1",
            "ev 2023 HondaCivicTypeR 12",
            "ev",
        ] {
            assert_rejected(invalid, NON_INTEGER_MSG);
        }
        // parse errors win over positivity errors
        assert_rejected("ice 2023 MazdaMx5 -1.5 100", NON_INTEGER_MSG);
    }

    #[test]
    fn test_non_positive_ev() {
        let msg = "Battery capacity and energy consumption must both be positive. Please try again.";
        assert_rejected("ev 2022 FordMustangMachE -10 100", msg);
        assert_rejected("ev 2022 FordMustangMachE 1000 -100", msg);
        assert_rejected("ev 2022 FordMustangMachE 0 0", msg);
    }

    #[test]
    fn test_non_positive_ice() {
        let msg = "Fuel tank capacity and fuel consumption must both be positive. Please try again.";
        assert_rejected("ice 2022 MazdaMx5 -10 100", msg);
        assert_rejected("ice 2022 MazdaMx5 12 -100", msg);
    }

    #[test]
    fn test_multiple_consecutive_errors() {
        assert_rejected_n("ice 2023 HondaCivicTypeR 12 1000.3", NON_INTEGER_MSG, 10);
        assert_rejected_n("fcev 2016 HondaClarity 1000 100", INVALID_TYPE_MSG, 3);
    }

    #[test]
    fn test_mixed_errors_in_order() {
        let input = "fcev 2016 HondaClarity 1000 100\n\
                     ice 2023 HondaCivicTypeR 12 1000.3\n\
                     ev 2022 FordMustangMachE -10 100\n\
                     ev 2025 RivianR1t 150000 300";
        let (res, output) = read(input);
        assert_eq!(res.unwrap().range(), 500.0);
        assert_eq!(
            output,
            "Specify vehicle: Invalid vehicle type. Ice or ev only, please.\n\
             Specify vehicle: Non-integer value provided for integer field. Please try again.\n\
             Specify vehicle: Battery capacity and energy consumption must both be positive. Please try again.\n\
             Specify vehicle: "
        );
    }

    #[test]
    fn test_end_of_input() {
        let (res, output) = read("");
        assert!(matches!(res, Err(ReadError::EndOfInput)));
        assert_eq!(output, "Specify vehicle: ");

        let (res, output) = read("fcev 2016 HondaClarity 1000 100\n");
        assert!(matches!(res, Err(ReadError::EndOfInput)));
        assert_eq!(
            output,
            "Specify vehicle: Invalid vehicle type. Ice or ev only, please.\nSpecify vehicle: "
        );
    }

    #[test]
    fn test_line_endings_and_extra_tokens() {
        let (res, _) = read("ev 2025 RivianR1t 150000 300\r\n");
        assert_eq!(res.unwrap().to_string(), "2025 RivianR1t");

        let (res, output) = read("  ice   2023\tChevroletCorvette 19 30 extra tokens");
        assert_eq!(res.unwrap().range(), 570.0);
        assert_eq!(output, "Specify vehicle: ");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        // a mangled type tag is still an invalid type
        let mut input: Vec<u8> = vec![0xff, 0xfe, b' ', b'1', b'\n'];
        input.extend_from_slice(VALID_LINE.as_bytes());
        let mut output = Vec::new();
        let veh = read_vehicle(&mut Cursor::new(input), &mut output).unwrap();
        assert_eq!(veh.to_string(), "2023 HondaCivicTypeR");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{PROMPT}{INVALID_TYPE_MSG}\n{PROMPT}")
        );

        // a mangled name carries the replacement character
        let mut output = Vec::new();
        let veh = read_vehicle(&mut Cursor::new(b"ice 2023 Caf\xe9 19 30\n"), &mut output).unwrap();
        assert_eq!(veh.name(), "Caf\u{FFFD}");
        assert_eq!(veh.range(), 570.0);
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_reader_reuse() {
        let input = "ice 2023 ChevroletCorvette 19 30\nfcev 2016 HondaClarity 1000 100\nev 2025 RivianR1t 150000 300\n";
        let mut reader = VehicleReader::new(Cursor::new(input), Vec::new());
        let first = reader.read_vehicle().unwrap();
        assert_eq!(reader.attempts(), 1);
        let second = reader.read_vehicle().unwrap();
        assert_eq!(reader.attempts(), 2);
        assert!(matches!(reader.read_vehicle(), Err(ReadError::EndOfInput)));
        assert_eq!(first.to_string(), "2023 ChevroletCorvette");
        assert_eq!(second.to_string(), "2025 RivianR1t");
        let (input, output) = reader.get_ref();
        assert_eq!(input.position() as usize, input.get_ref().len());
        assert!(output.ends_with(PROMPT.as_bytes()));
        let (_, output) = reader.into_inner();
        assert_eq!(
            String::from_utf8(output).unwrap().matches(PROMPT).count(),
            4
        );
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_propagates() {
        let mut reader = VehicleReader::new(Cursor::new(VALID_LINE), ClosedSink);
        assert!(matches!(reader.read_vehicle(), Err(ReadError::Io(_))));
    }

    #[test]
    fn test_parse_vehicle_spec() {
        let veh = parse_vehicle_spec("ev 2022 FordMustangMachE 88000 250").unwrap();
        assert_eq!(veh.capacity(), 88000);
        assert_eq!(veh.consumption(), 250);
        assert_eq!(veh.year(), 2022);
        assert_eq!(veh.name(), "FordMustangMachE");

        match parse_vehicle_spec("ice 2023 HondaCivicTypeR 12 1000.3") {
            Err(ReadError::NonIntegerField { field, token }) => {
                assert_eq!(field, "consumption");
                assert_eq!(token, "1000.3");
            }
            other => panic!("unexpected result: {other:?}"),
        }
        match parse_vehicle_spec("ice ice HondaCivic 1000 1000") {
            Err(ReadError::NonIntegerField { field, .. }) => assert_eq!(field, "year"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
