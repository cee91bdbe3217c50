use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::domain::planner::loading_plan::LoadingPlan;
use crate::domain::utils::id::{CargoUnitId, SlotId};
use crate::error::{Error, Result};

/// Header line of the loading plan exchange format.
pub const HEADER: [&str; 2] = ["ContainerUUID", "StackUUID"];

/// Writes `plan` as CSV: the header line followed by one `<cargo-id>,<slot-id>` line per entry.
///
/// Entries are written ordered by cargo id.
pub fn write_plan<W: Write>(plan: &LoadingPlan, writer: W) -> Result<()> {
    let mut csv_wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_wtr.write_record(HEADER)?;
    for (cargo, slot) in plan.sorted_entries() {
        csv_wtr.write_record([cargo.to_string(), slot.to_string()])?;
    }
    csv_wtr.flush()?;

    Ok(())
}

/// Reads a loading plan written by [`write_plan`].
///
/// The first line is treated as header and skipped, whatever it contains. Empty and whitespace-only
/// lines are ignored. Any other record that does not consist of exactly two valid UUIDs, or that
/// repeats a cargo id, fails the whole read with [`Error::MalformedRecord`].
pub fn read_plan<R: Read>(reader: R) -> Result<LoadingPlan> {
    let mut csv_rdr = csv::ReaderBuilder::new().has_headers(false).flexible(true).trim(csv::Trim::All).from_reader(reader);

    let mut plan = LoadingPlan::new();

    for (index, record) in csv_rdr.records().enumerate() {
        let fallback_line = index as u64 + 1;

        let record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(Error::CsvError(e)),
            Err(e) => {
                let line = e.position().map_or(fallback_line, |position| position.line());
                return Err(Error::MalformedRecord { line, reason: e.to_string() });
            }
        };
        let line = record.position().map_or(fallback_line, |position| position.line());

        if index == 0 {
            if record.iter().ne(HEADER) {
                log::warn!("Unexpected loading plan header {:?}, expected {:?}.", record, HEADER);
            }
            continue;
        }

        if record.len() == 1 && record[0].is_empty() {
            log::debug!("Skipping blank line {} of loading plan.", line);
            continue;
        }

        if record.len() != 2 {
            return Err(Error::MalformedRecord { line, reason: format!("expected 2 fields, found {}", record.len()) });
        }

        let cargo: CargoUnitId =
            record[0].parse().map_err(|e| Error::MalformedRecord { line, reason: format!("invalid cargo unit id '{}': {}", &record[0], e) })?;
        let slot: SlotId = record[1].parse().map_err(|e| Error::MalformedRecord { line, reason: format!("invalid slot id '{}': {}", &record[1], e) })?;

        if plan.insert(cargo, slot).is_some() {
            return Err(Error::MalformedRecord { line, reason: format!("cargo unit {} is assigned more than once", cargo) });
        }
    }

    log::debug!("Read loading plan with {} entries.", plan.len());
    Ok(plan)
}

pub fn write_plan_to_file<P: AsRef<Path>>(plan: &LoadingPlan, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_plan(plan, file)?;

    log::info!("Loading plan with {} entries written to '{}'.", plan.len(), path.as_ref().display());
    Ok(())
}

pub fn read_plan_from_file<P: AsRef<Path>>(path: P) -> Result<LoadingPlan> {
    let file = File::open(path.as_ref())?;
    let plan = read_plan(file)?;

    log::info!("Loading plan with {} entries read from '{}'.", plan.len(), path.as_ref().display());
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn cargo(n: u128) -> CargoUnitId {
        CargoUnitId::from_uuid(Uuid::from_u128(n))
    }

    fn slot(n: u128) -> SlotId {
        SlotId::from_uuid(Uuid::from_u128(n))
    }

    #[test]
    fn test_write_format_is_exact() {
        let plan: LoadingPlan = [(cargo(2), slot(20)), (cargo(1), slot(10))].into_iter().collect();
        let mut buffer = Vec::new();
        write_plan(&plan, &mut buffer).unwrap();

        let expected = "ContainerUUID,StackUUID\n\
            00000000-0000-0000-0000-000000000001,00000000-0000-0000-0000-00000000000a\n\
            00000000-0000-0000-0000-000000000002,00000000-0000-0000-0000-000000000014\n";
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    #[test]
    fn test_roundtrip() {
        let plan: LoadingPlan = (1..=50).map(|n| (cargo(n), slot(1000 + n % 7))).collect();
        let mut buffer = Vec::new();
        write_plan(&plan, &mut buffer).unwrap();

        assert_eq!(read_plan(buffer.as_slice()).unwrap(), plan);
    }

    #[test]
    fn test_empty_plan() {
        let mut buffer = Vec::new();
        write_plan(&LoadingPlan::new(), &mut buffer).unwrap();
        assert_eq!(buffer, b"ContainerUUID,StackUUID\n");
        assert!(read_plan(buffer.as_slice()).unwrap().is_empty());
        assert!(read_plan("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_uuid_fails_whole_read() {
        let input = "ContainerUUID,StackUUID\n\
            00000000-0000-0000-0000-000000000001,00000000-0000-0000-0000-00000000000a\n\
            not-a-uuid,00000000-0000-0000-0000-00000000000a\n";
        match read_plan(input.as_bytes()) {
            Err(Error::MalformedRecord { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("not-a-uuid"));
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_separator_fails() {
        let input = "ContainerUUID,StackUUID\n00000000-0000-0000-0000-000000000001\n";
        assert!(matches!(read_plan(input.as_bytes()), Err(Error::MalformedRecord { .. })));
    }

    #[test]
    fn test_too_many_fields_fails() {
        let input = "ContainerUUID,StackUUID\n\
            00000000-0000-0000-0000-000000000001,00000000-0000-0000-0000-00000000000a,extra\n";
        assert!(matches!(read_plan(input.as_bytes()), Err(Error::MalformedRecord { .. })));
    }

    #[test]
    fn test_duplicate_cargo_fails() {
        let input = "ContainerUUID,StackUUID\n\
            00000000-0000-0000-0000-000000000001,00000000-0000-0000-0000-00000000000a\n\
            00000000-0000-0000-0000-000000000001,00000000-0000-0000-0000-00000000000b\n";
        assert!(matches!(read_plan(input.as_bytes()), Err(Error::MalformedRecord { line: 3, .. })));
    }

    #[test]
    fn test_header_of_any_shape_is_skipped() {
        let records = "00000000-0000-0000-0000-000000000001,00000000-0000-0000-0000-00000000000a\n\
            00000000-0000-0000-0000-000000000002,00000000-0000-0000-0000-00000000000b\n";
        let expected: LoadingPlan = [(cargo(1), slot(10)), (cargo(2), slot(11))].into_iter().collect();

        for header in ["garbage", "ContainerUUID,StackUUID,Extra", "ContainerUUID;StackUUID"] {
            let input = format!("{}\n{}", header, records);
            assert_eq!(read_plan(input.as_bytes()).unwrap(), expected, "header {:?}", header);
        }
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let input = "ContainerUUID,StackUUID\n\
            \n\
            00000000-0000-0000-0000-000000000001,00000000-0000-0000-0000-00000000000a\n\
            \x20\x20\x20\n\
            \t\n\
            00000000-0000-0000-0000-000000000002,00000000-0000-0000-0000-00000000000b\n\
            \n";
        let expected: LoadingPlan = [(cargo(1), slot(10)), (cargo(2), slot(11))].into_iter().collect();
        assert_eq!(read_plan(input.as_bytes()).unwrap(), expected);
    }

    #[test]
    fn test_empty_fields_are_not_a_blank_line() {
        let input = "ContainerUUID,StackUUID\n , \n";
        assert!(matches!(read_plan(input.as_bytes()), Err(Error::MalformedRecord { line: 2, .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("missing-plan-{}.csv", Uuid::new_v4()));
        assert!(matches!(read_plan_from_file(&path), Err(Error::IoError(_))));
    }
}
