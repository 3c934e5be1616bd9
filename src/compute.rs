//! The `compute` subcommand: CSV in, ages out.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::{
    cli::ComputeArgs,
    columns, io_utils,
    person::Person,
    printable_delimiter, report,
};

pub fn execute(args: &ComputeArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    info!(
        "Computing ages from '{}' with delimiter '{}'",
        args.input.display(),
        printable_delimiter(delimiter)
    );
    let people = load_people(
        &args.input,
        delimiter,
        args.input_encoding.as_deref(),
        args.limit,
    )?;
    if people.is_empty() {
        info!("No usable rows found in {:?}", args.input);
        return Ok(());
    }

    let reference = resolve_reference_date(args.reference_date);
    if args.table {
        report::print_results_table(&people, reference);
    }
    if let Some(output) = &args.output {
        report::write_results(output, &people, reference)
            .with_context(|| format!("Writing results to {output:?}"))?;
        info!("Results for {} person(s) written to {:?}", people.len(), output);
    } else if !args.table {
        report::print_results_table(&people, reference);
    }
    Ok(())
}

/// Resolves "now" once per command so that display and save agree.
pub fn resolve_reference_date(provided: Option<NaiveDate>) -> NaiveDate {
    provided.unwrap_or_else(|| Local::now().date_naive())
}

/// Reads a CSV file into person records. Rows missing a name or birthdate
/// field are skipped, not errors; unparseable dates warn during `Person`
/// construction and yield invalid-birthdate results downstream.
pub fn load_people(
    path: &Path,
    delimiter: u8,
    encoding_label: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<Person>> {
    let encoding = io_utils::resolve_encoding(encoding_label)?;
    let mut reader = io_utils::open_csv_reader_from_path(path, delimiter)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)
        .with_context(|| format!("Reading headers from {path:?}"))?;
    let roles = columns::resolve_columns(&headers)
        .with_context(|| format!("Resolving columns in {path:?}"))?;
    debug!(
        "Resolved roles: name='{}', birth='{}', death={:?}",
        roles.name.header,
        roles.birth.header,
        roles.death.as_ref().map(|d| d.header.as_str())
    );

    let mut people = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        if limit.is_some_and(|limit| people.len() >= limit) {
            break;
        }
        let record =
            record.with_context(|| format!("Reading row {} in {path:?}", row_idx + 2))?;
        let decoded = io_utils::decode_record(&record, encoding)
            .with_context(|| format!("Decoding row {} in {path:?}", row_idx + 2))?;
        let field = |col: usize| decoded.get(col).map(|s| s.trim()).unwrap_or("");

        let name = field(roles.name.index);
        let birthdate = field(roles.birth.index);
        if name.is_empty() || birthdate.is_empty() {
            debug!("Skipping row {}: missing name or birthdate", row_idx + 2);
            continue;
        }
        let death_date = roles
            .death
            .as_ref()
            .map(|d| field(d.index))
            .filter(|value| !value.is_empty());
        people.push(Person::new(name, birthdate, death_date));
    }
    info!("Loaded {} person(s) from {:?}", people.len(), path);
    Ok(people)
}
