//! Role mapping diagnostics.
//!
//! Reads a CSV file's header row and renders which column each semantic role
//! (name, birthdate, death date) resolved to, as an ASCII table.

use anyhow::{Context, Result};
use log::info;

use crate::{cli::RolesArgs, columns, io_utils, table};

pub fn execute(args: &RolesArgs) -> Result<()> {
    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let mut reader = io_utils::open_csv_reader_from_path(&args.input, delimiter)?;
    let headers = io_utils::reader_headers(&mut reader, encoding)
        .with_context(|| format!("Reading headers from {:?}", args.input))?;
    let roles = columns::resolve_columns(&headers)
        .with_context(|| format!("Resolving columns in {:?}", args.input))?;

    let mut rows = vec![
        vec![
            "name".to_string(),
            (roles.name.index + 1).to_string(),
            roles.name.header.clone(),
        ],
        vec![
            "birthdate".to_string(),
            (roles.birth.index + 1).to_string(),
            roles.birth.header.clone(),
        ],
    ];
    match &roles.death {
        Some(death) => rows.push(vec![
            "death date".to_string(),
            (death.index + 1).to_string(),
            death.header.clone(),
        ]),
        None => rows.push(vec![
            "death date".to_string(),
            String::new(),
            "(not present)".to_string(),
        ]),
    }

    let table_headers = vec![
        "role".to_string(),
        "#".to_string(),
        "column".to_string(),
    ];
    table::print_table(&table_headers, &rows);
    info!(
        "Resolved {} of 3 role(s) from {:?}",
        2 + usize::from(roles.death.is_some()),
        args.input
    );
    Ok(())
}
