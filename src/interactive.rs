//! The `interactive` subcommand: prompt-driven entry.
//!
//! Mirrors the classic flow: ask whether a CSV file exists; if so, prompt for
//! its path with a retry loop on failure; otherwise collect people one at a
//! time at the terminal. Results are rendered as a table and optionally
//! written to a CSV file.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::{Context, Result, bail};
use log::info;

use crate::{cli::InteractiveArgs, compute, io_utils, person::Person, report};

pub fn execute(args: &InteractiveArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let people = collect_people(&mut stdin.lock(), &mut stdout.lock(), args)?;
    if people.is_empty() {
        println!("No data to process.");
        return Ok(());
    }

    let reference = compute::resolve_reference_date(args.reference_date);
    println!();
    report::print_results_table(&people, reference);
    if let Some(output) = &args.output {
        report::write_results(output, &people, reference)
            .with_context(|| format!("Writing results to {output:?}"))?;
        info!("Results for {} person(s) written to {:?}", people.len(), output);
    }
    Ok(())
}

fn collect_people<R, W>(
    input: &mut R,
    output: &mut W,
    args: &InteractiveArgs,
) -> Result<Vec<Person>>
where
    R: BufRead,
    W: Write,
{
    if prompt_yes_no(
        input,
        output,
        "Do you have a CSV file with names and dates? (yes/no): ",
    )? {
        load_with_retry(input, output, args)
    } else {
        manual_entry(input, output)
    }
}

fn load_with_retry<R, W>(
    input: &mut R,
    output: &mut W,
    args: &InteractiveArgs,
) -> Result<Vec<Person>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let path_text = prompt(input, output, "Enter the path to your CSV file: ")?;
        let path = Path::new(path_text.trim());
        if !path.exists() {
            writeln!(output, "File {path:?} not found.")?;
        } else {
            let delimiter = io_utils::resolve_input_delimiter(path, args.delimiter);
            match compute::load_people(path, delimiter, args.input_encoding.as_deref(), None) {
                Ok(people) => {
                    writeln!(output, "Loaded {} person(s) from {path:?}.", people.len())?;
                    return Ok(people);
                }
                Err(err) => {
                    writeln!(output, "Could not load {path:?}: {err:#}")?;
                }
            }
        }
        if !prompt_yes_no(input, output, "Try another file? (yes/no): ")? {
            return Ok(Vec::new());
        }
    }
}

fn manual_entry<R, W>(input: &mut R, output: &mut W) -> Result<Vec<Person>>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Manual entry mode.")?;
    writeln!(
        output,
        "Date formats supported: YYYY-MM-DD, MM/DD/YYYY, DD-MM-YYYY, month names."
    )?;
    writeln!(output, "Press Enter without a name to finish.")?;

    let mut people = Vec::new();
    loop {
        let name = prompt(input, output, "Enter name: ")?;
        let name = name.trim();
        if name.is_empty() {
            break;
        }
        let birthdate = prompt(input, output, "Enter birthdate: ")?;
        let birthdate = birthdate.trim().to_string();
        if birthdate.is_empty() {
            writeln!(output, "Birthdate is required. Skipping this entry.")?;
            continue;
        }
        let death_date = if prompt_yes_no(input, output, "Is this person deceased? (yes/no): ")? {
            let entered = prompt(input, output, "Enter death date: ")?;
            let entered = entered.trim().to_string();
            (!entered.is_empty()).then_some(entered)
        } else {
            None
        };
        people.push(Person::new(name, &birthdate, death_date.as_deref()));
        writeln!(output, "Added {name}.")?;
    }
    Ok(people)
}

/// Writes the prompt and reads one line. End of input reads as an empty
/// answer, which every caller treats as "stop".
fn prompt<R, W>(input: &mut R, output: &mut W, text: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("Reading from input")?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn prompt_yes_no<R, W>(input: &mut R, output: &mut W, text: &str) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{text}")?;
        output.flush()?;
        let mut line = String::new();
        let bytes = input.read_line(&mut line).context("Reading from input")?;
        if bytes == 0 {
            bail!("Input ended before a yes/no answer was given");
        }
        match line.trim().to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => writeln!(output, "Please enter 'yes' or 'no'.")?,
        }
    }
}
