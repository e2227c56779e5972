// src/cli.rs
use std::{error::Error, fs, path::PathBuf};

use crate::{
    config::options::{AppOptions, ExportFormat},
    core::HttpTransport,
    progress::Progress,
    search::{self, Query},
    semester::{self, SemesterCode},
    table,
};

type CliResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Search,
    ListSemesters,
    Help,
}

#[derive(Clone, Debug)]
pub struct CliArgs {
    pub command: Command,
    pub options: AppOptions,
    pub quiet: bool,
    pub verbose: bool,
}

pub fn run() -> CliResult<()> {
    let args = parse_args(std::env::args().skip(1))?;
    crate::log::set_echo(args.verbose);

    match args.command {
        Command::Help => {
            eprintln!(include_str!("cli_help.txt"));
            Ok(())
        }
        Command::ListSemesters => {
            let today = chrono::Local::now().date_naive();
            for code in semester::enumerate_semesters(args.options.query.start_year, &today) {
                println!("{code}");
            }
            Ok(())
        }
        Command::Search => run_search(&args),
    }
}

/// Prints stage lines to stderr so stdout stays clean for the table.
struct CliProgress {
    quiet: bool,
}

impl Progress for CliProgress {
    fn begin(&mut self, what: &str) {
        if !self.quiet { eprintln!("Searching {what}"); }
    }
    fn log(&mut self, msg: &str) {
        if !self.quiet { eprintln!("  {msg}"); }
    }
}

fn run_search(args: &CliArgs) -> CliResult<()> {
    let opts = &args.options;

    let semester = match opts.query.semester {
        Some(code) => code,
        None => {
            let today = chrono::Local::now().date_naive();
            semester::latest_semester(opts.query.start_year, &today).ok_or_else(|| {
                format!("No semesters available from start year {}", opts.query.start_year)
            })?
        }
    };

    let query = Query::new(&opts.query.student_id, Some(semester))?;
    let transport = HttpTransport::new(&opts.endpoint)?;
    let mut progress = CliProgress { quiet: args.quiet };

    let records = search::search(&transport, &opts.endpoint, &query, Some(&mut progress))?;
    if records.is_empty() && !args.quiet {
        eprintln!("No grades found for {} in {}", query.student_id, query.semester);
    }

    let text = table::render(&records, &opts.export)?;
    match &opts.export.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, text)?;
            if !args.quiet { eprintln!("Wrote {}", path.display()); }
        }
        None => print!("{text}"),
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> CliResult<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut list = false;
    let mut help = false;
    let mut quiet = false;
    let mut verbose = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-s" | "--student" => {
                options.query.student_id = args.next().ok_or("Missing student ID")?;}
            "-k" | "--semester" => {
                let v = args.next().ok_or("Missing value for --semester")?;
                options.query.semester = Some(v.parse::<SemesterCode>()?);}
            "--start-year" => {
                let v = args.next().ok_or("Missing value for --start-year")?;
                options.query.start_year = v.trim().parse()
                    .map_err(|_| format!("Invalid start year: {}", v))?;}
            "--semesters" => list = true,
            "-f" | "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.export.format = ExportFormat::parse(&v)
                    .ok_or_else(|| format!("Unknown format: {}", v))?;}
            "--include-headers" => options.export.include_headers = true,
            "-o" | "--out" => options.export.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--endpoint" => options.endpoint.url = args.next().ok_or("Missing endpoint URL")?,
            "--timeout" => {
                let v = args.next().ok_or("Missing value for --timeout")?;
                let secs: u64 = v.trim().parse().map_err(|_| format!("Invalid timeout: {}", v))?;
                if secs == 0 { return Err("Timeout must be at least 1 second".into()); }
                options.endpoint.timeout_secs = secs;}
            "-q" | "--quiet" => quiet = true,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let command = if help {
        Command::Help
    } else if list {
        Command::ListSemesters
    } else if options.query.student_id.trim().is_empty() {
        return Err("Specify --student <ID> or --semesters".into());
    } else {
        Command::Search
    };

    Ok(CliArgs { command, options, quiet, verbose })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(v: &[&str]) -> CliResult<CliArgs> {
        parse_args(v.iter().map(|s| s.to_string()))
    }

    #[test]
    fn search_with_all_options() {
        let a = parse(&[
            "--student", "20200001", "-k", "20231", "-f", "csv",
            "--include-headers", "-o", "out/grades.csv", "--timeout", "5",
        ]).unwrap();
        assert_eq!(a.command, Command::Search);
        assert_eq!(a.options.query.student_id, "20200001");
        assert_eq!(a.options.query.semester.unwrap().to_string(), "20231");
        assert_eq!(a.options.export.format, ExportFormat::Csv);
        assert!(a.options.export.include_headers);
        assert_eq!(a.options.export.out, Some(PathBuf::from("out/grades.csv")));
        assert_eq!(a.options.endpoint.timeout_secs, 5);
    }

    #[test]
    fn semester_defaults_to_none() {
        let a = parse(&["-s", "1"]).unwrap();
        assert_eq!(a.options.query.semester, None);
        assert_eq!(a.options.export.format, ExportFormat::Table);
    }

    #[test]
    fn list_needs_no_student() {
        let a = parse(&["--semesters", "--start-year", "2020"]).unwrap();
        assert_eq!(a.command, Command::ListSemesters);
        assert_eq!(a.options.query.start_year, 2020);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["-s", "1", "--semester", "20235"]).is_err());
        assert!(parse(&["-s", "1", "--format", "xml"]).is_err());
        assert!(parse(&["-s", "1", "--timeout", "0"]).is_err());
        assert!(parse(&["-s"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn help_wins_over_other_commands() {
        assert_eq!(parse(&["-h"]).unwrap().command, Command::Help);
        assert_eq!(parse(&["--semesters", "--help"]).unwrap().command, Command::Help);
    }
}
